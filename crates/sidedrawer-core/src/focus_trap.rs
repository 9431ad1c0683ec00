//! Cyclic keyboard focus containment for the open panel.

use crate::event::{Key, KeyPress};

/// Wraps Tab navigation around the first and last focusable descendants.
///
/// Shift+Tab on the first element moves to the last; Tab on the last moves
/// to the first. Everything in between keeps the browser's default order.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusTrap<N> {
    first: N,
    last: N,
}

impl<N: Clone + PartialEq> FocusTrap<N> {
    /// Builds a trap over focusables in document order. Returns `None` when
    /// there is nothing to anchor to.
    pub fn new(focusables: Vec<N>) -> Option<Self> {
        let mut nodes = focusables.into_iter();
        let first = nodes.next()?;
        let last = nodes.last().unwrap_or_else(|| first.clone());
        Some(Self { first, last })
    }

    pub fn first(&self) -> &N {
        &self.first
    }

    pub fn last(&self) -> &N {
        &self.last
    }

    /// Where focus should jump for `press` on `target`, if anywhere.
    pub fn redirect(&self, target: &N, press: KeyPress) -> Option<&N> {
        if press.key != Key::Tab {
            return None;
        }
        if press.shift && *target == self.first {
            Some(&self.last)
        } else if !press.shift && *target == self.last {
            Some(&self.first)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_trap() {
        assert!(FocusTrap::<u32>::new(Vec::new()).is_none());
    }

    #[test]
    fn shift_tab_on_first_wraps_to_last() {
        let trap = FocusTrap::new(vec![0, 1, 2]).expect("trap");
        assert_eq!(trap.redirect(&0, KeyPress::shift_tab()), Some(&2));
        assert_eq!(trap.redirect(&0, KeyPress::tab()), None);
    }

    #[test]
    fn tab_on_last_wraps_to_first() {
        let trap = FocusTrap::new(vec![0, 1, 2]).expect("trap");
        assert_eq!(trap.redirect(&2, KeyPress::tab()), Some(&0));
        assert_eq!(trap.redirect(&2, KeyPress::shift_tab()), None);
    }

    #[test]
    fn middle_elements_and_other_keys_pass_through() {
        let trap = FocusTrap::new(vec![0, 1, 2]).expect("trap");
        assert_eq!(trap.redirect(&1, KeyPress::tab()), None);
        assert_eq!(trap.redirect(&1, KeyPress::shift_tab()), None);
        assert_eq!(
            trap.redirect(&2, KeyPress::new(Key::from_code(13), false)),
            None
        );
    }

    #[test]
    fn single_focusable_keeps_focus_in_place() {
        let trap = FocusTrap::new(vec![7]).expect("trap");
        assert_eq!(trap.first(), trap.last());
        assert_eq!(trap.redirect(&7, KeyPress::tab()), Some(&7));
        assert_eq!(trap.redirect(&7, KeyPress::shift_tab()), Some(&7));
    }
}
