//! The subset of CSS selectors the fake document understands.
//!
//! Comma-separated compound selectors built from a tag or `*`, `.class`,
//! `#id`, `[attr]` and `:not([attr])`. Combinators and attribute values are
//! not supported; a selector using them matches nothing.

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Compound {
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
    has_attr: Vec<String>,
    lacks_attr: Vec<String>,
}

/// What a compound selector needs to know about an element.
pub(crate) trait Matchable {
    fn tag(&self) -> &str;
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl Compound {
    pub(crate) fn matches(&self, element: &impl Matchable) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        self.ids
            .iter()
            .all(|id| element.attribute("id") == Some(id.as_str()))
            && self.classes.iter().all(|class| element.has_class(class))
            && self
                .has_attr
                .iter()
                .all(|name| element.attribute(name).is_some())
            && self
                .lacks_attr
                .iter()
                .all(|name| element.attribute(name).is_none())
    }
}

/// Parses a selector list. Unsupported parts are dropped with a warning.
pub(crate) fn parse(selector: &str) -> Vec<Compound> {
    selector
        .split(',')
        .filter_map(|part| {
            let parsed = parse_compound(part.trim());
            if parsed.is_none() {
                log::warn!("fake dom: unsupported selector `{part}`");
            }
            parsed
        })
        .collect()
}

fn ident(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(input.len());
    input.split_at(end)
}

fn parse_compound(input: &str) -> Option<Compound> {
    if input.is_empty() {
        return None;
    }
    let mut compound = Compound::default();

    let (tag, mut rest) = match input.strip_prefix('*') {
        Some(rest) => ("", rest),
        None => ident(input),
    };
    if !tag.is_empty() {
        compound.tag = Some(tag.to_ascii_lowercase());
    }

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix(":not([") {
            let end = after.find("])")?;
            compound.lacks_attr.push(after[..end].to_owned());
            rest = &after[end + 2..];
        } else if let Some(after) = rest.strip_prefix('[') {
            let end = after.find(']')?;
            compound.has_attr.push(after[..end].to_owned());
            rest = &after[end + 1..];
        } else if let Some(after) = rest.strip_prefix('.') {
            let (name, tail) = ident(after);
            if name.is_empty() {
                return None;
            }
            compound.classes.push(name.to_owned());
            rest = tail;
        } else if let Some(after) = rest.strip_prefix('#') {
            let (name, tail) = ident(after);
            if name.is_empty() {
                return None;
            }
            compound.ids.push(name.to_owned());
            rest = tail;
        } else {
            return None;
        }
    }
    Some(compound)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct El {
        tag: &'static str,
        classes: Vec<&'static str>,
        attrs: Vec<(&'static str, &'static str)>,
    }

    impl Matchable for El {
        fn tag(&self) -> &str {
            self.tag
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.contains(&class)
        }

        fn attribute(&self, name: &str) -> Option<&str> {
            self.attrs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
        }
    }

    fn any_match(selector: &str, el: &El) -> bool {
        parse(selector).iter().any(|compound| compound.matches(el))
    }

    #[test]
    fn matches_tag_class_and_id() {
        let el = El {
            tag: "nav",
            classes: vec!["menu", "js-panel"],
            attrs: vec![("id", "main-nav")],
        };
        assert!(any_match("nav", &el));
        assert!(any_match(".menu", &el));
        assert!(any_match("nav.menu.js-panel", &el));
        assert!(any_match("#main-nav", &el));
        assert!(!any_match("div.menu", &el));
        assert!(!any_match(".other", &el));
    }

    #[test]
    fn matches_attribute_presence_and_absence() {
        let enabled = El {
            tag: "button",
            classes: vec![],
            attrs: vec![],
        };
        let disabled = El {
            tag: "button",
            classes: vec![],
            attrs: vec![("disabled", "")],
        };
        assert!(any_match("button:not([disabled])", &enabled));
        assert!(!any_match("button:not([disabled])", &disabled));
        assert!(any_match("*[disabled]", &disabled));
    }

    #[test]
    fn default_focusable_list_parses_fully() {
        let compounds = parse(sidedrawer_core::config::DEFAULT_FOCUSABLE_ELEMENTS);
        assert_eq!(compounds.len(), 11);
    }

    #[test]
    fn combinators_match_nothing() {
        let el = El {
            tag: "a",
            classes: vec![],
            attrs: vec![("href", "#")],
        };
        assert!(!any_match("nav a", &el));
    }
}
