//! Resolves the drawer's elements and writes the initial markup contract.

use crate::classes;
use crate::config::DrawerOptions;
use crate::dom::Dom;
use crate::effect::{Effect, Effects, Target};
use crate::error::{DrawerError, Result};
use crate::state::{DrawerId, DrawerState};

/// Elements a drawer is bound to.
#[derive(Debug, Clone)]
pub struct Nodes<N> {
    pub panel: N,
    pub trigger: N,
    pub backdrop: N,
    pub body: N,
    pub fixed_header: Option<N>,
}

impl<N> Nodes<N> {
    pub fn get(&self, target: Target) -> Option<&N> {
        match target {
            Target::Panel => Some(&self.panel),
            Target::Trigger => Some(&self.trigger),
            Target::Backdrop => Some(&self.backdrop),
            Target::Body => Some(&self.body),
            Target::FixedHeader => self.fixed_header.as_ref(),
        }
    }
}

/// Looks up every element and inserts the backdrop.
///
/// All lookups complete before the first mutation, so a missing element
/// leaves the document untouched.
pub fn bind<D: Dom>(
    dom: &D,
    panel_selector: &str,
    options: &DrawerOptions,
) -> Result<(Nodes<D::Node>, DrawerState)> {
    let body = dom
        .body()
        .ok_or_else(|| DrawerError::not_found("body", "body"))?;
    let panel = dom
        .query(panel_selector)
        .ok_or_else(|| DrawerError::not_found("panel", panel_selector))?;
    let trigger = dom
        .query(&options.btn)
        .ok_or_else(|| DrawerError::not_found("trigger", options.btn.as_str()))?;
    let fixed_header = match options.fixed_header.as_deref() {
        Some(selector) => {
            let node = dom.query(selector);
            if node.is_none() {
                log::debug!("fixed header `{selector}` not found; header offset disabled");
            }
            node
        }
        None => None,
    };

    let id = DrawerId::new(dom.unique_id());
    let backdrop = dom
        .insert_after(&panel, classes::BACKDROP)
        .ok_or(DrawerError::BackdropInsertion)?;

    let nodes = Nodes {
        panel,
        trigger,
        backdrop,
        body,
        fixed_header,
    };
    Ok((nodes, DrawerState::new(id, options.into())))
}

/// ARIA relationships and marker classes written once at construction.
pub fn initial_effects(state: &DrawerState) -> Effects {
    let config = state.config();
    let id = state.id();

    let mut effects = Effects::new();
    effects.push(Effect::attribute(Target::Backdrop, "aria-hidden", true));

    effects.push(Effect::add_class(
        Target::Panel,
        classes::sidebar(config.direction()),
    ));
    effects.push(Effect::attribute(Target::Panel, "aria-hidden", true));
    effects.push(Effect::attribute(
        Target::Panel,
        "aria-labelledby",
        id.button_id(),
    ));
    effects.push(Effect::attribute(Target::Panel, "id", id));
    effects.push(Effect::attribute(
        Target::Panel,
        "aria-label",
        config.close_label(),
    ));

    effects.push(Effect::add_class(Target::Trigger, classes::BUTTON));
    effects.push(Effect::attribute(Target::Trigger, "aria-expanded", false));
    effects.push(Effect::attribute(
        Target::Trigger,
        "aria-label",
        config.btn_label(),
    ));
    effects.push(Effect::attribute(Target::Trigger, "aria-controls", id));
    effects.push(Effect::attribute(Target::Trigger, "id", id.button_id()));

    effects.push(Effect::add_class(Target::Body, classes::BODY));
    effects
}
