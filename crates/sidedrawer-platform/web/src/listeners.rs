//! DOM event listeners feeding the drawer.

use sidedrawer_core::{BackdropEventKind, InputEvent, Key, KeyPress, Nodes};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget, HtmlElement, KeyboardEvent, TouchEvent};

use crate::sink::EventSink;

/// Registers `handler` for `kind` on `target` for the lifetime of the page.
fn listen<E, F>(
    target: &EventTarget,
    kind: &str,
    options: Option<&AddEventListenerOptions>,
    mut handler: F,
) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| match event.dyn_into::<E>() {
        Ok(event) => handler(event),
        Err(event) => log::trace!("unexpected {} event", event.type_()),
    }) as Box<dyn FnMut(_)>);
    match options {
        Some(options) => target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            options,
        )?,
        None => target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?,
    }
    closure.forget();
    Ok(())
}

fn event_target(event: &Event) -> Option<HtmlElement> {
    event.target()?.dyn_into::<HtmlElement>().ok()
}

fn first_touch_y(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|touch| f64::from(touch.page_y()))
}

pub(crate) fn attach(
    window: &EventTarget,
    nodes: &Nodes<HtmlElement>,
    sink: &EventSink,
) -> Result<(), JsValue> {
    {
        let sink = sink.clone();
        listen(&nodes.trigger, "click", None, move |_: Event| {
            sink.dispatch(InputEvent::TriggerClick);
        })?;
    }

    for (kind, backdrop_kind) in [
        ("click", BackdropEventKind::Click),
        ("touchstart", BackdropEventKind::TouchStart),
    ] {
        let sink = sink.clone();
        listen(&nodes.backdrop, kind, None, move |event: Event| {
            if let Some(target) = event_target(&event) {
                sink.dispatch(InputEvent::Backdrop {
                    kind: backdrop_kind,
                    target,
                });
            }
        })?;
    }

    {
        let sink = sink.clone();
        listen(&nodes.backdrop, "keyup", None, move |event: KeyboardEvent| {
            if let Some(target) = event_target(&event) {
                sink.dispatch(InputEvent::Backdrop {
                    kind: BackdropEventKind::KeyUp(Key::from_code(event.key_code())),
                    target,
                });
            }
        })?;
    }

    {
        let sink = sink.clone();
        listen(&nodes.panel, "keydown", None, move |event: KeyboardEvent| {
            let Some(target) = event_target(&event) else {
                return;
            };
            let key = KeyPress::new(Key::from_code(event.key_code()), event.shift_key());
            if sink
                .dispatch(InputEvent::KeyDown { target, key })
                .prevent_default
            {
                event.prevent_default();
            }
        })?;
    }

    {
        let sink = sink.clone();
        listen(window, "resize", None, move |_: Event| {
            sink.dispatch(InputEvent::Resize);
        })?;
    }

    {
        let sink = sink.clone();
        listen(window, "touchstart", None, move |event: TouchEvent| {
            if let Some(y) = first_touch_y(&event) {
                sink.dispatch(InputEvent::TouchStart { y });
            }
        })?;
    }

    {
        // Non-passive so an open drawer can keep the page from scrolling.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        let sink = sink.clone();
        listen(window, "touchmove", Some(&options), move |event: TouchEvent| {
            let Some(y) = first_touch_y(&event) else {
                return;
            };
            if sink.dispatch(InputEvent::TouchMove { y }).prevent_default {
                event.prevent_default();
            }
        })?;
    }

    {
        let sink = sink.clone();
        listen(window, "touchend", None, move |_: Event| {
            sink.dispatch(InputEvent::TouchEnd);
        })?;
    }

    for kind in ["transitionend", "webkitTransitionEnd"] {
        let sink = sink.clone();
        listen(&nodes.body, kind, None, move |_: Event| {
            sink.dispatch(InputEvent::TransitionEnd);
        })?;
    }

    Ok(())
}
