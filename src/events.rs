//! Event wiring for the three recomputation sources.
//!
//! Each listener is returned as a `gloo` guard; dropping it removes the
//! underlying DOM listener, which is how unmount tears everything down.

use crate::constants::REDUCED_MOTION_QUERY;
use crate::dom;
use crate::state::HeroState;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct EventWiring {
    pub window: web::Window,
    pub layer: web::HtmlElement,
    pub state: Rc<RefCell<HeroState>>,
}

pub fn wire_listeners(w: &EventWiring) -> Vec<EventListener> {
    let mut listeners = vec![wire_scroll(w), wire_resize(w)];
    if let Some(listener) = wire_motion_change(w) {
        listeners.push(listener);
    }
    listeners
}

/// Scroll must stay passive: the handler only derives state and writes
/// style, and must never stall the browser's default scrolling.
fn wire_scroll(w: &EventWiring) -> EventListener {
    let target = w.window.clone();
    let w = w.clone();
    EventListener::new_with_options(
        &target,
        "scroll",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        move |_| {
            let style = {
                let mut state = w.state.borrow_mut();
                state.set_scroll(dom::scroll_y(&w.window));
                state.layer_style()
            };
            dom::apply_layer_style(&w.layer, &style);
        },
    )
}

fn wire_resize(w: &EventWiring) -> EventListener {
    let target = w.window.clone();
    let w = w.clone();
    EventListener::new(&target, "resize", move |_| {
        let style = {
            let mut state = w.state.borrow_mut();
            state.set_viewport_width(dom::inner_width(&w.window));
            state.layer_style()
        };
        dom::apply_layer_style(&w.layer, &style);
    })
}

/// Change notifications on the reduced-motion media query. None when the
/// environment does not expose matchMedia.
fn wire_motion_change(w: &EventWiring) -> Option<EventListener> {
    let mql = w.window.match_media(REDUCED_MOTION_QUERY).ok().flatten()?;
    let w = w.clone();
    let mql_for_handler = mql.clone();
    Some(EventListener::new(&mql, "change", move |event| {
        let reduced = event
            .dyn_ref::<web::MediaQueryListEvent>()
            .map(|e| e.matches())
            .unwrap_or_else(|| mql_for_handler.matches());
        let style = {
            let mut state = w.state.borrow_mut();
            state.set_reduced_motion(reduced);
            state.layer_style()
        };
        dom::apply_layer_style(&w.layer, &style);
        log::info!("[parallax] reduced motion changed: {}", reduced);
    }))
}
