//! Mounting and teardown of the contact-page hero parallax.

use crate::constants::{HERO_BACKGROUND_URL, LAYER_ID, REDUCED_MOTION_QUERY};
use crate::dom;
use crate::events::{self, EventWiring};
use crate::overlay;
use crate::state::HeroState;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A mounted hero. Owns the listener guards; dropping the struct removes
/// every listener, so unmount is just letting it go out of scope.
pub struct ParallaxHero {
    _listeners: Vec<EventListener>,
    // Kept alive until drop so a late error can still trigger the fallback
    _probe: Option<(web::HtmlImageElement, EventListener)>,
}

impl ParallaxHero {
    pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let layer = document
            .get_element_by_id(LAYER_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", LAYER_ID))?;
        let layer: web::HtmlElement = layer
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", LAYER_ID, e))?;

        let reduced = dom::media_matches(window, REDUCED_MOTION_QUERY);
        let state = Rc::new(RefCell::new(HeroState::new(
            dom::inner_width(window),
            reduced,
        )));
        state.borrow_mut().set_scroll(dom::scroll_y(window));

        // First paint before any event arrives
        dom::apply_layer_style(&layer, &state.borrow().layer_style());
        overlay::apply_scrim(document, overlay::prefers_dark(window));

        let listeners = events::wire_listeners(&EventWiring {
            window: window.clone(),
            layer: layer.clone(),
            state: state.clone(),
        });
        let probe = probe_background(state.clone(), layer);

        log::info!(
            "[parallax] mounted: viewport={:?} reduced_motion={}",
            state.borrow().viewport(),
            reduced
        );
        Ok(Self {
            _listeners: listeners,
            _probe: probe,
        })
    }
}

/// Load the hero image off-screen; if it errors, swap the layer to the
/// gradient fill so it never renders empty.
fn probe_background(
    state: Rc<RefCell<HeroState>>,
    layer: web::HtmlElement,
) -> Option<(web::HtmlImageElement, EventListener)> {
    let img = web::HtmlImageElement::new().ok()?;
    let listener = EventListener::once(&img, "error", move |_| {
        log::warn!("[parallax] hero background failed to load, using gradient fallback");
        let style = {
            let mut s = state.borrow_mut();
            s.mark_background_failed();
            s.layer_style()
        };
        dom::apply_layer_style(&layer, &style);
    });
    img.set_src(HERO_BACKGROUND_URL);
    Some((img, listener))
}
