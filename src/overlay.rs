//! Readability scrim between the parallax layer and the hero copy.

use crate::constants::{DARK_SCHEME_QUERY, SCRIM_DARK, SCRIM_ID, SCRIM_LIGHT, SCRIM_Z_INDEX};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn prefers_dark(window: &web::Window) -> bool {
    dom::media_matches(window, DARK_SCHEME_QUERY)
}

/// Darken the hero image so the copy above stays legible. Opacity follows
/// the color scheme sampled at mount.
pub fn apply_scrim(document: &web::Document, dark: bool) {
    let Some(el) = document.get_element_by_id(SCRIM_ID) else {
        return;
    };
    let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
        return;
    };
    let css = el.style();
    _ = css.set_property("position", "absolute");
    _ = css.set_property("inset", "0");
    _ = css.set_property("z-index", SCRIM_Z_INDEX);
    let color = if dark { SCRIM_DARK } else { SCRIM_LIGHT };
    _ = css.set_property("background-color", color);
}
