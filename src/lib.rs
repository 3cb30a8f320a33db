#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

pub mod constants;
mod dom;
pub mod engine;
mod events;
mod overlay;
mod page;
pub mod state;
pub mod style;

thread_local! {
    // The mounted page, if any. Dropping it detaches every listener.
    static HERO: RefCell<Option<page::ParallaxHero>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-web starting");

    if let Err(e) = mount_hero() {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}

/// Attach the parallax to the current document. A repeat call replaces the
/// previous mount, releasing its listeners first. Exposed for client-side
/// routers that re-enter the contact page.
#[wasm_bindgen]
pub fn mount() {
    if let Err(e) = mount_hero() {
        log::error!("mount error: {:?}", e);
    }
}

/// Detach all listeners. Scroll, resize, and motion-preference events no
/// longer recompute anything after this returns.
#[wasm_bindgen]
pub fn unmount() {
    if HERO.with(|h| h.borrow_mut().take()).is_some() {
        log::info!("[parallax] unmounted");
    }
}

fn mount_hero() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let hero = page::ParallaxHero::mount(&window, &document)?;
    HERO.with(|h| *h.borrow_mut() = Some(hero));
    Ok(())
}
