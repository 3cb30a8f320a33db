//! Owned per-mount state of the hero parallax.
//!
//! One small struct updated by the three event sources; every update is
//! followed by a single derived-style recomputation. Serialization of
//! updates comes from the browser's single-threaded event loop.

use crate::constants::HERO_BACKGROUND_URL;
use crate::engine::{RenderedOffset, ViewportClass};
use crate::style::{layer_style, BackgroundFill, LayerStyle};

#[derive(Debug, Clone)]
pub struct HeroState {
    scroll_y: f64,
    viewport: ViewportClass,
    reduced_motion: bool,
    background: BackgroundFill,
}

impl HeroState {
    pub fn new(viewport_width: f64, reduced_motion: bool) -> Self {
        Self {
            scroll_y: 0.0,
            viewport: ViewportClass::classify(viewport_width),
            reduced_motion,
            background: BackgroundFill::Image(HERO_BACKGROUND_URL),
        }
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn set_scroll(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// Reclassify on resize. The class is stored, so the very next scroll
    /// update uses the new multiplier.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport = ViewportClass::classify(width);
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Image load failure is one-way; the gradient stays for the life of
    /// the mount.
    pub fn mark_background_failed(&mut self) {
        self.background = BackgroundFill::Gradient;
    }

    pub fn offset(&self) -> RenderedOffset {
        if self.reduced_motion {
            RenderedOffset::Static
        } else {
            RenderedOffset::Offset(self.scroll_y * self.viewport.speed_multiplier())
        }
    }

    pub fn layer_style(&self) -> LayerStyle {
        layer_style(self.offset(), &self.background)
    }
}
