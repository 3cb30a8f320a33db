//! Pure scroll-to-offset math for the parallax layer.
//!
//! Everything here is deterministic and free of `web-sys` so the host-side
//! tests can compile this module directly.

use crate::constants::{
    SPEED_DESKTOP, SPEED_MOBILE, SPEED_TABLET, TABLET_MAX_WIDTH, TABLET_MIN_WIDTH,
};

/// Discrete width bucket driving the speed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Desktop,
    Tablet,
    Mobile,
}

impl ViewportClass {
    /// Classify a viewport width in CSS pixels. 768 and 1024 are Tablet.
    pub fn classify(width: f64) -> Self {
        if width > TABLET_MAX_WIDTH {
            ViewportClass::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            ViewportClass::Tablet
        } else {
            ViewportClass::Mobile
        }
    }

    /// Background speed as a fraction of page scroll. A function of the
    /// class alone; no other input may influence it.
    pub fn speed_multiplier(self) -> f64 {
        match self {
            ViewportClass::Desktop => SPEED_DESKTOP,
            ViewportClass::Tablet => SPEED_TABLET,
            ViewportClass::Mobile => SPEED_MOBILE,
        }
    }
}

/// Vertical displacement of the background layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderedOffset {
    /// Motion suppressed: the layer renders undisplaced, with no
    /// compositing hint.
    Static,
    /// Displacement in CSS pixels.
    Offset(f64),
}

impl RenderedOffset {
    pub fn displacement(self) -> f64 {
        match self {
            RenderedOffset::Static => 0.0,
            RenderedOffset::Offset(px) => px,
        }
    }
}

/// Map (scroll position, viewport width, motion preference) to a layer
/// offset. Reduced motion wins over everything else.
pub fn compute_offset(scroll_y: f64, viewport_width: f64, reduced_motion: bool) -> RenderedOffset {
    if reduced_motion {
        return RenderedOffset::Static;
    }
    let speed = ViewportClass::classify(viewport_width).speed_multiplier();
    RenderedOffset::Offset(scroll_y * speed)
}
