//! Inline style values for the background layer.

use crate::constants::{
    FALLBACK_GRADIENT, LAYER_HEIGHT, LAYER_TOP, LAYER_Z_INDEX,
};
use crate::engine::RenderedOffset;

/// What fills the layer: the hero photo, or a gradient once the photo has
/// failed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundFill {
    Image(&'static str),
    Gradient,
}

impl BackgroundFill {
    pub fn css_value(&self) -> String {
        match self {
            BackgroundFill::Image(url) => format!("url('{}')", url),
            BackgroundFill::Gradient => FALLBACK_GRADIENT.to_string(),
        }
    }
}

/// Complete inline style of the layer element. Geometry and background
/// treatment are fixed; only `transform` and `will-change` vary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerStyle {
    pub position: &'static str,
    pub top: &'static str,
    pub left: &'static str,
    pub width: &'static str,
    pub height: &'static str,
    pub z_index: &'static str,
    pub background_image: String,
    pub background_size: &'static str,
    pub background_position: &'static str,
    pub transform: String,
    pub will_change: &'static str,
}

/// Build the layer style for one offset/background pair.
///
/// The transform is always a vertical-only `translate3d` so the layer stays
/// on its own compositor layer; `will-change` is only set while motion is
/// enabled so reduced-motion users pay no compositing cost.
pub fn layer_style(offset: RenderedOffset, background: &BackgroundFill) -> LayerStyle {
    let (transform, will_change) = match offset {
        RenderedOffset::Static => ("none".to_string(), "auto"),
        RenderedOffset::Offset(px) => (format!("translate3d(0, {}px, 0)", px), "transform"),
    };
    LayerStyle {
        position: "absolute",
        top: LAYER_TOP,
        left: "0",
        width: "100%",
        height: LAYER_HEIGHT,
        z_index: LAYER_Z_INDEX,
        background_image: background.css_value(),
        background_size: "cover",
        background_position: "center",
        transform,
        will_change,
    }
}

impl LayerStyle {
    /// Property list in the order it is written onto the element.
    pub fn properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("position", self.position.to_string()),
            ("top", self.top.to_string()),
            ("left", self.left.to_string()),
            ("width", self.width.to_string()),
            ("height", self.height.to_string()),
            ("z-index", self.z_index.to_string()),
            ("background-image", self.background_image.clone()),
            ("background-size", self.background_size.to_string()),
            ("background-position", self.background_position.to_string()),
            ("transform", self.transform.clone()),
            ("will-change", self.will_change.to_string()),
        ]
    }
}
