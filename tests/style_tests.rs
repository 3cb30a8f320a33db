// Host-side tests for the layer style descriptor.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/engine.rs"]
mod engine;
#[path = "../src/style.rs"]
mod style;

use engine::RenderedOffset;
use style::{layer_style, BackgroundFill};

const HERO_IMAGE: BackgroundFill = BackgroundFill::Image(constants::HERO_BACKGROUND_URL);

#[test]
fn geometry_is_constant_across_offset_and_fill() {
    let offsets = [
        RenderedOffset::Static,
        RenderedOffset::Offset(0.0),
        RenderedOffset::Offset(50.0),
        RenderedOffset::Offset(20.0),
    ];
    for offset in offsets {
        for fill in [HERO_IMAGE, BackgroundFill::Gradient] {
            let s = layer_style(offset, &fill);
            assert_eq!(s.position, "absolute");
            assert_eq!(s.top, "-20%");
            assert_eq!(s.height, "120%");
            assert_eq!(s.width, "100%");
            assert_eq!(s.z_index, "0");
            assert_eq!(s.background_size, "cover");
            assert_eq!(s.background_position, "center");
        }
    }
}

#[test]
fn enabled_motion_renders_vertical_translate3d() {
    let s = layer_style(RenderedOffset::Offset(50.0), &HERO_IMAGE);
    assert_eq!(s.transform, "translate3d(0, 50px, 0)");
    assert_eq!(s.will_change, "transform");
}

#[test]
fn transform_is_3d_never_2d() {
    let s = layer_style(RenderedOffset::Offset(30.0), &HERO_IMAGE);
    assert!(s.transform.contains("translate3d"));
    assert!(!s.transform.contains("translateY"));
}

#[test]
fn at_rest_transform_is_zero_px() {
    let s = layer_style(RenderedOffset::Offset(0.0), &HERO_IMAGE);
    assert_eq!(s.transform, "translate3d(0, 0px, 0)");
}

#[test]
fn fractional_offsets_keep_their_precision() {
    let s = layer_style(RenderedOffset::Offset(33.3), &HERO_IMAGE);
    assert_eq!(s.transform, "translate3d(0, 33.3px, 0)");
}

#[test]
fn reduced_motion_disables_transform_and_gpu_hint() {
    let s = layer_style(RenderedOffset::Static, &HERO_IMAGE);
    assert_eq!(s.transform, "none");
    assert_eq!(s.will_change, "auto");
}

#[test]
fn image_fill_is_a_css_url() {
    let value = HERO_IMAGE.css_value();
    assert!(value.starts_with("url('"));
    assert!(value.contains("contact-hero-bg"));
}

#[test]
fn gradient_fallback_is_a_non_empty_fill() {
    let value = BackgroundFill::Gradient.css_value();
    assert!(value.starts_with("linear-gradient"));
    assert_ne!(value, HERO_IMAGE.css_value());

    let s = layer_style(RenderedOffset::Offset(50.0), &BackgroundFill::Gradient);
    assert!(!s.background_image.is_empty());
}

#[test]
fn property_list_covers_the_full_declaration() {
    let s = layer_style(RenderedOffset::Offset(10.0), &HERO_IMAGE);
    let props = s.properties();
    for name in [
        "position",
        "top",
        "left",
        "width",
        "height",
        "z-index",
        "background-image",
        "background-size",
        "background-position",
        "transform",
        "will-change",
    ] {
        assert!(
            props.iter().any(|(n, _)| *n == name),
            "missing property {}",
            name
        );
    }
}
