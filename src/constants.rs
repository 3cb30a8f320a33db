/// Viewport breakpoints and parallax tuning constants.
///
/// These constants express intended behavior (breakpoints, speed ratios,
/// layer geometry) and keep magic numbers out of the code.
// Viewport classification (CSS pixels); the tablet band is inclusive on both ends
pub const TABLET_MIN_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

// Background speed as a fraction of page scroll, per viewport class
pub const SPEED_DESKTOP: f64 = 0.5;
pub const SPEED_TABLET: f64 = 0.3;
pub const SPEED_MOBILE: f64 = 0.2;

// Layer bleed: 20% overscan above and below keeps the image edge
// off-screen across the whole speed range
pub const LAYER_HEIGHT: &str = "120%";
pub const LAYER_TOP: &str = "-20%";

// Stacking: layer behind the scrim, scrim behind the hero copy (z-10 in markup)
pub const LAYER_Z_INDEX: &str = "0";
pub const SCRIM_Z_INDEX: &str = "1";

pub const HERO_BACKGROUND_URL: &str = "/images/contact-hero-bg.jpg";
pub const FALLBACK_GRADIENT: &str =
    "linear-gradient(135deg, #0f172a 0%, #1e3a8a 55%, #312e81 100%)";

// Scrim over the hero image, by color scheme
pub const SCRIM_LIGHT: &str = "rgba(0, 0, 0, 0.4)";
pub const SCRIM_DARK: &str = "rgba(0, 0, 0, 0.6)";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// Host-page element ids this crate binds to
pub const LAYER_ID: &str = "parallax-layer";
pub const SCRIM_ID: &str = "hero-overlay";
