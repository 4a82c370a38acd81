/// Rendering and DOM constants for the web frontend.
///
/// Scene/animation tuning lives in `core::constants`; this file holds what
/// only the browser side needs: element selectors, lights and shadow
/// configuration.
// DOM hooks
pub const CANVAS_SELECTOR: &str = "#webgl-canvas";
pub const PAGE_CONTENT_SELECTOR: &str = ".page-content";
pub const CARD_SELECTOR: &str = ".card";
pub const CARD_TITLE_SELECTOR: &str = ".card-title";
pub const CARD_IMAGE_SELECTOR: &str = ".card-image";
pub const FOOTER_SECTION_ID: &str = "footer-section";
pub const FOOTER_BG_ID: &str = "footer-bg";

// Output surface
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Lights
pub const AMBIENT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const AMBIENT_INTENSITY: f32 = 0.8;
pub const SUN_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const SUN_INTENSITY: f32 = 2.0;
pub const SUN_POSITION: [f32; 3] = [-5.0, 5.0, 5.0]; // from the left so shadows fall right

// Shadow map
pub const SHADOW_MAP_SIZE: u32 = 2048;
pub const SHADOW_EXTENT: f32 = 5.0; // half-size of the orthographic shadow frustum
pub const SHADOW_NEAR: f32 = 0.5;
pub const SHADOW_FAR: f32 = 20.0;
pub const SHADOW_DEPTH_BIAS: f32 = 0.002;

// Shadow-only ground plane
pub const GROUND_SIZE: f32 = 20.0;
pub const GROUND_Y: f32 = -1.5;
pub const GROUND_SHADOW_OPACITY: f32 = 0.3;

// Instance buffers grow in chunks of this many instances
pub const INSTANCE_CHUNK: usize = 32;
