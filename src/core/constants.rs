// Scene and animation tuning shared by the web frontend and host-side tests.

// Groups
pub const HIDDEN_SCALE: f32 = 0.001; // near-zero scale used for "invisible" groups
pub const LERP_FACTOR: f32 = 0.08; // fraction of the remaining distance covered per frame
pub const REFERENCE_HZ: f32 = 60.0; // refresh rate the per-frame constants were tuned at
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp for long frames (background tabs)

// Passive rotation
pub const CENTRAL_SPIN_PER_SEC: f32 = 0.1; // radians per elapsed second
pub const ORBIT_SPIN_PER_FRAME: f32 = 0.01; // radians per reference frame

// Camera
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 5.0];
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Page sections
pub const SECTION_COUNT: usize = 5;
pub const BLOCK_TRAVEL_PX: f64 = 150.0; // vertical travel of a content block over one section
pub const BLOCK_FADE_RATE: f64 = 1.5; // opacity change per unit of section progress

// Central object
pub const CENTRAL_SCALE: f32 = 3.0;
pub const CENTRAL_Y: f32 = -1.2;

// Orbit ring
pub const ORBIT_COUNT: usize = 10;
pub const ORBIT_RADIUS_BASE: f32 = 3.0;
pub const ORBIT_RADIUS_JITTER: f32 = 2.0;
pub const ORBIT_HEIGHT_SPAN: f32 = 3.0;
pub const BEAN_SCALE: f32 = 0.25;
pub const CHERRY_SCALE: f32 = 0.6;

// Satellite ring
pub const SATELLITE_COUNT: usize = 20;
pub const SATELLITE_RADIUS_BASE: f32 = 7.0;
pub const SATELLITE_RADIUS_JITTER: f32 = 3.0;
pub const SATELLITE_HEIGHT_SPAN: f32 = 8.0;
pub const TOPPING_SCALE: f32 = 0.8;

// Pointer effects
pub const CARD_MAX_TILT_DEG: f64 = 15.0;
pub const FOOTER_MAX_SHIFT_X_PX: f64 = 20.0;
pub const FOOTER_MAX_SHIFT_Y_PX: f64 = 30.0;
