pub mod animation;
pub mod assembly;
pub mod camera;
pub mod constants;
pub mod join;
pub mod model;
pub mod placement;
pub mod scene;
pub mod smoothing;
pub mod targets;
pub mod tilt;

pub use animation::*;
pub use assembly::*;
pub use camera::*;
pub use constants::*;
pub use model::*;
pub use scene::*;
pub use targets::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
