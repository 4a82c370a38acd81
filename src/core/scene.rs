// Scene graph: three named groups of placed model clones.
//
// These types avoid any platform API; the renderer flattens them into
// per-model instance matrices every frame.

use glam::{EulerRot, Mat4, Quat, Vec3};

use super::constants::HIDDEN_SCALE;

/// The models referenced by the page, one GLB file each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelKind {
    IceCream,
    CoffeeBean,
    Cherry,
    ChocoChip,
    RainbowSprinkles,
    WhiteChocoChip,
}

impl ModelKind {
    pub const ALL: [ModelKind; 6] = [
        ModelKind::IceCream,
        ModelKind::CoffeeBean,
        ModelKind::Cherry,
        ModelKind::ChocoChip,
        ModelKind::RainbowSprinkles,
        ModelKind::WhiteChocoChip,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModelKind::IceCream => "ice cream",
            ModelKind::CoffeeBean => "coffee bean",
            ModelKind::Cherry => "cherry",
            ModelKind::ChocoChip => "choco chip",
            ModelKind::RainbowSprinkles => "rainbow sprinkles",
            ModelKind::WhiteChocoChip => "white choco chip",
        }
    }

    /// Path of the model relative to the page.
    pub fn url(self) -> &'static str {
        match self {
            ModelKind::IceCream => "models/ice_cream.glb",
            ModelKind::CoffeeBean => "models/coffee_bean.glb",
            ModelKind::Cherry => "models/cherry.glb",
            ModelKind::ChocoChip => "models/choco_chip.glb",
            ModelKind::RainbowSprinkles => "models/rainbow_sprinklers.glb",
            ModelKind::WhiteChocoChip => "models/white_choco_chip.glb",
        }
    }

    pub fn casts_shadow(self) -> bool {
        matches!(
            self,
            ModelKind::IceCream
                | ModelKind::ChocoChip
                | ModelKind::RainbowSprinkles
                | ModelKind::WhiteChocoChip
        )
    }

    /// Material tweaks applied on top of what the GLB file ships with.
    pub fn material_override(self) -> Option<MaterialOverride> {
        match self {
            ModelKind::IceCream => Some(MaterialOverride {
                base_color: Some(srgb_hex(0xFFF5E1)),
                emissive: Some([0.0, 0.0, 0.0]),
                roughness: Some(0.8),
                metalness: Some(0.1),
            }),
            ModelKind::Cherry => Some(MaterialOverride {
                base_color: Some(srgb_hex(0xDD4444)),
                emissive: Some(srgb_hex(0x330000)),
                roughness: Some(0.4),
                metalness: Some(0.1),
            }),
            _ => None,
        }
    }
}

/// Per-field material replacement; `None` keeps the value from the file.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MaterialOverride {
    pub base_color: Option<[f32; 3]>,
    pub emissive: Option<[f32; 3]>,
    pub roughness: Option<f32>,
    pub metalness: Option<f32>,
}

/// Convert a `0xRRGGBB` sRGB color to linear RGB.
pub fn srgb_hex(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xFF) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}

/// Translation, Euler XYZ rotation (radians) and per-axis scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, q, self.translation)
    }
}

/// One clone of a template model inside a group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placed {
    pub kind: ModelKind,
    pub transform: Transform,
}

#[derive(Clone, Debug)]
pub struct SceneGroup {
    pub name: &'static str,
    pub transform: Transform,
    pub children: Vec<Placed>,
}

impl SceneGroup {
    pub fn new(name: &'static str, initial_scale: f32) -> Self {
        Self {
            name,
            transform: Transform {
                scale: Vec3::splat(initial_scale),
                ..Transform::default()
            },
            children: Vec::new(),
        }
    }

    /// Uniform scale of the group (groups are only ever scaled uniformly).
    pub fn scale(&self) -> f32 {
        self.transform.scale.x
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupId {
    Central,
    Orbit,
    Satellite,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub central: SceneGroup,
    pub orbit: SceneGroup,
    pub satellite: SceneGroup,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            central: SceneGroup::new("central", 1.0),
            orbit: SceneGroup::new("orbit", HIDDEN_SCALE),
            satellite: SceneGroup::new("satellite", HIDDEN_SCALE),
        }
    }
}

impl Scene {
    pub fn group(&self, id: GroupId) -> &SceneGroup {
        match id {
            GroupId::Central => &self.central,
            GroupId::Orbit => &self.orbit,
            GroupId::Satellite => &self.satellite,
        }
    }

    pub fn groups(&self) -> [&SceneGroup; 3] {
        [&self.central, &self.orbit, &self.satellite]
    }

    /// World matrix of every placed clone, tagged with its model. Groups
    /// scaled below `min_scale` are left out.
    pub fn instances(&self, min_scale: f32) -> impl Iterator<Item = (ModelKind, Mat4)> + '_ {
        self.groups()
            .into_iter()
            .filter(move |g| g.scale() >= min_scale)
            .flat_map(|g| {
                let group_m = g.transform.matrix();
                g.children
                    .iter()
                    .map(move |c| (c.kind, group_m * c.transform.matrix()))
            })
    }
}
