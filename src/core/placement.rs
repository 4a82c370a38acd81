use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use super::constants::*;
use super::scene::{ModelKind, Placed, SceneGroup, Transform};

/// Shape of a ring of clones around the Y axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingLayout {
    pub count: usize,
    pub radius_base: f32,
    pub radius_jitter: f32,
    pub height_span: f32,
    pub random_rotation: bool,
}

/// A model and the scale its clones get.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variant {
    pub kind: ModelKind,
    pub scale: f32,
}

pub const ORBIT_LAYOUT: RingLayout = RingLayout {
    count: ORBIT_COUNT,
    radius_base: ORBIT_RADIUS_BASE,
    radius_jitter: ORBIT_RADIUS_JITTER,
    height_span: ORBIT_HEIGHT_SPAN,
    random_rotation: false,
};

pub const ORBIT_VARIANTS: [Variant; 2] = [
    Variant {
        kind: ModelKind::CoffeeBean,
        scale: BEAN_SCALE,
    },
    Variant {
        kind: ModelKind::Cherry,
        scale: CHERRY_SCALE,
    },
];

pub const SATELLITE_LAYOUT: RingLayout = RingLayout {
    count: SATELLITE_COUNT,
    radius_base: SATELLITE_RADIUS_BASE,
    radius_jitter: SATELLITE_RADIUS_JITTER,
    height_span: SATELLITE_HEIGHT_SPAN,
    random_rotation: true,
};

pub const SATELLITE_VARIANTS: [Variant; 3] = [
    Variant {
        kind: ModelKind::ChocoChip,
        scale: TOPPING_SCALE,
    },
    Variant {
        kind: ModelKind::RainbowSprinkles,
        scale: TOPPING_SCALE,
    },
    Variant {
        kind: ModelKind::WhiteChocoChip,
        scale: TOPPING_SCALE,
    },
];

/// Distribute `layout.count` clones at evenly spaced angles on a circle of
/// jittered radius. Clone `i` uses `variants[i % variants.len()]`.
pub fn place_ring<R: Rng + ?Sized>(
    layout: &RingLayout,
    variants: &[Variant],
    rng: &mut R,
) -> Vec<Placed> {
    if variants.is_empty() {
        return Vec::new();
    }
    (0..layout.count)
        .map(|i| {
            let radius = layout.radius_base + rng.gen::<f32>() * layout.radius_jitter;
            let angle = (i as f32 / layout.count as f32) * TAU;
            let y = (rng.gen::<f32>() - 0.5) * layout.height_span;
            let variant = variants[i % variants.len()];
            let rotation = if layout.random_rotation {
                Vec3::new(
                    rng.gen::<f32>() * PI,
                    rng.gen::<f32>() * PI,
                    rng.gen::<f32>() * PI,
                )
            } else {
                Vec3::ZERO
            };
            Placed {
                kind: variant.kind,
                transform: Transform {
                    translation: Vec3::new(angle.cos() * radius, y, angle.sin() * radius),
                    rotation,
                    scale: Vec3::splat(variant.scale),
                },
            }
        })
        .collect()
}

/// The single centerpiece clone.
pub fn central_placement() -> Placed {
    Placed {
        kind: ModelKind::IceCream,
        transform: Transform {
            translation: Vec3::new(0.0, CENTRAL_Y, 0.0),
            scale: Vec3::splat(CENTRAL_SCALE),
            ..Transform::default()
        },
    }
}

/// Fill a ring group and collapse it to the hidden scale until scrolling
/// reveals it.
pub fn populate_ring<R: Rng + ?Sized>(
    group: &mut SceneGroup,
    layout: &RingLayout,
    variants: &[Variant],
    rng: &mut R,
) {
    group.children.extend(place_ring(layout, variants, rng));
    group.transform.scale = Vec3::splat(HIDDEN_SCALE);
}
