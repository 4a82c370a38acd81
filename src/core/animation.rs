// Per-frame scene update: scale easing and passive rotation.

use glam::Vec3;

use super::constants::*;
use super::scene::Scene;
use super::smoothing::Smoothing;
use super::targets::AnimationTargets;

/// Tunables for the frame loop.
///
/// - `smoothing` controls how group scales chase their targets
/// - `central_spin_per_sec` is the centerpiece's yaw rate (radians/second,
///   applied as an absolute angle from elapsed time)
/// - `orbit_spin_per_frame` is the orbit ring's yaw increment per reference
///   frame
/// - `max_dt_sec` clamps long frames so a tab coming back from the background
///   does not snap
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub smoothing: Smoothing,
    pub central_spin_per_sec: f32,
    pub orbit_spin_per_frame: f32,
    pub max_dt_sec: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            smoothing: Smoothing::TimeScaled {
                factor: LERP_FACTOR,
                reference_hz: REFERENCE_HZ,
            },
            central_spin_per_sec: CENTRAL_SPIN_PER_SEC,
            orbit_spin_per_frame: ORBIT_SPIN_PER_FRAME,
            max_dt_sec: MAX_FRAME_DT_SEC,
        }
    }
}

/// Timing of the frame being advanced.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    pub elapsed_sec: f32,
    pub dt_sec: f32,
}

/// Advance the scene one frame toward `targets`.
///
/// Order matters: scales are eased first, then passive rotation is applied.
pub fn advance(
    scene: &mut Scene,
    targets: &AnimationTargets,
    clock: FrameClock,
    params: &SceneParams,
) {
    let dt = clock.dt_sec.clamp(0.0, params.max_dt_sec);
    let s = &params.smoothing;
    let t = targets.groups;

    for (group, target) in [
        (&mut scene.central, t.central),
        (&mut scene.orbit, t.orbit),
        (&mut scene.satellite, t.satellite),
    ] {
        group.transform.scale = Vec3::splat(s.step(group.scale(), target, dt));
    }

    scene.central.transform.rotation.y = clock.elapsed_sec * params.central_spin_per_sec;
    scene.orbit.transform.rotation.y += params.orbit_spin_per_frame * s.frames(dt);
}
