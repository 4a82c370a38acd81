// Host-side tests for the per-frame scene update and the camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod smoothing {
        include!("../src/core/smoothing.rs");
    }
    pub mod targets {
        include!("../src/core/targets.rs");
    }
    pub mod animation {
        include!("../src/core/animation.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
}

use glam::Vec3;
use scene_core::animation::*;
use scene_core::camera::*;
use scene_core::constants::*;
use scene_core::scene::*;
use scene_core::smoothing::Smoothing;
use scene_core::targets::*;

const DT: f32 = 1.0 / 60.0;

fn run(scene: &mut Scene, targets: &AnimationTargets, params: &SceneParams, frames: usize) {
    for i in 0..frames {
        let clock = FrameClock {
            elapsed_sec: (i + 1) as f32 * DT,
            dt_sec: DT,
        };
        advance(scene, targets, clock, params);
    }
}

#[test]
fn scales_ease_toward_targets() {
    let mut scene = Scene::default();
    let mut targets = AnimationTargets::default();
    targets.apply_scroll(SectionPosition {
        index: 2,
        progress: 0.5,
    });
    let params = SceneParams::default();

    advance(
        &mut scene,
        &targets,
        FrameClock {
            elapsed_sec: DT,
            dt_sec: DT,
        },
        &params,
    );
    // one frame covers about 8% of the way
    let expected = HIDDEN_SCALE + (0.5 - HIDDEN_SCALE) * LERP_FACTOR;
    assert!((scene.satellite.scale() - expected).abs() < 1e-4);
    assert!(scene.central.scale() < 1.0);

    run(&mut scene, &targets, &params, 300);
    assert!((scene.satellite.scale() - 0.5).abs() < 1e-3);
    assert!(scene.orbit.scale().abs() < 1e-3);
    assert!((scene.central.scale() - HIDDEN_SCALE).abs() < 1e-3);
}

#[test]
fn scale_stays_uniform() {
    let mut scene = Scene::default();
    let mut targets = AnimationTargets::default();
    targets.groups.orbit = 0.7;
    run(&mut scene, &targets, &SceneParams::default(), 17);
    let s = scene.orbit.transform.scale;
    assert_eq!(s.x, s.y);
    assert_eq!(s.y, s.z);
}

#[test]
fn centerpiece_yaw_follows_elapsed_time() {
    let mut scene = Scene::default();
    let targets = AnimationTargets::default();
    let params = SceneParams::default();
    advance(
        &mut scene,
        &targets,
        FrameClock {
            elapsed_sec: 12.5,
            dt_sec: DT,
        },
        &params,
    );
    assert!((scene.central.transform.rotation.y - 1.25).abs() < 1e-5);
}

#[test]
fn orbit_spins_per_reference_frame() {
    let mut scene = Scene::default();
    let targets = AnimationTargets::default();

    run(&mut scene, &targets, &SceneParams::default(), 60);
    assert!((scene.orbit.transform.rotation.y - 60.0 * ORBIT_SPIN_PER_FRAME).abs() < 1e-4);

    // per-frame mode ignores dt entirely
    let mut scene = Scene::default();
    let params = SceneParams {
        smoothing: Smoothing::PerFrame {
            factor: LERP_FACTOR,
        },
        ..SceneParams::default()
    };
    for _ in 0..10 {
        advance(
            &mut scene,
            &targets,
            FrameClock {
                elapsed_sec: 0.0,
                dt_sec: 0.05,
            },
            &params,
        );
    }
    assert!((scene.orbit.transform.rotation.y - 10.0 * ORBIT_SPIN_PER_FRAME).abs() < 1e-5);
}

#[test]
fn long_frames_are_clamped() {
    let params = SceneParams::default();
    let targets = AnimationTargets::default();

    let mut clamped = Scene::default();
    advance(
        &mut clamped,
        &targets,
        FrameClock {
            elapsed_sec: 30.0,
            dt_sec: 30.0,
        },
        &params,
    );
    let mut reference = Scene::default();
    advance(
        &mut reference,
        &targets,
        FrameClock {
            elapsed_sec: 30.0,
            dt_sec: MAX_FRAME_DT_SEC,
        },
        &params,
    );
    assert_eq!(
        clamped.orbit.transform.rotation.y,
        reference.orbit.transform.rotation.y
    );
    assert_eq!(clamped.orbit.scale(), reference.orbit.scale());
}

#[test]
fn default_smoothing_is_time_scaled_at_sixty_hz() {
    match SceneParams::default().smoothing {
        Smoothing::TimeScaled {
            factor,
            reference_hz,
        } => {
            assert_eq!(factor, LERP_FACTOR);
            assert_eq!(reference_hz, REFERENCE_HZ);
        }
        other => panic!("unexpected smoothing {:?}", other),
    }
}

#[test]
fn camera_looks_at_origin_from_start_position() {
    let cam = Camera::default();
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 5.0));
    let clip = cam.view_proj().project_point3(Vec3::ZERO);
    assert!(clip.x.abs() < 1e-6 && clip.y.abs() < 1e-6);
    assert!(clip.z > 0.0 && clip.z < 1.0);
}

#[test]
fn camera_viewport_ignores_zero_sizes() {
    let mut cam = Camera::default();
    cam.set_viewport(1600, 800);
    assert_eq!(cam.aspect, 2.0);
    cam.set_viewport(0, 800);
    assert_eq!(cam.aspect, 2.0);
}
