// Host-side tests for the scroll → section → target mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod targets {
        include!("../src/core/targets.rs");
    }
}

use scene_core::constants::*;
use scene_core::targets::*;

const H: f64 = 800.0;

fn at(scroll_y: f64) -> GroupTargets {
    group_targets(section_at(scroll_y, H))
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn section_index_and_progress_match_scroll_offset() {
    let mut y = 0.0;
    while y < 6.0 * H {
        let pos = section_at(y, H);
        assert_eq!(pos.index, (y / H).floor() as usize, "scroll {}", y);
        assert!(pos.progress >= 0.0 && pos.progress < 1.0, "scroll {}", y);
        let back = (pos.index as f64 + pos.progress) * H;
        assert!((back - y).abs() < 1e-6, "scroll {} rebuilt as {}", y, back);
        y += 37.5;
    }
}

#[test]
fn section_at_handles_degenerate_input() {
    assert_eq!(section_at(-120.0, H), SectionPosition::default());
    assert_eq!(section_at(500.0, 0.0), SectionPosition::default());
    assert_eq!(section_at(500.0, -10.0), SectionPosition::default());
    assert_eq!(section_at(f64::NAN, H), SectionPosition::default());
    assert_eq!(section_at(500.0, f64::INFINITY), SectionPosition::default());
}

#[test]
fn top_of_page_shows_only_the_centerpiece() {
    let t = at(0.0);
    assert!(approx(t.central, 1.0));
    assert!(approx(t.orbit, 0.0));
    assert!(approx(t.satellite, HIDDEN_SCALE));
    assert_eq!(GroupTargets::default(), t);
}

#[test]
fn first_section_crossfades_centerpiece_into_orbit() {
    let t = at(0.25 * H);
    assert!(approx(t.central, 0.75));
    assert!(approx(t.orbit, 0.25));
    assert!(approx(t.satellite, HIDDEN_SCALE));
}

#[test]
fn second_section_shrinks_orbit() {
    let t = at(H);
    assert!(approx(t.central, HIDDEN_SCALE));
    assert!(approx(t.orbit, 1.0));
    assert!(approx(t.satellite, HIDDEN_SCALE));

    let t = at(1.5 * H);
    assert!(approx(t.orbit, 0.5));
}

#[test]
fn third_section_grows_satellites() {
    let t = at(2.5 * H);
    assert!(approx(t.central, HIDDEN_SCALE));
    assert_eq!(t.orbit, 0.0);
    assert!(approx(t.satellite, 0.5));
}

#[test]
fn fourth_and_fifth_sections_shrink_satellites() {
    let t = at(3.25 * H);
    assert!(approx(t.satellite, 0.75));
    assert!(approx(t.orbit, HIDDEN_SCALE));

    let t = at(4.5 * H);
    assert_eq!(t.satellite, 0.0);
    assert!(approx(t.central, HIDDEN_SCALE));
    assert!(approx(t.orbit, HIDDEN_SCALE));
}

#[test]
fn past_the_last_section_everything_is_hidden() {
    assert_eq!(at(7.2 * H), GroupTargets::HIDDEN);
}

#[test]
fn apply_scroll_keeps_the_camera() {
    let mut targets = AnimationTargets::default();
    targets.apply_scroll(section_at(2.5 * H, H));
    assert!(approx(targets.groups.satellite, 0.5));
    assert_eq!(targets.camera, glam::Vec3::from_array(CAMERA_START));
}

#[test]
fn active_block_scrolls_up_and_fades_out() {
    let pos = section_at(1.5 * H, H);
    let style = content_block_style(1, pos);
    assert!((style.translate_y_px - (-0.5 * BLOCK_TRAVEL_PX)).abs() < 1e-9);
    assert!((style.opacity - 0.25).abs() < 1e-9);
    assert_eq!(style.transform_css(), "translateY(-75px)");
}

#[test]
fn next_block_fades_in_and_others_stay_put() {
    let pos = section_at(1.5 * H, H);

    let next = content_block_style(2, pos);
    assert_eq!(next.translate_y_px, 0.0);
    assert!((next.opacity - 0.75).abs() < 1e-9);

    let above = content_block_style(0, pos);
    assert_eq!(above.translate_y_px, -BLOCK_TRAVEL_PX);
    assert_eq!(above.opacity, 1.0);

    let below = content_block_style(4, pos);
    assert_eq!(below.translate_y_px, 0.0);
    assert_eq!(below.opacity, 1.0);
}

#[test]
fn block_opacity_is_clamped_when_written() {
    let pos = section_at(0.9 * H, H);
    let active = content_block_style(0, pos);
    assert!(active.opacity < 0.0);
    assert_eq!(active.opacity_css(), "0");

    let next = content_block_style(1, pos);
    assert!(next.opacity > 1.0);
    assert_eq!(next.opacity_css(), "1");
}

#[test]
fn huge_scroll_offsets_do_not_overflow() {
    let pos = section_at(1e300, 1.0);
    assert_eq!(pos.index, usize::MAX);
    assert_eq!(group_targets(pos), GroupTargets::HIDDEN);

    // every block is above the active section
    for block in 0..SECTION_COUNT {
        let style = content_block_style(block, pos);
        assert_eq!(style.translate_y_px, -BLOCK_TRAVEL_PX);
        assert_eq!(style.opacity, 1.0);
    }
    let last = content_block_style(usize::MAX, pos);
    assert_eq!(last.translate_y_px, -pos.progress * BLOCK_TRAVEL_PX);
}
