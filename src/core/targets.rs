// Scroll position to animation-target mapping.
//
// The page is split into full-viewport sections. Scrolling through a section
// cross-fades the 3D groups according to a fixed table; this module holds
// that table as pure functions so both the scroll handler and tests can use
// it without a DOM.

use glam::Vec3;

use super::constants::{BLOCK_FADE_RATE, BLOCK_TRAVEL_PX, CAMERA_START, HIDDEN_SCALE};

/// Which section the viewport is in and how far through it.
///
/// `progress` is always in `[0, 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionPosition {
    pub index: usize,
    pub progress: f64,
}

/// Map a scroll offset to a section index and the fractional progress inside it.
///
/// Negative offsets (elastic overscroll) are treated as the top of the page.
/// A non-positive or non-finite viewport height maps everything to section 0.
pub fn section_at(scroll_y: f64, viewport_height: f64) -> SectionPosition {
    if !(viewport_height > 0.0) || !viewport_height.is_finite() || !scroll_y.is_finite() {
        return SectionPosition::default();
    }
    let scroll_y = scroll_y.max(0.0);
    let index = (scroll_y / viewport_height).floor();
    let progress = (scroll_y % viewport_height) / viewport_height;
    SectionPosition {
        index: index as usize,
        // guard against `progress` rounding up to exactly 1.0
        progress: if progress < 1.0 { progress } else { 0.0 },
    }
}

/// Desired steady-state scale of each group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupTargets {
    pub central: f32,
    pub orbit: f32,
    pub satellite: f32,
}

impl GroupTargets {
    pub const HIDDEN: GroupTargets = GroupTargets {
        central: HIDDEN_SCALE,
        orbit: HIDDEN_SCALE,
        satellite: HIDDEN_SCALE,
    };
}

impl Default for GroupTargets {
    fn default() -> Self {
        group_targets(SectionPosition::default())
    }
}

/// Target scales for a section position.
///
/// Every group starts hidden and the active section overrides the groups it
/// is transitioning between.
pub fn group_targets(pos: SectionPosition) -> GroupTargets {
    let p = pos.progress as f32;
    let mut t = GroupTargets::HIDDEN;
    match pos.index {
        0 => {
            t.central = 1.0 - p;
            t.orbit = p;
        }
        1 => {
            t.orbit = 1.0 - p;
        }
        2 => {
            t.orbit = 0.0;
            t.satellite = p;
        }
        3 => {
            t.satellite = 1.0 - p;
        }
        4 => {
            t.satellite = 0.0;
        }
        _ => {}
    }
    t
}

/// Shared record written by the scroll handler and read by the frame loop.
#[derive(Clone, Debug)]
pub struct AnimationTargets {
    pub groups: GroupTargets,
    pub camera: Vec3,
}

impl Default for AnimationTargets {
    fn default() -> Self {
        Self {
            groups: GroupTargets::default(),
            camera: Vec3::from_array(CAMERA_START),
        }
    }
}

impl AnimationTargets {
    pub fn apply_scroll(&mut self, pos: SectionPosition) {
        self.groups = group_targets(pos);
    }
}

/// Transform and opacity of one `.page-content` block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockStyle {
    pub translate_y_px: f64,
    pub opacity: f64,
}

impl BlockStyle {
    pub fn transform_css(&self) -> String {
        format!("translateY({}px)", self.translate_y_px)
    }

    /// Opacity as written to the style attribute, clamped to the CSS range.
    pub fn opacity_css(&self) -> String {
        format!("{}", self.opacity.clamp(0.0, 1.0))
    }
}

/// Style of content block `block` given the current section position.
///
/// Blocks above the active section are fully scrolled out, blocks below it
/// are untouched. The active block fades out while the next one fades in.
pub fn content_block_style(block: usize, pos: SectionPosition) -> BlockStyle {
    let progress = if block == pos.index {
        pos.progress
    } else if block < pos.index {
        1.0
    } else {
        0.0
    };
    let opacity = if block == pos.index {
        1.0 - pos.progress * BLOCK_FADE_RATE
    } else if block.checked_sub(1) == Some(pos.index) {
        pos.progress * BLOCK_FADE_RATE
    } else {
        1.0
    };
    BlockStyle {
        translate_y_px: -progress * BLOCK_TRAVEL_PX,
        opacity,
    }
}
