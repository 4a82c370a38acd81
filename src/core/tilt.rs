// Pointer-driven CSS effects: card tilt and footer parallax.

use super::constants::{CARD_MAX_TILT_DEG, FOOTER_MAX_SHIFT_X_PX, FOOTER_MAX_SHIFT_Y_PX};

pub const CARD_PERSPECTIVE_PX: f64 = 1000.0;
pub const CARD_HOVER_SCALE: f64 = 1.05;
pub const CARD_HOVER_TRANSITION: &str = "transform 0.1s ease";
pub const CARD_LEAVE_TRANSITION: &str = "transform 0.4s cubic-bezier(0.23, 1, 0.32, 1)";
pub const CARD_REST_TRANSFORM: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1)";

// Depth of the inner elements while hovered / at rest.
pub const TITLE_HOVER_TRANSFORM: &str = "translateZ(40px)";
pub const TITLE_REST_TRANSFORM: &str = "translateZ(30px)";
pub const IMAGE_HOVER_TRANSFORM: &str = "translateZ(60px)";
pub const IMAGE_REST_TRANSFORM: &str = "translateZ(50px)";

pub const FOOTER_HOVER_SCALE: f64 = 1.1;
pub const FOOTER_REST_TRANSFORM: &str = "translateX(0) translateY(0) scale(1)";

/// Element bounds in client (viewport) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    /// Cursor offset from the center of the rect.
    #[inline]
    pub fn offset_from_center(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (
            client_x - self.left - self.width / 2.0,
            client_y - self.top - self.height / 2.0,
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardTilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

/// Tilt that makes a card lean toward the cursor.
///
/// Zero at the center, `±max_deg` on the edges. Positive `rotate_y` when the
/// cursor is right of center, positive `rotate_x` when it is above.
pub fn card_tilt(rect: &ElementRect, client_x: f64, client_y: f64, max_deg: f64) -> CardTilt {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return CardTilt::default();
    }
    let (dx, dy) = rect.offset_from_center(client_x, client_y);
    CardTilt {
        rotate_x_deg: -(dy / (rect.height / 2.0)) * max_deg,
        rotate_y_deg: (dx / (rect.width / 2.0)) * max_deg,
    }
}

#[inline]
pub fn card_tilt_default(rect: &ElementRect, client_x: f64, client_y: f64) -> CardTilt {
    card_tilt(rect, client_x, client_y, CARD_MAX_TILT_DEG)
}

pub fn card_hover_transform(tilt: CardTilt) -> String {
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) scale({})",
        CARD_PERSPECTIVE_PX, tilt.rotate_x_deg, tilt.rotate_y_deg, CARD_HOVER_SCALE
    )
}

/// Background shift opposite to the cursor, in pixels.
pub fn footer_shift(rect: &ElementRect, client_x: f64, client_y: f64) -> (f64, f64) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return (0.0, 0.0);
    }
    let (dx, dy) = rect.offset_from_center(client_x, client_y);
    (
        -(dx / rect.width) * FOOTER_MAX_SHIFT_X_PX,
        -(dy / rect.height) * FOOTER_MAX_SHIFT_Y_PX,
    )
}

pub fn footer_transform(shift: (f64, f64)) -> String {
    format!(
        "translateX({}px) translateY({}px) scale({})",
        shift.0, shift.1, FOOTER_HOVER_SCALE
    )
}
