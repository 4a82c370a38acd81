pub mod pointer;
pub mod scroll;

pub use pointer::{wire_card_tilt, wire_footer_parallax};
pub use scroll::{wire_canvas_resize, wire_scroll};
