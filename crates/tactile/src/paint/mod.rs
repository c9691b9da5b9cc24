//! Paint primitives: geometry, colors, fonts, image handles, styled text.
//!
//! These are the value types the widget layer hands to a host render backend.
//! Nothing here draws; the kit supplies state and constants only.

mod font;
mod image;
mod styled;
mod types;

pub use font::{Font, FontFamily, FontWeight};
pub use image::{Image, RenderMode};
pub use styled::{StyledSpan, StyledText};
pub use types::{
    Color, CornerRadii, Point, Rect, RoundedRect, Size, DEFAULT_BRIGHTNESS_ADJUST,
};
