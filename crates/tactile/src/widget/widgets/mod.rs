//! Built-in widgets.
//!
//! - [`Panel`]: filled, optionally bordered background surface
//! - [`Label`]: single-run text display with styled-text support
//! - [`IconView`]: tintable single-image slot
//! - [`HighlightButton`]: tappable control propagating its pressed state
//! - [`IconButton`]: the icon+label button composite

mod highlight_button;
mod icon_button;
mod icon_view;
mod label;
mod panel;

pub use highlight_button::{
    HighlightButton, Highlightable, SharedHighlightable, DEFAULT_LABEL_PRESS_OFFSET,
};
pub use icon_button::{ButtonContent, IconButton};
pub use icon_view::IconView;
pub use label::Label;
pub use panel::Panel;
