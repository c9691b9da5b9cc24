//! Convenience re-exports for common Tactile usage.
//!
//! ```
//! use tactile::prelude::*;
//! ```

pub use tactile_core::{
    init_global_registry, ConnectionGuard, ConnectionId, Object, ObjectId, Signal, SignalExt,
};

pub use crate::paint::{
    Color, Font, FontFamily, FontWeight, Image, Point, Rect, RenderMode, RoundedRect, Size,
    StyledSpan, StyledText,
};

pub use crate::style::theme::{ColorTheme, ColorVariant, Palette};
pub use crate::style::{ButtonStyle, ContentArrangement, StyleAttributes, WidthMode};

pub use crate::widget::widgets::{
    ButtonContent, HighlightButton, Highlightable, IconButton, IconView, Label, Panel,
    SharedHighlightable,
};
pub use crate::widget::{
    PointerButton, PointerPressEvent, PointerReleaseEvent, SizeHint, SizePolicy, SizePolicyPair,
    TemplateError, ViewTemplate, Widget, WidgetBase, WidgetEvent,
};
