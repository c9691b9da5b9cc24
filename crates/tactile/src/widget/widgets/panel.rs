//! Plain colored surface widget.
//!
//! A [`Panel`] is the background surface behind a control: a filled,
//! optionally bordered, optionally rounded rectangle. The highlight control
//! swaps a panel's background color to show press feedback.

use tactile_core::{Object, ObjectId};

use crate::paint::{Color, RoundedRect};
use crate::widget::{SizeHint, Widget, WidgetBase};

use super::highlight_button::Highlightable;

/// A filled background surface.
pub struct Panel {
    /// Widget base for common functionality.
    base: WidgetBase,

    /// Fill color.
    background_color: Color,

    /// Uniform corner radius.
    corner_radius: f32,

    /// Border color; no border is drawn when absent.
    border_color: Option<Color>,

    /// Border stroke width.
    border_width: f32,

    /// Whether children are clipped to the rounded shape.
    clips_children: bool,

    /// Mirror of an owning control's highlight state.
    highlighted: bool,
}

impl Panel {
    /// Create a transparent, sharp-cornered panel.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new::<Self>(),
            background_color: Color::TRANSPARENT,
            corner_radius: 0.0,
            border_color: None,
            border_width: 0.0,
            clips_children: false,
            highlighted: false,
        }
    }

    /// Get the fill color.
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Set the fill color.
    pub fn set_background_color(&mut self, color: Color) {
        if self.background_color != color {
            self.background_color = color;
            self.base.update();
        }
    }

    /// Get the corner radius.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Set the corner radius.
    pub fn set_corner_radius(&mut self, radius: f32) {
        if self.corner_radius != radius {
            self.corner_radius = radius;
            self.base.update();
        }
    }

    /// Get the border color.
    pub fn border_color(&self) -> Option<Color> {
        self.border_color
    }

    /// Set the border color. `None` removes the border.
    pub fn set_border_color(&mut self, color: Option<Color>) {
        if self.border_color != color {
            self.border_color = color;
            self.base.update();
        }
    }

    /// Get the border stroke width.
    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    /// Set the border stroke width.
    pub fn set_border_width(&mut self, width: f32) {
        if self.border_width != width {
            self.border_width = width;
            self.base.update();
        }
    }

    /// Check whether children are clipped to the rounded shape.
    pub fn clips_children(&self) -> bool {
        self.clips_children
    }

    /// Set whether children are clipped to the rounded shape.
    pub fn set_clips_children(&mut self, clips: bool) {
        self.clips_children = clips;
    }

    /// The panel's shape in local coordinates, for the host renderer.
    pub fn shape(&self) -> RoundedRect {
        RoundedRect::new(self.base.rect(), self.corner_radius)
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for Panel {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for Panel {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        // A panel has no content of its own; it takes whatever it is given.
        SizeHint::new(self.base.size())
    }
}

impl Highlightable for Panel {
    fn set_highlighted(&mut self, highlighted: bool) {
        if self.highlighted != highlighted {
            self.highlighted = highlighted;
            self.base.update();
        }
    }

    fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

// Ensure Panel is Send + Sync
static_assertions::assert_impl_all!(Panel: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Rect, Size};
    use tactile_core::init_global_registry;

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_panel_defaults() {
        setup();
        let panel = Panel::new();
        assert_eq!(panel.background_color(), Color::TRANSPARENT);
        assert_eq!(panel.corner_radius(), 0.0);
        assert_eq!(panel.border_color(), None);
        assert_eq!(panel.border_width(), 0.0);
        assert!(!panel.clips_children());
    }

    #[test]
    fn test_shape_follows_geometry() {
        setup();
        let mut panel = Panel::new();
        panel.set_geometry(Rect::new(5.0, 5.0, 100.0, 40.0));
        panel.set_corner_radius(20.0);

        let shape = panel.shape();
        // Shape is in local coordinates.
        assert_eq!(shape.rect.size, Size::new(100.0, 40.0));
        assert_eq!(shape.rect.origin.x, 0.0);
        assert_eq!(shape.radii.top_left, 20.0);
        assert!(!shape.is_rect());
    }

    #[test]
    fn test_highlightable() {
        setup();
        let mut panel = Panel::new();
        assert!(!panel.is_highlighted());
        panel.set_highlighted(true);
        assert!(panel.is_highlighted());
    }
}
