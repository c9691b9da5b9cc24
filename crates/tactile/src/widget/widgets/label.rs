//! Label widget for text display.
//!
//! The Label widget displays a single run of text with a font and color.
//! When styled text is set it takes precedence over the plain string; the
//! highlight control uses that to swap text color in place while a button is
//! held.

use tactile_core::{Object, ObjectId, Signal};

use crate::paint::{Color, Font, Size, StyledText};
use crate::widget::{SizeHint, Widget, WidgetBase};

use super::highlight_button::Highlightable;

/// A widget that displays text.
pub struct Label {
    /// Widget base for common functionality.
    base: WidgetBase,

    /// The plain text to display (used when styled_text is None).
    text: String,

    /// Styled text content (takes precedence over text when Some).
    styled_text: Option<StyledText>,

    /// The font to use for text rendering.
    font: Font,

    /// Text color.
    text_color: Color,

    /// Mirror of an owning control's highlight state.
    highlighted: bool,

    /// Render-time vertical displacement, used for the depress affordance.
    vertical_offset: f32,

    /// Signal emitted when the text changes.
    pub text_changed: Signal<String>,
}

impl Label {
    /// Create a new label with the specified text.
    ///
    /// The label is created with the default sans-serif font at 14pt and
    /// black text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new::<Self>(),
            text: text.into(),
            styled_text: None,
            font: Font::default(),
            text_color: Color::BLACK,
            highlighted: false,
            vertical_offset: 0.0,
            text_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Get the plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the plain text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let new_text = text.into();
        if self.text != new_text {
            self.text = new_text.clone();
            self.base.update();
            self.text_changed.emit(new_text);
        }
    }

    /// Get the styled text, if set.
    pub fn styled_text(&self) -> Option<&StyledText> {
        self.styled_text.as_ref()
    }

    /// Set the styled text. When set it takes precedence over the plain text.
    pub fn set_styled_text(&mut self, styled: Option<StyledText>) {
        if self.styled_text != styled {
            self.styled_text = styled;
            self.base.update();
        }
    }

    /// The text a renderer should display: the styled text's content when
    /// present, the plain text otherwise.
    pub fn display_text(&self) -> String {
        match &self.styled_text {
            Some(styled) => styled.plain_text(),
            None => self.text.clone(),
        }
    }

    // =========================================================================
    // Font and Color
    // =========================================================================

    /// Get the font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the font for text rendering.
    pub fn set_font(&mut self, font: Font) {
        if self.font != font {
            self.font = font;
            self.base.update();
        }
    }

    /// Get the text color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Set the text color.
    pub fn set_text_color(&mut self, color: Color) {
        if self.text_color != color {
            self.text_color = color;
            self.base.update();
        }
    }

    // =========================================================================
    // Vertical Offset
    // =========================================================================

    /// Get the render-time vertical displacement.
    pub fn vertical_offset(&self) -> f32 {
        self.vertical_offset
    }

    /// Set the render-time vertical displacement.
    pub fn set_vertical_offset(&mut self, offset: f32) {
        if self.vertical_offset != offset {
            self.vertical_offset = offset;
            self.base.update();
        }
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Rough single-line measurement for size hints.
    ///
    /// Real shaping belongs to the host text stack; layouts only need a
    /// stable estimate here.
    pub fn estimated_size(&self) -> Size {
        let chars = self.display_text().chars().count() as f32;
        Size::new(chars * self.font.size() * 0.6, self.font.size() * 1.2)
    }
}

impl Object for Label {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for Label {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::new(self.estimated_size())
    }
}

impl Highlightable for Label {
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

// Ensure Label is Send + Sync
static_assertions::assert_impl_all!(Label: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::StyledSpan;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use tactile_core::init_global_registry;

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_label_creation() {
        setup();
        let label = Label::new("Hello");
        assert_eq!(label.text(), "Hello");
        assert_eq!(label.display_text(), "Hello");
        assert_eq!(label.text_color(), Color::BLACK);
        assert_eq!(label.vertical_offset(), 0.0);
    }

    #[test]
    fn test_text_changed_signal() {
        setup();
        let mut label = Label::new("a");
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();
        label.text_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        label.set_text("b");
        // Assigning identical text emits nothing.
        label.set_text("b");
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_styled_text_precedence() {
        setup();
        let mut label = Label::new("plain");
        label.set_styled_text(Some(
            StyledText::new().with_span(StyledSpan::new("styled").bold()),
        ));
        assert_eq!(label.display_text(), "styled");

        label.set_styled_text(None);
        assert_eq!(label.display_text(), "plain");
    }

    #[test]
    fn test_estimated_size_scales_with_text() {
        setup();
        let short = Label::new("OK");
        let long = Label::new("A considerably longer title");
        assert!(long.estimated_size().width > short.estimated_size().width);
        assert_eq!(short.estimated_size().height, long.estimated_size().height);
    }

    #[test]
    fn test_highlightable() {
        setup();
        let mut label = Label::new("x");
        label.set_highlighted(true);
        assert!(label.is_highlighted());
        label.set_highlighted(false);
        assert!(!label.is_highlighted());
    }
}
