//! Single-image icon slot widget.
//!
//! An [`IconView`] shows one image inside a fixed square slot. Template-mode
//! images are glyphs: the view's tint color replaces their pixels, so a
//! themed control re-tints its icons to match the title color.

use tactile_core::{Object, ObjectId};

use crate::paint::{Color, Image, RenderMode, Size};
use crate::widget::{SizeHint, Widget, WidgetBase};

use super::highlight_button::Highlightable;

/// A widget that displays a single, optionally tinted image.
pub struct IconView {
    /// Widget base for common functionality.
    base: WidgetBase,

    /// The image to display, if any.
    image: Option<Image>,

    /// Tint applied to template-mode images.
    tint: Color,

    /// The fixed slot the image is fitted into.
    slot_size: Size,

    /// Mirror of an owning control's highlight state.
    highlighted: bool,
}

impl IconView {
    /// Create an empty icon view with the given slot size.
    pub fn new(slot_size: Size) -> Self {
        Self {
            base: WidgetBase::new::<Self>(),
            image: None,
            tint: Color::BLACK,
            slot_size,
            highlighted: false,
        }
    }

    /// Get the image, if any.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Set the image.
    pub fn set_image(&mut self, image: Option<Image>) {
        if self.image != image {
            self.image = image;
            self.base.update();
        }
    }

    /// Get the tint color.
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Set the tint color applied to template-mode images.
    pub fn set_tint(&mut self, tint: Color) {
        if self.tint != tint {
            self.tint = tint;
            self.base.update();
        }
    }

    /// Get the slot size.
    pub fn slot_size(&self) -> Size {
        self.slot_size
    }

    /// Set the slot size.
    pub fn set_slot_size(&mut self, slot_size: Size) {
        if self.slot_size != slot_size {
            self.slot_size = slot_size;
            self.base.update();
        }
    }

    /// The color a renderer should draw the glyph with.
    ///
    /// `Some(tint)` when a template-mode image is set; `None` means the
    /// image's own colors are used (or there is nothing to draw).
    pub fn effective_glyph_color(&self) -> Option<Color> {
        match &self.image {
            Some(image) if image.render_mode() == RenderMode::Template => Some(self.tint),
            _ => None,
        }
    }
}

impl Object for IconView {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for IconView {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        // The slot wins; fall back to the image's own size for unsized slots.
        let preferred = if self.slot_size.is_empty() {
            self.image.as_ref().map(|i| i.size()).unwrap_or(Size::ZERO)
        } else {
            self.slot_size
        };
        SizeHint::new(preferred)
    }
}

impl Highlightable for IconView {
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

// Ensure IconView is Send + Sync
static_assertions::assert_impl_all!(IconView: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use tactile_core::init_global_registry;

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_empty_icon_view() {
        setup();
        let view = IconView::new(Size::square(16.0));
        assert!(view.image().is_none());
        assert_eq!(view.effective_glyph_color(), None);
        assert_eq!(view.size_hint().preferred, Size::square(16.0));
    }

    #[test]
    fn test_template_image_is_tinted() {
        setup();
        let mut view = IconView::new(Size::square(16.0));
        view.set_image(Some(Image::named("camera", Size::square(16.0)).as_template()));
        view.set_tint(Color::WHITE);
        assert_eq!(view.effective_glyph_color(), Some(Color::WHITE));
    }

    #[test]
    fn test_original_image_keeps_its_colors() {
        setup();
        let mut view = IconView::new(Size::square(16.0));
        view.set_image(Some(Image::named("camera", Size::square(16.0))));
        view.set_tint(Color::WHITE);
        assert_eq!(view.effective_glyph_color(), None);
    }

    #[test]
    fn test_unsized_slot_falls_back_to_image_size() {
        setup();
        let mut view = IconView::new(Size::ZERO);
        view.set_image(Some(Image::named("mail", Size::square(24.0))));
        assert_eq!(view.size_hint().preferred, Size::square(24.0));
    }
}
