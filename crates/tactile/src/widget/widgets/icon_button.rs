//! Icon button composite view.
//!
//! [`IconButton`] composes a background [`Panel`], a title [`Label`], two
//! [`IconView`] slots, and an inner [`HighlightButton`] into one control. A
//! label that can carry an image on either side needs the full subtree, so
//! the view owns its parts and keeps them consistent.
//!
//! The style is fixed at construction. Content, color variant, and the
//! disabled-look flag are mutable afterwards; every mutation re-renders so
//! the visible state always matches the latest values of all three.

use std::sync::Arc;

use parking_lot::RwLock;
use tactile_core::{Object, ObjectId, Signal};

use crate::paint::{Image, Size};
use crate::style::theme::{ColorTheme, ColorVariant, Palette};
use crate::style::{ButtonStyle, ContentArrangement, StyleAttributes, WidthMode};
use crate::widget::template::{parts, TemplateError, ViewTemplate};
use crate::widget::{
    SizeHint, SizePolicy, SizePolicyPair, Widget, WidgetBase, WidgetEvent,
};

use super::highlight_button::HighlightButton;
use super::icon_view::IconView;
use super::label::Label;
use super::panel::Panel;

/// Stroke width of the surface border, applied only for the bordered variant.
const BORDER_VARIANT_STROKE_WIDTH: f32 = 1.0;

/// Spacing between the content row's label and icon slots.
const CONTENT_SPACING: f32 = 8.0;

/// What an icon button displays.
///
/// A value type, replaced as a whole: assigning new content re-renders the
/// visibility and content of the label and both image slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonContent {
    /// Title text; the label is hidden when absent.
    pub text: Option<String>,
    /// Image for the left slot; the slot is hidden when absent.
    pub left_image: Option<Image>,
    /// Image for the right slot; the slot is hidden when absent.
    pub right_image: Option<Image>,
}

impl ButtonContent {
    /// Create empty content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title text using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the left image using builder pattern.
    pub fn with_left_image(mut self, image: Image) -> Self {
        self.left_image = Some(image);
        self
    }

    /// Set the right image using builder pattern.
    pub fn with_right_image(mut self, image: Image) -> Self {
        self.right_image = Some(image);
        self
    }

    /// Check if no field is present.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.left_image.is_none() && self.right_image.is_none()
    }
}

/// A configurable icon+label button view.
///
/// # Construction
///
/// - [`IconButton::create`]: from a named [`ButtonStyle`] preset
/// - [`IconButton::with_attributes`]: from bespoke [`StyleAttributes`],
///   reusing the same rendering logic
///
/// # Mutability
///
/// Style is fixed at construction. [`set_content`](Self::set_content),
/// [`set_color_variant`](Self::set_color_variant) and
/// [`set_disabled_look`](Self::set_disabled_look) are the mutable surface.
/// The disabled look is purely visual: the control stays tappable while
/// showing the disabled palette.
pub struct IconButton {
    /// Widget base for common functionality.
    base: WidgetBase,

    /// Resolved layout attributes, fixed at construction.
    attrs: StyleAttributes,

    /// Content anchoring policy for the host layout engine.
    arrangement: ContentArrangement,

    /// Base colors the variant themes resolve against.
    palette: Palette,

    /// Background color surface.
    surface: Arc<RwLock<Panel>>,

    /// Title label.
    label: Arc<RwLock<Label>>,

    /// Left icon slot.
    left_icon: Arc<RwLock<IconView>>,

    /// Right icon slot.
    right_icon: Arc<RwLock<IconView>>,

    /// Inner tappable control.
    button: HighlightButton,

    /// Current content.
    content: ButtonContent,

    /// Current color variant.
    variant: ColorVariant,

    /// Whether the disabled palette is shown.
    disabled_look: bool,
}

impl IconButton {
    /// Create an icon button from a named style preset.
    pub fn create(content: ButtonContent, style: ButtonStyle, variant: ColorVariant) -> Self {
        Self::from_template(
            &ViewTemplate::icon_button(),
            content,
            style.resolve(),
            style.width_mode(),
            variant,
        )
        .expect("built-in template provides every required part")
    }

    /// Create an icon button with bespoke layout attributes.
    ///
    /// Use this when none of the named presets fit; the rendering logic is
    /// identical. Content anchoring defaults to
    /// [`WidthMode::WrapContent`].
    pub fn with_attributes(
        content: ButtonContent,
        attrs: StyleAttributes,
        variant: ColorVariant,
    ) -> Self {
        Self::from_template(
            &ViewTemplate::icon_button(),
            content,
            attrs,
            WidthMode::WrapContent,
            variant,
        )
        .expect("built-in template provides every required part")
    }

    /// Instantiate from a view template.
    ///
    /// Fails with [`TemplateError::MissingPart`] when the template omits a
    /// sub-view this control requires. The view cannot render without its
    /// declared parts, so nothing is built in that case.
    pub fn from_template(
        template: &ViewTemplate,
        content: ButtonContent,
        attrs: StyleAttributes,
        width_mode: WidthMode,
        variant: ColorVariant,
    ) -> Result<Self, TemplateError> {
        for part in [
            parts::SURFACE,
            parts::LABEL,
            parts::LEFT_ICON,
            parts::RIGHT_ICON,
            parts::BUTTON,
        ] {
            template.require_part(part)?;
        }

        tracing::debug!(
            target: "tactile::widget::button",
            template = template.name(),
            ?width_mode,
            "instantiating icon button"
        );

        let mut base = WidgetBase::new::<Self>();
        base.set_size(Size::new(0.0, attrs.row_height));
        base.set_size_policy(SizePolicyPair::new(
            match width_mode {
                WidthMode::WrapContent => SizePolicy::Preferred,
                WidthMode::Fill | WidthMode::BottomFixed => SizePolicy::Expanding,
            },
            SizePolicy::Fixed,
        ));

        let surface = Arc::new(RwLock::new(Panel::new()));
        let label = Arc::new(RwLock::new(Label::new(String::new())));
        let left_icon = Arc::new(RwLock::new(IconView::new(Size::square(attrs.icon_size))));
        let right_icon = Arc::new(RwLock::new(IconView::new(Size::square(attrs.icon_size))));
        let mut button = HighlightButton::new();

        {
            let mut surface = surface.write();
            surface.set_clips_children(true);
            surface.set_corner_radius(attrs.corner_radius());
            surface.widget_base_mut().resize(0.0, attrs.surface_height());
            surface.widget_base().set_name(parts::SURFACE);
        }
        {
            let mut label = label.write();
            label.set_font(attrs.font.clone());
            label.widget_base().set_name(parts::LABEL);
        }
        left_icon.read().widget_base().set_name(parts::LEFT_ICON);
        right_icon.read().widget_base().set_name(parts::RIGHT_ICON);
        button.widget_base_mut().resize(0.0, attrs.button_height());
        button.widget_base().set_name(parts::BUTTON);

        // Parent the subtree under the composite.
        let id = base.object_id();
        let _ = surface.read().widget_base().set_parent(Some(id));
        let _ = label.read().widget_base().set_parent(Some(id));
        let _ = left_icon.read().widget_base().set_parent(Some(id));
        let _ = right_icon.read().widget_base().set_parent(Some(id));
        let _ = button.widget_base().set_parent(Some(id));

        let mut view = Self {
            base,
            arrangement: width_mode.arrangement(),
            attrs,
            palette: Palette::default(),
            surface,
            label,
            left_icon,
            right_icon,
            button,
            content,
            variant,
            disabled_look: false,
        };

        view.apply_content();
        view.apply_theme();
        Ok(view)
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Get the current content.
    pub fn content(&self) -> &ButtonContent {
        &self.content
    }

    /// Replace the content as a whole.
    ///
    /// Label and image slot visibility follow field presence. The color
    /// theme is re-applied afterwards so the full rendered state matches the
    /// latest content, variant, and disabled flag.
    pub fn set_content(&mut self, content: ButtonContent) {
        self.content = content;
        self.apply_content();
        self.apply_theme();
        self.base.update();
    }

    // =========================================================================
    // Color
    // =========================================================================

    /// Get the current color variant.
    pub fn color_variant(&self) -> ColorVariant {
        self.variant
    }

    /// Replace the color variant and re-render with the current disabled flag.
    pub fn set_color_variant(&mut self, variant: ColorVariant) {
        self.variant = variant;
        self.apply_theme();
        self.base.update();
    }

    /// Check if the disabled palette is shown.
    pub fn is_disabled_look(&self) -> bool {
        self.disabled_look
    }

    /// Show or clear the disabled palette.
    ///
    /// Purely visual: the control remains tappable while it looks disabled.
    pub fn set_disabled_look(&mut self, disabled: bool) {
        self.disabled_look = disabled;
        self.apply_theme();
        self.base.update();
    }

    /// Get the palette variant themes resolve against.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the palette and re-render.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.apply_theme();
        self.base.update();
    }

    /// The theme currently applied (variant resolved with the disabled flag).
    pub fn theme(&self) -> ColorTheme {
        self.variant.resolve(self.disabled_look, &self.palette)
    }

    // =========================================================================
    // Style (read-only after construction)
    // =========================================================================

    /// Get the resolved layout attributes.
    pub fn style_attributes(&self) -> &StyleAttributes {
        &self.attrs
    }

    /// Get the content anchoring policy for the host layout engine.
    pub fn arrangement(&self) -> ContentArrangement {
        self.arrangement
    }

    // =========================================================================
    // Parts
    // =========================================================================

    /// The background surface.
    pub fn surface(&self) -> &Arc<RwLock<Panel>> {
        &self.surface
    }

    /// The title label.
    pub fn label(&self) -> &Arc<RwLock<Label>> {
        &self.label
    }

    /// The left icon slot.
    pub fn left_icon(&self) -> &Arc<RwLock<IconView>> {
        &self.left_icon
    }

    /// The right icon slot.
    pub fn right_icon(&self) -> &Arc<RwLock<IconView>> {
        &self.right_icon
    }

    /// The inner tappable control.
    pub fn highlight_button(&self) -> &HighlightButton {
        &self.button
    }

    /// The inner tappable control, mutably.
    pub fn highlight_button_mut(&mut self) -> &mut HighlightButton {
        &mut self.button
    }

    /// The activation signal: emitted when the pointer is released inside
    /// the control.
    pub fn clicked(&self) -> &Signal<()> {
        &self.button.clicked
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn apply_content(&self) {
        {
            let mut label = self.label.write();
            label.set_visible(self.content.text.is_some());
            label.set_text(self.content.text.clone().unwrap_or_default());
        }

        let slots = [
            (&self.left_icon, &self.content.left_image),
            (&self.right_icon, &self.content.right_image),
        ];
        for (slot, image) in slots {
            let mut slot = slot.write();
            slot.set_visible(image.is_some());
            slot.set_image(image.clone());
        }
    }

    fn apply_theme(&mut self) {
        let theme = self.theme();

        {
            let mut surface = self.surface.write();
            surface.set_background_color(theme.normal);
            surface.set_border_color(theme.border);
            // Border width is a fixed constant applied only for the bordered
            // variant, never derived from the theme.
            surface.set_border_width(if self.variant == ColorVariant::PrimaryBorder {
                BORDER_VARIANT_STROKE_WIDTH
            } else {
                0.0
            });
        }

        self.label.write().set_text_color(theme.title);

        // Icons are single-color glyphs: always re-tint to the title color.
        for slot in [&self.left_icon, &self.right_icon] {
            let mut slot = slot.write();
            if let Some(image) = slot.image().cloned() {
                slot.set_image(Some(image.as_template()));
            }
            slot.set_tint(theme.title);
        }

        self.button.set_main_color_view(Some(self.surface.clone()));
        self.button.set_normal_color(Some(theme.normal));
        self.button.set_highlighted_color(Some(theme.highlighted));
    }
}

impl Object for IconButton {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for IconButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let mut width = 0.0;
        let mut visible_parts = 0;

        {
            let label = self.label.read();
            if label.is_visible() {
                width += label.estimated_size().width;
                visible_parts += 1;
            }
        }
        for slot in [&self.left_icon, &self.right_icon] {
            if slot.read().is_visible() {
                width += self.attrs.icon_size;
                visible_parts += 1;
            }
        }
        if visible_parts > 1 {
            width += CONTENT_SPACING * (visible_parts - 1) as f32;
        }
        width += self.attrs.side_padding * 2.0;

        SizeHint::new(Size::new(width, self.attrs.row_height))
            .with_minimum_dimensions(self.attrs.row_height, self.attrs.row_height)
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        // The inner control owns all pointer handling.
        match event {
            WidgetEvent::PointerPress(e) => {
                if self.button.handle_pointer_press(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::PointerRelease(e) => {
                if self.button.handle_pointer_release(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
        }
    }
}

// Ensure IconButton is Send + Sync
static_assertions::assert_impl_all!(IconButton: Send, Sync);
