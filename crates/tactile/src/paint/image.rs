//! Image resource handles.
//!
//! Decoding and upload belong to the host image stack; controls only need a
//! stable handle, an intrinsic size, and the render mode that decides whether
//! the consumer re-tints the pixels.

use super::types::Size;

/// How an image's pixels are interpreted when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// Draw the image's own colors.
    #[default]
    Original,
    /// Treat the image as a single-color glyph: only the alpha channel is
    /// kept and the consumer's tint color supplies the color.
    Template,
}

/// A named image resource with an intrinsic size.
///
/// The name identifies the resource in the host's asset catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Resource identifier in the host asset catalog.
    name: String,
    /// Intrinsic pixel size.
    size: Size,
    /// How the pixels are interpreted when drawn.
    render_mode: RenderMode,
}

impl Image {
    /// Create an image handle for a named resource.
    pub fn named(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
            render_mode: RenderMode::Original,
        }
    }

    /// Get the resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the intrinsic size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Get the render mode.
    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Return a copy of this image drawn as a tintable glyph.
    pub fn as_template(&self) -> Self {
        let mut image = self.clone();
        image.render_mode = RenderMode::Template;
        image
    }

    /// Return a copy with the given render mode.
    pub fn with_render_mode(&self, render_mode: RenderMode) -> Self {
        let mut image = self.clone();
        image.render_mode = render_mode;
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_image() {
        let image = Image::named("camera", Size::square(16.0));
        assert_eq!(image.name(), "camera");
        assert_eq!(image.size(), Size::new(16.0, 16.0));
        assert_eq!(image.render_mode(), RenderMode::Original);
    }

    #[test]
    fn test_as_template() {
        let image = Image::named("mail", Size::square(24.0));
        let template = image.as_template();
        assert_eq!(template.render_mode(), RenderMode::Template);
        // The source handle is unchanged.
        assert_eq!(image.render_mode(), RenderMode::Original);
        assert_eq!(template.name(), image.name());
    }
}
