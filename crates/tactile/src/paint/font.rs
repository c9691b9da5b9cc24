//! Font description types.
//!
//! Fonts here are descriptions only; shaping and rasterization belong to the
//! host text stack. Widgets carry a [`Font`] so a render backend can resolve
//! the actual face.

/// A font family selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// The platform's default sans-serif face.
    #[default]
    SansSerif,
    /// The platform's default serif face.
    Serif,
    /// The platform's default monospace face.
    Monospace,
    /// A specific named family.
    Named(String),
}

/// A font weight on the standard 100-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const THIN: Self = Self(100);
    pub const LIGHT: Self = Self(300);
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const SEMIBOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
    pub const BLACK: Self = Self(900);

    /// Get the raw numeric weight.
    #[inline]
    pub fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl From<u16> for FontWeight {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// A font description: family, point size, and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Font family.
    family: FontFamily,
    /// Point size.
    size: f32,
    /// Font weight.
    weight: FontWeight,
}

impl Font {
    /// Create a font with the given family and size at normal weight.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
        }
    }

    /// The bold system font at the given size.
    ///
    /// Every built-in button style uses this.
    pub fn bold_system(size: f32) -> Self {
        Self {
            family: FontFamily::SansSerif,
            size,
            weight: FontWeight::BOLD,
        }
    }

    /// Get the font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Get the point size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Get the font weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Create a copy of this font with a different size.
    pub fn with_size(&self, size: f32) -> Self {
        let mut font = self.clone();
        font.size = size;
        font
    }

    /// Create a copy of this font with a different weight.
    pub fn with_weight(&self, weight: FontWeight) -> Self {
        let mut font = self.clone();
        font.weight = weight;
        font
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 14.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_defaults() {
        let font = Font::default();
        assert_eq!(font.family(), &FontFamily::SansSerif);
        assert_eq!(font.size(), 14.0);
        assert_eq!(font.weight(), FontWeight::NORMAL);
    }

    #[test]
    fn test_bold_system() {
        let font = Font::bold_system(16.0);
        assert_eq!(font.size(), 16.0);
        assert_eq!(font.weight(), FontWeight::BOLD);
        assert_eq!(font.family(), &FontFamily::SansSerif);
    }

    #[test]
    fn test_with_modifiers() {
        let font = Font::default();
        let larger = font.with_size(20.0);
        let heavier = font.with_weight(FontWeight::SEMIBOLD);

        assert_eq!(larger.size(), 20.0);
        assert_eq!(larger.weight(), FontWeight::NORMAL);
        assert_eq!(heavier.size(), 14.0);
        assert_eq!(heavier.weight(), FontWeight::SEMIBOLD);
    }

    #[test]
    fn test_weight_ordering() {
        assert!(FontWeight::BOLD > FontWeight::NORMAL);
        assert_eq!(FontWeight::from(550).value(), 550);
    }
}
