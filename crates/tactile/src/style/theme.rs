//! Color variants and theme resolution.
//!
//! A [`ColorVariant`] is a closed set of named presets. Each resolves to a
//! [`ColorTheme`]: the surface color, its pressed replacement, the
//! title/glyph color, and an optional border color. A single shared disabled
//! theme overrides every variant when the disabled flag is set; it never
//! blends with the variant theme.

use crate::paint::{Color, DEFAULT_BRIGHTNESS_ADJUST};

/// A resolved color theme for a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTheme {
    /// Surface color in the released state.
    pub normal: Color,
    /// Surface color while pressed.
    pub highlighted: Color,
    /// Title and glyph color.
    pub title: Color,
    /// Border color, set only by bordered variants.
    pub border: Option<Color>,
}

/// A named color theme preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorVariant {
    /// Filled with the primary brand color, white title.
    Primary,
    /// Filled with the secondary brand color, darkened-secondary title.
    Secondary,
    /// Plain surface with a primary-colored title and border.
    PrimaryBorder,
    /// Plain surface, muted title, no border.
    Normal,
}

impl ColorVariant {
    /// Every variant, for exhaustive checks.
    pub const ALL: [ColorVariant; 4] = [
        Self::Primary,
        Self::Secondary,
        Self::PrimaryBorder,
        Self::Normal,
    ];

    /// Resolve this variant's theme against a palette.
    ///
    /// Total over the variant set; there are no error cases.
    pub fn theme(self, palette: &Palette) -> ColorTheme {
        match self {
            Self::Primary => ColorTheme {
                normal: palette.primary,
                highlighted: palette.primary.lighter(DEFAULT_BRIGHTNESS_ADJUST),
                title: Color::WHITE,
                border: None,
            },
            Self::Secondary => ColorTheme {
                normal: palette.secondary,
                highlighted: palette.secondary.lighter(DEFAULT_BRIGHTNESS_ADJUST),
                title: palette.secondary.darker(DEFAULT_BRIGHTNESS_ADJUST),
                border: None,
            },
            Self::PrimaryBorder => ColorTheme {
                normal: palette.surface,
                highlighted: palette.muted,
                title: palette.primary,
                border: Some(palette.primary),
            },
            Self::Normal => ColorTheme {
                normal: palette.surface,
                highlighted: palette.pressed_wash,
                title: palette.muted,
                border: None,
            },
        }
    }

    /// Resolve the theme, honoring the disabled flag first.
    ///
    /// Disabled fully overrides the variant: every variant yields the same
    /// shared disabled theme.
    pub fn resolve(self, disabled: bool, palette: &Palette) -> ColorTheme {
        if disabled {
            palette.disabled_theme()
        } else {
            self.theme(palette)
        }
    }
}

/// The base colors variant themes are built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Main brand color.
    pub primary: Color,
    /// Secondary brand/accent color.
    pub secondary: Color,
    /// Plain surface color.
    pub surface: Color,
    /// Muted title color for plain surfaces.
    pub muted: Color,
    /// Pressed wash for plain surfaces.
    pub pressed_wash: Color,
    /// Surface color shared by every disabled button.
    pub disabled_fill: Color,
    /// Title color shared by every disabled button.
    pub disabled_title: Color,
}

impl Palette {
    /// The shared disabled theme.
    ///
    /// The pressed color equals the normal color: a disabled-looking surface
    /// shows no press feedback.
    pub fn disabled_theme(&self) -> ColorTheme {
        ColorTheme {
            normal: self.disabled_fill,
            highlighted: self.disabled_fill,
            title: self.disabled_title,
            border: None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::RED,
            secondary: Color::from_rgb(1.0, 0.5, 0.0),
            surface: Color::WHITE,
            muted: Color::GRAY,
            pressed_wash: Color::LIGHT_GRAY,
            disabled_fill: Color::LIGHT_GRAY,
            disabled_title: Color::DARK_GRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_overrides_every_variant() {
        let palette = Palette::default();
        let disabled = palette.disabled_theme();

        for variant in ColorVariant::ALL {
            assert_eq!(variant.resolve(true, &palette), disabled, "{variant:?}");
        }
    }

    #[test]
    fn test_enabled_resolves_variant_theme() {
        let palette = Palette::default();
        for variant in ColorVariant::ALL {
            assert_eq!(
                variant.resolve(false, &palette),
                variant.theme(&palette),
                "{variant:?}"
            );
        }
    }

    #[test]
    fn test_primary_theme() {
        let palette = Palette::default();
        let theme = ColorVariant::Primary.theme(&palette);

        assert_eq!(theme.normal, palette.primary);
        assert_eq!(theme.highlighted, palette.primary.lighter(30.0));
        assert_eq!(theme.title, Color::WHITE);
        assert_eq!(theme.border, None);
    }

    #[test]
    fn test_secondary_title_is_darkened_secondary() {
        let palette = Palette::default();
        let theme = ColorVariant::Secondary.theme(&palette);

        assert_eq!(theme.title, palette.secondary.darker(30.0));
        assert_eq!(theme.border, None);
    }

    #[test]
    fn test_only_primary_border_has_border() {
        let palette = Palette::default();
        for variant in ColorVariant::ALL {
            let theme = variant.theme(&palette);
            if variant == ColorVariant::PrimaryBorder {
                assert_eq!(theme.border, Some(palette.primary));
            } else {
                assert_eq!(theme.border, None, "{variant:?}");
            }
        }
    }

    #[test]
    fn test_disabled_theme_has_no_press_feedback() {
        let disabled = Palette::default().disabled_theme();
        assert_eq!(disabled.normal, disabled.highlighted);
    }
}
