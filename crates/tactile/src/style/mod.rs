//! Button style presets and their resolved layout attributes.
//!
//! A [`ButtonStyle`] is a closed set of named presets. Resolution is a total
//! mapping to [`StyleAttributes`]: font, side padding, row height, icon size,
//! and the corner-rounding flag. The attributes are fixed at control
//! construction and never mutated afterwards.
//!
//! Width behavior is orthogonal: each sized preset carries a [`WidthMode`]
//! that decides how the content is anchored inside the row (the `Bottom`
//! preset always uses [`WidthMode::BottomFixed`]).

pub mod theme;

use crate::paint::Font;

/// How a button's content is sized and anchored horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidthMode {
    /// The content hugs its own width and the layout container centers it.
    #[default]
    WrapContent,
    /// The button fills its container: the left image is pinned to the left
    /// edge, the right image to the right edge, and the label is centered
    /// independently of both.
    Fill,
    /// Bottom-bar placement: the content is centered as one unit, ignoring
    /// the side edges.
    BottomFixed,
}

/// The anchoring constants a layout engine applies for a [`WidthMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentArrangement {
    /// Content row hugs its width; side padding is active.
    HugCentered,
    /// Absolute placement: icons pinned to the edges, label centered,
    /// everything vertically centered.
    PinnedEdges,
    /// Content centered as a single unit; side edges are ignored.
    CenteredUnit,
}

impl WidthMode {
    /// The arrangement a layout engine should apply for this mode.
    pub fn arrangement(self) -> ContentArrangement {
        match self {
            Self::WrapContent => ContentArrangement::HugCentered,
            Self::Fill => ContentArrangement::PinnedEdges,
            Self::BottomFixed => ContentArrangement::CenteredUnit,
        }
    }
}

/// A named button style preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonStyle {
    /// 48pt row, 16pt bold font, 24pt side padding.
    Large(WidthMode),
    /// 40pt row, 14pt bold font, 16pt side padding.
    Medium(WidthMode),
    /// 28pt row, 13pt bold font, 12pt side padding.
    Small(WidthMode),
    /// 52pt bottom bar: square corners, centered content, larger icons.
    Bottom,
}

impl ButtonStyle {
    /// The width mode for this style.
    ///
    /// `Bottom` has no configurable width; it is always
    /// [`WidthMode::BottomFixed`].
    pub fn width_mode(self) -> WidthMode {
        match self {
            Self::Large(mode) | Self::Medium(mode) | Self::Small(mode) => mode,
            Self::Bottom => WidthMode::BottomFixed,
        }
    }

    /// Resolve this preset to its layout attributes.
    ///
    /// Total over the style set; there are no error cases.
    pub fn resolve(self) -> StyleAttributes {
        match self {
            Self::Large(_) => StyleAttributes {
                font: Font::bold_system(16.0),
                side_padding: 24.0,
                row_height: 48.0,
                icon_size: 16.0,
                is_round_rect: true,
            },
            Self::Medium(_) => StyleAttributes {
                font: Font::bold_system(14.0),
                side_padding: 16.0,
                row_height: 40.0,
                icon_size: 16.0,
                is_round_rect: true,
            },
            Self::Small(_) => StyleAttributes {
                font: Font::bold_system(13.0),
                side_padding: 12.0,
                row_height: 28.0,
                icon_size: 16.0,
                is_round_rect: true,
            },
            // Structurally the bottom bar needs no inset, so padding is zero.
            Self::Bottom => StyleAttributes {
                font: Font::bold_system(16.0),
                side_padding: 0.0,
                row_height: 52.0,
                icon_size: 24.0,
                is_round_rect: false,
            },
        }
    }

    /// Every style preset, for exhaustive checks.
    pub fn all() -> impl Iterator<Item = ButtonStyle> {
        const MODES: [WidthMode; 3] = [
            WidthMode::WrapContent,
            WidthMode::Fill,
            WidthMode::BottomFixed,
        ];
        MODES
            .into_iter()
            .flat_map(|m| [Self::Large(m), Self::Medium(m), Self::Small(m)])
            .chain(std::iter::once(Self::Bottom))
    }
}

/// Resolved layout attributes for a button.
///
/// Row height is the single source of truth for vertical dimensions: the
/// button and surface heights are derived from it, so the three can never
/// disagree. Callers needing bespoke dimensions construct this directly and
/// pass it to [`IconButton::with_attributes`](crate::widget::widgets::IconButton::with_attributes).
#[derive(Debug, Clone, PartialEq)]
pub struct StyleAttributes {
    /// Label font.
    pub font: Font,
    /// Horizontal inset between the container edges and the content row.
    pub side_padding: f32,
    /// Height of the whole row.
    pub row_height: f32,
    /// Width and height of each icon slot.
    pub icon_size: f32,
    /// Whether the surface is drawn as a capsule (corner radius = half the
    /// surface height).
    pub is_round_rect: bool,
}

impl StyleAttributes {
    /// Height of the tappable control.
    #[inline]
    pub fn button_height(&self) -> f32 {
        self.row_height
    }

    /// Height of the background surface.
    #[inline]
    pub fn surface_height(&self) -> f32 {
        self.row_height
    }

    /// Corner radius of the surface: half its height for round-rect styles,
    /// zero otherwise.
    #[inline]
    pub fn corner_radius(&self) -> f32 {
        if self.is_round_rect {
            self.surface_height() / 2.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::FontWeight;

    #[test]
    fn test_heights_share_single_source() {
        for style in ButtonStyle::all() {
            let attrs = style.resolve();
            assert_eq!(attrs.button_height(), attrs.row_height, "{style:?}");
            assert_eq!(attrs.surface_height(), attrs.row_height, "{style:?}");
        }
    }

    #[test]
    fn test_round_rect_iff_not_bottom() {
        for style in ButtonStyle::all() {
            let attrs = style.resolve();
            assert_eq!(attrs.is_round_rect, style != ButtonStyle::Bottom, "{style:?}");
        }
    }

    #[test]
    fn test_resolved_dimensions() {
        let large = ButtonStyle::Large(WidthMode::WrapContent).resolve();
        assert_eq!(large.row_height, 48.0);
        assert_eq!(large.side_padding, 24.0);
        assert_eq!(large.font.size(), 16.0);

        let medium = ButtonStyle::Medium(WidthMode::Fill).resolve();
        assert_eq!(medium.row_height, 40.0);
        assert_eq!(medium.side_padding, 16.0);
        assert_eq!(medium.font.size(), 14.0);
        assert_eq!(medium.icon_size, 16.0);

        let small = ButtonStyle::Small(WidthMode::WrapContent).resolve();
        assert_eq!(small.row_height, 28.0);
        assert_eq!(small.side_padding, 12.0);
        assert_eq!(small.font.size(), 13.0);
    }

    #[test]
    fn test_bottom_style() {
        let bottom = ButtonStyle::Bottom.resolve();
        assert_eq!(bottom.row_height, 52.0);
        assert_eq!(bottom.side_padding, 0.0);
        assert_eq!(bottom.icon_size, 24.0);
        assert!(!bottom.is_round_rect);
        assert_eq!(bottom.corner_radius(), 0.0);
        assert_eq!(ButtonStyle::Bottom.width_mode(), WidthMode::BottomFixed);
    }

    #[test]
    fn test_fonts_are_bold() {
        for style in ButtonStyle::all() {
            assert_eq!(style.resolve().font.weight(), FontWeight::BOLD, "{style:?}");
        }
    }

    #[test]
    fn test_corner_radius_is_half_height() {
        let medium = ButtonStyle::Medium(WidthMode::WrapContent).resolve();
        assert_eq!(medium.corner_radius(), 20.0);
    }

    #[test]
    fn test_width_mode_arrangements() {
        assert_eq!(
            WidthMode::WrapContent.arrangement(),
            ContentArrangement::HugCentered
        );
        assert_eq!(WidthMode::Fill.arrangement(), ContentArrangement::PinnedEdges);
        assert_eq!(
            WidthMode::BottomFixed.arrangement(),
            ContentArrangement::CenteredUnit
        );
    }

    #[test]
    fn test_sized_styles_carry_width_mode() {
        assert_eq!(
            ButtonStyle::Large(WidthMode::Fill).width_mode(),
            WidthMode::Fill
        );
        assert_eq!(
            ButtonStyle::Small(WidthMode::WrapContent).width_mode(),
            WidthMode::WrapContent
        );
    }
}
