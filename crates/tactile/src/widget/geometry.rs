//! Size hints and size policies for widget layout.
//!
//! This module provides the types used for layout negotiation between widgets
//! and the host layout engine. The kit never positions anything itself; these
//! are the constants the engine consumes.

use crate::paint::Size;

/// Size policy determines how a widget should behave when space is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SizePolicy {
    /// The widget cannot grow or shrink. It always stays at its size hint.
    Fixed = 0,

    /// The size hint is the minimum size. The widget can grow but there's no
    /// benefit in making it larger than the size hint.
    Minimum = 1,

    /// The size hint is the maximum size. The widget can shrink but cannot
    /// grow larger than the size hint.
    Maximum = 2,

    /// The size hint is preferred but the widget can both grow and shrink.
    /// This is the default policy for most widgets.
    #[default]
    Preferred = 3,

    /// The widget wants to grow and take up as much space as possible.
    /// It can also shrink if needed.
    Expanding = 4,
}

impl SizePolicy {
    /// Returns true if the policy allows the widget to grow.
    #[inline]
    pub fn can_grow(self) -> bool {
        !matches!(self, Self::Fixed | Self::Maximum)
    }

    /// Returns true if the policy allows the widget to shrink.
    #[inline]
    pub fn can_shrink(self) -> bool {
        !matches!(self, Self::Fixed | Self::Minimum)
    }

    /// Returns true if the widget actively wants more space.
    #[inline]
    pub fn wants_to_grow(self) -> bool {
        matches!(self, Self::Expanding)
    }
}

/// Combined horizontal and vertical size policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePolicyPair {
    /// Horizontal size policy.
    pub horizontal: SizePolicy,
    /// Vertical size policy.
    pub vertical: SizePolicy,
}

impl SizePolicyPair {
    /// Create a new size policy pair with the specified policies.
    pub fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// A widget's size preferences for layout negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHint {
    /// The size the widget would like to have.
    pub preferred: Size,
    /// The smallest acceptable size.
    pub minimum: Size,
}

impl SizeHint {
    /// Create a size hint with the given preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: Size::ZERO,
        }
    }

    /// Create a size hint from preferred dimensions.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Set the minimum dimensions using builder pattern.
    pub fn with_minimum_dimensions(mut self, width: f32, height: f32) -> Self {
        self.minimum = Size::new(width, height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_policy_growth() {
        assert!(!SizePolicy::Fixed.can_grow());
        assert!(!SizePolicy::Fixed.can_shrink());
        assert!(SizePolicy::Preferred.can_grow());
        assert!(SizePolicy::Preferred.can_shrink());
        assert!(SizePolicy::Expanding.wants_to_grow());
        assert!(!SizePolicy::Preferred.wants_to_grow());
    }

    #[test]
    fn test_size_hint_builder() {
        let hint = SizeHint::from_dimensions(120.0, 40.0).with_minimum_dimensions(40.0, 40.0);
        assert_eq!(hint.preferred, Size::new(120.0, 40.0));
        assert_eq!(hint.minimum, Size::new(40.0, 40.0));
    }
}
