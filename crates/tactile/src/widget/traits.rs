//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait which is the foundation for all
//! UI elements in Tactile.
//!
//! Widgets here do not paint. They own state (geometry, visibility, colors,
//! content) and expose size hints; a host render backend reads that state and
//! a host layout engine assigns real geometry.

use tactile_core::Object;

use crate::paint::{Point, Rect, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;
use super::geometry::{SizeHint, SizePolicyPair};

/// The core trait for all widgets.
///
/// `Widget` extends [`Object`] to provide the fundamental interface for all
/// UI elements in Tactile.
///
/// # Required Methods
///
/// Implementors must provide:
/// - [`widget_base()`](Self::widget_base) / [`widget_base_mut()`](Self::widget_base_mut):
///   Access to the underlying [`WidgetBase`]
/// - [`size_hint()`](Self::size_hint): The widget's preferred size for layout
///
/// # Default Implementations
///
/// Many methods have default implementations that delegate to [`WidgetBase`]:
/// geometry accessors and mutators, visibility and enabled state, and event
/// handling (which returns `false` by default).
///
/// # Implementing Object
///
/// Widgets must also implement the [`Object`] trait. The simplest way is to
/// delegate to the [`WidgetBase`]:
///
/// ```ignore
/// impl Object for MyWidget {
///     fn object_id(&self) -> ObjectId {
///         self.base.object_id()
///     }
/// }
/// ```
pub trait Widget: Object + Send + Sync {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's size hint for layout purposes.
    ///
    /// This tells layout managers what size the widget prefers. The actual
    /// size assigned may differ based on the layout and size policy.
    fn size_hint(&self) -> SizeHint;

    // =========================================================================
    // Geometry (default implementations delegate to WidgetBase)
    // =========================================================================

    /// Get the widget's geometry (position and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Get the widget's position relative to its parent.
    fn pos(&self) -> Point {
        self.widget_base().pos()
    }

    /// Set the widget's position relative to its parent.
    fn set_pos(&mut self, pos: Point) {
        self.widget_base_mut().set_pos(pos);
    }

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Set the widget's size.
    fn set_size(&mut self, size: Size) {
        self.widget_base_mut().set_size(size);
    }

    /// Get the widget's local rectangle (origin at 0,0).
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    // =========================================================================
    // Size Policy
    // =========================================================================

    /// Get the widget's size policy.
    fn size_policy(&self) -> SizePolicyPair {
        self.widget_base().size_policy()
    }

    /// Set the widget's size policy.
    fn set_size_policy(&mut self, policy: SizePolicyPair) {
        self.widget_base_mut().set_size_policy(policy);
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Set whether the widget is visible.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set whether the widget is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    // =========================================================================
    // Update / Repaint
    // =========================================================================

    /// Request a repaint of the widget.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }

    /// Check if the widget needs to be repainted.
    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a widget event.
    ///
    /// This is the main event dispatch method. The default implementation
    /// returns `false` to indicate the event was not handled. Override this
    /// to handle events specific to your widget.
    ///
    /// Return `true` if the event was handled and should not propagate further.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    // =========================================================================
    // Coordinate Mapping
    // =========================================================================

    /// Map a point from widget-local coordinates to parent coordinates.
    fn map_to_parent(&self, point: Point) -> Point {
        self.widget_base().map_to_parent(point)
    }

    /// Map a point from parent coordinates to widget-local coordinates.
    fn map_from_parent(&self, point: Point) -> Point {
        self.widget_base().map_from_parent(point)
    }

    /// Check if a point (in local coordinates) is inside the widget.
    fn contains_point(&self, point: Point) -> bool {
        self.widget_base().contains_point(point)
    }
}

/// Extension trait for converting to `&dyn Widget`.
pub trait AsWidget {
    /// Get a reference to self as a widget.
    fn as_widget(&self) -> &dyn Widget;
    /// Get a mutable reference to self as a widget.
    fn as_widget_mut(&mut self) -> &mut dyn Widget;
}

impl<W: Widget> AsWidget for W {
    fn as_widget(&self) -> &dyn Widget {
        self
    }

    fn as_widget_mut(&mut self) -> &mut dyn Widget {
        self
    }
}
