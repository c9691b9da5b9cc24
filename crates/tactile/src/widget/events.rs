//! Input events handled by widgets.
//!
//! The kit reacts to pointer press/release reporting from the host input
//! layer; that is the entire input surface of these controls.

use crate::paint::Point;

/// A pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Primary button (left mouse button, or the touch contact).
    #[default]
    Primary,
    /// Secondary button (usually right).
    Secondary,
    /// Middle button.
    Middle,
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new, unaccepted event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Mark the event as handled.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Mark the event as not handled.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

/// A pointer went down over the widget.
#[derive(Debug, Clone, Copy)]
pub struct PointerPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: PointerButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl PointerPressEvent {
    /// Create a new pointer press event.
    pub fn new(button: PointerButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }

    /// A primary-button press at the given position.
    pub fn primary(local_pos: Point) -> Self {
        Self::new(PointerButton::Primary, local_pos)
    }
}

/// A pointer was released over the widget.
#[derive(Debug, Clone, Copy)]
pub struct PointerReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: PointerButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl PointerReleaseEvent {
    /// Create a new pointer release event.
    pub fn new(button: PointerButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }

    /// A primary-button release at the given position.
    pub fn primary(local_pos: Point) -> Self {
        Self::new(PointerButton::Primary, local_pos)
    }
}

/// Events dispatched to widgets.
#[derive(Debug, Clone, Copy)]
pub enum WidgetEvent {
    /// Pointer press event.
    PointerPress(PointerPressEvent),
    /// Pointer release event.
    PointerRelease(PointerReleaseEvent),
}

impl WidgetEvent {
    /// Mark the event as handled.
    pub fn accept(&mut self) {
        match self {
            Self::PointerPress(e) => e.base.accept(),
            Self::PointerRelease(e) => e.base.accept(),
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::PointerPress(e) => e.base.is_accepted(),
            Self::PointerRelease(e) => e.base.is_accepted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accept() {
        let mut event = WidgetEvent::PointerPress(PointerPressEvent::primary(Point::ZERO));
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());
    }

    #[test]
    fn test_event_base_ignore() {
        let mut base = EventBase::new();
        base.accept();
        base.ignore();
        assert!(!base.is_accepted());
    }
}
