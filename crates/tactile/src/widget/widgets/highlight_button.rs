//! Highlight-propagating button control.
//!
//! [`HighlightButton`] is a tappable control with two states, released
//! (initial) and pressed, driven by the pointer's native press/release
//! reporting. Each transition is edge-triggered: redundant signals are
//! no-ops. On a real transition the control fans the new state out to a set
//! of optional collaborators:
//!
//! - an overlay ("hover") view shown only while pressed,
//! - a list of attached views sharing the [`Highlightable`] capability,
//! - a main-color target panel whose background swaps between the configured
//!   normal and pressed colors,
//! - a main label, nudged down while pressed and, when a pressed text color
//!   is configured, re-colored in place (styled text is saved on press and
//!   restored verbatim on release).
//!
//! Every collaborator is optional; absence silently skips that side effect.
//!
//! The fan-out slot is connected to the control's own state-change signal at
//! construction and held as a scoped connection for the control's whole
//! lifetime, so teardown deregisters it automatically.

use std::sync::Arc;

use parking_lot::RwLock;
use tactile_core::{ConnectionGuard, Object, ObjectId, Signal, SignalExt};

use crate::paint::{Color, StyledText};
use crate::widget::{
    PointerButton, PointerPressEvent, PointerReleaseEvent, SizeHint, Widget, WidgetBase,
    WidgetEvent,
};

use super::label::Label;
use super::panel::Panel;

/// Default vertical nudge applied to the main label while pressed.
pub const DEFAULT_LABEL_PRESS_OFFSET: f32 = 2.0;

/// Capability shared by views that can mirror a control's highlight state.
///
/// Any view-like type may implement this; the control's attached-view list is
/// polymorphic over it.
pub trait Highlightable: Send + Sync {
    /// Set the view's highlight-analog flag.
    fn set_highlighted(&mut self, highlighted: bool);

    /// Get the view's highlight-analog flag.
    fn is_highlighted(&self) -> bool;
}

/// A shared handle to any highlightable view.
pub type SharedHighlightable = Arc<RwLock<dyn Highlightable>>;

/// The collaborators and colors the fan-out writes to.
///
/// Kept behind a shared lock so the scoped state-change slot can reach them.
#[derive(Default)]
struct HighlightTargets {
    /// Overlay shown only while pressed.
    hover_view: Option<Arc<RwLock<Panel>>>,
    /// Views mirroring the highlight state.
    attached: Vec<SharedHighlightable>,
    /// Panel whose background shows the press feedback.
    main_color_view: Option<Arc<RwLock<Panel>>>,
    /// Label nudged and re-colored while pressed.
    main_label: Option<Arc<RwLock<Label>>>,
    /// Main-color background in the released state.
    normal_color: Option<Color>,
    /// Main-color background while pressed.
    highlighted_color: Option<Color>,
    /// Main-color background while the control is disabled.
    disabled_color: Option<Color>,
    /// Styled-text color applied to the main label while pressed.
    highlighted_text_color: Option<Color>,
    /// Vertical nudge applied to the main label while pressed.
    label_press_offset: f32,
    /// Styled text saved on press, restored on release.
    saved_styled_text: Option<StyledText>,
}

impl HighlightTargets {
    fn new() -> Self {
        Self {
            label_press_offset: DEFAULT_LABEL_PRESS_OFFSET,
            ..Self::default()
        }
    }

    /// Apply one edge-triggered transition to every configured collaborator.
    fn apply_transition(&mut self, pressed: bool) {
        if let Some(hover) = &self.hover_view {
            hover.write().set_visible(pressed);
        }

        for view in &self.attached {
            view.write().set_highlighted(pressed);
        }

        if let (Some(view), Some(normal), Some(highlighted)) = (
            &self.main_color_view,
            self.normal_color,
            self.highlighted_color,
        ) {
            view.write()
                .set_background_color(if pressed { highlighted } else { normal });
        }

        if let Some(label) = &self.main_label {
            let mut label = label.write();

            // Depress affordance: shift down on press, back up on release.
            let offset = label.vertical_offset();
            label.set_vertical_offset(if pressed {
                offset + self.label_press_offset
            } else {
                offset - self.label_press_offset
            });

            if let Some(press_color) = self.highlighted_text_color {
                if pressed {
                    self.saved_styled_text = label.styled_text().cloned();
                    if let Some(styled) = &self.saved_styled_text {
                        label.set_styled_text(Some(styled.with_foreground(press_color)));
                    }
                } else if let Some(original) = self.saved_styled_text.take() {
                    label.set_styled_text(Some(original));
                }
            } else {
                label.set_highlighted(pressed);
            }
        }
    }
}

/// A tappable control that propagates its pressed state to attached views.
///
/// # Signals
///
/// - `pressed`: the pointer went down on the control
/// - `released`: the pointer went up
/// - `clicked`: the pointer went up inside the control's bounds
pub struct HighlightButton {
    /// Widget base for common functionality.
    base: WidgetBase,

    /// Current state of the two-state press machine.
    pressed_state: bool,

    /// Fan-out collaborators, shared with the state-change slot.
    targets: Arc<RwLock<HighlightTargets>>,

    /// Scoped fan-out subscription. Declared before `state_changed` so it is
    /// dropped first, while the signal it disconnects from is still alive.
    _state_conn: ConnectionGuard<bool>,

    /// Emitted with the new state on every real transition.
    state_changed: Arc<Signal<bool>>,

    /// Signal emitted when the pointer goes down on the control.
    pub pressed: Signal<()>,

    /// Signal emitted when the pointer is released.
    pub released: Signal<()>,

    /// Signal emitted when the control is activated.
    pub clicked: Signal<()>,
}

impl HighlightButton {
    /// Create a new control in the released state.
    pub fn new() -> Self {
        let targets = Arc::new(RwLock::new(HighlightTargets::new()));
        let state_changed = Arc::new(Signal::new());

        let state_conn = {
            let targets = targets.clone();
            state_changed.connect_scoped(move |&pressed: &bool| {
                targets.write().apply_transition(pressed);
            })
        };

        Self {
            base: WidgetBase::new::<Self>(),
            pressed_state: false,
            targets,
            _state_conn: state_conn,
            state_changed,
            pressed: Signal::new(),
            released: Signal::new(),
            clicked: Signal::new(),
        }
    }

    // =========================================================================
    // Press State Machine
    // =========================================================================

    /// Check if the control is currently pressed.
    pub fn is_pressed(&self) -> bool {
        self.pressed_state
    }

    /// Drive the press state from the input layer.
    ///
    /// Only acts when the new state differs from the old; redundant signals
    /// are no-ops, so the visual transition runs exactly once per edge.
    pub fn set_pressed(&mut self, pressed: bool) {
        if self.pressed_state == pressed {
            return;
        }
        self.pressed_state = pressed;
        tracing::trace!(target: "tactile::widget::button", pressed, "highlight transition");
        self.state_changed.emit(pressed);
        self.base.update();
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// Set the overlay view shown only while pressed.
    pub fn set_hover_view(&mut self, view: Option<Arc<RwLock<Panel>>>) {
        self.targets.write().hover_view = view;
    }

    /// Attach a view that mirrors the control's highlight state.
    pub fn attach_highlight_view(&mut self, view: SharedHighlightable) {
        self.targets.write().attached.push(view);
    }

    /// Number of attached highlight views.
    pub fn attached_view_count(&self) -> usize {
        self.targets.read().attached.len()
    }

    /// Set the panel whose background shows the press feedback.
    pub fn set_main_color_view(&mut self, view: Option<Arc<RwLock<Panel>>>) {
        self.targets.write().main_color_view = view;
    }

    /// Set the label nudged and re-colored while pressed.
    pub fn set_main_label(&mut self, label: Option<Arc<RwLock<Label>>>) {
        self.targets.write().main_label = label;
    }

    // =========================================================================
    // Colors
    // =========================================================================

    /// Get the released-state background color.
    pub fn normal_color(&self) -> Option<Color> {
        self.targets.read().normal_color
    }

    /// Set the released-state background color.
    pub fn set_normal_color(&mut self, color: Option<Color>) {
        self.targets.write().normal_color = color;
    }

    /// Get the pressed-state background color.
    pub fn highlighted_color(&self) -> Option<Color> {
        self.targets.read().highlighted_color
    }

    /// Set the pressed-state background color.
    pub fn set_highlighted_color(&mut self, color: Option<Color>) {
        self.targets.write().highlighted_color = color;
    }

    /// Get the disabled background color.
    pub fn disabled_color(&self) -> Option<Color> {
        self.targets.read().disabled_color
    }

    /// Set the disabled background color.
    pub fn set_disabled_color(&mut self, color: Option<Color>) {
        self.targets.write().disabled_color = color;
    }

    /// Get the pressed styled-text color.
    pub fn highlighted_text_color(&self) -> Option<Color> {
        self.targets.read().highlighted_text_color
    }

    /// Set the styled-text color applied to the main label while pressed.
    ///
    /// When unset, the main label's own highlighted flag is toggled instead.
    pub fn set_highlighted_text_color(&mut self, color: Option<Color>) {
        self.targets.write().highlighted_text_color = color;
    }

    /// Get the vertical nudge applied to the main label while pressed.
    pub fn label_press_offset(&self) -> f32 {
        self.targets.read().label_press_offset
    }

    /// Set the vertical nudge applied to the main label while pressed.
    pub fn set_label_press_offset(&mut self, offset: f32) {
        self.targets.write().label_press_offset = offset;
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Set whether the control accepts input.
    ///
    /// Disabling forces the main-color target to the configured disabled
    /// color (when both the normal and disabled colors are set), independent
    /// of the press machine; re-enabling restores the normal color.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.base.is_enabled() == enabled {
            return;
        }
        self.base.set_enabled(enabled);

        let targets = self.targets.read();
        if let (Some(view), Some(normal), Some(disabled)) = (
            &targets.main_color_view,
            targets.normal_color,
            targets.disabled_color,
        ) {
            view.write()
                .set_background_color(if enabled { normal } else { disabled });
        }
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle a pointer press event.
    ///
    /// Returns `true` if the event was handled.
    pub fn handle_pointer_press(&mut self, event: &PointerPressEvent) -> bool {
        if event.button != PointerButton::Primary {
            return false;
        }
        if !self.base.is_enabled() {
            return false;
        }

        self.set_pressed(true);
        self.pressed.emit(());
        true
    }

    /// Handle a pointer release event.
    ///
    /// Returns `true` if the event was handled and a click occurred.
    pub fn handle_pointer_release(&mut self, event: &PointerReleaseEvent) -> bool {
        if event.button != PointerButton::Primary {
            return false;
        }
        if !self.base.is_enabled() {
            return false;
        }

        let was_pressed = self.pressed_state;
        // Only click if the pointer went up over the control.
        let is_over = self.base.contains_point(event.local_pos);

        self.set_pressed(false);
        self.released.emit(());

        if was_pressed && is_over {
            self.click();
            return true;
        }

        false
    }

    /// Programmatically click the control.
    pub fn click(&mut self) {
        if !self.base.is_enabled() {
            return;
        }
        tracing::debug!(target: "tactile::widget::button", "clicked");
        self.clicked.emit(());
        self.base.update();
    }
}

impl Default for HighlightButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for HighlightButton {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for HighlightButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        // The control fills whatever row it is placed in.
        SizeHint::new(self.base.size())
    }

    fn set_enabled(&mut self, enabled: bool) {
        HighlightButton::set_enabled(self, enabled);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::PointerPress(e) => {
                if self.handle_pointer_press(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::PointerRelease(e) => {
                if self.handle_pointer_release(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
        }
    }
}

// Ensure HighlightButton is Send + Sync
static_assertions::assert_impl_all!(HighlightButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Point, StyledSpan};
    use std::sync::atomic::{AtomicU32, Ordering};
    use tactile_core::init_global_registry;

    fn setup() {
        init_global_registry();
    }

    fn sized_button() -> HighlightButton {
        let mut button = HighlightButton::new();
        button.widget_base_mut().resize(100.0, 40.0);
        button
    }

    #[test]
    fn test_initial_state_is_released() {
        setup();
        let button = HighlightButton::new();
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_redundant_press_acts_once() {
        setup();
        let mut button = HighlightButton::new();
        let panel = Arc::new(RwLock::new(Panel::new()));
        button.set_main_color_view(Some(panel.clone()));
        button.set_normal_color(Some(Color::RED));
        button.set_highlighted_color(Some(Color::WHITE));

        let transitions = Arc::new(AtomicU32::new(0));
        {
            let transitions = transitions.clone();
            button.state_changed.connect(move |_| {
                transitions.fetch_add(1, Ordering::SeqCst);
            });
        }

        button.set_pressed(true);
        button.set_pressed(true);
        button.set_pressed(true);
        assert_eq!(transitions.load(Ordering::SeqCst), 1);
        assert_eq!(panel.read().background_color(), Color::WHITE);
    }

    #[test]
    fn test_main_color_swap_roundtrip() {
        setup();
        let mut button = HighlightButton::new();
        let panel = Arc::new(RwLock::new(Panel::new()));
        panel.write().set_background_color(Color::RED);
        button.set_main_color_view(Some(panel.clone()));
        button.set_normal_color(Some(Color::RED));
        button.set_highlighted_color(Some(Color::GRAY));

        button.set_pressed(true);
        assert_eq!(panel.read().background_color(), Color::GRAY);

        button.set_pressed(false);
        assert_eq!(panel.read().background_color(), Color::RED);
    }

    #[test]
    fn test_missing_colors_skip_color_swap() {
        setup();
        let mut button = HighlightButton::new();
        let panel = Arc::new(RwLock::new(Panel::new()));
        panel.write().set_background_color(Color::BLUE);
        button.set_main_color_view(Some(panel.clone()));
        // Only one of the two colors is configured.
        button.set_normal_color(Some(Color::RED));

        button.set_pressed(true);
        assert_eq!(panel.read().background_color(), Color::BLUE);
    }

    #[test]
    fn test_label_offset_nets_to_zero() {
        setup();
        let mut button = HighlightButton::new();
        let label = Arc::new(RwLock::new(Label::new("OK")));
        button.set_main_label(Some(label.clone()));

        button.set_pressed(true);
        assert_eq!(label.read().vertical_offset(), DEFAULT_LABEL_PRESS_OFFSET);

        button.set_pressed(false);
        assert_eq!(label.read().vertical_offset(), 0.0);
    }

    #[test]
    fn test_label_highlight_flag_without_text_color() {
        setup();
        let mut button = HighlightButton::new();
        let label = Arc::new(RwLock::new(Label::new("OK")));
        button.set_main_label(Some(label.clone()));

        button.set_pressed(true);
        assert!(label.read().is_highlighted());
        button.set_pressed(false);
        assert!(!label.read().is_highlighted());
    }

    #[test]
    fn test_styled_text_swap_and_restore() {
        setup();
        let mut button = HighlightButton::new();
        let label = Arc::new(RwLock::new(Label::new("OK")));
        let original = StyledText::new().with_span(StyledSpan::new("OK").bold());
        label.write().set_styled_text(Some(original.clone()));

        button.set_main_label(Some(label.clone()));
        button.set_highlighted_text_color(Some(Color::GRAY));

        button.set_pressed(true);
        {
            let label = label.read();
            let styled = label.styled_text().unwrap();
            assert!(styled.spans().iter().all(|s| s.color == Some(Color::GRAY)));
            // Emphasis survives the swap.
            assert!(styled.spans()[0].bold);
        }

        button.set_pressed(false);
        assert_eq!(label.read().styled_text(), Some(&original));
    }

    #[test]
    fn test_attached_views_mirror_state() {
        setup();
        let mut button = HighlightButton::new();
        let label = Arc::new(RwLock::new(Label::new("a")));
        let panel = Arc::new(RwLock::new(Panel::new()));
        button.attach_highlight_view(label.clone());
        button.attach_highlight_view(panel.clone());
        assert_eq!(button.attached_view_count(), 2);

        button.set_pressed(true);
        assert!(label.read().is_highlighted());
        assert!(panel.read().is_highlighted());

        button.set_pressed(false);
        assert!(!label.read().is_highlighted());
        assert!(!panel.read().is_highlighted());
    }

    #[test]
    fn test_hover_view_visibility() {
        setup();
        let mut button = HighlightButton::new();
        let hover = Arc::new(RwLock::new(Panel::new()));
        hover.write().set_visible(false);
        button.set_hover_view(Some(hover.clone()));

        button.set_pressed(true);
        assert!(hover.read().is_visible());
        button.set_pressed(false);
        assert!(!hover.read().is_visible());
    }

    #[test]
    fn test_no_collaborators_degrades_silently() {
        setup();
        let mut button = HighlightButton::new();
        button.set_pressed(true);
        button.set_pressed(false);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_disable_forces_disabled_color() {
        setup();
        let mut button = HighlightButton::new();
        let panel = Arc::new(RwLock::new(Panel::new()));
        panel.write().set_background_color(Color::RED);
        button.set_main_color_view(Some(panel.clone()));
        button.set_normal_color(Some(Color::RED));
        button.set_highlighted_color(Some(Color::WHITE));
        button.set_disabled_color(Some(Color::LIGHT_GRAY));

        button.set_enabled(false);
        assert_eq!(panel.read().background_color(), Color::LIGHT_GRAY);

        button.set_enabled(true);
        assert_eq!(panel.read().background_color(), Color::RED);
    }

    #[test]
    fn test_disabled_ignores_pointer_events() {
        setup();
        let mut button = sized_button();
        button.set_enabled(false);

        let press = PointerPressEvent::primary(Point::new(10.0, 10.0));
        assert!(!button.handle_pointer_press(&press));
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_click_on_release_inside() {
        setup();
        let mut button = sized_button();
        let clicks = Arc::new(AtomicU32::new(0));
        let clicks_clone = clicks.clone();
        button.clicked.connect(move |_| {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        });

        button.handle_pointer_press(&PointerPressEvent::primary(Point::new(10.0, 10.0)));
        assert!(button.is_pressed());
        button.handle_pointer_release(&PointerReleaseEvent::primary(Point::new(10.0, 10.0)));

        assert!(!button.is_pressed());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_release_outside_does_not_click() {
        setup();
        let mut button = sized_button();
        let clicks = Arc::new(AtomicU32::new(0));
        let clicks_clone = clicks.clone();
        button.clicked.connect(move |_| {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        });

        button.handle_pointer_press(&PointerPressEvent::primary(Point::new(10.0, 10.0)));
        button.handle_pointer_release(&PointerReleaseEvent::primary(Point::new(500.0, 10.0)));

        assert!(!button.is_pressed());
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_secondary_button_ignored() {
        setup();
        let mut button = sized_button();
        let press = PointerPressEvent::new(PointerButton::Secondary, Point::new(10.0, 10.0));
        assert!(!button.handle_pointer_press(&press));
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_event_dispatch_accepts_handled_events() {
        setup();
        let mut button = sized_button();
        let mut event =
            WidgetEvent::PointerPress(PointerPressEvent::primary(Point::new(10.0, 10.0)));
        assert!(button.event(&mut event));
        assert!(event.is_accepted());
    }

    #[test]
    fn test_fanout_stops_after_teardown() {
        setup();
        let panel = Arc::new(RwLock::new(Panel::new()));
        panel.write().set_background_color(Color::RED);

        let state_changed = {
            let mut button = HighlightButton::new();
            button.set_main_color_view(Some(panel.clone()));
            button.set_normal_color(Some(Color::RED));
            button.set_highlighted_color(Some(Color::WHITE));
            let signal = button.state_changed.clone();
            button.set_pressed(true);
            assert_eq!(panel.read().background_color(), Color::WHITE);
            signal
            // Button drops here; its scoped connection must deregister.
        };

        assert_eq!(state_changed.connection_count(), 0);
        state_changed.emit(false);
        // No fan-out ran: the panel keeps its pressed color.
        assert_eq!(panel.read().background_color(), Color::WHITE);
    }
}
