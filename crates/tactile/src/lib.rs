//! Tactile: a small retained-mode control kit.
//!
//! The kit provides a configurable icon+label button view
//! ([`widget::widgets::IconButton`]), the highlight-state control behind it
//! ([`widget::widgets::HighlightButton`]), and the style/color resolvers
//! both are built from ([`style::ButtonStyle`],
//! [`style::theme::ColorVariant`]).
//!
//! Controls are headless: they own state and expose size hints, arrangement
//! policies, and resolved colors for a host render/layout backend.
//!
//! ```no_run
//! use tactile::prelude::*;
//!
//! tactile_core::init_global_registry();
//!
//! let button = IconButton::create(
//!     ButtonContent::new().with_text("OK"),
//!     ButtonStyle::Medium(WidthMode::WrapContent),
//!     ColorVariant::Primary,
//! );
//! button.clicked().connect(|_| println!("tapped"));
//! ```

pub mod paint;
pub mod prelude;
pub mod style;
pub mod widget;
