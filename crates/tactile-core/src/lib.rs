//! Core systems for Tactile.
//!
//! This crate provides the foundational components of the Tactile control kit:
//!
//! - **Object Model**: Parent-child ownership, naming, child lookup
//! - **Signal/Slot System**: Type-safe inter-object communication with
//!   scoped (RAII) connections
//! - **Logging**: `tracing` target constants for per-subsystem filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use tactile_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Object Example
//!
//! ```
//! use tactile_core::{init_global_registry, Object, ObjectBase, ObjectId};
//!
//! init_global_registry();
//!
//! struct Knob {
//!     base: ObjectBase,
//! }
//!
//! impl Knob {
//!     fn new() -> Self {
//!         Self { base: ObjectBase::new::<Self>() }
//!     }
//! }
//!
//! impl Object for Knob {
//!     fn object_id(&self) -> ObjectId {
//!         self.base.id()
//!     }
//! }
//!
//! let knob = Knob::new();
//! knob.base.set_name("volume");
//! assert_eq!(knob.base.name(), "volume");
//! ```

pub mod logging;
pub mod object;
pub mod signal;

pub use object::{
    global_registry, init_global_registry, Object, ObjectBase, ObjectError, ObjectId,
    ObjectRegistry, ObjectResult, SharedObjectRegistry,
};
pub use signal::{ConnectionGuard, ConnectionId, Signal, SignalExt};
