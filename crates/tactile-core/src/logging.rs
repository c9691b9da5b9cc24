//! Logging and debugging facilities for Tactile.
//!
//! Tactile uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("tactile=trace,tactile_core=trace")
//!     .init();
//! ```

use crate::object::{global_registry, ObjectResult};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "tactile_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "tactile_core::signal";
    /// Object model target.
    pub const OBJECT: &str = "tactile_core::object";
    /// Widget system target.
    pub const WIDGET: &str = "tactile::widget";
    /// Button controls target.
    pub const BUTTON: &str = "tactile::widget::button";
}

/// Format the full object forest (every root object and its descendants).
///
/// Useful in demos and debugging sessions to inspect what the registry holds.
pub fn format_object_forest() -> ObjectResult<String> {
    let registry = global_registry()?;
    let mut output = String::new();
    for root in registry.root_objects() {
        output.push_str(&registry.dump_object_tree(root)?);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{init_global_registry, Object, ObjectBase, ObjectId};

    struct Probe {
        base: ObjectBase,
    }

    impl Object for Probe {
        fn object_id(&self) -> ObjectId {
            self.base.id()
        }
    }

    #[test]
    fn test_format_object_forest() {
        init_global_registry();
        let probe = Probe {
            base: ObjectBase::new::<Probe>(),
        };
        probe.base.set_name("forest_probe");

        let dump = format_object_forest().unwrap();
        assert!(dump.contains("forest_probe"));
    }
}
