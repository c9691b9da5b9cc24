//! Named view templates.
//!
//! A [`ViewTemplate`] stands in for the layout resource a control is
//! instantiated from: it names the template and declares which sub-view parts
//! the resource provides. A control's constructor checks every part it
//! requires up front; a custom template that omits a required part fails
//! construction with [`TemplateError::MissingPart`] before any rendering
//! state exists. The built-in templates provide every part and cannot fail.

use thiserror::Error;

/// Part names used by the built-in control templates.
pub mod parts {
    /// The background color surface.
    pub const SURFACE: &str = "surface";
    /// The title label.
    pub const LABEL: &str = "label";
    /// The left icon slot.
    pub const LEFT_ICON: &str = "left_icon";
    /// The right icon slot.
    pub const RIGHT_ICON: &str = "right_icon";
    /// The inner tappable control.
    pub const BUTTON: &str = "button";
}

/// Errors raised while instantiating a control from a view template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template does not provide a sub-view the control requires.
    #[error("view template `{template}` has no part named `{part}`")]
    MissingPart {
        /// The template's name.
        template: String,
        /// The missing part's name.
        part: String,
    },
}

/// A named view template: a layout resource identifier plus the sub-view
/// parts it provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTemplate {
    name: String,
    parts: Vec<String>,
}

impl ViewTemplate {
    /// Create an empty template with the given resource name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parts: Vec::new(),
        }
    }

    /// Declare a part using builder pattern.
    pub fn with_part(mut self, part: impl Into<String>) -> Self {
        self.parts.push(part.into());
        self
    }

    /// Get the template's resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the declared part names.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Check whether the template provides a part.
    pub fn has_part(&self, part: &str) -> bool {
        self.parts.iter().any(|p| p == part)
    }

    /// Require a part, failing with [`TemplateError::MissingPart`] if absent.
    pub fn require_part(&self, part: &str) -> Result<(), TemplateError> {
        if self.has_part(part) {
            Ok(())
        } else {
            Err(TemplateError::MissingPart {
                template: self.name.clone(),
                part: part.to_string(),
            })
        }
    }

    /// The built-in icon button template.
    ///
    /// Provides every part [`IconButton`](super::widgets::IconButton)
    /// requires.
    pub fn icon_button() -> Self {
        Self::new("icon_button")
            .with_part(parts::SURFACE)
            .with_part(parts::LABEL)
            .with_part(parts::LEFT_ICON)
            .with_part(parts::RIGHT_ICON)
            .with_part(parts::BUTTON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_template_is_complete() {
        let template = ViewTemplate::icon_button();
        for part in [
            parts::SURFACE,
            parts::LABEL,
            parts::LEFT_ICON,
            parts::RIGHT_ICON,
            parts::BUTTON,
        ] {
            assert!(template.has_part(part), "missing {part}");
            assert!(template.require_part(part).is_ok());
        }
    }

    #[test]
    fn test_missing_part_error() {
        let template = ViewTemplate::new("bare").with_part(parts::LABEL);
        let err = template.require_part(parts::SURFACE).unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingPart {
                template: "bare".to_string(),
                part: parts::SURFACE.to_string(),
            }
        );
        assert!(err.to_string().contains("surface"));
    }
}
