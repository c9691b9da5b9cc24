//! Owned styled-text spans.
//!
//! A [`StyledText`] is a sequence of spans, each with its own emphasis flags
//! and optional color override. The highlight control uses
//! [`StyledText::with_foreground`] to swap every span's color while a button
//! is held and restores the saved original on release.

use super::types::Color;

/// A segment of styled text.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSpan {
    /// The text content of this span.
    pub text: String,
    /// Whether the text is bold.
    pub bold: bool,
    /// Whether the text is italic.
    pub italic: bool,
    /// Whether the text has underline.
    pub underline: bool,
    /// Optional text color override.
    pub color: Option<Color>,
}

impl StyledSpan {
    /// Create a new span with plain text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            underline: false,
            color: None,
        }
    }

    /// Set bold using builder pattern.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set italic using builder pattern.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set underline using builder pattern.
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Set the color override using builder pattern.
    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Styled text: an owned sequence of [`StyledSpan`]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledText {
    spans: Vec<StyledSpan>,
}

impl StyledText {
    /// Create empty styled text.
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Create styled text from a single plain span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![StyledSpan::new(text)],
        }
    }

    /// Append a span using builder pattern.
    pub fn with_span(mut self, span: StyledSpan) -> Self {
        self.spans.push(span);
        self
    }

    /// Get the spans.
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Check if there are no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Concatenate the plain text of every span.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Return a copy with every span's color replaced by `color`.
    ///
    /// Emphasis flags are untouched.
    pub fn with_foreground(&self, color: Color) -> Self {
        Self {
            spans: self
                .spans
                .iter()
                .map(|span| StyledSpan {
                    color: Some(color),
                    ..span.clone()
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let text = StyledText::plain("Save ")
            .with_span(StyledSpan::new("now").bold().colored(Color::RED));
        assert_eq!(text.plain_text(), "Save now");
        assert_eq!(text.spans().len(), 2);
    }

    #[test]
    fn test_with_foreground_replaces_every_color() {
        let text = StyledText::plain("a").with_span(StyledSpan::new("b").colored(Color::RED));
        let recolored = text.with_foreground(Color::BLUE);

        assert!(recolored.spans().iter().all(|s| s.color == Some(Color::BLUE)));
        // Emphasis and content are untouched.
        assert_eq!(recolored.plain_text(), "ab");
    }

    #[test]
    fn test_with_foreground_roundtrip_keeps_original() {
        let original = StyledText::plain("press me").with_span(StyledSpan::new("!").underline());
        let swapped = original.with_foreground(Color::GRAY);

        assert_ne!(original, swapped);
        // Restoring means assigning the saved original back; it must be intact.
        assert_eq!(original.spans()[1].underline, true);
        assert_eq!(original.spans()[0].color, None);
    }
}
