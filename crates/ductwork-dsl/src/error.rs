//! The positioned, coded parse error surfaced to callers.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use serde::{Serialize, Serializer};
use text_size::{TextRange, TextSize};

use crate::messages::DslMessage;

/// A parse failure: the offending source text, the character offset of the
/// violation (when known), the message code and its inserts.
///
/// `Display` renders the catalog format (`DW100E:(pos 13): …`), which is
/// standalone enough to locate and explain the fault; [`ParseError::render`]
/// additionally underlines the offset in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    stream: String,
    #[serde(serialize_with = "serialize_position")]
    position: Option<TextSize>,
    message: DslMessage,
    inserts: Vec<String>,
}

pub(crate) fn serialize_text_range<S: Serializer>(
    range: &TextRange,
    s: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut state = s.serialize_struct("TextRange", 2)?;
    state.serialize_field("start", &u32::from(range.start()))?;
    state.serialize_field("end", &u32::from(range.end()))?;
    state.end()
}

fn serialize_position<S: Serializer>(
    position: &Option<TextSize>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match position {
        Some(pos) => s.serialize_some(&u32::from(*pos)),
        None => s.serialize_none(),
    }
}

impl ParseError {
    pub(crate) fn new(
        stream: impl Into<String>,
        position: impl Into<Option<TextSize>>,
        message: DslMessage,
        inserts: Vec<String>,
    ) -> Self {
        Self {
            stream: stream.into(),
            position: position.into(),
            message,
            inserts,
        }
    }

    /// The source text the parse was attempted on.
    pub fn stream_text(&self) -> &str {
        &self.stream
    }

    /// Character offset of the violation; `None` when no position is known.
    pub fn position(&self) -> Option<TextSize> {
        self.position
    }

    /// The catalog entry this error was raised with.
    pub fn message_code(&self) -> DslMessage {
        self.message
    }

    /// Stable numeric code of the catalog entry.
    pub fn code(&self) -> u16 {
        self.message.code()
    }

    /// Format arguments substituted into the entry's template.
    pub fn inserts(&self) -> &[String] {
        &self.inserts
    }

    /// Renders the error with the offending source position underlined.
    pub fn render(&self) -> String {
        let Some(position) = self.position else {
            return self.to_string();
        };
        let detail = self.message.expand(&self.inserts);
        let start = usize::from(position).min(self.stream.len());
        // Zero-width spans are widened to one character for visibility
        let end = (start + 1).min(self.stream.len());

        let renderer = Renderer::plain();
        let snippet = Snippet::source(&self.stream)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(start..end).label(&detail));
        let report: Vec<Group> = vec![Level::ERROR.primary_title(&detail).element(snippet)];
        renderer.render(&report).to_string()
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message.format(self.position, &self.inserts))
    }
}

impl std::error::Error for ParseError {}
