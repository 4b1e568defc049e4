//! Message catalog for stream definition diagnostics.
//!
//! Every diagnosable condition has a stable numeric code, a severity and a
//! parameterized template. Tools (and tests) match on codes rather than on
//! message text, so wording can change without breaking anything downstream.
//!
//! A formatted message looks like:
//!
//! ```text
//! DW101E:(pos 7): No whitespace allowed between '--' and option name
//! ```
//!
//! The prefix carries the code and severity letter; the position segment is
//! omitted when the position is unknown.

use serde::Serialize;
use text_size::TextSize;

/// Prefix for rendered message codes.
pub const CODE_PREFIX: &str = "DW";

/// Diagnostic severity. The stream grammar only raises errors; the warning
/// and info levels exist so the catalog format is stable if softer
/// diagnostics are ever added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Single-letter form used in the rendered code prefix.
    pub fn letter(self) -> char {
        match self {
            Severity::Error => 'E',
            Severity::Warning => 'W',
            Severity::Info => 'I',
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Every message the tokenizer or parser can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DslMessage {
    /// A module was parsed but the next token is not `|`.
    UnexpectedDataAfterModule,
    /// Whitespace between `--` and the argument name.
    NoWhitespaceBeforeArgName,
    /// Whitespace between the argument name and `=`.
    NoWhitespaceBeforeArgEquals,
    /// Whitespace between `=` and the argument value.
    NoWhitespaceBeforeArgValue,
    /// Tokens remain after a complete stream definition.
    MoreInput,
    /// The token after `--name=` cannot be an argument value.
    ExpectedArgumentValue,
    /// A `"` string ran off the end of the input.
    NonTerminatingDoubleQuotedString,
    /// A `'` string ran off the end of the input.
    NonTerminatingQuotedString,
    /// An int literal whose value does not fit an int.
    NotAnInteger,
    /// A long literal whose value does not fit a long.
    NotALong,
    /// Grammar expected one token kind and found another.
    NotExpectedToken,
    /// Input ended where the grammar required another token.
    OutOfData,
    /// A real literal carried a long (`L`/`l`) suffix.
    RealCannotBeLong,
    /// A stray escape character outside any string literal.
    UnexpectedEscapeChar,
    /// A character no token can start with.
    UnsupportedCharacter,
    /// A character that only forms a token together with another (`&`).
    MissingCharacter,
}

impl DslMessage {
    /// Stable numeric code. Codes are part of the public contract and never
    /// renumbered.
    pub fn code(self) -> u16 {
        match self {
            DslMessage::UnexpectedDataAfterModule => 100,
            DslMessage::NoWhitespaceBeforeArgName => 101,
            DslMessage::NoWhitespaceBeforeArgEquals => 102,
            DslMessage::NoWhitespaceBeforeArgValue => 103,
            DslMessage::MoreInput => 104,
            DslMessage::ExpectedArgumentValue => 105,
            DslMessage::NonTerminatingDoubleQuotedString => 106,
            DslMessage::NonTerminatingQuotedString => 107,
            DslMessage::NotAnInteger => 1035,
            DslMessage::NotALong => 1036,
            DslMessage::NotExpectedToken => 1043,
            DslMessage::OutOfData => 1044,
            DslMessage::RealCannotBeLong => 1048,
            DslMessage::UnexpectedEscapeChar => 1065,
            DslMessage::UnsupportedCharacter => 1066,
            DslMessage::MissingCharacter => 1069,
        }
    }

    pub fn severity(self) -> Severity {
        Severity::Error
    }

    /// Message template with positional `{0}`, `{1}` placeholders.
    pub fn template(self) -> &'static str {
        match self {
            DslMessage::UnexpectedDataAfterModule => {
                "Unexpected data after module definition: '{0}'"
            }
            DslMessage::NoWhitespaceBeforeArgName => {
                "No whitespace allowed between '--' and option name"
            }
            DslMessage::NoWhitespaceBeforeArgEquals => {
                "No whitespace allowed after argument name and before '='"
            }
            DslMessage::NoWhitespaceBeforeArgValue => {
                "No whitespace allowed after '=' and before option value"
            }
            DslMessage::MoreInput => {
                "After parsing a valid stream, there is still more data: '{0}'"
            }
            DslMessage::ExpectedArgumentValue => "Expected an argument value but was '{0}'",
            DslMessage::NonTerminatingDoubleQuotedString => {
                "Cannot find terminating \" for string"
            }
            DslMessage::NonTerminatingQuotedString => "Cannot find terminating ' for string",
            DslMessage::NotAnInteger => "The value '{0}' cannot be parsed as an int",
            DslMessage::NotALong => "The value '{0}' cannot be parsed as a long",
            DslMessage::NotExpectedToken => "Unexpected token. Expected '{0}' but was '{1}'",
            DslMessage::OutOfData => "Unexpectedly ran out of input",
            DslMessage::RealCannotBeLong => {
                "Real number cannot be suffixed with a long (L or l) suffix"
            }
            DslMessage::UnexpectedEscapeChar => "Unexpected escape character",
            DslMessage::UnsupportedCharacter => "Unsupported character '{0}'",
            DslMessage::MissingCharacter => "Missing expected character '{0}'",
        }
    }

    /// Expands the template with the given inserts, without the code prefix.
    pub fn expand(self, inserts: &[String]) -> String {
        let mut text = self.template().to_string();
        for (i, insert) in inserts.iter().enumerate() {
            text = text.replace(&format!("{{{i}}}"), insert);
        }
        text
    }

    /// Produces the complete message: prefix, position (when known) and the
    /// expanded template.
    pub fn format(self, position: Option<TextSize>, inserts: &[String]) -> String {
        let mut out = format!("{}{}{}:", CODE_PREFIX, self.code(), self.severity().letter());
        if let Some(pos) = position {
            out.push_str(&format!("(pos {}): ", u32::from(pos)));
        }
        out.push_str(&self.expand(inserts));
        out
    }
}
