//! Lexer for the stream definition language.
//!
//! Produces span-based tokens without storing text - text is sliced from
//! source only when needed.
//!
//! ## Error handling
//!
//! Lexing is fail-fast: the first malformed piece of input aborts the scan
//! with a positioned [`ParseError`]. Raw logos matches go through a
//! re-classification step that rewrites textual operator spellings to their
//! operator kind, value-checks numeric literals, and turns unmatched input
//! into the catalogued character diagnostics.

use logos::Logos;
use std::ops::Range;
use text_size::{TextRange, TextSize};

use crate::error::ParseError;
use crate::messages::DslMessage;
use crate::token_kind::{TokenKind, keyword_alias};

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
///
/// Two tokens are equal iff kind and span match; over a single source text
/// that also pins the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Whitespace is skipped and never emitted; token offsets stay exact, which
/// is what the parser's adjacency rules rely on.
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = range_to_text_range(lexer.span());
        match result {
            Ok(kind) => {
                let kind = reclassify(source, kind, lexer.slice(), span.start())?;
                tokens.push(Token::new(kind, span));
            }
            Err(()) => return Err(unexpected_input(source, lexer.span().start)),
        }
    }

    Ok(tokens)
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[Range::<usize>::from(token.span)]
}

/// Second look at a raw match: textual operator spellings become their
/// operator kind (keeping the text as payload), numeric literals are
/// value-checked, and the explicitly matched malformed forms are rejected.
fn reclassify(
    source: &str,
    kind: TokenKind,
    text: &str,
    start: TextSize,
) -> Result<TokenKind, ParseError> {
    match kind {
        TokenKind::Identifier => Ok(keyword_alias(text).unwrap_or(TokenKind::Identifier)),
        TokenKind::LiteralInt => {
            text.parse::<i32>()
                .map_err(|_| numeric_error(source, start, DslMessage::NotAnInteger, text))?;
            Ok(kind)
        }
        TokenKind::LiteralLong => {
            text[..text.len() - 1]
                .parse::<i64>()
                .map_err(|_| numeric_error(source, start, DslMessage::NotALong, text))?;
            Ok(kind)
        }
        TokenKind::LiteralHexInt => {
            i32::from_str_radix(&text[2..], 16)
                .map_err(|_| numeric_error(source, start, DslMessage::NotAnInteger, text))?;
            Ok(kind)
        }
        TokenKind::LiteralHexLong => {
            i64::from_str_radix(&text[2..text.len() - 1], 16)
                .map_err(|_| numeric_error(source, start, DslMessage::NotALong, text))?;
            Ok(kind)
        }
        TokenKind::LiteralRealLong => Err(ParseError::new(
            source,
            start,
            DslMessage::RealCannotBeLong,
            Vec::new(),
        )),
        _ => Ok(kind),
    }
}

fn numeric_error(source: &str, start: TextSize, message: DslMessage, text: &str) -> ParseError {
    ParseError::new(source, start, message, vec![text.to_string()])
}

/// Classifies input no token rule matched. The first offending character
/// decides the diagnostic: an unclosed quote, a stray escape, the lone half
/// of a two-character operator, or a character the language has no use for.
fn unexpected_input(source: &str, at: usize) -> ParseError {
    let position = TextSize::from(at as u32);
    match source[at..].chars().next() {
        Some('\'') => ParseError::new(
            source,
            position,
            DslMessage::NonTerminatingQuotedString,
            Vec::new(),
        ),
        Some('"') => ParseError::new(
            source,
            position,
            DslMessage::NonTerminatingDoubleQuotedString,
            Vec::new(),
        ),
        Some('\\') => ParseError::new(
            source,
            position,
            DslMessage::UnexpectedEscapeChar,
            Vec::new(),
        ),
        Some('&') => ParseError::new(
            source,
            position,
            DslMessage::MissingCharacter,
            vec!["&".to_string()],
        ),
        Some(ch) => ParseError::new(
            source,
            position,
            DslMessage::UnsupportedCharacter,
            vec![ch.to_string()],
        ),
        None => ParseError::new(source, position, DslMessage::OutOfData, Vec::new()),
    }
}

/// Strips the delimiting quotes from a string literal's raw text and
/// collapses doubled quotes of the literal's own quote type.
///
/// The tokenizer guarantees the input starts and ends with the same quote
/// character.
pub(crate) fn unquote(raw: &str) -> String {
    debug_assert!(raw.len() >= 2);
    let inner = &raw[1..raw.len() - 1];
    match raw.as_bytes().first() {
        Some(b'\'') => inner.replace("''", "'"),
        _ => inner.replace("\"\"", "\""),
    }
}
