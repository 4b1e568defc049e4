//! Recursive-descent parser for stream definitions.
//!
//! # Grammar (EBNF)
//!
//! ```text
//! stream   := module ('|' module)*
//! module   := IDENTIFIER argument*
//! argument := '--' IDENTIFIER '=' (IDENTIFIER | STRING)
//! ```
//!
//! Single-token lookahead, no backtracking, and fail-fast error handling:
//! the first violation aborts the parse with one positioned [`ParseError`].
//! There is no recovery and no multi-error reporting - the result is either
//! a complete tree or exactly one diagnostic.
//!
//! The `--name=value` production is adjacency-sensitive: the tokens of an
//! argument must touch, with no whitespace anywhere between `--` and the end
//! of the value. The lexer never emits whitespace tokens, so adjacency is
//! checked on the token offsets it preserves.

use text_size::{TextRange, TextSize};

use crate::ast::{ArgumentNode, ModuleNode, StreamNode};
use crate::error::ParseError;
use crate::lexer::{Token, lex, token_text, unquote};
use crate::messages::DslMessage;
use crate::token_kind::TokenKind;

/// Parses a stream definition into its syntax tree.
///
/// This is the crate's single entry point; each call tokenizes and parses
/// independently with no state shared between calls.
pub fn parse(stream: &str) -> Result<StreamNode, ParseError> {
    let tokens = lex(stream)?;
    let mut parser = Parser::new(stream, tokens);
    let ast = parser.parse_stream()?;
    if parser.more_tokens() {
        let token = parser.tokens[parser.pos];
        return Err(parser.err(
            token.span.start(),
            DslMessage::MoreInput,
            vec![parser.token_description(&token)],
        ));
    }
    Ok(ast)
}

/// Parser state: the source, its token stream, and a cursor that only moves
/// forward. Owned by one parse call and discarded with it.
struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    // stream := module ('|' module)*
    fn parse_stream(&mut self) -> Result<StreamNode, ParseError> {
        let mut modules = vec![self.parse_module()?];
        while self.more_tokens() {
            let token = self.tokens[self.pos];
            if token.kind == TokenKind::Pipe {
                self.pos += 1;
                modules.push(self.parse_module()?);
            } else {
                return Err(self.err(
                    token.span.start(),
                    DslMessage::UnexpectedDataAfterModule,
                    vec![self.token_description(&token)],
                ));
            }
        }
        Ok(StreamNode::new(self.source, modules))
    }

    // module := IDENTIFIER argument*
    fn parse_module(&mut self) -> Result<ModuleNode, ParseError> {
        let (name, name_span) = self.expect_identifier()?;
        let arguments = self.parse_arguments()?;
        Ok(ModuleNode::new(name, name_span, arguments))
    }

    // argument := '--' IDENTIFIER '=' (IDENTIFIER | STRING)
    fn parse_arguments(&mut self) -> Result<Vec<ArgumentNode>, ParseError> {
        let mut arguments = Vec::new();
        while self.at(TokenKind::DoubleMinus) {
            self.pos += 1;
            if self.at_identifier() && !self.is_next_adjacent() {
                return Err(self.err(
                    self.current_start(),
                    DslMessage::NoWhitespaceBeforeArgName,
                    Vec::new(),
                ));
            }
            let (name, name_span) = self.expect_identifier()?;
            if self.at(TokenKind::Equals) && !self.is_next_adjacent() {
                return Err(self.err(
                    self.current_start(),
                    DslMessage::NoWhitespaceBeforeArgEquals,
                    Vec::new(),
                ));
            }
            self.expect(TokenKind::Equals)?;
            if self.more_tokens() && !self.is_next_adjacent() {
                return Err(self.err(
                    self.current_start(),
                    DslMessage::NoWhitespaceBeforeArgValue,
                    Vec::new(),
                ));
            }

            let value_token = self.peek().ok_or_else(|| self.out_of_data())?;
            let value = if let Some(text) = self.identifier_text(&value_token) {
                text.to_string()
            } else if value_token.kind == TokenKind::LiteralString {
                // Quotes and doubled-quote escapes are resolved exactly once,
                // here, where the literal becomes a value
                unquote(token_text(self.source, &value_token))
            } else {
                return Err(self.err(
                    value_token.span.start(),
                    DslMessage::ExpectedArgumentValue,
                    vec![token_text(self.source, &value_token).to_string()],
                ));
            };
            self.pos += 1;

            // The span reaches back over the '--' marker
            let span = TextRange::new(
                name_span.start() - TextSize::from(2u32),
                value_token.span.end(),
            );
            arguments.push(ArgumentNode::new(name, value, span));
        }
        Ok(arguments)
    }

    /// Consumes the next token as a name. Identifiers qualify, and so do
    /// operator kinds whose spelling is reserved from identifier space when
    /// they carry their textual form (see [`TokenKind::keyword_as_identifier`]).
    fn expect_identifier(&mut self) -> Result<(&'src str, TextRange), ParseError> {
        let token = self.peek().ok_or_else(|| self.out_of_data())?;
        match self.identifier_text(&token) {
            Some(text) => {
                self.pos += 1;
                Ok((text, token.span))
            }
            None => Err(self.err(
                token.span.start(),
                DslMessage::NotExpectedToken,
                vec![
                    TokenKind::Identifier.to_string(),
                    self.token_description(&token),
                ],
            )),
        }
    }

    /// Consumes the next token, requiring an exact kind.
    fn expect(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        let token = self.peek().ok_or_else(|| self.out_of_data())?;
        if token.kind != expected {
            return Err(self.err(
                token.span.start(),
                DslMessage::NotExpectedToken,
                vec![expected.to_string(), self.token_description(&token)],
            ));
        }
        self.pos += 1;
        Ok(token)
    }

    /// The name a token contributes where an identifier is expected, if any.
    fn identifier_text(&self, token: &Token) -> Option<&'src str> {
        let text = token_text(self.source, token);
        match token.kind {
            TokenKind::Identifier => Some(text),
            kind if kind.keyword_as_identifier() => match kind.fixed_spelling() {
                // Textual form only; the symbolic spelling is not a name
                Some(spelling) if spelling != text => Some(text),
                _ => None,
            },
            _ => None,
        }
    }

    fn at_identifier(&self) -> bool {
        self.peek()
            .is_some_and(|token| self.identifier_text(&token).is_some())
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }

    fn more_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Whether the current token starts exactly where the previous one
    /// ended. False at the start of input or at EOF.
    fn is_next_adjacent(&self) -> bool {
        if self.pos == 0 || self.pos >= self.tokens.len() {
            return false;
        }
        self.tokens[self.pos - 1].span.end() == self.tokens[self.pos].span.start()
    }

    fn current_start(&self) -> TextSize {
        self.tokens
            .get(self.pos)
            .map_or_else(|| self.eof_offset(), |token| token.span.start())
    }

    fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    /// How a token reads in a diagnostic: its payload when it has one,
    /// otherwise its catalog name.
    fn token_description(&self, token: &Token) -> String {
        if token.kind.has_payload() {
            token_text(self.source, token).to_string()
        } else {
            token.kind.to_string()
        }
    }

    fn err(&self, position: TextSize, message: DslMessage, inserts: Vec<String>) -> ParseError {
        ParseError::new(self.source, position, message, inserts)
    }

    fn out_of_data(&self) -> ParseError {
        self.err(self.eof_offset(), DslMessage::OutOfData, Vec::new())
    }
}
