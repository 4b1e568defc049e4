//! Parser for ductwork stream definitions.
//!
//! A stream definition is a pipeline of named modules joined by `|`, each
//! optionally carrying `--name=value` arguments:
//!
//! ```text
//! time --format=ISO | filter --expression='payload == ''go''' | log
//! ```
//!
//! # Architecture
//!
//! ```text
//! Source text → Lexer → Tokens → Parser → StreamNode
//!                  ↓ (first violation)  ↓
//!                 ParseError        ParseError
//! ```
//!
//! - [`lexer`]: Logos-based tokenizer producing `Token { kind, span }`
//!   pairs. Tokens are zero-copy - text is sliced from source on demand.
//!   Whitespace never becomes a token, but offsets stay exact because the
//!   grammar's `--name=value` production forbids whitespace between its
//!   parts.
//! - [`parser`]: single-token-lookahead recursive descent. Fail-fast: the
//!   first violation aborts with one positioned diagnostic.
//! - [`messages`]: the catalog of every diagnosable condition, each with a
//!   stable numeric code so tooling can match codes instead of text.
//! - [`ast`]: the immutable result tree with exact source spans.
//!
//! # Example
//!
//! ```
//! let stream = ductwork_dsl::parse("time --format=ISO | log")?;
//! assert_eq!(stream.modules().len(), 2);
//! assert_eq!(stream.module("time").unwrap().argument_map()["format"], "ISO");
//! # Ok::<(), ductwork_dsl::ParseError>(())
//! ```
//!
//! Errors carry the offset and code of the violation:
//!
//! ```
//! let err = ductwork_dsl::parse("time -- format=ISO").unwrap_err();
//! assert_eq!(err.code(), 101);
//! assert_eq!(err.to_string(), "DW101E:(pos 8): No whitespace allowed between '--' and option name");
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod messages;
pub mod parser;
pub mod token_kind;

pub use ast::{ArgumentNode, ModuleNode, StreamNode};
pub use error::ParseError;
pub use messages::{DslMessage, Severity};
pub use parser::parse;

#[cfg(test)]
mod messages_tests;
#[cfg(test)]
mod parser_tests;
