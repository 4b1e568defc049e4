//! Token catalog for the stream definition language.
//!
//! The stream grammar itself only consumes identifiers, string literals and
//! the three structural tokens (`|`, `--`, `=`). The catalog nevertheless
//! reserves the full set of expression-operator spellings so that operator
//! text stays out of the identifier space and tokenization of existing
//! definitions cannot shift as the grammar grows. A small subset of those
//! reserved spellings doubles as plain names, see
//! [`TokenKind::keyword_as_identifier`].
//!
//! Logos is derived directly on the enum: fixed spellings are `#[token]`
//! rules, payload-carrying categories are `#[regex]` rules. Whitespace is
//! skipped and never produces a token; exact offsets are preserved so the
//! parser can still detect adjacency.

use logos::Logos;

/// All kinds of tokens in a stream definition.
///
/// A kind either has a fixed spelling (operators, punctuation) or carries a
/// payload (identifiers, literals); never both. The payload itself is not
/// stored here - tokens are spans and text is sliced from the source, see
/// [`crate::lexer::Token`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    /// Module, argument and value names: start with a letter, may contain
    /// digits and hyphens (`gemfire-cq`).
    #[regex(r"[a-zA-Z][a-zA-Z0-9-]*")]
    Identifier,

    #[token("--")]
    DoubleMinus,

    #[token("=")]
    Equals,

    #[token("|")]
    Pipe,

    #[regex(r"[0-9]+")]
    LiteralInt,

    #[regex(r"[0-9]+[Ll]")]
    LiteralLong,

    #[regex(r"0[xX][0-9a-fA-F]+")]
    LiteralHexInt,

    #[regex(r"0[xX][0-9a-fA-F]+[Ll]")]
    LiteralHexLong,

    /// Single- or double-quoted string. A doubled quote of the same type is
    /// an escaped quote, which makes a literal a run of adjacent quoted
    /// chunks: `'a''b'` is one token. The payload keeps the delimiters and
    /// escapes; the lexer's `unquote` resolves them at the point of use.
    #[regex(r"(?:'[^']*')+")]
    #[regex(r#"(?:"[^"]*")+"#)]
    LiteralString,

    #[regex(r"[0-9]+\.[0-9]+(?:[eE][+-]?[0-9]+)?[dD]?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+[dD]?")]
    #[regex(r"[0-9]+[dD]")]
    LiteralReal,

    #[regex(r"[0-9]+\.[0-9]+(?:[eE][+-]?[0-9]+)?[fF]")]
    #[regex(r"[0-9]+(?:[eE][+-]?[0-9]+)?[fF]")]
    LiteralRealFloat,

    /// A real literal with a long suffix. Matched explicitly so the lexer
    /// rejects it with its dedicated diagnostic rather than a generic one;
    /// never surfaces in a token stream.
    #[regex(r"[0-9]+\.[0-9]+(?:[eE][+-]?[0-9]+)?[Ll]")]
    LiteralRealLong,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token("#")]
    Hash,

    #[token("]")]
    RSquare,

    #[token("[")]
    LSquare,

    #[token("{")]
    LCurly,

    #[token("}")]
    RCurly,

    #[token(".")]
    Dot,

    #[token("+")]
    Plus,

    #[token("*")]
    Star,

    #[token("-")]
    Minus,

    #[token("^[")]
    SelectFirst,

    #[token("$[")]
    SelectLast,

    #[token("?")]
    QMark,

    #[token("![")]
    Project,

    #[token("/")]
    Div,

    #[token(">=")]
    Ge,

    #[token(">")]
    Gt,

    #[token("<=")]
    Le,

    #[token("<")]
    Lt,

    #[token("==")]
    Eq,

    #[token("!=")]
    Ne,

    #[token("%")]
    Mod,

    #[token("!")]
    Not,

    #[token("instanceof")]
    Instanceof,

    #[token("matches")]
    Matches,

    #[token("between")]
    Between,

    #[token("?[")]
    Select,

    #[token("^")]
    Power,

    #[token("?:")]
    Elvis,

    #[token("?.")]
    SafeNavi,

    #[token("@")]
    BeanRef,

    #[token("||")]
    SymbolicOr,

    #[token("&&")]
    SymbolicAnd,

    #[token("++")]
    Inc,
}

use TokenKind::*;

impl TokenKind {
    /// The fixed spelling of this kind, or `None` for payload-carrying kinds.
    pub fn fixed_spelling(self) -> Option<&'static str> {
        match self {
            DoubleMinus => Some("--"),
            Equals => Some("="),
            Pipe => Some("|"),
            LParen => Some("("),
            RParen => Some(")"),
            Comma => Some(","),
            Colon => Some(":"),
            Hash => Some("#"),
            RSquare => Some("]"),
            LSquare => Some("["),
            LCurly => Some("{"),
            RCurly => Some("}"),
            Dot => Some("."),
            Plus => Some("+"),
            Star => Some("*"),
            Minus => Some("-"),
            SelectFirst => Some("^["),
            SelectLast => Some("$["),
            QMark => Some("?"),
            Project => Some("!["),
            Div => Some("/"),
            Ge => Some(">="),
            Gt => Some(">"),
            Le => Some("<="),
            Lt => Some("<"),
            Eq => Some("=="),
            Ne => Some("!="),
            Mod => Some("%"),
            Not => Some("!"),
            Instanceof => Some("instanceof"),
            Matches => Some("matches"),
            Between => Some("between"),
            Select => Some("?["),
            Power => Some("^"),
            Elvis => Some("?:"),
            SafeNavi => Some("?."),
            BeanRef => Some("@"),
            SymbolicOr => Some("||"),
            SymbolicAnd => Some("&&"),
            Inc => Some("++"),
            Identifier | LiteralInt | LiteralLong | LiteralHexInt | LiteralHexLong
            | LiteralString | LiteralReal | LiteralRealFloat | LiteralRealLong => None,
        }
    }

    /// Returns `true` if instances of this kind carry text beyond the kind
    /// itself (identifiers and literals).
    #[inline]
    pub fn has_payload(self) -> bool {
        self.fixed_spelling().is_none()
    }

    /// Kinds whose textual spelling the tokenizer reserves (`div`, `ne`, …)
    /// but which the stream grammar accepts as plain names wherever an
    /// identifier is expected. The stream grammar has no keywords of its
    /// own, so rejecting a module called `gt` would be a surprise.
    ///
    /// Acceptance additionally requires the token to carry a textual
    /// payload: the symbolic form (`>` for `gt`) is never a name.
    #[inline]
    pub fn keyword_as_identifier(self) -> bool {
        matches!(self, Div | Ge | Gt | Le | Lt | Eq | Ne | Mod | Not)
    }

    /// Lowercase catalog name, used in rendered diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Identifier => "identifier",
            DoubleMinus => "double_minus",
            Equals => "equals",
            Pipe => "pipe",
            LiteralInt => "literal_int",
            LiteralLong => "literal_long",
            LiteralHexInt => "literal_hexint",
            LiteralHexLong => "literal_hexlong",
            LiteralString => "literal_string",
            LiteralReal => "literal_real",
            LiteralRealFloat => "literal_real_float",
            LiteralRealLong => "literal_real_long",
            LParen => "lparen",
            RParen => "rparen",
            Comma => "comma",
            Colon => "colon",
            Hash => "hash",
            RSquare => "rsquare",
            LSquare => "lsquare",
            LCurly => "lcurly",
            RCurly => "rcurly",
            Dot => "dot",
            Plus => "plus",
            Star => "star",
            Minus => "minus",
            SelectFirst => "select_first",
            SelectLast => "select_last",
            QMark => "qmark",
            Project => "project",
            Div => "div",
            Ge => "ge",
            Gt => "gt",
            Le => "le",
            Lt => "lt",
            Eq => "eq",
            Ne => "ne",
            Mod => "mod",
            Not => "not",
            Instanceof => "instanceof",
            Matches => "matches",
            Between => "between",
            Select => "select",
            Power => "power",
            Elvis => "elvis",
            SafeNavi => "safe_navi",
            BeanRef => "bean_ref",
            SymbolicOr => "symbolic_or",
            SymbolicAnd => "symbolic_and",
            Inc => "inc",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.fixed_spelling() {
            Some(spelling) => write!(f, "{}({})", self.name(), spelling),
            None => f.write_str(self.name()),
        }
    }
}

/// Maps a textual operator spelling to the operator kind whose spelling it
/// reserves. Case-insensitive, and only for the two- and three-letter forms;
/// anything longer is an ordinary identifier.
pub(crate) fn keyword_alias(text: &str) -> Option<TokenKind> {
    if !(2..=3).contains(&text.len()) {
        return None;
    }
    let upper = text.to_ascii_uppercase();
    let kind = match upper.as_str() {
        "DIV" => Div,
        "GE" => Ge,
        "GT" => Gt,
        "LE" => Le,
        "LT" => Lt,
        "EQ" => Eq,
        "NE" => Ne,
        "MOD" => Mod,
        "NOT" => Not,
        _ => return None,
    };
    Some(kind)
}
