//! Syntax tree for parsed stream definitions.
//!
//! All nodes are created during a single parse call and immutable
//! afterwards. Offsets are byte offsets into the original source text, which
//! the root [`StreamNode`] keeps verbatim so spans can always be rendered
//! back to the text they cover.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Write as _;
use std::ops::Range;
use text_size::TextRange;

use crate::error::serialize_text_range;

/// One `--name=value` argument of a module.
///
/// The value is stored resolved: quotes stripped and doubled-quote escapes
/// collapsed. The span runs from the `--` marker through the end of the
/// value token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentNode {
    name: String,
    value: String,
    #[serde(serialize_with = "serialize_text_range")]
    span: TextRange,
}

impl ArgumentNode {
    pub(crate) fn new(name: impl Into<String>, value: impl Into<String>, span: TextRange) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn span(&self) -> TextRange {
        self.span
    }
}

/// One pipeline stage: a module name and its arguments, in declaration
/// order. A module without arguments and a module with an empty argument
/// list are the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleNode {
    name: String,
    #[serde(serialize_with = "serialize_text_range")]
    name_span: TextRange,
    arguments: Vec<ArgumentNode>,
}

impl ModuleNode {
    pub(crate) fn new(
        name: impl Into<String>,
        name_span: TextRange,
        arguments: Vec<ArgumentNode>,
    ) -> Self {
        Self {
            name: name.into(),
            name_span,
            arguments,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Span of the name token alone.
    pub fn name_span(&self) -> TextRange {
        self.name_span
    }

    pub fn arguments(&self) -> &[ArgumentNode] {
        &self.arguments
    }

    /// Span of the whole stage: name start through the end of the last
    /// argument, or the name alone when there are none.
    pub fn span(&self) -> TextRange {
        let end = self
            .arguments
            .last()
            .map_or(self.name_span.end(), |arg| arg.span().end());
        TextRange::new(self.name_span.start(), end)
    }

    /// Name→value view of the arguments, case-preserving and in declaration
    /// order. Duplicate names are not diagnosed; the first occurrence wins.
    pub fn argument_map(&self) -> IndexMap<&str, &str> {
        let mut map = IndexMap::new();
        for argument in &self.arguments {
            map.entry(argument.name()).or_insert(argument.value());
        }
        map
    }
}

/// The root of a parsed definition: the original source text plus the
/// pipeline stages left to right.
///
/// A stream always has at least one module; the grammar cannot produce an
/// empty one and neither can this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamNode {
    stream: String,
    modules: Vec<ModuleNode>,
}

impl StreamNode {
    pub(crate) fn new(stream: impl Into<String>, modules: Vec<ModuleNode>) -> Self {
        assert!(!modules.is_empty(), "a stream has at least one module");
        Self {
            stream: stream.into(),
            modules,
        }
    }

    /// The source text this tree was parsed from, verbatim.
    pub fn stream_text(&self) -> &str {
        &self.stream
    }

    pub fn modules(&self) -> &[ModuleNode] {
        &self.modules
    }

    /// Looks up a module by name; first match wins.
    pub fn module(&self, name: &str) -> Option<&ModuleNode> {
        self.modules.iter().find(|module| module.name() == name)
    }

    /// Span from the first module's start to the last module's end.
    pub fn span(&self) -> TextRange {
        let first = &self.modules[0];
        let last = &self.modules[self.modules.len() - 1];
        TextRange::new(first.span().start(), last.span().end())
    }

    /// Compact rendering for logs and tests: the source text followed by
    /// each module's source slice and span.
    ///
    /// ```text
    /// Stream[foo | bar](ModuleNode:foo:0>3)(ModuleNode:bar:6>9)
    /// ```
    ///
    /// The module slices are verbatim source, so re-parsing one yields a
    /// structurally identical single-module tree.
    pub fn stringify(&self) -> String {
        let mut out = format!("Stream[{}]", self.stream);
        for module in &self.modules {
            let span = module.span();
            let text = &self.stream[Range::<usize>::from(span)];
            let _ = write!(
                out,
                "(ModuleNode:{}:{}>{})",
                text,
                u32::from(span.start()),
                u32::from(span.end())
            );
        }
        out
    }
}
