//! Syntax-tree nodes.
//!
//! One [`NodeKind`] variant per grammar rule. Payload structs hold the
//! semantic fields of a rule (the "AST view"); [`Node::children`] holds every
//! child in source order, including [`NodeKind::Sep`] nodes (the "parse-tree
//! view"). Every id in a payload also appears in `children`.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::{NodeId, Span};

/// Lexical context of an expression.
///
/// Decides which characters may appear in an unquoted bareword.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprCtx {
    #[default]
    Normal,
    /// Command heads, where `<`, `>`, `*` and `^` are also bareword characters.
    Cmd,
    /// Left-hand sides and map keys, where `=` ends a bareword.
    Lhs,
    /// Elements of `{a,b}`, where `,` ends a bareword.
    BracedElem,
}

impl fmt::Display for ExprCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExprCtx::Normal => "Normal",
            ExprCtx::Cmd => "Cmd",
            ExprCtx::Lhs => "Lhs",
            ExprCtx::BracedElem => "BracedElem",
        })
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimaryType {
    #[default]
    Bareword,
    SingleQuoted,
    DoubleQuoted,
    Variable,
    Wildcard,
    Tilde,
    ExceptionCapture,
    OutputCapture,
    List,
    Lambda,
    Map,
    Braced,
}

impl fmt::Display for PrimaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrimaryType::Bareword => "Bareword",
            PrimaryType::SingleQuoted => "SingleQuoted",
            PrimaryType::DoubleQuoted => "DoubleQuoted",
            PrimaryType::Variable => "Variable",
            PrimaryType::Wildcard => "Wildcard",
            PrimaryType::Tilde => "Tilde",
            PrimaryType::ExceptionCapture => "ExceptionCapture",
            PrimaryType::OutputCapture => "OutputCapture",
            PrimaryType::List => "List",
            PrimaryType::Lambda => "Lambda",
            PrimaryType::Map => "Map",
            PrimaryType::Braced => "Braced",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RedirMode {
    /// `<`
    Read,
    /// `>`
    Write,
    /// `>>`
    Append,
    /// `<>`
    ReadWrite,
}

impl RedirMode {
    /// Mode for a run of redirection sign characters.
    pub fn from_sign(sign: &str) -> Option<Self> {
        match sign {
            "<" => Some(RedirMode::Read),
            ">" => Some(RedirMode::Write),
            ">>" => Some(RedirMode::Append),
            "<>" => Some(RedirMode::ReadWrite),
            _ => None,
        }
    }

    pub fn sign(self) -> &'static str {
        match self {
            RedirMode::Read => "<",
            RedirMode::Write => ">",
            RedirMode::Append => ">>",
            RedirMode::ReadWrite => "<>",
        }
    }
}

impl fmt::Display for RedirMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RedirMode::Read => "Read",
            RedirMode::Write => "Write",
            RedirMode::Append => "Append",
            RedirMode::ReadWrite => "ReadWrite",
        })
    }
}

/// A sequence of pipelines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    pub pipelines: Vec<NodeId>,
}

/// `form | form | ...`, optionally followed by `&`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pipeline {
    pub forms: Vec<NodeId>,
    pub background: bool,
}

/// A command: leading assignments, a head, then arguments, options and
/// redirections in any order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Form {
    pub assignments: Vec<NodeId>,
    /// `None` for an assignment-only form.
    pub head: Option<NodeId>,
    pub args: Vec<NodeId>,
    pub opts: Vec<NodeId>,
    pub redirs: Vec<NodeId>,
}

/// `lhs=value`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// An [`Indexing`] in [`ExprCtx::Lhs`].
    pub left: Option<NodeId>,
    /// A [`Compound`]; may be empty.
    pub right: Option<NodeId>,
}

/// `[fd]<sign>[&]target`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Redir {
    pub left: Option<NodeId>,
    /// `None` when the sign is malformed (e.g. `>>>`).
    pub mode: Option<RedirMode>,
    /// The target after `&` names a file descriptor.
    pub right_is_fd: bool,
    pub right: Option<NodeId>,
}

/// Arguments and options without a command head.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Filter {
    pub args: Vec<NodeId>,
    pub opts: Vec<NodeId>,
}

/// Juxtaposed indexings forming one word, like `~/src/*.go`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Compound {
    pub ctx: ExprCtx,
    pub indexings: Vec<NodeId>,
}

/// `primary[index ...][index ...]...`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indexing {
    pub ctx: ExprCtx,
    pub head: Option<NodeId>,
    /// [`Array`] nodes, one per bracket pair.
    pub indices: Vec<NodeId>,
}

/// Whitespace-separated compounds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Array {
    pub compounds: Vec<NodeId>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Primary {
    pub ctx: ExprCtx,
    pub ty: PrimaryType,
    /// Decoded text of barewords, quoted strings, variable names and
    /// wildcards. Double-quoted escapes can produce bytes that are not
    /// valid UTF-8, so this is a byte string.
    pub value: Vec<u8>,
    /// List elements, and lambda parameters.
    pub elements: Vec<NodeId>,
    /// Body of captures and lambdas.
    pub chunk: Option<NodeId>,
    /// Map pairs, and lambda options.
    pub map_pairs: Vec<NodeId>,
    /// Elements of a brace list.
    pub braced: Vec<NodeId>,
}

impl Primary {
    /// `value` as text, replacing invalid UTF-8 with U+FFFD.
    pub fn value_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }
}

/// `&key=value` or `&key`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPair {
    /// A [`Compound`] in [`ExprCtx::Lhs`].
    pub key: Option<NodeId>,
    pub value: Option<NodeId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Chunk(Chunk),
    Pipeline(Pipeline),
    Form(Form),
    Assignment(Assignment),
    Redir(Redir),
    Filter(Filter),
    Compound(Compound),
    Indexing(Indexing),
    Array(Array),
    Primary(Primary),
    MapPair(MapPair),
    /// Whitespace, comments, line continuations and punctuation.
    Sep,
}

/// Payload-free discriminant of a [`NodeKind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeTag {
    Chunk,
    Pipeline,
    Form,
    Assignment,
    Redir,
    Filter,
    Compound,
    Indexing,
    Array,
    Primary,
    MapPair,
    Sep,
}

impl NodeTag {
    pub fn name(self) -> &'static str {
        match self {
            NodeTag::Chunk => "Chunk",
            NodeTag::Pipeline => "Pipeline",
            NodeTag::Form => "Form",
            NodeTag::Assignment => "Assignment",
            NodeTag::Redir => "Redir",
            NodeTag::Filter => "Filter",
            NodeTag::Compound => "Compound",
            NodeTag::Indexing => "Indexing",
            NodeTag::Array => "Array",
            NodeTag::Primary => "Primary",
            NodeTag::MapPair => "MapPair",
            NodeTag::Sep => "Sep",
        }
    }
}

impl fmt::Display for NodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generates `as_*` accessors returning the payload of one variant.
macro_rules! payload_accessors {
    ($($variant:ident => $method:ident),* $(,)?) => {
        $(
            #[inline]
            pub fn $method(&self) -> Option<&$variant> {
                match self {
                    NodeKind::$variant(payload) => Some(payload),
                    _ => None,
                }
            }
        )*
    };
}

impl NodeKind {
    pub fn tag(&self) -> NodeTag {
        match self {
            NodeKind::Chunk(_) => NodeTag::Chunk,
            NodeKind::Pipeline(_) => NodeTag::Pipeline,
            NodeKind::Form(_) => NodeTag::Form,
            NodeKind::Assignment(_) => NodeTag::Assignment,
            NodeKind::Redir(_) => NodeTag::Redir,
            NodeKind::Filter(_) => NodeTag::Filter,
            NodeKind::Compound(_) => NodeTag::Compound,
            NodeKind::Indexing(_) => NodeTag::Indexing,
            NodeKind::Array(_) => NodeTag::Array,
            NodeKind::Primary(_) => NodeTag::Primary,
            NodeKind::MapPair(_) => NodeTag::MapPair,
            NodeKind::Sep => NodeTag::Sep,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.tag().name()
    }

    payload_accessors! {
        Chunk => as_chunk,
        Pipeline => as_pipeline,
        Form => as_form,
        Assignment => as_assignment,
        Redir => as_redir,
        Filter => as_filter,
        Compound => as_compound,
        Indexing => as_indexing,
        Array => as_array,
        Primary => as_primary,
        MapPair => as_map_pair,
    }
}

/// A node in the arena.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    /// `None` for the root and for nodes not yet attached.
    pub parent: Option<NodeId>,
    /// Every child in source order, [`NodeKind::Sep`] nodes included.
    pub children: SmallVec<[NodeId; 4]>,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node {
            kind,
            span,
            parent: None,
            children: SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests;
