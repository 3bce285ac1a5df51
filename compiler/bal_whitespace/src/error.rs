//! Error types.
//!
//! Every error here is a precondition violation: the token stream or tree the
//! producer handed over is structurally wrong. A missing optional child is
//! not an error (its slot is left out), and an empty trivia run is `""`.

use std::fmt;

use bal_ir::{NodeId, TokenIdx};

use crate::{RegionTag, Selector};

/// Which end of a node a boundary refers to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Boundary {
    Start,
    Stop,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Boundary::Start => "start",
            Boundary::Stop => "stop",
        })
    }
}

/// A violated precondition on the token stream or syntax tree.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum TriviaError {
    #[error("token index {index} out of bounds for a stream of {len} tokens")]
    TokenOutOfBounds { index: TokenIdx, len: usize },

    #[error("{node} has no {boundary} token")]
    MissingBoundary { node: NodeId, boundary: Boundary },

    #[error("{node} is missing the {selector}")]
    MissingChild { node: NodeId, selector: Selector },

    #[error("{node} is not in the syntax tree")]
    UnknownNode { node: NodeId },

    #[error("{node} has no construct kind")]
    NotAConstruct { node: NodeId },

    #[error("token stream contains no significant tokens")]
    NoSignificantTokens,
}

/// Descriptor assembly aborted for one node.
///
/// `tag` is the rule being evaluated when the violation surfaced; `None`
/// when it surfaced before any rule ran.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("whitespace assembly failed for {node}{}: {source}", at_region(.tag))]
pub struct AssembleError {
    pub node: NodeId,
    pub tag: Option<RegionTag>,
    pub source: TriviaError,
}

fn at_region(tag: &Option<RegionTag>) -> String {
    match tag {
        Some(tag) => format!(" at region `{}`", tag.as_str()),
        None => String::new(),
    }
}
