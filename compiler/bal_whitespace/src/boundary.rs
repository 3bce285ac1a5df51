//! Boundary resolution: locating the anchor token of a rule.
//!
//! Grammars expose boundaries inconsistently: some through the node itself,
//! some through named children, and some only as an unnamed keyword among
//! the children. [`Selector`] names each strategy so rules can declare which
//! one they need.

use std::fmt;

use bal_ir::{Child, ChildField, NodeData, NodeId, SyntaxTree, TokenIdx, TokenStream};
use tracing::trace;

use crate::{Boundary, TriviaError};

/// A strategy for locating the token that anchors a region.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Selector {
    /// The node's first token. Always present on a well-formed node.
    NodeStart,
    /// The node's last token. Always present on a well-formed node.
    NodeStop,
    /// First token of a named child; absent when the child is.
    ChildStart(ChildField),
    /// Last token of a named child; absent when the child is.
    ChildStop(ChildField),
    /// First immediate token child whose text equals the literal.
    TokenWithText(&'static str),
    /// First immediate token child of a named child whose text equals the
    /// literal.
    ChildTokenWithText(ChildField, &'static str),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::NodeStart => f.write_str("node start"),
            Selector::NodeStop => f.write_str("node stop"),
            Selector::ChildStart(field) => write!(f, "start of the {field}"),
            Selector::ChildStop(field) => write!(f, "end of the {field}"),
            Selector::TokenWithText(text) => write!(f, "`{text}` token"),
            Selector::ChildTokenWithText(field, text) => write!(f, "`{text}` token in the {field}"),
        }
    }
}

/// Resolve `selector` against `node`.
///
/// `Ok(None)` is expected absence (an optional child or keyword that this
/// instance does not have). Errors are producer contract violations.
pub fn resolve(
    stream: &TokenStream,
    tree: &SyntaxTree,
    node: NodeId,
    selector: Selector,
) -> Result<Option<TokenIdx>, TriviaError> {
    let data = tree.get(node).ok_or(TriviaError::UnknownNode { node })?;
    let found = match selector {
        Selector::NodeStart => Some(required(node, data.start(), Boundary::Start)?),
        Selector::NodeStop => Some(required(node, data.stop(), Boundary::Stop)?),
        Selector::ChildStart(field) => data
            .field(field)
            .and_then(|child| tree.child_bounds(child))
            .map(|(start, _)| start),
        Selector::ChildStop(field) => data
            .field(field)
            .and_then(|child| tree.child_bounds(child))
            .map(|(_, stop)| stop),
        Selector::TokenWithText(text) => first_token_with_text(stream, data, text)?,
        Selector::ChildTokenWithText(field, text) => match data.field(field) {
            Some(Child::Node(id)) => match tree.get(id) {
                Some(child) => first_token_with_text(stream, child, text)?,
                None => None,
            },
            Some(Child::Token(_)) | None => None,
        },
    };

    if let Some(idx) = found {
        if !stream.contains(idx) {
            return Err(TriviaError::TokenOutOfBounds {
                index: idx,
                len: stream.len(),
            });
        }
    }
    trace!(%node, ?selector, anchor = ?found, "resolved boundary");
    Ok(found)
}

fn required(node: NodeId, idx: TokenIdx, boundary: Boundary) -> Result<TokenIdx, TriviaError> {
    if idx.is_valid() {
        Ok(idx)
    } else {
        Err(TriviaError::MissingBoundary { node, boundary })
    }
}

/// Scan immediate children in order for a token with exactly `text`.
fn first_token_with_text(
    stream: &TokenStream,
    node: &NodeData,
    text: &str,
) -> Result<Option<TokenIdx>, TriviaError> {
    for child in node.children() {
        let Child::Token(idx) = *child else {
            continue;
        };
        let token = stream.get(idx).ok_or(TriviaError::TokenOutOfBounds {
            index: idx,
            len: stream.len(),
        })?;
        if token.text == text {
            return Ok(Some(idx));
        }
    }
    Ok(None)
}
