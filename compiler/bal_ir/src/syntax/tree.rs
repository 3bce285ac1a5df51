//! Arena of syntax nodes filled by a producer adapter.

use std::fmt;

use smallvec::SmallVec;

use super::{ChildField, ConstructKind};
use crate::TokenIdx;

/// Typed index of a node in a [`SyntaxTree`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        NodeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// An immediate child of a node: a terminal token or a nested node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Child {
    Token(TokenIdx),
    Node(NodeId),
}

/// One node as the external parser built it.
///
/// `start`/`stop` are the node's first and last token; a producer that could
/// not determine them leaves [`TokenIdx::NONE`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct NodeData {
    construct: Option<ConstructKind>,
    start: TokenIdx,
    stop: TokenIdx,
    children: Vec<Child>,
    fields: SmallVec<[(ChildField, Child); 4]>,
}

impl NodeData {
    /// A node of a construct kind that carries whitespace regions.
    pub fn construct(kind: ConstructKind, start: TokenIdx, stop: TokenIdx) -> Self {
        NodeData {
            construct: Some(kind),
            start,
            stop,
            children: Vec::new(),
            fields: SmallVec::new(),
        }
    }

    /// An inner node (package name, body, signature, …).
    pub fn inner(start: TokenIdx, stop: TokenIdx) -> Self {
        NodeData {
            construct: None,
            start,
            stop,
            children: Vec::new(),
            fields: SmallVec::new(),
        }
    }

    /// Append an immediate token child.
    #[must_use]
    pub fn with_token(mut self, token: TokenIdx) -> Self {
        self.children.push(Child::Token(token));
        self
    }

    /// Append an immediate node child.
    #[must_use]
    pub fn with_node(mut self, node: NodeId) -> Self {
        self.children.push(Child::Node(node));
        self
    }

    /// Register a named child accessor.
    ///
    /// Registering the same field twice replaces the earlier child.
    #[must_use]
    pub fn with_field(mut self, field: ChildField, child: Child) -> Self {
        if let Some(slot) = self.fields.iter_mut().find(|(f, _)| *f == field) {
            slot.1 = child;
        } else {
            self.fields.push((field, child));
        }
        self
    }

    #[inline]
    pub fn construct_kind(&self) -> Option<ConstructKind> {
        self.construct
    }

    #[inline]
    pub fn start(&self) -> TokenIdx {
        self.start
    }

    #[inline]
    pub fn stop(&self) -> TokenIdx {
        self.stop
    }

    /// Immediate children in source order.
    #[inline]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// The named child for `field`, or `None` when this instance lacks it.
    pub fn field(&self, field: ChildField) -> Option<Child> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|&(_, child)| child)
    }
}

/// Arena of nodes addressed by [`NodeId`].
///
/// Children must be allocated before the parents that refer to them.
#[derive(Clone, Default, Debug)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        SyntaxTree { nodes: Vec::new() }
    }

    /// Add a node and return its id.
    ///
    /// # Panics
    /// Panics if the arena grows past `u32::MAX` nodes.
    pub fn alloc(&mut self, node: NodeData) -> NodeId {
        let raw = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("syntax tree exceeds u32::MAX nodes"));
        self.nodes.push(node);
        NodeId(raw)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes with their ids, in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    /// Ids of every node that has a construct kind.
    pub fn construct_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .filter(|(_, node)| node.construct.is_some())
            .map(|(id, _)| id)
    }

    /// First and last token of a child.
    ///
    /// A token child is its own boundary. A node child yields `None` when it
    /// is not in the arena or spans no tokens.
    pub fn child_bounds(&self, child: Child) -> Option<(TokenIdx, TokenIdx)> {
        match child {
            Child::Token(token) => token.is_valid().then_some((token, token)),
            Child::Node(id) => {
                let node = self.get(id)?;
                (node.start.is_valid() && node.stop.is_valid()).then_some((node.start, node.stop))
            }
        }
    }
}

crate::static_assert_size!(NodeId, 4);
