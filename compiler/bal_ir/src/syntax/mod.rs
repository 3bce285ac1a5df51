//! Syntax nodes as the external parser exposes them.
//!
//! The core never walks grammar rules. It only needs, per node: the first and
//! last token, the ordered immediate children, and kind-specific named
//! children. Optional grammar children are represented by an absent field.

mod kind;
mod tree;

pub use kind::{ChildField, ConstructKind};
pub use tree::{Child, NodeData, NodeId, SyntaxTree};
