//! Bal IR - boundary types for whitespace region extraction
//!
//! This crate holds the data an external lexer and parser hand over:
//! - Spans for source locations
//! - Tokens, their channel, and the dense `TokenStream`
//! - Construct kinds, named child fields, and the `SyntaxTree` arena
//!
//! Nothing here parses source text. A producer adapter fills a
//! `TokenStreamBuilder` and a `SyntaxTree` once; consumers only borrow them.
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: nodes refer to each other by `NodeId(u32)` and
//!   to tokens by `TokenIdx(u32)`, never by pointer
//! - **Immutable after build**: streams and trees are `Send + Sync` and never
//!   mutated once handed out

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod syntax;
mod token;

pub use span::{Span, SpanError};
pub use syntax::{Child, ChildField, ConstructKind, NodeData, NodeId, SyntaxTree};
pub use token::{Channel, Token, TokenIdx, TokenStream, TokenStreamBuilder};
