//! Token classification.
//!
//! The lexer already routed every token to a channel; classification only
//! reads that decision. A malformed stream is the producer's problem.

use bal_ir::{Channel, Token};

/// The channel `token` belongs to.
#[inline]
pub fn classify(token: &Token) -> Channel {
    token.channel
}

/// Whether `token` is whitespace or a comment.
#[inline]
pub fn is_trivia(token: &Token) -> bool {
    classify(token).is_trivia()
}
