//! Token types handed over by the external lexer.
//!
//! A token is either significant (part of the grammar) or trivia (whitespace
//! and comments the lexer routed to a side channel). Trivia tokens stay in the
//! stream so the original text can be reconstructed exactly.

mod index;
mod stream;

pub use index::TokenIdx;
pub use stream::{TokenStream, TokenStreamBuilder};

use std::fmt;

use super::Span;

/// The lexer channel a token was emitted on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// Participates in grammar structure.
    Significant,
    /// Whitespace or comment carried outside the significant sequence.
    Trivia,
}

impl Channel {
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Channel::Trivia)
    }

    #[inline]
    pub const fn is_significant(self) -> bool {
        matches!(self, Channel::Significant)
    }
}

/// A token with its literal text, stream position, and channel.
///
/// Tokens are created once by `TokenStreamBuilder` and never mutated.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Exact source text, unnormalized.
    pub text: String,
    /// Dense zero-based position in the stream.
    pub index: TokenIdx,
    pub channel: Channel,
    /// Byte range of `text` in the reconstructed source.
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(text: impl Into<String>, index: TokenIdx, channel: Channel, span: Span) -> Self {
        Token {
            text: text.into(),
            index,
            channel,
            span,
        }
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.channel.is_trivia()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} @ {} ({:?})",
            self.index, self.text, self.span, self.channel
        )
    }
}
