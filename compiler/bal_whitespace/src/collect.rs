//! Trivia collection: the lossless-recovery primitive.
//!
//! Starting next to an anchor token and walking away from it, gather every
//! contiguous trivia token up to the first significant token or the stream
//! edge. The texts are joined in stream order with nothing added or
//! removed, so splicing the result back between the two significant tokens
//! reproduces the original source.

use bal_ir::{Token, TokenIdx, TokenStream};
use tracing::trace;

use crate::{is_trivia, TriviaError};

/// Which side of the anchor token to collect from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    Left,
    Right,
}

/// The contiguous trivia tokens adjacent to `idx` on one side, in stream
/// order.
///
/// The slice is empty when a significant token (or the stream edge)
/// immediately borders `idx`.
pub fn trivia_run(
    stream: &TokenStream,
    idx: TokenIdx,
    direction: Direction,
) -> Result<&[Token], TriviaError> {
    let run = match direction {
        Direction::Right => stream.hidden_to_right(idx),
        Direction::Left => stream.hidden_to_left(idx),
    };
    run.ok_or(TriviaError::TokenOutOfBounds {
        index: idx,
        len: stream.len(),
    })
}

/// Concatenated trivia text adjacent to `idx` on one side.
///
/// Returns `""` when there is no adjacent trivia.
pub fn collect(
    stream: &TokenStream,
    idx: TokenIdx,
    direction: Direction,
) -> Result<String, TriviaError> {
    let run = trivia_run(stream, idx, direction)?;
    let text: String = run.iter().map(|token| token.text.as_str()).collect();
    trace!(anchor = %idx, ?direction, tokens = run.len(), text = ?text, "collected trivia");
    Ok(text)
}

/// Whitespace and comments before the first significant token of the file.
///
/// This has no enclosing node, so it is not part of any descriptor.
pub fn file_start_whitespace(stream: &TokenStream) -> Result<String, TriviaError> {
    let first = stream
        .iter()
        .find(|token| !is_trivia(token))
        .ok_or(TriviaError::NoSignificantTokens)?;
    collect(stream, first.index, Direction::Left)
}
