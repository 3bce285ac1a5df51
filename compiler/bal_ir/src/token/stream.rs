//! Dense token stream and its builder.

use std::fmt;

use super::{Channel, Span, Token, TokenIdx};

/// A dense, zero-based, randomly-indexable sequence of tokens.
///
/// Holds every token the lexer produced, trivia included, plus the source
/// text obtained by concatenating all token texts in order. Built once with
/// [`TokenStreamBuilder`]; immutable afterward.
///
/// Invariant: `tokens[i].index.index() == i` and
/// `source[tokens[i].span.to_range()] == tokens[i].text` for all `i`.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct TokenStream {
    tokens: Vec<Token>,
    source: String,
}

impl TokenStream {
    /// Start building a stream.
    #[inline]
    pub fn builder() -> TokenStreamBuilder {
        TokenStreamBuilder::new()
    }

    /// Get the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get the token at `idx`, or `None` when out of range (or `NONE`).
    #[inline]
    pub fn get(&self, idx: TokenIdx) -> Option<&Token> {
        self.tokens.get(idx.index())
    }

    /// Check whether `idx` addresses a token in this stream.
    #[inline]
    pub fn contains(&self, idx: TokenIdx) -> bool {
        idx.index() < self.tokens.len()
    }

    /// Get a slice of all tokens.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over tokens in stream order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The contiguous trivia tokens immediately after `idx`, in stream order.
    ///
    /// Returns `None` if `idx` is out of range, and an empty slice when a
    /// significant token or the end of the stream follows.
    pub fn hidden_to_right(&self, idx: TokenIdx) -> Option<&[Token]> {
        if !self.contains(idx) {
            return None;
        }
        let start = idx.index() + 1;
        let len = self.tokens[start..]
            .iter()
            .take_while(|token| token.is_trivia())
            .count();
        Some(&self.tokens[start..start + len])
    }

    /// The contiguous trivia tokens immediately before `idx`, in stream order.
    pub fn hidden_to_left(&self, idx: TokenIdx) -> Option<&[Token]> {
        if !self.contains(idx) {
            return None;
        }
        let end = idx.index();
        let len = self.tokens[..end]
            .iter()
            .rev()
            .take_while(|token| token.is_trivia())
            .count();
        Some(&self.tokens[end - len..end])
    }

    /// The reconstructed source text.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Source text strictly between the end of `left` and the start of `right`.
    ///
    /// Returns `None` if either index is out of range or `left` does not
    /// precede `right`.
    pub fn gap_between(&self, left: TokenIdx, right: TokenIdx) -> Option<&str> {
        let (left, right) = (self.get(left)?, self.get(right)?);
        if left.index >= right.index {
            return None;
        }
        self.source
            .get(left.span.end as usize..right.span.start as usize)
    }
}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenStream({} tokens)", self.tokens.len())
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Incremental builder for a [`TokenStream`].
///
/// Each push assigns the next dense index and the span the text occupies in
/// the accumulated source.
#[derive(Default)]
pub struct TokenStreamBuilder {
    tokens: Vec<Token>,
    source: String,
}

impl TokenStreamBuilder {
    #[inline]
    pub fn new() -> Self {
        TokenStreamBuilder {
            tokens: Vec::new(),
            source: String::new(),
        }
    }

    /// Create a builder with pre-allocated token capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenStreamBuilder {
            tokens: Vec::with_capacity(capacity),
            source: String::new(),
        }
    }

    /// Append a token on `channel` and return its index.
    ///
    /// # Panics
    /// Panics if the stream grows past `u32::MAX` tokens or source bytes.
    pub fn push(&mut self, text: impl Into<String>, channel: Channel) -> TokenIdx {
        let text = text.into();
        let raw = u32::try_from(self.tokens.len())
            .unwrap_or_else(|_| panic!("token stream exceeds u32::MAX tokens"));
        let index = TokenIdx::from_raw(raw);
        let start = self.source.len();
        self.source.push_str(&text);
        let span = Span::from_range(start..self.source.len());
        self.tokens.push(Token::new(text, index, channel, span));
        index
    }

    /// Append a significant token.
    #[inline]
    pub fn significant(&mut self, text: impl Into<String>) -> TokenIdx {
        self.push(text, Channel::Significant)
    }

    /// Append a trivia (whitespace or comment) token.
    #[inline]
    pub fn trivia(&mut self, text: impl Into<String>) -> TokenIdx {
        self.push(text, Channel::Trivia)
    }

    /// Number of tokens pushed so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn finish(self) -> TokenStream {
        TokenStream {
            tokens: self.tokens,
            source: self.source,
        }
    }
}
