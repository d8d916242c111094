//! Pull-based tokenizer over a folded buffer.
//!
//! Each pull skips leading whitespace, then classifies the next character
//! and consumes exactly one token:
//!
//! 1. a special term, if one is a prefix of the remaining input (longest wins)
//! 2. a numeric run (`char::is_numeric`)
//! 3. a word: alphabetic start, then any alphanumeric characters
//! 4. otherwise a single character
//!
//! Every step consumes at least one character, so the stream always
//! terminates. There is no error path: every input, including the empty
//! string, yields a well-defined (possibly empty) sequence.

use std::iter::FusedIterator;

use tracing::trace;

use crate::{Cursor, FoldedSource, Span, SpecialTerms};

/// A forward-only source of tokens.
///
/// `next_token` yields `None` once the input is exhausted and keeps
/// returning `None` afterwards.
pub trait TokenStream {
    /// Produce the next token, or `None` at end of input.
    fn next_token(&mut self) -> Option<String>;

    /// Drain the stream into an ordered collection.
    fn into_tokens(mut self) -> Vec<String>
    where
        Self: Sized,
    {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

/// How a token was recognized. Only used to pick how much to consume;
/// not part of the produced token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenClass {
    Special,
    Number,
    Word,
    Symbol,
}

/// Lazy tokenizer over one input string.
///
/// Owns a folded copy of the input and a byte offset into it. Not
/// resettable: once drained, it only yields `None`.
///
/// Each instance carries a `tokenizer` debug span, entered for every scan
/// step, so per-token trace events can be attributed to their tokenizer.
#[derive(Debug)]
pub struct Tokenizer {
    source: FoldedSource,
    pos: usize,
    special_terms: Option<SpecialTerms>,
    span: tracing::Span,
}

impl Tokenizer {
    /// Create a tokenizer over `content`, folding it to lowercase.
    pub fn new(content: &str, special_terms: Option<SpecialTerms>) -> Self {
        let span = tracing::debug_span!(
            "tokenizer",
            len = content.len(),
            special_terms = special_terms.as_ref().map_or(0, SpecialTerms::len),
        );
        Self {
            source: FoldedSource::new(content),
            pos: 0,
            special_terms,
            span,
        }
    }

    /// Shorthand for `Tokenizer::new(content, Some(terms.into()))`.
    pub fn with_special_terms(content: &str, terms: impl Into<SpecialTerms>) -> Self {
        Self::new(content, Some(terms.into()))
    }

    /// The folded input buffer.
    pub fn source(&self) -> &FoldedSource {
        &self.source
    }

    /// Byte offset of the cursor in the folded buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The special-term set, if one was supplied.
    pub fn special_terms(&self) -> Option<&SpecialTerms> {
        self.special_terms.as_ref()
    }

    /// Advance past the next token and return its span in the folded buffer.
    ///
    /// Same scanning step as [`next_token`](TokenStream::next_token) without
    /// allocating the token text.
    pub fn next_span(&mut self) -> Option<Span> {
        let _entered = self.span.enter();
        let mut cursor = self.source.cursor_at(self.pos);
        cursor.eat_whitespace();

        if cursor.is_eof() {
            self.pos = cursor.pos();
            trace!(pos = self.pos, "end of input");
            return None;
        }

        let start = cursor.pos();
        let class = scan(&mut cursor, self.special_terms.as_ref());
        let span = Span::new(start, cursor.pos());
        self.pos = span.end;

        trace!(start = span.start, end = span.end, ?class, "token");
        Some(span)
    }

    /// Adapt into an iterator of `(span, token)` pairs.
    pub fn spanned(self) -> Spanned {
        Spanned { tokenizer: self }
    }
}

/// Consume one token starting at a non-whitespace character.
fn scan(cursor: &mut Cursor<'_>, special_terms: Option<&SpecialTerms>) -> TokenClass {
    if let Some(term) = special_terms.and_then(|terms| terms.longest_prefix_of(cursor.rest())) {
        cursor.advance_n(term.len());
        return TokenClass::Special;
    }

    match cursor.current() {
        Some(c) if c.is_numeric() => {
            cursor.eat_while(char::is_numeric);
            TokenClass::Number
        }
        Some(c) if c.is_alphabetic() => {
            cursor.eat_while(char::is_alphanumeric);
            TokenClass::Word
        }
        _ => {
            cursor.take(1);
            TokenClass::Symbol
        }
    }
}

impl TokenStream for Tokenizer {
    fn next_token(&mut self) -> Option<String> {
        let span = self.next_span()?;
        Some(self.source.slice(span).to_owned())
    }
}

impl Iterator for Tokenizer {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every token covers at least one byte.
        (0, Some(self.source.len() - self.pos))
    }
}

impl FusedIterator for Tokenizer {}

/// Iterator of `(span, token)` pairs. Created by [`Tokenizer::spanned`].
#[derive(Debug)]
pub struct Spanned {
    tokenizer: Tokenizer,
}

impl Iterator for Spanned {
    type Item = (Span, String);

    fn next(&mut self) -> Option<(Span, String)> {
        let span = self.tokenizer.next_span()?;
        Some((span, self.tokenizer.source.slice(span).to_owned()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokenizer.size_hint()
    }
}

impl FusedIterator for Spanned {}

/// Tokenize `content` eagerly.
///
/// Equivalent to draining `Tokenizer::new(content, special_terms)`.
pub fn tokenize(content: &str, special_terms: Option<SpecialTerms>) -> Vec<String> {
    Tokenizer::new(content, special_terms).into_tokens()
}
