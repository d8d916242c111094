//! Case-folding text tokenizer.
//!
//! Splits a string into words, numbers, and single-character symbols, with
//! optional caller-supplied special terms that are always emitted whole
//! (useful for things like `c#` or `.net` that the normal rules would split).
//!
//! The input is lowercased once at construction. Whitespace separates tokens
//! and is never part of one (unless a special term contains it).
//!
//! # Layers
//!
//! - [`FoldedSource`] owns the lowercased input.
//! - [`Cursor`] is a cheap, copyable read position over that buffer.
//! - [`SpecialTerms`] is the immutable, longest-match-first term set.
//! - [`Tokenizer`] drives the cursor and produces one token per pull.
//!
//! # Example
//!
//! ```
//! use lexi::{tokenize, SpecialTerms};
//!
//! assert_eq!(tokenize("Hello, World!", None), ["hello", ",", "world", "!"]);
//!
//! let terms = SpecialTerms::new(["world!"]);
//! assert_eq!(tokenize("Hello, World!", Some(terms)), ["hello", ",", "world!"]);
//! ```

mod cursor;
mod source;
mod span;
mod special_terms;
mod tokenizer;

pub use cursor::Cursor;
pub use source::{fold_case, FoldedSource};
pub use span::Span;
pub use special_terms::SpecialTerms;
pub use tokenizer::{tokenize, Spanned, TokenStream, Tokenizer};
