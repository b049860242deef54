//! Tokenizer implementations.
//!
//! Tokenizers split query text into the atomic tokens that a
//! [`SynonymSpace`](crate::synonym::SynonymSpace) expands.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//! - [`whole::WholeTokenizer`] - Treats entire text as single token
//!
//! # Examples
//!
//! ```
//! use synspace::analysis::tokenizer::Tokenizer;
//! use synspace::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let terms = tokenizer.tokenize_terms("apple phone").unwrap();
//! assert_eq!(terms, vec!["apple", "phone"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// Requires `Send + Sync` so a tokenizer can be shared by a matcher used
/// from several threads.
///
/// # Examples
///
/// ```
/// use synspace::analysis::token::{Token, TokenStream};
/// use synspace::analysis::tokenizer::Tokenizer;
/// use synspace::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
///
/// let terms = CommaTokenizer.tokenize_terms("apple, phone").unwrap();
/// assert_eq!(terms, vec!["apple", "phone"]);
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Tokenize and keep only the token texts, in order.
    fn tokenize_terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.tokenize(text)?.map(|token| token.text).collect())
    }
}

pub mod unicode_word;
pub mod whitespace;
pub mod whole;
