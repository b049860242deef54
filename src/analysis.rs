//! Text analysis module for Synspace.
//!
//! Tokenizers turn query text into the token sequences that synonym
//! expansion consumes.

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenStream, TokenType};
pub use tokenizer::Tokenizer;
