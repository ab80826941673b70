//! Markup Parser
//!
//! Minimal tag tokenizer for form markup. Not an HTML parser: it only
//! produces flat tag/attribute records, which is all the form checks need.

pub mod ast;
pub mod lexer;

pub use ast::{Attribute, Tag, TagKind};
pub use lexer::{tokenize, Token, TokenKind};

/// Parse markup into tag records
///
/// This is the main entry point for parsing. It tokenizes the markup
/// and converts tag tokens into structured records, in document order.
pub fn parse_tags(markup: &str) -> Vec<Tag> {
    let tokens = lexer::tokenize(markup);
    ast::tokens_to_tags(tokens)
}
