//! Tag records for markup
//!
//! Minimal structured view of tag tokens: names and attributes only.
//! No tree building and no validation logic.

use crate::parser::lexer::{Token, TokenKind};

/// Whether a tag opens or closes an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TagKind {
    Start,
    End,
}

/// An attribute on a start tag
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Lowercased attribute name
    pub name: String,
    /// Attribute value, `None` for boolean attributes like `required`
    pub value: Option<String>,
}

/// A start or end tag like `<input type="text">` or `</label>`
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub kind: TagKind,
    /// Lowercased element name
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub start: usize,
    pub end: usize,
}

impl Tag {
    /// Look up an attribute by (case-insensitive) name
    pub fn attr(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
    }

    /// Value of an attribute, if present and valued
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attr(name)?.value.as_deref()
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn is_start(&self, name: &str) -> bool {
        self.kind == TagKind::Start && self.name == name
    }

    pub fn is_end(&self, name: &str) -> bool {
        self.kind == TagKind::End && self.name == name
    }

    /// `type` of an input tag, lowercased
    pub fn input_type(&self) -> Option<String> {
        self.attr_value("type").map(|t| t.to_ascii_lowercase())
    }
}

/// Convert tag tokens into tag records, dropping comments
pub fn tokens_to_tags(tokens: Vec<Token>) -> Vec<Tag> {
    tokens
        .into_iter()
        .filter_map(|token| match token.kind {
            TokenKind::StartTag => Some(parse_tag(&token, TagKind::Start)),
            TokenKind::EndTag => Some(parse_tag(&token, TagKind::End)),
            TokenKind::Comment => None,
        })
        .collect()
}

/// Parse the text of a tag token into a tag record
fn parse_tag(token: &Token, kind: TagKind) -> Tag {
    let inner = token
        .text
        .trim_start_matches('<')
        .trim_start_matches('/');
    let inner = inner.strip_suffix('>').unwrap_or(inner);

    let name_end = inner
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(inner.len());
    let name = inner[..name_end].to_ascii_lowercase();
    let rest = &inner[name_end..];

    let attributes = match kind {
        TagKind::Start => parse_attributes(rest),
        TagKind::End => Vec::new(),
    };

    Tag {
        kind,
        name,
        attributes,
        start: token.start,
        end: token.end,
    }
}

/// Parse attributes like ` type="text" required id=x`
fn parse_attributes(text: &str) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(start_idx, ch)) = chars.peek() {
        if ch.is_whitespace() || ch == '/' {
            chars.next();
            continue;
        }

        // Attribute name
        let mut name_end = start_idx;
        while let Some(&(idx, c)) = chars.peek() {
            if c.is_whitespace() || c == '=' || c == '/' {
                break;
            }
            name_end = idx + c.len_utf8();
            chars.next();
        }
        let name = text[start_idx..name_end].to_ascii_lowercase();

        while chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}

        let value = if chars.next_if(|&(_, c)| c == '=').is_some() {
            while chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
            Some(parse_value(text, &mut chars))
        } else {
            None
        };

        // Lone `=` with no name
        if name.is_empty() {
            continue;
        }

        attributes.push(Attribute { name, value });
    }

    attributes
}

/// Parse a quoted or unquoted attribute value
fn parse_value(
    text: &str,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
) -> String {
    match chars.peek() {
        Some(&(idx, quote)) if quote == '"' || quote == '\'' => {
            chars.next();
            let value_start = idx + 1;
            let mut value_end = text.len();
            for (i, c) in chars.by_ref() {
                if c == quote {
                    value_end = i;
                    break;
                }
            }
            text[value_start..value_end].to_string()
        }
        Some(&(idx, _)) => {
            let mut value_end = idx;
            while let Some(&(i, c)) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                value_end = i + c.len_utf8();
                chars.next();
            }
            text[idx..value_end].to_string()
        }
        None => String::new(),
    }
}
