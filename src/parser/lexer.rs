//! Markup Lexer
//!
//! Fast, simple extraction of tag tokens from markup text.
//! Text between tags is skipped; nothing here ever fails.

/// Token types in markup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Opening tag like `<input type="text">`
    StartTag,
    /// Closing tag like `</label>`
    EndTag,
    /// Comment, doctype or processing instruction
    Comment,
}

/// A token with its raw text and byte span
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize, // byte offset
    pub end: usize,   // byte offset (exclusive)
}

/// Tokenize a whole markup document into tag tokens
///
/// A `<` that does not open a tag (e.g. `a < b`) is treated as text.
/// Unterminated tags run to the end of the input.
pub fn tokenize(markup: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = markup.char_indices().peekable();

    while let Some((start_idx, ch)) = chars.next() {
        if ch != '<' {
            continue;
        }

        let rest = &markup[start_idx..];
        let (kind, end_idx) = if rest.starts_with("<!--") {
            let end_idx = rest[4..]
                .find("-->")
                .map(|idx| start_idx + 4 + idx + 3)
                .unwrap_or(markup.len());
            (TokenKind::Comment, end_idx)
        } else {
            match chars.peek() {
                Some(&(_, '/')) => {
                    let opens_name = rest[2..]
                        .chars()
                        .next()
                        .is_some_and(|c| c.is_ascii_alphabetic());
                    if !opens_name {
                        continue;
                    }
                    (TokenKind::EndTag, tag_end(markup, start_idx))
                }
                Some(&(_, '!')) | Some(&(_, '?')) => {
                    let end_idx = rest
                        .find('>')
                        .map(|idx| start_idx + idx + 1)
                        .unwrap_or(markup.len());
                    (TokenKind::Comment, end_idx)
                }
                Some(&(_, c)) if c.is_ascii_alphabetic() => {
                    (TokenKind::StartTag, tag_end(markup, start_idx))
                }
                _ => continue,
            }
        };

        tokens.push(Token {
            kind,
            text: markup[start_idx..end_idx].to_string(),
            start: start_idx,
            end: end_idx,
        });

        // Resume scanning after the token
        while let Some(&(idx, _)) = chars.peek() {
            if idx >= end_idx {
                break;
            }
            chars.next();
        }
    }

    tokens
}

/// Find the byte offset just past the `>` closing the tag opened at `start`
///
/// A quote only opens a quoted value when it directly follows `=`
/// (whitespace allowed), so a `>` inside `value="a>b"` does not end the tag.
fn tag_end(markup: &str, start: usize) -> usize {
    let bytes = markup.as_bytes();
    let mut quote: Option<u8> = None;
    let mut after_equals = false;

    for (idx, &byte) in bytes.iter().enumerate().skip(start + 1) {
        if let Some(q) = quote {
            if byte == q {
                quote = None;
            }
            continue;
        }

        match byte {
            b'>' => return idx + 1,
            b'=' => after_equals = true,
            b'"' | b'\'' if after_equals => {
                quote = Some(byte);
                after_equals = false;
            }
            b' ' | b'\t' | b'\r' | b'\n' => {}
            _ => after_equals = false,
        }
    }

    markup.len()
}
