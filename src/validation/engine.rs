//! Validation Engine
//!
//! Structural checks over parsed form markup.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::parser::{parse_tags, Tag, TagKind};

/// Elements that never take a closing tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Input types that must carry a `required` attribute
const REQUIRED_INPUT_TYPES: &[&str] = &["text", "email", "number"];

/// Which structural check produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    VoidClosingTag,
    LabelAssociation,
    MissingRequired,
    EmailType,
}

/// A diagnostic message for one structural defect
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub check: Check,
    pub message: String,
}

impl Diagnostic {
    fn new(check: Check, message: String) -> Self {
        Self { check, message }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validate form markup structure for accessibility and syntax defects
///
/// Diagnostics come out grouped by check: void closing tags, then label
/// associations (in label order), then missing `required` attributes (in
/// input order), then the email type check.
pub fn validate_structure(markup: &str) -> Vec<Diagnostic> {
    let tags = parse_tags(markup);
    let mut diagnostics = Vec::new();

    check_void_closing_tags(&tags, &mut diagnostics);
    check_label_associations(&tags, &mut diagnostics);
    check_required_inputs(&tags, &mut diagnostics);
    check_email_type(&tags, &mut diagnostics);

    log::debug!(
        "structure check: {} tags, {} diagnostics",
        tags.len(),
        diagnostics.len()
    );

    diagnostics
}

/// Label `for` targets that no input `id` matches, in label order
pub fn orphaned_label_targets(tags: &[Tag]) -> Vec<&str> {
    let input_ids: HashSet<&str> = input_tags(tags)
        .filter_map(|tag| tag.attr_value("id"))
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    label_targets(tags)
        .filter(|target| !input_ids.contains(target) && seen.insert(*target))
        .collect()
}

/// Whether any input carries `type="email"`
pub fn has_email_input(tags: &[Tag]) -> bool {
    input_tags(tags).any(|tag| tag.input_type().as_deref() == Some("email"))
}

/// Start tags of `input` elements, in document order
pub fn input_tags(tags: &[Tag]) -> impl Iterator<Item = &Tag> {
    tags.iter().filter(|tag| tag.is_start("input"))
}

fn label_targets(tags: &[Tag]) -> impl Iterator<Item = &str> {
    tags.iter()
        .filter(|tag| tag.is_start("label"))
        .filter_map(|tag| tag.attr_value("for"))
        .filter(|target| !target.is_empty())
}

fn check_void_closing_tags(tags: &[Tag], diagnostics: &mut Vec<Diagnostic>) {
    let mut seen: HashSet<&str> = HashSet::new();
    let names = tags
        .iter()
        .filter(|tag| tag.kind == TagKind::End && VOID_ELEMENTS.contains(&tag.name.as_str()))
        .map(|tag| tag.name.as_str())
        .filter(|name| seen.insert(*name));

    for name in names {
        diagnostics.push(Diagnostic::new(
            Check::VoidClosingTag,
            format!(
                "Found </{}> closing tags - {} elements are void elements",
                name, name
            ),
        ));
    }
}

fn check_label_associations(tags: &[Tag], diagnostics: &mut Vec<Diagnostic>) {
    for target in orphaned_label_targets(tags) {
        diagnostics.push(Diagnostic::new(
            Check::LabelAssociation,
            format!(
                "Label with for=\"{}\" has no corresponding input with matching id",
                target
            ),
        ));
    }
}

fn check_required_inputs(tags: &[Tag], diagnostics: &mut Vec<Diagnostic>) {
    for tag in input_tags(tags) {
        let Some(input_type) = tag.input_type() else {
            continue;
        };

        if REQUIRED_INPUT_TYPES.contains(&input_type.as_str()) && !tag.has_attr("required") {
            diagnostics.push(Diagnostic::new(
                Check::MissingRequired,
                format!("Input with type {} should have required attribute", input_type),
            ));
        }
    }
}

fn check_email_type(tags: &[Tag], diagnostics: &mut Vec<Diagnostic>) {
    if !has_email_input(tags) {
        diagnostics.push(Diagnostic::new(
            Check::EmailType,
            "Email input should have type=\"email\" instead of type=\"text\"".to_string(),
        ));
    }
}
