//! Donation Form Linter
//!
//! A small accessibility linter for donation form markup.
//!
//! This library provides:
//! - A minimal tag tokenizer (no DOM, no tree building)
//! - Structural checks with plain-text diagnostics
//! - A fixed donation form requirements checklist
//! - Rewrites for known defect shapes and a reference form
//!
//! Every operation is a pure function of its input markup.

pub mod config;
pub mod fix;
pub mod parser;
pub mod reference;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use fix::{fix, fix_with_report, FixReport};
pub use parser::{parse_tags, Tag};
pub use reference::{generate_reference, SAMPLE_FORM};
pub use validation::{
    validate_all_requirements, validate_structure, Diagnostic, RequirementReport,
};
