//! Validation Engine
//!
//! Structural checks and the donation form requirements checklist,
//! separated from parsing and reporting concerns.

pub mod engine;
pub mod requirements;

pub use engine::{validate_structure, Check, Diagnostic, VOID_ELEMENTS};
pub use requirements::{
    validate_all_requirements, RequirementReport, RequirementRule, RuleResult, REQUIREMENT_RULES,
};
