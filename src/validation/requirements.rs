//! Donation form requirements checklist
//!
//! A fixed list of named rules describing the expected donation form. Each
//! rule is an independent predicate; the report always carries every rule
//! name in the same order, whatever the input.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::parser::{parse_tags, Tag};
use crate::validation::engine::{has_email_input, input_tags, orphaned_label_targets};

/// Markup plus its parsed tags, shared by all rule predicates
#[derive(Debug)]
pub struct FormContext<'a> {
    pub markup: &'a str,
    pub tags: Vec<Tag>,
}

impl<'a> FormContext<'a> {
    pub fn new(markup: &'a str) -> Self {
        Self {
            markup,
            tags: parse_tags(markup),
        }
    }

    fn count_start_tags(&self, name: &str) -> usize {
        self.tags.iter().filter(|tag| tag.is_start(name)).count()
    }

    fn has_required_input_of_type(&self, input_type: &str) -> bool {
        input_tags(&self.tags).any(|tag| {
            tag.input_type().as_deref() == Some(input_type) && tag.has_attr("required")
        })
    }
}

/// A named requirement rule
#[derive(Debug, Clone, Copy)]
pub struct RequirementRule {
    pub name: &'static str,
    pub check: fn(&FormContext<'_>) -> bool,
}

/// All requirement rules, in report order
pub const REQUIREMENT_RULES: &[RequirementRule] = &[
    RequirementRule {
        name: "no_input_closing_tags",
        check: |ctx| !ctx.tags.iter().any(|tag| tag.is_end("input")),
    },
    RequirementRule {
        name: "five_input_elements",
        check: |ctx| ctx.count_start_tags("input") == 5,
    },
    RequirementRule {
        name: "four_label_elements",
        check: |ctx| ctx.count_start_tags("label") == 4,
    },
    RequirementRule {
        name: "first_label_text",
        check: |ctx| {
            ctx.markup
                .contains(r#"<label for="fullName">Full Name:</label>"#)
        },
    },
    RequirementRule {
        name: "first_input_required",
        check: |ctx| {
            ctx.markup
                .contains(r#"<input type="text" id="fullName" name="name" required>"#)
        },
    },
    RequirementRule {
        name: "second_label_text",
        check: |ctx| {
            ctx.markup
                .contains(r#"<label for="emailAddress">Email Address:</label>"#)
        },
    },
    RequirementRule {
        name: "second_input_required",
        check: |ctx| {
            ctx.markup
                .contains(r#"<input type="email" id="emailAddress" name="email" required>"#)
        },
    },
    RequirementRule {
        name: "third_label_text",
        check: |ctx| {
            ctx.markup
                .contains(r#"<label for="donationAmount">Donation Amount ($):</label>"#)
        },
    },
    RequirementRule {
        name: "third_input_required",
        check: |ctx| {
            ctx.markup.contains(
                r#"<input type="number" id="donationAmount" name="amount" required>"#,
            )
        },
    },
    RequirementRule {
        name: "fourth_label_text",
        check: |ctx| {
            ctx.markup
                .contains(r#"<label for="subscribe">Subscribe</label>"#)
        },
    },
    RequirementRule {
        name: "label_input_association",
        check: |ctx| orphaned_label_targets(&ctx.tags).is_empty(),
    },
    RequirementRule {
        name: "email_input_type",
        check: |ctx| has_email_input(&ctx.tags),
    },
    RequirementRule {
        name: "checkbox_not_required",
        check: |ctx| !ctx.has_required_input_of_type("checkbox"),
    },
    RequirementRule {
        name: "submit_not_required",
        check: |ctx| !ctx.has_required_input_of_type("submit"),
    },
];

/// Outcome of one requirement rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleResult {
    pub name: &'static str,
    pub passed: bool,
}

/// Ordered outcomes of every requirement rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementReport {
    pub results: Vec<RuleResult>,
}

impl RequirementReport {
    /// Outcome of a rule by name, `None` for unknown names
    pub fn get(&self, name: &str) -> Option<bool> {
        self.results
            .iter()
            .find(|result| result.name == name)
            .map(|result| result.passed)
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|result| result.passed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|result| !result.passed)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.results.iter().map(|result| result.name)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

// Serialized as a JSON object keyed by rule name, in rule order
impl Serialize for RequirementReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.results.len()))?;
        for result in &self.results {
            map.serialize_entry(result.name, &result.passed)?;
        }
        map.end()
    }
}

/// Evaluate every requirement rule against the markup
pub fn validate_all_requirements(markup: &str) -> RequirementReport {
    let ctx = FormContext::new(markup);

    let results: Vec<RuleResult> = REQUIREMENT_RULES
        .iter()
        .map(|rule| RuleResult {
            name: rule.name,
            passed: (rule.check)(&ctx),
        })
        .collect();

    log::debug!(
        "requirements: {}/{} rules passed",
        results.iter().filter(|r| r.passed).count(),
        results.len()
    );

    RequirementReport { results }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<_> = REQUIREMENT_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), REQUIREMENT_RULES.len());
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn test_empty_markup() {
        let report = validate_all_requirements("");

        assert_eq!(report.len(), 14);
        assert_eq!(report.get("five_input_elements"), Some(false));
        assert_eq!(report.get("four_label_elements"), Some(false));
        assert_eq!(report.get("no_input_closing_tags"), Some(true));
        assert_eq!(report.get("label_input_association"), Some(true));
        assert_eq!(report.get("checkbox_not_required"), Some(true));
        assert_eq!(report.get("email_input_type"), Some(false));
        assert!(!report.all_passed());
    }

    #[test]
    fn test_empty_label_target_keeps_association() {
        let report = validate_all_requirements(r#"<label for="">Hi</label><input type="email">"#);
        assert_eq!(report.get("label_input_association"), Some(true));
    }

    #[test]
    fn test_unknown_rule() {
        let report = validate_all_requirements("");
        assert_eq!(report.get("sixth_input"), None);
    }

    #[test]
    fn test_checkbox_and_submit_required() {
        let markup = r#"<input type="checkbox" id="subscribe" required>
<input type="submit" value="Send" required>"#;
        let report = validate_all_requirements(markup);

        assert_eq!(report.get("checkbox_not_required"), Some(false));
        assert_eq!(report.get("submit_not_required"), Some(false));
    }

    #[test]
    fn test_counts() {
        let markup = "<label></label><label><label><label><input><input><input><input><input>";
        let report = validate_all_requirements(markup);

        assert_eq!(report.get("five_input_elements"), Some(true));
        assert_eq!(report.get("four_label_elements"), Some(true));
    }

    #[test]
    fn test_failed_lists_only_failures() {
        let report = validate_all_requirements(r#"<input type="email"></input>"#);
        let failed: Vec<_> = report.failed().map(|r| r.name).collect();

        assert!(failed.contains(&"no_input_closing_tags"));
        assert!(!failed.contains(&"email_input_type"));
    }

    #[test]
    fn test_serialize_as_object() {
        let report = validate_all_requirements("");
        let json = serde_json::to_value(&report).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 14);
        assert_eq!(object["five_input_elements"], serde_json::Value::Bool(false));
    }
}
