//! Known-defect rewrites for donation form markup.
//!
//! Each rewrite matches one exact defect shape. Markup that deviates from
//! that shape (attribute order, extra attributes) is left as it is.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::Serialize;

use crate::validation::VOID_ELEMENTS;

/// A single pattern-to-replacement rewrite
struct Rewrite {
    name: &'static str,
    pattern: &'static LazyLock<Regex>,
    replacement: &'static str,
}

// Matches the end tags the lexer reads as void elements: `</` directly
// followed by the name, then `>` or whitespace/`/` and anything up to `>`.
static VOID_CLOSING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)</(?:{})(?:[\s/][^>]*)?>", VOID_ELEMENTS.join("|"));
    Regex::new(&pattern).expect("void closing tag pattern")
});

static TEXT_EMAIL_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<input type="text" name="email">"#).expect("text email input pattern")
});

static FULL_NAME_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)Full Name:\s*<input type="text" name="name">"#)
        .expect("full name field pattern")
});

static DONATION_AMOUNT_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)Donation Amount \(\$\):\s*<input type="number" name="amount">"#)
        .expect("donation amount field pattern")
});

static NEWSLETTER_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<input type="checkbox" name="newsletter">\s*Subscribe"#)
        .expect("newsletter field pattern")
});

/// Rewrites in application order
static REWRITES: &[Rewrite] = &[
    Rewrite {
        name: "strip_void_closing_tags",
        pattern: &VOID_CLOSING_TAG,
        replacement: "",
    },
    Rewrite {
        name: "email_input_type",
        pattern: &TEXT_EMAIL_INPUT,
        replacement: r#"<input type="email" id="emailAddress" name="email" required>"#,
    },
    Rewrite {
        name: "full_name_label",
        pattern: &FULL_NAME_FIELD,
        replacement: "<label for=\"fullName\">Full Name:</label>\n    <input type=\"text\" id=\"fullName\" name=\"name\" required>",
    },
    Rewrite {
        name: "donation_amount_label",
        pattern: &DONATION_AMOUNT_FIELD,
        replacement: "<label for=\"donationAmount\">Donation Amount ($):</label>\n    <input type=\"number\" id=\"donationAmount\" name=\"amount\" required>",
    },
    Rewrite {
        name: "newsletter_label",
        pattern: &NEWSLETTER_FIELD,
        replacement: "<label for=\"subscribe\">Subscribe</label>\n    <input type=\"checkbox\" id=\"subscribe\" name=\"newsletter\">",
    },
];

/// A rewrite that matched at least once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedFix {
    pub name: &'static str,
    pub replacements: usize,
}

/// Fixed markup plus the rewrites that changed it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixReport {
    pub markup: String,
    pub applied: Vec<AppliedFix>,
}

impl FixReport {
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Apply every known-defect rewrite to the markup
pub fn fix(markup: &str) -> String {
    fix_with_report(markup).markup
}

/// Apply every known-defect rewrite, recording which ones matched
pub fn fix_with_report(markup: &str) -> FixReport {
    let mut fixed = markup.to_string();
    let mut applied = Vec::new();

    for rewrite in REWRITES {
        let pattern: &Regex = rewrite.pattern;
        let replacements = pattern.find_iter(&fixed).count();
        if replacements == 0 {
            continue;
        }

        fixed = pattern
            .replace_all(&fixed, NoExpand(rewrite.replacement))
            .into_owned();
        log::info!("applied {} ({} replacements)", rewrite.name, replacements);

        applied.push(AppliedFix {
            name: rewrite.name,
            replacements,
        });
    }

    FixReport {
        markup: fixed,
        applied,
    }
}
