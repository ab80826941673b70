use donation_form_lint::validation::{Check, REQUIREMENT_RULES};
use donation_form_lint::{
    fix, generate_reference, validate_all_requirements, validate_structure, SAMPLE_FORM,
};

/// Defective form with two labels pointing at inputs that have no id
const PARTIALLY_LABELLED_FORM: &str = r#"<form>
    <label for="fullName">Full Name:</label>
    <input type="text" name="name" required></input>

    Email Address:
    <input type="text" name="email" required>

    <label for="donationAmount">Donation Amount ($):</label>
    <input type="number" name="amount" required></input>

    <input type="submit" value="Send"></input>
</form>"#;

fn messages(markup: &str) -> Vec<String> {
    validate_structure(markup)
        .into_iter()
        .map(|d| d.message)
        .collect()
}

#[test]
fn test_defective_form_diagnostics() {
    let messages = messages(PARTIALLY_LABELLED_FORM);

    assert_eq!(
        messages,
        vec![
            "Found </input> closing tags - input elements are void elements",
            "Label with for=\"fullName\" has no corresponding input with matching id",
            "Label with for=\"donationAmount\" has no corresponding input with matching id",
            "Email input should have type=\"email\" instead of type=\"text\"",
        ]
    );
}

#[test]
fn test_sample_form_diagnostics() {
    let diagnostics = validate_structure(SAMPLE_FORM);
    let checks: Vec<Check> = diagnostics.iter().map(|d| d.check).collect();

    assert_eq!(
        checks,
        vec![
            Check::VoidClosingTag,
            Check::MissingRequired,
            Check::MissingRequired,
            Check::MissingRequired,
            Check::EmailType,
        ]
    );
    assert_eq!(
        diagnostics[1].message,
        "Input with type text should have required attribute"
    );
    assert_eq!(
        diagnostics[3].message,
        "Input with type number should have required attribute"
    );
}

#[test]
fn test_reference_form_is_clean() {
    assert!(validate_structure(generate_reference()).is_empty());
}

#[test]
fn test_reference_form_meets_all_requirements() {
    let report = validate_all_requirements(generate_reference());

    let failed: Vec<_> = report.failed().map(|r| r.name).collect();
    assert!(failed.is_empty(), "failed rules: {:?}", failed);
    assert!(report.all_passed());
}

#[test]
fn test_sample_form_requirements() {
    let report = validate_all_requirements(SAMPLE_FORM);

    assert_eq!(report.get("no_input_closing_tags"), Some(false));
    assert_eq!(report.get("five_input_elements"), Some(true));
    assert_eq!(report.get("four_label_elements"), Some(false));
    assert_eq!(report.get("email_input_type"), Some(false));
    assert_eq!(report.get("label_input_association"), Some(true));
    assert_eq!(report.get("checkbox_not_required"), Some(true));
    assert_eq!(report.get("submit_not_required"), Some(true));
}

#[test]
fn test_zero_inputs() {
    let report = validate_all_requirements("<form><p>No fields yet</p></form>");
    assert_eq!(report.get("five_input_elements"), Some(false));
}

#[test]
fn test_rule_names_stable_across_inputs() {
    let expected: Vec<&str> = REQUIREMENT_RULES.iter().map(|r| r.name).collect();

    for markup in [
        "",
        SAMPLE_FORM,
        generate_reference(),
        PARTIALLY_LABELLED_FORM,
        "<<<>>> not markup at all \"'",
    ] {
        let names: Vec<&str> = validate_all_requirements(markup).names().collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn test_fixed_sample_is_closer_to_reference() {
    let fixed = fix(SAMPLE_FORM);
    let report = validate_all_requirements(&fixed);

    assert_eq!(report.get("no_input_closing_tags"), Some(true));
    assert_eq!(report.get("first_label_text"), Some(true));
    assert_eq!(report.get("first_input_required"), Some(true));
    assert_eq!(report.get("second_input_required"), Some(true));
    assert_eq!(report.get("third_input_required"), Some(true));
    assert_eq!(report.get("fourth_label_text"), Some(true));
    assert_eq!(report.get("email_input_type"), Some(true));
    // The bare "Email Address:" caption is not a known defect shape
    assert_eq!(report.get("second_label_text"), Some(false));
    assert_eq!(report.get("four_label_elements"), Some(false));

    assert!(validate_structure(&fixed).is_empty());
}
