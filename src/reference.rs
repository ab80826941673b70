//! Bundled donation form documents.

/// Corrected donation form with every label associated and required
/// attributes on the text, email and number inputs.
const REFERENCE_FORM: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Donation Form</title>
</head>
<body>
  <h1>Donation Form</h1>
  <form>
    <label for="fullName">Full Name:</label>
    <input type="text" id="fullName" name="name" required>

    <label for="emailAddress">Email Address:</label>
    <input type="email" id="emailAddress" name="email" required>

    <label for="donationAmount">Donation Amount ($):</label>
    <input type="number" id="donationAmount" name="amount" required>

    <label for="subscribe">Subscribe</label>
    <input type="checkbox" id="subscribe" name="newsletter">

    <input type="submit" value="Send">
  </form>
</body>
</html>"#;

/// The defective donation form: closing tags on inputs, a text-typed email
/// field and bare captions instead of labels.
pub const SAMPLE_FORM: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Donation Form</title>
</head>
<body>
  <h1>Donation Form</h1>
  <form>

    Full Name:
    <input type="text" name="name"></input>

    Email Address:
    <input type="text" name="email">

    Donation Amount ($):
    <input type="number" name="amount"></input>

    <input type="checkbox" name="newsletter"></input>
    Subscribe

    <input type="submit" value="Send"></input>
  </form>
</body>
</html>"#;

/// Return the known-good donation form
pub fn generate_reference() -> &'static str {
    REFERENCE_FORM
}
