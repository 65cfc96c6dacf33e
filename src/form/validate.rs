//! Whole-form validation.
//!
//! `validate` is pure and total: it inspects raw field values only,
//! never other fields' errors, and always returns. An empty [`ErrorMap`]
//! is the definition of a valid form.

use std::sync::LazyLock;

use regex::Regex;

use crate::form::errors::ErrorMap;
use crate::form::field::Field;
use crate::form::state::FormState;

/// `local@domain.tld` — no whitespace or extra `@` on either side, at
/// least one dot in the domain.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Plain required-after-trim text fields and their messages.
const REQUIRED_TEXT: [(Field, &str); 17] = [
    (Field::ApplicantRole, "Applicant role is required"),
    (Field::AgentId, "Agent ID is required"),
    (Field::FmName, "F.M Name is required"),
    (Field::RoleCode, "Role code is required"),
    (Field::DgmName, "D.G.M Name is required"),
    (Field::DgmCode, "D.G.M Code is required"),
    (Field::GmName, "G.M Name is required"),
    (Field::GmCode, "G.M Code is required"),
    (Field::Address, "Address is required"),
    (Field::GuardianName, "Father/Husband's name is required"),
    (Field::MotherName, "Mother's name is required"),
    (Field::PresentAddress, "Present address is required"),
    (Field::PermanentAddress, "Permanent address is required"),
    (Field::BirthPlace, "Birth place is required"),
    (Field::BankAccountNumber, "Account number is required"),
    (Field::BankName, "Bank name is required"),
    (Field::BankBranchName, "Branch name is required"),
];

/// Missing-attachment messages.
const REQUIRED_FILES: [(Field, &str); 3] = [
    (Field::ApplicantPhoto, "Applicant image is required"),
    (Field::NidDocument, "NID upload is required"),
    (Field::EducationCertificate, "Educational certificate is required"),
];

/// Keep digits, plus a leading `+` if the number starts with one.
/// Interior `+` and every other character are stripped.
pub fn sanitize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if raw.trim_start().starts_with('+') {
        format!("+{digits}")
    } else {
        digits
    }
}

/// Validate the whole form, one rule set per field.
pub fn validate(state: &FormState) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for (field, message) in REQUIRED_TEXT {
        let value = state.text(field).unwrap_or_default();
        if value.trim().is_empty() {
            errors.insert(field, message);
        }
    }

    let full_name = state.full_name.trim();
    if full_name.is_empty() {
        errors.insert(Field::FullName, "Full name is required");
    } else if full_name.chars().count() < 3 {
        errors.insert(Field::FullName, "Name must be at least 3 characters");
    }

    if state.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_PATTERN.is_match(&state.email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }

    let phone = sanitize_phone(&state.phone);
    if phone.is_empty() {
        errors.insert(Field::Phone, "Phone number is required");
    } else if phone.chars().count() < 8 {
        errors.insert(Field::Phone, "Please enter a valid phone number (min 8 digits)");
    }

    // Date inputs deliver a value or nothing; no trimming, and no
    // future-date check beyond the UI-level max-date hint.
    if state.dob.is_empty() {
        errors.insert(Field::Dob, "Date of birth is required");
    }

    if state.nid_number.trim().is_empty() {
        errors.insert(Field::NidNumber, "NID number is required");
    } else if state
        .nid_number
        .chars()
        .filter(char::is_ascii_digit)
        .count()
        < 10
    {
        errors.insert(Field::NidNumber, "Please enter a valid NID number");
    }

    for (field, message) in REQUIRED_FILES {
        if state.attachment(field).is_none() {
            errors.insert(field, message);
        }
    }

    if state.password.is_empty() {
        errors.insert(Field::Password, "Password is required");
    } else if state.password.chars().count() < 8 {
        errors.insert(Field::Password, "Password must be at least 8 characters");
    } else if !has_required_classes(&state.password) {
        errors.insert(
            Field::Password,
            "Password must contain uppercase, lowercase, and number",
        );
    }

    if state.confirm_password.is_empty() {
        errors.insert(Field::ConfirmPassword, "Please confirm your password");
    } else if state.password != state.confirm_password {
        errors.insert(Field::ConfirmPassword, "Passwords do not match");
    }

    if !state.agree_terms {
        errors.insert(Field::AgreeTerms, "You must agree to the terms and conditions");
    }

    errors
}

/// At least one lowercase letter, one uppercase letter, and one digit.
fn has_required_classes(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
