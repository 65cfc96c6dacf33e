//! Multipart payload assembly for the application request.

use reqwest::multipart::{Form, Part};

use crate::form::field::{Field, FieldKind};
use crate::form::state::FormState;

/// One part of the application payload.
///
/// Assembled separately from the wire form so tests can inspect the
/// exact parts without a running server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadPart {
    Text {
        name: &'static str,
        value: String,
    },
    File {
        name: &'static str,
        file_name: String,
        bytes: Vec<u8>,
    },
}

/// Enumerate the payload parts in field order: every text field as a
/// text part, the consent flag as the literal `"true"`/`"false"`, and
/// each selected attachment as a bytes part. Absent attachments are
/// omitted entirely, never sent as empty parts.
pub fn payload_parts(state: &FormState) -> Vec<PayloadPart> {
    let mut parts = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        match field.kind() {
            FieldKind::Text => {
                if let Some(value) = state.text(field) {
                    parts.push(PayloadPart::Text {
                        name: field.name(),
                        value: value.to_owned(),
                    });
                }
            }
            FieldKind::Flag => {
                let literal = if state.agree_terms { "true" } else { "false" };
                parts.push(PayloadPart::Text {
                    name: field.name(),
                    value: literal.to_owned(),
                });
            }
            FieldKind::File => {
                if let Some(attachment) = state.attachment(field) {
                    parts.push(PayloadPart::File {
                        name: field.name(),
                        file_name: attachment.file_name.clone(),
                        bytes: attachment.bytes.clone(),
                    });
                }
            }
        }
    }
    parts
}

/// Build the multipart request body.
pub fn application_form(state: &FormState) -> Form {
    let mut form = Form::new();
    for part in payload_parts(state) {
        form = match part {
            PayloadPart::Text { name, value } => form.text(name, value),
            PayloadPart::File {
                name,
                file_name,
                bytes,
            } => form.part(name, Part::bytes(bytes).file_name(file_name)),
        };
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::test_fixtures::filled_form;

    fn text_value<'a>(parts: &'a [PayloadPart], name: &str) -> Option<&'a str> {
        parts.iter().find_map(|p| match p {
            PayloadPart::Text { name: n, value } if *n == name => Some(value.as_str()),
            _ => None,
        })
    }

    #[test]
    fn full_form_yields_every_part() {
        let parts = payload_parts(&filled_form());
        // 24 text fields + consent flag + 3 attachments
        assert_eq!(parts.len(), 28);
        assert_eq!(text_value(&parts, "fullName"), Some("Nazmul Hasan"));
        assert_eq!(text_value(&parts, "agreeTerms"), Some("true"));
        assert!(parts.iter().any(|p| matches!(
            p,
            PayloadPart::File { name: "applicantPhoto", file_name, .. } if file_name == "photo.jpg"
        )));
    }

    #[test]
    fn absent_attachments_are_omitted() {
        let mut state = filled_form();
        state.education_certificate = None;
        let parts = payload_parts(&state);
        assert_eq!(parts.len(), 27);
        assert!(!parts
            .iter()
            .any(|p| matches!(p, PayloadPart::File { name: "educationCertificate", .. })));
    }

    #[test]
    fn consent_flag_is_a_literal_string() {
        let mut state = filled_form();
        state.agree_terms = false;
        let parts = payload_parts(&state);
        assert_eq!(text_value(&parts, "agreeTerms"), Some("false"));
    }

    #[test]
    fn empty_text_fields_are_still_sent() {
        let mut state = filled_form();
        state.agent_id.clear();
        let parts = payload_parts(&state);
        assert_eq!(text_value(&parts, "agentId"), Some(""));
    }

    #[test]
    fn credentials_travel_as_text_parts() {
        let parts = payload_parts(&filled_form());
        assert_eq!(text_value(&parts, "password"), Some("Brightlife1"));
        assert_eq!(text_value(&parts, "confirmPassword"), Some("Brightlife1"));
    }

    #[test]
    fn wire_form_builds_from_parts() {
        // Smoke check: the reqwest form accepts every part kind.
        let form = application_form(&filled_form());
        assert!(!form.boundary().is_empty());
    }
}
