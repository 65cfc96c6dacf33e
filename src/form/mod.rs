//! The signup form: field identifiers, state, validation, and the
//! submit flow.

pub mod errors;
pub mod field;
pub mod flow;
pub mod phase;
pub mod state;
pub mod validate;

pub use errors::ErrorMap;
pub use field::{APPLICANT_ROLES, Field, FieldKind};
pub use flow::{SignupFlow, SubmitOutcome};
pub use phase::FormPhase;
pub use state::{Attachment, FormState};

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::state::{Attachment, FormState};

    /// A complete application that passes every validation rule.
    pub(crate) fn filled_form() -> FormState {
        FormState {
            applicant_role: "FO".into(),
            agent_id: "AG-1042".into(),
            fm_name: "Rahim Uddin".into(),
            role_code: "FO-17".into(),
            dgm_name: "Karim Chowdhury".into(),
            dgm_code: "DGM-03".into(),
            gm_name: "Selina Akter".into(),
            gm_code: "GM-01".into(),
            full_name: "Nazmul Hasan".into(),
            email: "nazmul@example.com".into(),
            phone: "+8801711223344".into(),
            address: "12 Motijheel C/A, Dhaka".into(),
            guardian_name: "Abdul Hasan".into(),
            mother_name: "Roksana Begum".into(),
            present_address: "12 Motijheel C/A, Dhaka".into(),
            permanent_address: "Vill. Charpara, Mymensingh".into(),
            dob: "1994-06-21".into(),
            birth_place: "Mymensingh".into(),
            nid_number: "1994623401127".into(),
            bank_account_number: "0112445577".into(),
            bank_name: "Dutch-Bangla Bank".into(),
            bank_branch_name: "Motijheel".into(),
            password: "Brightlife1".into(),
            confirm_password: "Brightlife1".into(),
            applicant_photo: Some(Attachment::new("photo.jpg", vec![0xFF, 0xD8, 0xFF])),
            nid_document: Some(Attachment::new("nid.pdf", b"%PDF-nid".to_vec())),
            education_certificate: Some(Attachment::new("certificate.pdf", b"%PDF-cert".to_vec())),
            agree_terms: true,
        }
    }
}
