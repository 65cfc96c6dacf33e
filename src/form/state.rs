//! In-memory state of one application attempt.

use crate::form::field::Field;

/// A file the applicant selected for upload.
///
/// Holds the bytes in memory; the receipt only reports presence, and the
/// payload sends the bytes as a single multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Original file name, sent as the part's file name.
    pub file_name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Complete form state for one in-progress signup.
///
/// Every text field is a `String` defaulting to empty — absence is the
/// empty string, never an `Option`. Only the three attachments use an
/// explicit "no file" value.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub applicant_role: String,
    pub agent_id: String,
    pub fm_name: String,
    pub role_code: String,
    pub dgm_name: String,
    pub dgm_code: String,
    pub gm_name: String,
    pub gm_code: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub guardian_name: String,
    pub mother_name: String,
    pub present_address: String,
    pub permanent_address: String,
    pub dob: String,
    pub birth_place: String,
    pub nid_number: String,
    pub bank_account_number: String,
    pub bank_name: String,
    pub bank_branch_name: String,
    pub password: String,
    pub confirm_password: String,
    pub applicant_photo: Option<Attachment>,
    pub nid_document: Option<Attachment>,
    pub education_certificate: Option<Attachment>,
    pub agree_terms: bool,
}

impl FormState {
    /// Current value of a text field. `None` for attachment and flag fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::ApplicantRole => &self.applicant_role,
            Field::AgentId => &self.agent_id,
            Field::FmName => &self.fm_name,
            Field::RoleCode => &self.role_code,
            Field::DgmName => &self.dgm_name,
            Field::DgmCode => &self.dgm_code,
            Field::GmName => &self.gm_name,
            Field::GmCode => &self.gm_code,
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::GuardianName => &self.guardian_name,
            Field::MotherName => &self.mother_name,
            Field::PresentAddress => &self.present_address,
            Field::PermanentAddress => &self.permanent_address,
            Field::Dob => &self.dob,
            Field::BirthPlace => &self.birth_place,
            Field::NidNumber => &self.nid_number,
            Field::BankAccountNumber => &self.bank_account_number,
            Field::BankName => &self.bank_name,
            Field::BankBranchName => &self.bank_branch_name,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::ApplicantPhoto
            | Field::NidDocument
            | Field::EducationCertificate
            | Field::AgreeTerms => return None,
        };
        Some(value.as_str())
    }

    /// Mutable handle to a text field, if `field` is text-kinded.
    pub(crate) fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let value = match field {
            Field::ApplicantRole => &mut self.applicant_role,
            Field::AgentId => &mut self.agent_id,
            Field::FmName => &mut self.fm_name,
            Field::RoleCode => &mut self.role_code,
            Field::DgmName => &mut self.dgm_name,
            Field::DgmCode => &mut self.dgm_code,
            Field::GmName => &mut self.gm_name,
            Field::GmCode => &mut self.gm_code,
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Address => &mut self.address,
            Field::GuardianName => &mut self.guardian_name,
            Field::MotherName => &mut self.mother_name,
            Field::PresentAddress => &mut self.present_address,
            Field::PermanentAddress => &mut self.permanent_address,
            Field::Dob => &mut self.dob,
            Field::BirthPlace => &mut self.birth_place,
            Field::NidNumber => &mut self.nid_number,
            Field::BankAccountNumber => &mut self.bank_account_number,
            Field::BankName => &mut self.bank_name,
            Field::BankBranchName => &mut self.bank_branch_name,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::ApplicantPhoto
            | Field::NidDocument
            | Field::EducationCertificate
            | Field::AgreeTerms => return None,
        };
        Some(value)
    }

    /// Current attachment for an upload field. `None` when no file has
    /// been selected, or when `field` is not an upload field.
    pub fn attachment(&self, field: Field) -> Option<&Attachment> {
        match field {
            Field::ApplicantPhoto => self.applicant_photo.as_ref(),
            Field::NidDocument => self.nid_document.as_ref(),
            Field::EducationCertificate => self.education_certificate.as_ref(),
            _ => None,
        }
    }

    /// Mutable handle to an attachment slot, if `field` is an upload field.
    pub(crate) fn attachment_mut(&mut self, field: Field) -> Option<&mut Option<Attachment>> {
        match field {
            Field::ApplicantPhoto => Some(&mut self.applicant_photo),
            Field::NidDocument => Some(&mut self.nid_document),
            Field::EducationCertificate => Some(&mut self.education_certificate),
            _ => None,
        }
    }
}
