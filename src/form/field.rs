//! Field identifiers for the agent application form.
//!
//! Every form field has exactly one `Field` variant. Keeping the set
//! closed makes "one error per field" checkable at the type level and
//! lets payload assembly and validation iterate a fixed order instead
//! of a string-keyed map.

use serde::{Deserialize, Serialize};

/// The applicant roles offered by the signup form.
pub const APPLICANT_ROLES: [&str; 4] = ["FO", "FM", "DGM", "GM"];

/// What kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-text value (empty string = not filled in).
    Text,
    /// Binary attachment (absent until the applicant selects a file).
    File,
    /// Boolean consent flag.
    Flag,
}

/// Identifier for a single form field.
///
/// Declaration order is the payload order of the application request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ApplicantRole,
    AgentId,
    FmName,
    RoleCode,
    DgmName,
    DgmCode,
    GmName,
    GmCode,
    FullName,
    Email,
    Phone,
    Address,
    GuardianName,
    MotherName,
    PresentAddress,
    PermanentAddress,
    Dob,
    BirthPlace,
    NidNumber,
    BankAccountNumber,
    BankName,
    BankBranchName,
    Password,
    ConfirmPassword,
    ApplicantPhoto,
    NidDocument,
    EducationCertificate,
    AgreeTerms,
}

impl Field {
    /// All fields, in payload order.
    pub const ALL: [Field; 28] = [
        Field::ApplicantRole,
        Field::AgentId,
        Field::FmName,
        Field::RoleCode,
        Field::DgmName,
        Field::DgmCode,
        Field::GmName,
        Field::GmCode,
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::Address,
        Field::GuardianName,
        Field::MotherName,
        Field::PresentAddress,
        Field::PermanentAddress,
        Field::Dob,
        Field::BirthPlace,
        Field::NidNumber,
        Field::BankAccountNumber,
        Field::BankName,
        Field::BankBranchName,
        Field::Password,
        Field::ConfirmPassword,
        Field::ApplicantPhoto,
        Field::NidDocument,
        Field::EducationCertificate,
        Field::AgreeTerms,
    ];

    /// The wire name used for multipart parts and manifest keys.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ApplicantRole => "applicantRole",
            Self::AgentId => "agentId",
            Self::FmName => "fmName",
            Self::RoleCode => "roleCode",
            Self::DgmName => "dgmName",
            Self::DgmCode => "dgmCode",
            Self::GmName => "gmName",
            Self::GmCode => "gmCode",
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::GuardianName => "guardianName",
            Self::MotherName => "motherName",
            Self::PresentAddress => "presentAddress",
            Self::PermanentAddress => "permanentAddress",
            Self::Dob => "dob",
            Self::BirthPlace => "birthPlace",
            Self::NidNumber => "nidNumber",
            Self::BankAccountNumber => "bankAccountNumber",
            Self::BankName => "bankName",
            Self::BankBranchName => "bankBranchName",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::ApplicantPhoto => "applicantPhoto",
            Self::NidDocument => "nidDocument",
            Self::EducationCertificate => "educationCertificate",
            Self::AgreeTerms => "agreeTerms",
        }
    }

    /// What kind of value this field holds.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::ApplicantPhoto | Self::NidDocument | Self::EducationCertificate => {
                FieldKind::File
            }
            Self::AgreeTerms => FieldKind::Flag,
            _ => FieldKind::Text,
        }
    }

    /// The three upload fields, in payload order.
    pub const ATTACHMENTS: [Field; 3] = [
        Field::ApplicantPhoto,
        Field::NidDocument,
        Field::EducationCertificate,
    ];
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
