//! On-disk application manifests.
//!
//! A manifest is the native stand-in for the browser form: text fields
//! under their wire names, attachments as file-system paths. Omitted
//! text keys default to the empty string, matching the form's own
//! notion of "not filled in".

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ManifestError;
use crate::form::state::{Attachment, FormState};

/// A JSON application document, as accepted by the CLI.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationManifest {
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
    pub agree_terms: bool,
    /// Path to the applicant photo, absolute or manifest-relative.
    pub applicant_photo: Option<PathBuf>,
    /// Path to the NID document.
    pub nid_document: Option<PathBuf>,
    /// Path to the education certificate.
    pub education_certificate: Option<PathBuf>,
}

impl ApplicationManifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Read the referenced attachments and produce the form state.
    /// `base_dir` anchors relative attachment paths — usually the
    /// directory the manifest was loaded from.
    pub fn into_form_state(self, base_dir: &Path) -> Result<FormState, ManifestError> {
        let applicant_photo = read_attachment(base_dir, self.applicant_photo)?;
        let nid_document = read_attachment(base_dir, self.nid_document)?;
        let education_certificate = read_attachment(base_dir, self.education_certificate)?;

        Ok(FormState {
            applicant_role: self.applicant_role,
            agent_id: self.agent_id,
            fm_name: self.fm_name,
            role_code: self.role_code,
            dgm_name: self.dgm_name,
            dgm_code: self.dgm_code,
            gm_name: self.gm_name,
            gm_code: self.gm_code,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            guardian_name: self.guardian_name,
            mother_name: self.mother_name,
            present_address: self.present_address,
            permanent_address: self.permanent_address,
            dob: self.dob,
            birth_place: self.birth_place,
            nid_number: self.nid_number,
            bank_account_number: self.bank_account_number,
            bank_name: self.bank_name,
            bank_branch_name: self.bank_branch_name,
            password: self.password,
            confirm_password: self.confirm_password,
            applicant_photo,
            nid_document,
            education_certificate,
            agree_terms: self.agree_terms,
        })
    }
}

fn read_attachment(
    base_dir: &Path,
    path: Option<PathBuf>,
) -> Result<Option<Attachment>, ManifestError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let resolved = if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    };
    let bytes = std::fs::read(&resolved).map_err(|source| ManifestError::Attachment {
        path: resolved.clone(),
        source,
    })?;
    let file_name = resolved
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("attachment")
        .to_string();
    Ok(Some(Attachment::new(file_name, bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_keys_default_to_empty() {
        let manifest: ApplicationManifest =
            serde_json::from_str(r#"{"fullName": "Nazmul Hasan"}"#).unwrap();
        assert_eq!(manifest.full_name, "Nazmul Hasan");
        assert_eq!(manifest.agent_id, "");
        assert!(!manifest.agree_terms);
        assert!(manifest.applicant_photo.is_none());
    }

    #[test]
    fn load_and_convert_reads_attachments() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("photo.jpg"), [0xFF, 0xD8, 0xFF]).unwrap();

        let manifest_path = dir.path().join("application.json");
        std::fs::write(
            &manifest_path,
            r#"{
                "agentId": "AG-7",
                "fullName": "Nazmul Hasan",
                "agreeTerms": true,
                "applicantPhoto": "photo.jpg"
            }"#,
        )
        .unwrap();

        let manifest = ApplicationManifest::load(&manifest_path).unwrap();
        let state = manifest.into_form_state(dir.path()).unwrap();
        assert_eq!(state.agent_id, "AG-7");
        assert!(state.agree_terms);
        let photo = state.applicant_photo.unwrap();
        assert_eq!(photo.file_name, "photo.jpg");
        assert_eq!(photo.bytes, vec![0xFF, 0xD8, 0xFF]);
        assert!(state.nid_document.is_none());
    }

    #[test]
    fn missing_attachment_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let manifest: ApplicationManifest =
            serde_json::from_str(r#"{"nidDocument": "missing.png"}"#).unwrap();
        let err = manifest.into_form_state(dir.path()).unwrap_err();
        assert!(matches!(err, ManifestError::Attachment { .. }));
    }

    #[test]
    fn unreadable_manifest_is_a_read_error() {
        let err = ApplicationManifest::load(Path::new("/nonexistent/app.json")).unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }

    #[test]
    fn garbage_manifest_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();
        let err = ApplicationManifest::load(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }
}
