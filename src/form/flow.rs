//! SignupFlow — coordinates form edits, validation, submission, and the
//! receipt side effect.

use std::path::PathBuf;
use std::sync::Arc;

use uuid::Uuid;

use crate::form::errors::ErrorMap;
use crate::form::field::Field;
use crate::form::phase::FormPhase;
use crate::form::state::{Attachment, FormState};
use crate::form::validate;
use crate::receipt;
use crate::submit::backend::ApplicationBackend;

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the per-field errors are populated and the
    /// backend was never called.
    Invalid,
    /// The backend accepted the application. `receipt` is the written
    /// document, or `None` when generation failed (best-effort: the
    /// registration itself already succeeded).
    Accepted { receipt: Option<PathBuf> },
    /// The backend call failed; the general error slot is populated
    /// and the field values are untouched.
    Failed,
    /// Nothing was started: a previous attempt is still in flight, or
    /// the form already succeeded.
    Ignored,
}

/// One signup attempt: form state, errors, and phase, plus the backend
/// and receipt directory it submits through.
///
/// Owned by a single caller for the lifetime of the form; all mutation
/// goes through the methods below.
pub struct SignupFlow {
    state: FormState,
    errors: ErrorMap,
    phase: FormPhase,
    backend: Arc<dyn ApplicationBackend>,
    receipt_dir: PathBuf,
}

impl SignupFlow {
    /// Fresh, empty form.
    pub fn new(backend: Arc<dyn ApplicationBackend>, receipt_dir: PathBuf) -> Self {
        Self::with_state(backend, receipt_dir, FormState::default())
    }

    /// Form pre-filled with `state` (e.g. loaded from a manifest).
    pub fn with_state(
        backend: Arc<dyn ApplicationBackend>,
        receipt_dir: PathBuf,
        state: FormState,
    ) -> Self {
        Self {
            state,
            errors: ErrorMap::new(),
            phase: FormPhase::Editing,
            backend,
            receipt_dir,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Set a text field and optimistically clear its error slot. The
    /// general slot is left alone; only the next submit clears it.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        if !self.phase.allows_edits() {
            tracing::warn!(%field, phase = %self.phase, "edit ignored");
            return;
        }
        let Some(slot) = self.state.text_mut(field) else {
            tracing::warn!(%field, "set_text on a non-text field ignored");
            return;
        };
        *slot = value.into();
        self.errors.remove(field);
    }

    /// Select or clear an upload, clearing the field's error slot.
    pub fn set_attachment(&mut self, field: Field, attachment: Option<Attachment>) {
        if !self.phase.allows_edits() {
            tracing::warn!(%field, phase = %self.phase, "edit ignored");
            return;
        }
        let Some(slot) = self.state.attachment_mut(field) else {
            tracing::warn!(%field, "set_attachment on a non-upload field ignored");
            return;
        };
        *slot = attachment;
        self.errors.remove(field);
    }

    /// Set the consent flag, clearing its error slot.
    pub fn set_agree_terms(&mut self, agree: bool) {
        if !self.phase.allows_edits() {
            tracing::warn!(phase = %self.phase, "edit ignored");
            return;
        }
        self.state.agree_terms = agree;
        self.errors.remove(Field::AgreeTerms);
    }

    /// Run one submit attempt: validate, call the backend once, and on
    /// success write the receipt.
    ///
    /// Only one attempt can run at a time; the phase acts as the busy
    /// flag. There is no retry and no cancellation — a failed attempt
    /// returns the form to Editing for a manual resubmit.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.phase.allows_edits() {
            tracing::warn!(phase = %self.phase, "submit ignored");
            return SubmitOutcome::Ignored;
        }

        let attempt = Uuid::new_v4();
        let errors = validate::validate(&self.state);
        if !errors.is_empty() {
            tracing::info!(%attempt, errors = errors.len(), "validation failed");
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }

        self.errors.clear();
        self.phase = FormPhase::Submitting;
        tracing::info!(%attempt, backend = self.backend.name(), "submitting agent application");

        match self.backend.submit(&self.state).await {
            Ok(()) => {
                self.phase = FormPhase::Success;
                let receipt = match receipt::generate(&self.state, &self.receipt_dir) {
                    Ok(path) => {
                        tracing::info!(%attempt, path = %path.display(), "receipt written");
                        Some(path)
                    }
                    Err(e) => {
                        // The registration is already accepted server-side;
                        // a missing document must not undo that.
                        tracing::warn!(%attempt, error = %e, "receipt generation failed");
                        None
                    }
                };
                SubmitOutcome::Accepted { receipt }
            }
            Err(e) => {
                tracing::warn!(%attempt, error = %e, "submission failed");
                self.phase = FormPhase::Editing;
                self.errors.set_general(e.to_string());
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::error::SubmitError;
    use crate::form::test_fixtures::filled_form;
    use crate::submit::backend::MockBackend;

    /// Backend that rejects every application with a fixed message.
    struct RejectingBackend;

    #[async_trait]
    impl ApplicationBackend for RejectingBackend {
        async fn submit(&self, _state: &FormState) -> Result<(), SubmitError> {
            Err(SubmitError::Rejected {
                status: reqwest::StatusCode::BAD_REQUEST,
                message: "Agent ID already exists".to_string(),
            })
        }

        fn name(&self) -> &'static str {
            "rejecting"
        }
    }

    fn mock_backend() -> Arc<dyn ApplicationBackend> {
        Arc::new(MockBackend::with_delay(Duration::from_millis(5)))
    }

    fn flow_with(backend: Arc<dyn ApplicationBackend>, dir: &std::path::Path) -> SignupFlow {
        SignupFlow::with_state(backend, dir.to_path_buf(), filled_form())
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_backend() {
        let dir = tempfile::tempdir().unwrap();
        let mut flow = SignupFlow::new(mock_backend(), dir.path().to_path_buf());
        let outcome = flow.submit().await;
        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(flow.phase(), FormPhase::Editing);
        assert!(!flow.errors().is_empty());
        // No receipt can exist for a rejected-by-validation form.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn valid_form_submits_and_writes_the_receipt() {
        let dir = tempfile::tempdir().unwrap();
        let mut flow = flow_with(mock_backend(), dir.path());
        let outcome = flow.submit().await;
        let SubmitOutcome::Accepted { receipt: Some(path) } = outcome else {
            panic!("expected an accepted outcome with a receipt, got {outcome:?}");
        };
        assert_eq!(flow.phase(), FormPhase::Success);
        assert!(flow.errors().is_empty());
        assert!(path.exists());
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("agent-application-AG-1042.pdf")
        );
    }

    #[tokio::test]
    async fn backend_failure_returns_to_editing_with_the_general_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut flow = flow_with(Arc::new(RejectingBackend), dir.path());
        let outcome = flow.submit().await;
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(flow.phase(), FormPhase::Editing);
        assert_eq!(flow.errors().general(), Some("Agent ID already exists"));
        assert_eq!(flow.errors().len(), 1);
        // Field values survive the failure for a manual resubmit.
        assert_eq!(flow.state().full_name, "Nazmul Hasan");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn failed_attempt_can_be_resubmitted() {
        let dir = tempfile::tempdir().unwrap();
        let mut flow = flow_with(Arc::new(RejectingBackend), dir.path());
        assert_eq!(flow.submit().await, SubmitOutcome::Failed);

        // Swap nothing — a manual resubmit through a working backend.
        flow.backend = mock_backend();
        let outcome = flow.submit().await;
        assert!(matches!(outcome, SubmitOutcome::Accepted { .. }));
        assert_eq!(flow.phase(), FormPhase::Success);
        assert!(flow.errors().general().is_none(), "general slot cleared on resubmit");
    }

    #[tokio::test]
    async fn editing_clears_the_field_error_but_not_the_general_slot() {
        let dir = tempfile::tempdir().unwrap();
        let mut flow = flow_with(Arc::new(RejectingBackend), dir.path());
        assert_eq!(flow.submit().await, SubmitOutcome::Failed);

        flow.set_text(Field::Email, "broken");
        let outcome = flow.submit().await;
        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(flow.errors().get(Field::Email).is_some());

        flow.set_text(Field::Email, "agent@example.com");
        assert!(flow.errors().get(Field::Email).is_none(), "edit clears the field slot");
    }

    #[tokio::test]
    async fn general_slot_survives_field_edits() {
        let dir = tempfile::tempdir().unwrap();
        let mut flow = flow_with(Arc::new(RejectingBackend), dir.path());
        assert_eq!(flow.submit().await, SubmitOutcome::Failed);
        flow.set_text(Field::FullName, "Someone Else");
        assert_eq!(flow.errors().general(), Some("Agent ID already exists"));
    }

    #[tokio::test]
    async fn success_is_terminal() {
        let dir = tempfile::tempdir().unwrap();
        let mut flow = flow_with(mock_backend(), dir.path());
        assert!(matches!(flow.submit().await, SubmitOutcome::Accepted { .. }));

        flow.set_text(Field::FullName, "Too Late");
        assert_eq!(flow.state().full_name, "Nazmul Hasan", "edits ignored after success");

        assert_eq!(flow.submit().await, SubmitOutcome::Ignored);
        assert_eq!(flow.phase(), FormPhase::Success);
    }

    #[tokio::test]
    async fn clearing_an_attachment_reinstates_its_error_on_next_submit() {
        let dir = tempfile::tempdir().unwrap();
        let mut flow = flow_with(mock_backend(), dir.path());
        flow.set_attachment(Field::NidDocument, None);
        assert_eq!(flow.submit().await, SubmitOutcome::Invalid);
        assert_eq!(flow.errors().get(Field::NidDocument), Some("NID upload is required"));
        assert_eq!(flow.errors().len(), 1);
    }
}
