//! Remote registration: payload assembly and submission backends.

pub mod backend;
pub mod payload;

pub use backend::{
    AGENT_APPLICATION_ENDPOINT, ApplicationBackend, HttpBackend, MOCK_SUBMIT_DELAY, MockBackend,
    backend_for,
};
pub use payload::{PayloadPart, application_form, payload_parts};
