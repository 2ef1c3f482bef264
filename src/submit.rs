//! Contact form submission.
//!
//! Posts the form fields to the profile's form endpoint the same way a
//! browser submits an HTML form: URL-encoded body, success judged by
//! the HTTP status. Runs on a spawned task so the render loop never
//! waits on the network.

use serde::Serialize;
use thiserror::Error;

/// Why a submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never completed (DNS, connection, timeout).
    #[error("could not reach the form endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("form endpoint answered {status}")]
    Rejected { status: u16 },
}

/// The form fields, serialized under these names in the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Send one submission and report whether the endpoint accepted it.
pub async fn submit(
    client: &reqwest::Client,
    endpoint: &str,
    submission: &Submission,
) -> Result<(), SubmitError> {
    tracing::info!("Submitting contact form to {}", endpoint);
    let response = client.post(endpoint).form(submission).send().await?;
    let status = response.status();
    if status.is_success() {
        tracing::info!("Form endpoint accepted the submission");
        Ok(())
    } else {
        tracing::warn!("Form endpoint rejected the submission: {}", status);
        Err(SubmitError::Rejected {
            status: status.as_u16(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
