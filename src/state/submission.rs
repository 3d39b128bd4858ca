//! Submission lifecycle types.
//!
//! This module maps every way a registration attempt can end onto either
//! success or one user-facing message.

use crate::identity::{IdentityError, ServiceResponse};

/// Message shown when required fields are missing.
pub const VALIDATION_MESSAGE: &str = "Please fill in all fields.";

/// Message shown when the service gave no usable reason.
pub const FALLBACK_MESSAGE: &str = "An error occurred.";

/// Lifecycle of one submission attempt.
///
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

/// Ways a submission attempt can fail. The display text is what the user sees.
///
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum SubmissionError {
    /// Required fields are missing; the network is never reached
    #[error("Please fill in all fields.")]
    LocalValidation,

    /// The service responded but declined the request
    #[error("{}", reason_or_fallback(.0))]
    RemoteRejection(Option<String>),

    /// No structured response was received
    #[error("An error occurred.")]
    Transport { detail: String },
}

fn reason_or_fallback(reason: &Option<String>) -> &str {
    match reason.as_deref() {
        Some(message) if !message.is_empty() => message,
        _ => FALLBACK_MESSAGE,
    }
}

/// Classify the result of a registration request.
///
pub fn classify(
    result: Result<ServiceResponse, IdentityError>,
) -> Result<serde_json::Value, SubmissionError> {
    match result {
        Ok(ServiceResponse::Accepted(data)) => Ok(data),
        Ok(ServiceResponse::Rejected { status, message }) => {
            log::debug!("Registration rejected with status {}.", status);
            Err(SubmissionError::RemoteRejection(message))
        }
        Err(error) => Err(SubmissionError::Transport {
            detail: error.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submission_error_messages() {
        assert_eq!(
            SubmissionError::LocalValidation.to_string(),
            VALIDATION_MESSAGE
        );
        assert_eq!(
            SubmissionError::RemoteRejection(Some("Username taken".to_string())).to_string(),
            "Username taken"
        );
        assert_eq!(
            SubmissionError::RemoteRejection(None).to_string(),
            FALLBACK_MESSAGE
        );
        assert_eq!(
            SubmissionError::RemoteRejection(Some(String::new())).to_string(),
            FALLBACK_MESSAGE
        );
        assert_eq!(
            SubmissionError::Transport {
                detail: "connection refused".to_string()
            }
            .to_string(),
            FALLBACK_MESSAGE
        );
    }

    #[test]
    fn test_classify_accepted() {
        let result = classify(Ok(ServiceResponse::Accepted(json!({ "id": 7 }))));
        assert_eq!(result, Ok(json!({ "id": 7 })));
    }

    #[test]
    fn test_classify_rejected() {
        let result = classify(Ok(ServiceResponse::Rejected {
            status: 409,
            message: Some("Email already registered".to_string()),
        }));
        assert_eq!(
            result,
            Err(SubmissionError::RemoteRejection(Some(
                "Email already registered".to_string()
            )))
        );
    }

    #[test]
    fn test_classify_transport() {
        let error = IdentityError::InvalidHeader {
            name: "X".to_string(),
            message: "bad".to_string(),
        };
        let result = classify(Err(error));
        assert!(matches!(result, Err(SubmissionError::Transport { .. })));
    }
}
