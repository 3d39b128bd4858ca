//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A value of the wrong kind was supplied for a field
    #[error("Field '{field}' expects a {expected} value")]
    FieldTypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// The registration form is not mounted
    #[error("Registration form is not mounted")]
    FormNotMounted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::FieldTypeMismatch {
            field: "terms",
            expected: "checked",
        };
        assert!(error.to_string().contains("terms"));
        assert!(error.to_string().contains("checked"));

        let error = StateError::FormNotMounted;
        assert!(error.to_string().contains("not mounted"));
    }
}
