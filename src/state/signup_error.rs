//! User-facing signup errors

use thiserror::Error;

/// Reasons a signup attempt is rejected
///
/// Every variant is local and non-fatal: it is shown on the form and the
/// user corrects the input and resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("You must agree to the terms and conditions")]
    TermsNotAccepted,

    #[error("Invalid admin code")]
    InvalidAdminCode,

    /// Carries the account service's message verbatim
    #[error("{0}")]
    AccountCreationFailed(String),
}

impl SignupError {
    /// Password errors are shown under the confirm field, the rest below the form
    pub fn is_password_error(&self) -> bool {
        matches!(self, Self::PasswordMismatch | Self::PasswordTooShort { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages() {
        assert_eq!(
            SignupError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
        assert_eq!(
            SignupError::PasswordTooShort { min: 8 }.to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            SignupError::TermsNotAccepted.to_string(),
            "You must agree to the terms and conditions"
        );
        assert_eq!(SignupError::InvalidAdminCode.to_string(), "Invalid admin code");
    }

    #[test]
    fn test_account_creation_failed_is_verbatim() {
        let err = SignupError::AccountCreationFailed("E".to_string());
        assert_eq!(err.to_string(), "E");
    }

    #[test]
    fn test_password_error_slot() {
        assert!(SignupError::PasswordMismatch.is_password_error());
        assert!(SignupError::PasswordTooShort { min: 8 }.is_password_error());
        assert!(!SignupError::TermsNotAccepted.is_password_error());
        assert!(!SignupError::InvalidAdminCode.is_password_error());
        assert!(!SignupError::AccountCreationFailed("x".into()).is_password_error());
    }
}
