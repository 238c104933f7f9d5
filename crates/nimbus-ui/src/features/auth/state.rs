//! Auth form state.
//!
//! # Design
//! - Inputs stay as raw strings; validity is derived on demand.
//! - The change-password form owns its in-flight flag so a second submit can
//!   be refused before any call is made.

use crate::core::validation::{confirmation_matches, is_valid_email, is_valid_password};

/// Forgot-password form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    /// Address that receives the reset link.
    pub email: String,
}

impl ForgotPasswordForm {
    /// Whether the form may be submitted.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        is_valid_email(&self.email)
    }
}

/// Change-password form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangePasswordForm {
    /// Current password.
    pub old_password: String,
    /// Replacement password.
    pub new_password: String,
    /// Confirmation of the replacement.
    pub confirm_new_password: String,
    /// Whether a change request is in flight.
    pub is_submitting: bool,
}

impl ChangePasswordForm {
    /// Whether every field passes validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_password(&self.old_password)
            && is_valid_password(&self.new_password)
            && confirmation_matches(&self.new_password, &self.confirm_new_password)
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.is_valid()
    }

    /// Mark a request in flight. Returns `false` when one already is.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        true
    }

    /// Clear the in-flight flag.
    pub fn finish(&mut self) {
        self.is_submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ChangePasswordForm {
        ChangePasswordForm {
            old_password: "0ld-Secret".to_string(),
            new_password: "Pa$$w0rd".to_string(),
            confirm_new_password: "Pa$$w0rd".to_string(),
            is_submitting: false,
        }
    }

    #[test]
    fn confirmation_must_match_exactly() {
        let mut form = filled();
        assert!(form.can_submit());
        form.confirm_new_password = "pa$$w0rd".to_string();
        assert!(!form.is_valid());
    }

    #[test]
    fn second_submit_is_refused_while_in_flight() {
        let mut form = filled();
        assert!(form.begin_submit());
        assert!(!form.can_submit());
        assert!(!form.begin_submit());
        form.finish();
        assert!(form.begin_submit());
    }

    #[test]
    fn forgot_password_needs_email() {
        let mut form = ForgotPasswordForm::default();
        assert!(!form.can_submit());
        form.email = "ada@example.com".to_string();
        assert!(form.can_submit());
    }
}
