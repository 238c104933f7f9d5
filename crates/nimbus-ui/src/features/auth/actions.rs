//! Auth form submissions.

use crate::core::auth::AuthService;
use crate::core::notify::Notifier;

/// Toast shown once a reset link was requested.
pub const RESET_LINK_SENT: &str =
    "We have sent you an email with further instructions to change your password.";

/// Toast shown after a successful password change.
pub const PASSWORD_CHANGED: &str = "Successfully changed password!";

/// Request a password-reset link. Returns whether the request succeeded.
pub async fn submit_forgot_password<A: AuthService + ?Sized>(
    auth: &A,
    email: &str,
    notifier: &dyn Notifier,
) -> bool {
    match auth.forgot_password(email).await {
        Ok(()) => {
            notifier.info(RESET_LINK_SENT);
            true
        }
        Err(err) => {
            notifier.toast_and_log(None, Some(&err));
            false
        }
    }
}

/// Change the password, holding `set_submitting(true)` for the call's duration.
///
/// Returns whether the modal should close.
pub async fn submit_change_password<A: AuthService + ?Sized>(
    auth: &A,
    old_password: &str,
    new_password: &str,
    set_submitting: impl Fn(bool),
    notifier: &dyn Notifier,
) -> bool {
    set_submitting(true);
    let result = auth.change_password(old_password, new_password).await;
    set_submitting(false);
    match result {
        Ok(()) => {
            notifier.success(PASSWORD_CHANGED);
            true
        }
        Err(err) => {
            notifier.toast_and_log(Some("Could not change password"), Some(&err));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::AuthError;
    use crate::core::notify::testing::RecordingNotifier;
    use crate::models::ToastKind;
    use async_trait::async_trait;
    use std::cell::RefCell;

    struct FakeAuth {
        reject: bool,
        calls: RefCell<Vec<String>>,
    }

    impl FakeAuth {
        fn new(reject: bool) -> Self {
            Self {
                reject,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl AuthService for FakeAuth {
        async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
            self.calls.borrow_mut().push(format!("forgot {email}"));
            if self.reject {
                Err(AuthError::Request("timeout".to_string()))
            } else {
                Ok(())
            }
        }

        async fn change_password(
            &self,
            old_password: &str,
            new_password: &str,
        ) -> Result<(), AuthError> {
            self.calls
                .borrow_mut()
                .push(format!("change {old_password} -> {new_password}"));
            if self.reject {
                Err(AuthError::Rejected("Incorrect old password.".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn reset_link_success_shows_info_toast() {
        let auth = FakeAuth::new(false);
        let notifier = RecordingNotifier::default();
        assert!(submit_forgot_password(&auth, "ada@example.com", &notifier).await);
        assert_eq!(*auth.calls.borrow(), ["forgot ada@example.com"]);
        let notices = notifier.notices.borrow();
        assert_eq!(notices[0].kind, ToastKind::Info);
        assert_eq!(notices[0].message, RESET_LINK_SENT);
    }

    #[tokio::test]
    async fn reset_link_failure_is_reported() {
        let auth = FakeAuth::new(true);
        let notifier = RecordingNotifier::default();
        assert!(!submit_forgot_password(&auth, "ada@example.com", &notifier).await);
        assert_eq!(
            notifier.messages(),
            ["could not reach the authentication service: timeout"]
        );
    }

    #[tokio::test]
    async fn change_password_toggles_submitting_around_call() {
        let auth = FakeAuth::new(false);
        let notifier = RecordingNotifier::default();
        let flags = RefCell::new(Vec::new());
        let closed = submit_change_password(
            &auth,
            "0ld-Secret",
            "Pa$$w0rd",
            |busy| flags.borrow_mut().push(busy),
            &notifier,
        )
        .await;
        assert!(closed);
        assert_eq!(*flags.borrow(), [true, false]);
        assert_eq!(notifier.messages(), [PASSWORD_CHANGED]);
    }

    #[tokio::test]
    async fn rejected_change_keeps_modal_open() {
        let auth = FakeAuth::new(true);
        let notifier = RecordingNotifier::default();
        let flags = RefCell::new(Vec::new());
        let closed = submit_change_password(
            &auth,
            "wrong",
            "Pa$$w0rd",
            |busy| flags.borrow_mut().push(busy),
            &notifier,
        )
        .await;
        assert!(!closed);
        assert_eq!(*flags.borrow(), [true, false]);
        assert_eq!(
            notifier.messages(),
            ["Could not change password: Incorrect old password."]
        );
    }
}
