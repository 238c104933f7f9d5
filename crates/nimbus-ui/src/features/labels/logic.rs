//! Label availability checks and chip styling.

use crate::core::auth::UserSession;
use crate::models::{BackendType, LChColor};
use thiserror::Error;

/// Why labels cannot be managed in the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LabelsUnavailable {
    /// The local backend has no label storage.
    #[error("cannot add labels to assets on the local backend")]
    LocalBackend,
    /// Nobody is signed in.
    #[error("labels require a signed-in user")]
    SignedOut,
    /// The session is offline and has no organization.
    #[error("labels require an organization")]
    NoOrganization,
}

/// Proof that labels are available; required to open the label modals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelsAccess {
    _checked: (),
}

/// Check that labels can be managed with this backend and session.
///
/// # Errors
/// Returns [`LabelsUnavailable`] for the local backend or a session without
/// an organization.
pub fn ensure_labels_supported(
    backend: BackendType,
    session: Option<&UserSession>,
) -> Result<LabelsAccess, LabelsUnavailable> {
    if backend == BackendType::Local {
        return Err(LabelsUnavailable::LocalBackend);
    }
    let session = session.ok_or(LabelsUnavailable::SignedOut)?;
    if !session.has_organization() {
        return Err(LabelsUnavailable::NoOrganization);
    }
    Ok(LabelsAccess { _checked: () })
}

/// Text class for content drawn on `color`.
#[must_use]
pub fn contrast_class(color: Option<&LChColor>) -> &'static str {
    match color {
        Some(color) if color.is_dark() => "text-tag-text placeholder-tag-text",
        _ => "text-primary",
    }
}

/// Inline background style for `color`.
#[must_use]
pub fn background_style(color: Option<&LChColor>) -> Option<String> {
    color.map(|color| format!("background-color: {};", color.to_css()))
}
