//! Shared DTOs re-exported from the API models crate plus UI-only payloads.

pub use nimbus_api_models::{
    Asset, AssetId, AssetType, AssociateTagRequest, BackendType, COLORS, ChangePasswordRequest,
    CreateDirectoryRequest, CreateProjectRequest, CreateTagRequest, CreatedDirectory,
    DirectoryListing, ForgotPasswordRequest, LChColor, Label, LabelId, LabelName, ProblemDetails,
    TagListing, UpdateDirectoryRequest, UpdatedDirectory,
};

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

impl ToastKind {
    /// CSS modifier class for the toast.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}
