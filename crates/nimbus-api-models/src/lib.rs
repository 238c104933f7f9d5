#![forbid(unsafe_code)]
#![warn(
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Nimbus cloud dashboard API.
//!
//! The UI encodes requests and decodes responses exclusively through these
//! types so the backend contract stays in one place.

use std::fmt;

use serde::{Deserialize, Serialize};

/// RFC9457-compatible problem document surfaced on validation/runtime errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// Most specific human-readable message carried by the document.
    #[must_use]
    pub fn message(&self) -> &str {
        self.detail.as_deref().unwrap_or(&self.title)
    }
}

/// Storage backend flavour the dashboard is talking to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BackendType {
    /// Project manager running on the user's machine.
    Local,
    /// Cloud backend with directories, labels and organizations.
    Remote,
}

impl BackendType {
    /// Stable string form used in preferences.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }

    /// Parse the stable string form, returning `None` for unknown values.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "local" => Some(Self::Local),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }
}

/// Server-assigned asset identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct AssetId(pub String);

impl AssetId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique label name; doubles as the catalog key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct LabelName(pub String);

impl LabelName {
    /// Wrap a raw label name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw label name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LabelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LabelName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Server-assigned label identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct LabelId(pub String);

/// Color expressed in the LCh color space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LChColor {
    /// Perceived lightness, 0-100.
    pub lightness: f64,
    /// Chroma (colorfulness).
    pub chroma: f64,
    /// Hue angle in degrees.
    pub hue: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional opacity, 0-1.
    pub alpha: Option<f64>,
}

/// Lightness at or below which label text switches to the contrast tone.
pub const DARK_LIGHTNESS_THRESHOLD: f64 = 50.0;

impl LChColor {
    /// Opaque color from its three components.
    #[must_use]
    pub const fn new(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self {
            lightness,
            chroma,
            hue,
            alpha: None,
        }
    }

    /// CSS color function for this color.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self.alpha {
            Some(alpha) => format!(
                "lcha({}% {} {} / {})",
                self.lightness, self.chroma, self.hue, alpha
            ),
            None => format!("lch({}% {} {})", self.lightness, self.chroma, self.hue),
        }
    }

    /// Whether text drawn on this color needs the light contrast tone.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.lightness <= DARK_LIGHTNESS_THRESHOLD
    }
}

/// Palette offered by the color picker.
pub const COLORS: [LChColor; 12] = [
    LChColor::new(50.0, 66.0, 7.0),
    LChColor::new(50.0, 66.0, 34.0),
    LChColor::new(80.0, 85.0, 65.0),
    LChColor::new(70.0, 75.0, 105.0),
    LChColor::new(50.0, 66.0, 135.0),
    LChColor::new(50.0, 66.0, 160.0),
    LChColor::new(50.0, 66.0, 190.0),
    LChColor::new(50.0, 66.0, 225.0),
    LChColor::new(50.0, 66.0, 260.0),
    LChColor::new(50.0, 66.0, 295.0),
    LChColor::new(50.0, 66.0, 330.0),
    LChColor::new(22.0, 13.0, 252.0),
];

/// A label in the organization-wide catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Label {
    /// Server-assigned identifier.
    pub id: LabelId,
    /// Unique label name, shown verbatim.
    pub value: LabelName,
    /// Chip color.
    pub color: LChColor,
}

/// Kind of entity shown in the asset tree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// Folder that may contain other assets.
    Directory,
    /// Runnable project.
    Project,
    /// Uploaded file.
    File,
}

/// A directory, project or file in the dashboard tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    /// Server-assigned identifier.
    pub id: AssetId,
    #[serde(rename = "type")]
    /// Entity kind.
    pub kind: AssetType,
    /// Display title; unique among sibling directories.
    pub title: String,
    /// Identifier of the containing directory.
    pub parent_id: AssetId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Labels attached to the asset, when the backend supports them.
    pub labels: Option<Vec<LabelName>>,
}

impl Asset {
    /// Whether this asset is a directory.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self.kind, AssetType::Directory)
    }

    /// Labels attached to the asset, empty when absent.
    #[must_use]
    pub fn label_names(&self) -> &[LabelName] {
        self.labels.as_deref().unwrap_or(&[])
    }
}

/// Body for `POST /directories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateDirectoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Parent directory; root when absent.
    pub parent_id: Option<AssetId>,
    /// Title of the new directory.
    pub title: String,
}

/// Response of `POST /directories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedDirectory {
    /// Server-assigned identifier.
    pub id: AssetId,
    /// Containing directory.
    pub parent_id: AssetId,
    /// Title as stored by the server.
    pub title: String,
}

/// Body for `PUT /directories/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateDirectoryRequest {
    /// New title.
    pub title: String,
}

/// Response of `PUT /directories/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatedDirectory {
    /// Directory identifier.
    pub id: AssetId,
    /// Containing directory.
    pub parent_id: AssetId,
    /// Title as stored by the server.
    pub title: String,
}

/// Body for `PATCH /assets/{id}/labels`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssociateTagRequest {
    /// Full replacement list of label names.
    pub labels: Vec<LabelName>,
}

/// Body for `POST /tags`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTagRequest {
    /// Label name.
    pub value: LabelName,
    /// Label color.
    pub color: LChColor,
}

/// Body for `POST /projects`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateProjectRequest {
    /// Project name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Template to instantiate; blank project when absent.
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Parent directory; root when absent.
    pub parent_id: Option<AssetId>,
}

/// Response body listing the contents of a directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryListing {
    /// Direct children of the listed directory.
    pub assets: Vec<Asset>,
}

/// Response body listing the label catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagListing {
    /// Every label visible to the organization.
    pub tags: Vec<Label>,
}

/// Body for `POST /auth/forgot-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    /// Address that receives the reset link.
    pub email: String,
}

/// Body for `POST /auth/change-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    /// Current password.
    pub old_password: String,
    /// Replacement password.
    pub new_password: String,
}
