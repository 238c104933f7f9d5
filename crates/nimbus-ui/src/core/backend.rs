//! Backend service seam consumed by the asset and label features.
//!
//! # Design
//! - Features depend on the [`Backend`] trait only; HTTP lives in `services`.
//! - Futures are `?Send`: the UI runs on a single-threaded executor.
//! - Every operation returns a typed [`BackendError`]; callers roll back and
//!   notify, nothing is retried.

use crate::models::{
    Asset, AssetId, BackendType, CreateDirectoryRequest, CreateProjectRequest, CreateTagRequest,
    CreatedDirectory, Label, LabelName, UpdateDirectoryRequest, UpdatedDirectory,
};
use async_trait::async_trait;
use thiserror::Error;

/// Failure surfaced by a backend operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Transport or server failure.
    #[error("could not {operation}: {detail}")]
    Request {
        /// Human-readable operation, e.g. `rename directory 'Reports'`.
        operation: String,
        /// Underlying failure message.
        detail: String,
    },
    /// The backend does not implement the operation.
    #[error("the {backend} backend does not support {operation}")]
    Unsupported {
        /// Backend flavour that rejected the call.
        backend: &'static str,
        /// Operation name.
        operation: &'static str,
    },
}

impl BackendError {
    /// Build a [`BackendError::Request`] from any displayable cause.
    pub fn request(operation: impl Into<String>, detail: impl std::fmt::Display) -> Self {
        Self::Request {
            operation: operation.into(),
            detail: detail.to_string(),
        }
    }
}

/// Operations the dashboard performs against the storage backend.
#[async_trait(?Send)]
pub trait Backend {
    /// Which backend flavour this is.
    fn backend_type(&self) -> BackendType;

    /// List the direct children of a directory (root when `None`).
    async fn list_directory(&self, parent_id: Option<&AssetId>) -> Result<Vec<Asset>, BackendError>;

    /// Create a directory.
    async fn create_directory(
        &self,
        body: CreateDirectoryRequest,
    ) -> Result<CreatedDirectory, BackendError>;

    /// Rename a directory. `previous_title` is only used for error context.
    async fn update_directory(
        &self,
        id: &AssetId,
        body: UpdateDirectoryRequest,
        previous_title: &str,
    ) -> Result<UpdatedDirectory, BackendError>;

    /// Replace the full label list of an asset. `title` is only used for error context.
    async fn associate_tag(
        &self,
        id: &AssetId,
        labels: &[LabelName],
        title: &str,
    ) -> Result<(), BackendError>;

    /// List the organization's label catalog.
    async fn list_tags(&self) -> Result<Vec<Label>, BackendError>;

    /// Create a catalog label.
    async fn create_tag(&self, body: CreateTagRequest) -> Result<Label, BackendError>;

    /// Create a project, optionally from a template.
    async fn create_project(&self, body: CreateProjectRequest) -> Result<Asset, BackendError>;
}

/// Backend for projects stored on the user's machine.
///
/// Directories and labels do not exist there, so those operations fail with
/// [`BackendError::Unsupported`]; callers check [`Backend::backend_type`] first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalBackend;

impl LocalBackend {
    const fn unsupported(operation: &'static str) -> BackendError {
        BackendError::Unsupported {
            backend: "local",
            operation,
        }
    }
}

#[async_trait(?Send)]
impl Backend for LocalBackend {
    fn backend_type(&self) -> BackendType {
        BackendType::Local
    }

    async fn list_directory(&self, _parent_id: Option<&AssetId>) -> Result<Vec<Asset>, BackendError> {
        Ok(Vec::new())
    }

    async fn create_directory(
        &self,
        _body: CreateDirectoryRequest,
    ) -> Result<CreatedDirectory, BackendError> {
        Err(Self::unsupported("creating directories"))
    }

    async fn update_directory(
        &self,
        _id: &AssetId,
        _body: UpdateDirectoryRequest,
        _previous_title: &str,
    ) -> Result<UpdatedDirectory, BackendError> {
        Err(Self::unsupported("renaming directories"))
    }

    async fn associate_tag(
        &self,
        _id: &AssetId,
        _labels: &[LabelName],
        _title: &str,
    ) -> Result<(), BackendError> {
        Err(Self::unsupported("labels"))
    }

    async fn list_tags(&self) -> Result<Vec<Label>, BackendError> {
        Ok(Vec::new())
    }

    async fn create_tag(&self, _body: CreateTagRequest) -> Result<Label, BackendError> {
        Err(Self::unsupported("labels"))
    }

    async fn create_project(&self, _body: CreateProjectRequest) -> Result<Asset, BackendError> {
        Err(Self::unsupported("creating projects from the browser"))
    }
}
