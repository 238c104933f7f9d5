//! Service context shared with every component.
//!
//! # Design
//! - Create exactly one backend and one auth client per app boot.
//! - Components depend on the core traits, never on the HTTP clients.

use crate::core::auth::AuthService;
use crate::core::backend::{Backend, LocalBackend};
use crate::models::BackendType;
use crate::services::api::ApiClient;
use crate::services::auth::AuthClient;
use std::rc::Rc;

/// Shared service handles for UI components.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Storage backend selected at boot.
    pub backend: Rc<dyn Backend>,
    /// Authentication provider.
    pub auth: Rc<dyn AuthService>,
}

impl ApiCtx {
    /// Build the services for `backend_type` against `base_url`.
    pub(crate) fn new(backend_type: BackendType, base_url: &str) -> Self {
        let backend: Rc<dyn Backend> = match backend_type {
            BackendType::Remote => Rc::new(ApiClient::new(base_url)),
            BackendType::Local => Rc::new(LocalBackend),
        };
        Self {
            backend,
            auth: Rc::new(AuthClient::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend) && Rc::ptr_eq(&self.auth, &other.auth)
    }
}
