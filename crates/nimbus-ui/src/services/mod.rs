//! Browser-side HTTP clients implementing the core service traits.
pub(crate) mod api;
pub(crate) mod auth;
