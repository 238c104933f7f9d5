//! Feature slices for the dashboard UI.
pub mod assets;
pub mod auth;
pub mod labels;
pub mod samples;
