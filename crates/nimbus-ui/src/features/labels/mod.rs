//! Label feature: label management and new-label modals.
//!
//! # Design
//! - The modals are reachable only with a [`logic::LabelsAccess`] token.
//! - The catalog is owned by the app store and passed in by reference.

pub mod actions;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
