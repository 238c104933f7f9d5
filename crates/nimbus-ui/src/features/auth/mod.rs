//! Account forms: forgot-password page and change-password modal.

pub mod actions;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
