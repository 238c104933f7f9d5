//! Asset tree feature: directory rows, inline rename and placeholder folders.
//!
//! # Design
//! - The tree lives in the app store; rows mutate it only through sinks.
//! - Backend calls are optimistic and roll back on failure.

pub mod actions;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
