//! Samples gallery: template tiles that start project creation.
//!
//! # Design
//! - Tiles only track their spinner; the shell performs the backend call.

pub mod actions;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
