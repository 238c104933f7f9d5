//! Core, DOM-free primitives and helpers for the dashboard UI.
pub mod auth;
pub mod backend;
pub mod events;
pub mod modal;
pub mod notify;
pub mod pattern;
pub mod shortcuts;
pub mod store;
pub mod validation;
