//! # runt-core
//!
//! Core types shared across the runt-rs workspace.
//!
//! This crate provides the error hierarchy with its early-return macros and
//! the process-wide [`Settings`] (evaluation-instant override) that the
//! other crates build on.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure_field!` / `ensure_range!` macros.
pub mod errors;

/// Global library settings (evaluation instant).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationInstant, Settings};
