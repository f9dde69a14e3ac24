//! # runt-sugar
//!
//! Conveniences on top of the expression algebra: an
//! [`ExpressionBuilder`] that accumulates a rule step by step, and
//! [shorthand names](shorthand) such as `last_friday` or
//! `daily_8_30am_to_9_45pm` that resolve to leaf expressions.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `ExpressionBuilder` — step-by-step rule construction.
pub mod builder;

/// Shorthand names for leaf expressions.
pub mod shorthand;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use builder::ExpressionBuilder;
pub use shorthand::{after, before, parse_shorthand, parse_time, Meridiem, Shorthand};
