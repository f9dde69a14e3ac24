//! # runt-schedule
//!
//! A [`Schedule`] pairs temporal expressions with payloads and answers
//! "what happens on this day?" and "when does this happen within a range?".

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Schedule` — payloads keyed by temporal expressions.
pub mod schedule;

pub use schedule::Schedule;
