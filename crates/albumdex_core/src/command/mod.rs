//! Line-oriented command protocol.
//!
//! # Responsibility
//! - Parse comma-separated console commands.
//! - Drive a collection session and render its console messages.
//!
//! # Invariants
//! - Malformed input is a typed error, never a panic.

pub mod parser;
pub mod session;
