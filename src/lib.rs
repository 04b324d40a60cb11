//! `readage` library crate.
//!
//! The binary (`readage`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future server/batch front-ends)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod lex;
pub mod metrics;
pub mod report;
pub mod syllable;
