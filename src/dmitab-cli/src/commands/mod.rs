//! Command handlers for the dmitab CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod dump;
pub mod types;
