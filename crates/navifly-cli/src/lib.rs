//! NaviFly CLI library.
//!
//! Subcommand handlers and output formatting for the `navifly-cli` binary.

pub mod commands;
pub mod output;
