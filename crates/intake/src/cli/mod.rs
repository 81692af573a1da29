//! CLI module for Intake
//!
//! Subcommand runners. The full-screen programs live in `tui`; everything
//! else prints to the console and exits.

pub mod error;
pub mod output;

pub mod add;
pub mod config;
pub mod dump;
pub mod list;

pub mod tui;

pub use error::HelpfulError;
