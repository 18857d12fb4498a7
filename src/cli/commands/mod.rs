//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`depcheck check`, `depcheck run`)
//! - Shared config and platform resolution in [`CommandContext`]
//! - Consistent global flag handling

pub mod check;
pub mod dispatcher;
pub mod run;
pub mod status;
pub mod uninstall;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
