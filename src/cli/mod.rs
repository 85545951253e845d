//! Command-line interface module.

mod args;
pub mod build;
pub mod init;
pub mod inspect;
pub mod serve;
pub mod sync;

pub use args::{BuildArgs, Cli, Commands, InspectArgs, SyncArgs};
