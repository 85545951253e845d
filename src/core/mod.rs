//! Core types - pure abstractions shared across the codebase.

mod lang;
mod page;
mod state;

pub use lang::Language;
pub use page::{PageId, Route, output_file};
pub use state::{is_shutdown, register_server, setup_shutdown_handler};
