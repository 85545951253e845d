//! Utility modules shared by the renderer, generators and the CLI.

pub mod hash;
pub mod html;
pub mod mime;
pub mod path;
