//! Claims resubmission CLI library.
//!
//! Exposed as a library so integration tests can drive the command layer
//! without spawning the binary.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
