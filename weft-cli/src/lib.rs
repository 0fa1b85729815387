//! Library target for the `weft` binary.
//!
//! Exposed so integration tests can exercise command internals directly;
//! the binary entry point is a thin wrapper around [`cli::run`].

pub mod cli;
pub mod commands;
pub mod logging;
