//! `weft config` subcommand implementations.

pub mod check;
pub mod init;
pub mod print;

/// Report output format shared by `check` and `print`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
