//! Command-line interface for the weft toolchain.

use clap::{Parser, Subcommand};

use crate::commands::{check, init, print};

#[derive(Parser)]
#[command(name = "weft", version, about = "Weft utility CSS generator toolchain")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build configuration commands.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Load a configuration file and check it structurally.
    Check(check::CheckArgs),
    /// Print the resolved configuration as pretty JSON.
    Print(print::PrintArgs),
    /// Scaffold a default weft.config.json.
    Init(init::InitArgs),
}

/// Parse arguments and dispatch.
///
/// # Errors
///
/// Returns an error when a command fails; the binary maps this to exit
/// code 1. A failed `check` surfaces here after the report is printed.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);

    match cli.command {
        Command::Config(command) => match command {
            ConfigCommand::Check(args) => check::run(&args),
            ConfigCommand::Print(args) => print::run(&args),
            ConfigCommand::Init(args) => init::run(&args),
        },
    }
}
