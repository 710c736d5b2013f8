use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::checks::{create::CreateArgs, info::InfoArgs, list::ListArgs};

#[derive(Parser)]
#[command(
    name = "checkrun",
    bin_name = "ckr",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Report a completed, successful check run for a commit
    Create(CreateArgs),

    /// List the check runs for a commit
    List(ListArgs),

    /// Show the repository API endpoint and current branch
    Info(InfoArgs),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
