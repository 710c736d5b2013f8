mod checks;
mod cli;
mod git;
mod github;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Create(args) => checks::create::run(&args)?,
        Commands::List(args) => checks::list::run(&args)?,
        Commands::Info(args) => checks::info::run(&args)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "ckr", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Send log output to stderr. `RUST_LOG` in the environment always takes
/// precedence; `--verbose` falls back to DEBUG, everything else to WARN.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
