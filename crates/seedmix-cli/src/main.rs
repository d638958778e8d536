//! CLI frontend for seedmix, the multi-game seed combiner.

mod commands;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "seedmix",
    about = "seedmix — combine player YAMLs into one weighted random seed",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge source YAMLs into one combined YAML
    Merge {
        /// Source files, each optionally followed by `=WEIGHT` (default weight 1)
        #[arg(required = true, value_name = "SOURCE[=WEIGHT]")]
        sources: Vec<String>,

        /// Name of the generated YAML (default: MyRandomSeed)
        #[arg(short, long)]
        name: Option<String>,

        /// Output file path (default: `<name>.yaml`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the combined YAML instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Parse source YAMLs and list the slots and games they contain
    Check {
        /// Source files to inspect
        #[arg(required = true)]
        sources: Vec<PathBuf>,
    },

    /// Launch the interactive merge editor
    Tui {
        /// Source files to start with
        sources: Vec<PathBuf>,

        /// Name of the generated YAML (default: MyRandomSeed)
        #[arg(short, long)]
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Log output would draw over the alternate screen.
    if !matches!(cli.command, Commands::Tui { .. }) {
        env_logger::init();
    }

    let result = match cli.command {
        Commands::Merge {
            sources,
            name,
            output,
            stdout,
        } => commands::merge::run(&sources, name.as_deref(), output.as_deref(), stdout),
        Commands::Check { sources } => commands::check::run(&sources),
        Commands::Tui { sources, name } => {
            commands::tui::session(&sources).and_then(|session| tui::run(session, name))
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
