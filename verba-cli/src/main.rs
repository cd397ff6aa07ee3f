//! verba command-line entry point

use clap::Parser;
use verba_cli::commands::{Commands, ListCommands};
use verba_cli::CliResult;

/// Text statistics and readability scores
#[derive(Debug, Parser)]
#[command(name = "verba", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => args.execute(),
        Commands::Syllables(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => {
            match subcommand {
                ListCommands::Formats => {
                    println!("Available output formats:");
                    println!("  text      - Aligned plain-text report");
                    println!("  json      - JSON array with one summary per input");
                    println!("  markdown  - Markdown tables");
                }
            }
            Ok(())
        }
    }
}
