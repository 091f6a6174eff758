use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the relic score model from upstream design data
    Generate(cmd::generate::GenerateArgs),
    /// Build the affix id to stat name table used by `tally`
    Lookup(cmd::lookup::LookupArgs),
    /// Count sub-stat rolls for a list of affix ids
    Tally(cmd::tally::TallyArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => {
            info!("🚀 Generating relic score model...");
            cmd::generate::run(args)
        }
        Commands::Lookup(args) => cmd::lookup::run(args),
        Commands::Tally(args) => cmd::tally::run(args),
    };

    if let Err(e) = result {
        error!("❌ FATAL: {}", e);
        process::exit(1);
    }
}
