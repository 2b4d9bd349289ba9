mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wireup")]
#[command(about = "Plan convention-based service registrations from catalog manifests", long_about = None)]
struct Cli {
    /// Log every registration decision
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the resolvers over one or more catalogs and print the bindings
    Plan(commands::plan::PlanArgs),
    /// List the types declared in a catalog manifest
    Inspect {
        /// Catalog manifest (JSON)
        #[arg(long, short = 'c')]
        catalog: String,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let loaded = wireup::config::load_dotenv(std::path::Path::new("."));
    tracing::debug!(files = loaded.len(), "environment loaded");

    match cli.command {
        Commands::Plan(args) => {
            commands::plan::run(args);
        }
        Commands::Inspect { catalog, json } => {
            commands::inspect::run(catalog, json);
        }
    }
}
