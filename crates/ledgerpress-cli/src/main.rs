//! ledgerpress CLI
//!
//! Command-line client for the ledgerpress cms: local validation and intent
//! previews, plus reads against a live ledger and blob store.

use clap::{Parser, Subcommand};
use ledgerpress_core::logging_facility::{init, Profile};

mod commands;
mod context;

#[derive(Debug, Parser)]
#[command(name = "ledgerpress")]
#[command(about = "ledgerpress - cms client for an object ledger", long_about = None)]
struct Cli {
    /// Logging profile: dev or json
    #[arg(long, global = true, default_value = "json")]
    log: Profile,

    #[command(flatten)]
    conn: context::ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Slug helpers
    Slug(commands::slug::SlugArgs),
    /// Check a name, slug or address
    Validate(commands::validate::ValidateArgs),
    /// Print the intent a command would submit
    Intent(commands::intent::IntentArgs),
    /// Site reads
    Site(commands::site::SiteArgs),
    /// Page reads
    Page(commands::records::PageArgs),
    /// Template reads
    Template(commands::records::TemplateArgs),
    /// Registry counters
    Stats,
    /// Content store operations
    Content(commands::content::ContentArgs),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init(cli.log);

    let result = match cli.command {
        Commands::Slug(args) => commands::slug::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Intent(args) => commands::intent::execute(args, &cli.conn),
        Commands::Site(args) => commands::site::execute(args, &cli.conn).await,
        Commands::Page(args) => commands::records::execute_page(args, &cli.conn).await,
        Commands::Template(args) => commands::records::execute_template(args, &cli.conn).await,
        Commands::Stats => commands::records::execute_stats(&cli.conn).await,
        Commands::Content(args) => commands::content::execute(args, &cli.conn).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
