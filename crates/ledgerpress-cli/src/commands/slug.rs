//! Slug command
//!
//! Usage: ledgerpress slug derive <TITLE>

use clap::{Args, Subcommand};
use ledgerpress_core::derive_slug;

use crate::context::CliResult;

#[derive(Debug, Args)]
pub struct SlugArgs {
    #[command(subcommand)]
    pub command: SlugCommand,
}

#[derive(Debug, Subcommand)]
pub enum SlugCommand {
    /// Derive a URL slug from a page title
    Derive {
        /// Title words; joined with single spaces
        #[arg(required = true)]
        title: Vec<String>,
    },
}

pub fn execute(args: SlugArgs) -> CliResult {
    match args.command {
        SlugCommand::Derive { title } => {
            let slug = derive_slug(&title.join(" "));
            if slug.is_empty() {
                return Err("title has no characters usable in a slug".into());
            }
            println!("{}", slug);
            Ok(())
        }
    }
}
