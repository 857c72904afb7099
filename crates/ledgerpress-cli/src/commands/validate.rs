//! Validate command
//!
//! Usage: ledgerpress validate <name|slug|address> <VALUE>

use clap::{Args, Subcommand};
use ledgerpress_core::{validate_address, validate_name, validate_slug};

use crate::context::CliResult;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(subcommand)]
    pub command: ValidateCommand,
}

#[derive(Debug, Subcommand)]
pub enum ValidateCommand {
    /// Site or template name
    Name { value: String },
    /// Page slug
    Slug { value: String },
    /// Object id or account address
    Address { value: String },
}

pub fn execute(args: ValidateArgs) -> CliResult {
    let (kind, value) = match &args.command {
        ValidateCommand::Name { value } => {
            validate_name(value)?;
            ("name", value)
        }
        ValidateCommand::Slug { value } => {
            validate_slug(value)?;
            ("slug", value)
        }
        ValidateCommand::Address { value } => {
            validate_address("address", value)?;
            ("address", value)
        }
    };
    println!("✓ valid {}: {}", kind, value);
    Ok(())
}
