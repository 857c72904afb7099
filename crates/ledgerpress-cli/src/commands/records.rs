//! Page, template and stats reads
//!
//! Usage:
//!   ledgerpress page get <PAGE_ID>
//!   ledgerpress template get <TEMPLATE_ID>
//!   ledgerpress stats

use clap::{Args, Subcommand};

use crate::context::{print_json, CliResult, ConnectionArgs};

#[derive(Debug, Args)]
pub struct PageArgs {
    #[command(subcommand)]
    pub command: PageCommand,
}

#[derive(Debug, Subcommand)]
pub enum PageCommand {
    /// Show one page
    Get { page_id: String },
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateCommand,
}

#[derive(Debug, Subcommand)]
pub enum TemplateCommand {
    /// Show one template
    Get { template_id: String },
}

pub async fn execute_page(args: PageArgs, conn: &ConnectionArgs) -> CliResult {
    let cms = conn.connect()?;
    match args.command {
        PageCommand::Get { page_id } => match cms.get_page(&page_id).await? {
            Some(page) => print_json(&page),
            None => Err(format!("page {} not found", page_id).into()),
        },
    }
}

pub async fn execute_template(args: TemplateArgs, conn: &ConnectionArgs) -> CliResult {
    let cms = conn.connect()?;
    match args.command {
        TemplateCommand::Get { template_id } => match cms.get_template(&template_id).await? {
            Some(template) => print_json(&template),
            None => Err(format!("template {} not found", template_id).into()),
        },
    }
}

pub async fn execute_stats(conn: &ConnectionArgs) -> CliResult {
    let cms = conn.connect()?;
    match cms.get_stats().await? {
        Some(stats) => print_json(&stats),
        None => Err("registry object not found".into()),
    }
}
