//! Site command
//!
//! Usage: ledgerpress site <get|pages|events|authorized|owned> ...

use clap::{Args, Subcommand};

use crate::context::{print_json, CliResult, ConnectionArgs};

#[derive(Debug, Args)]
pub struct SiteArgs {
    #[command(subcommand)]
    pub command: SiteCommand,
}

#[derive(Debug, Subcommand)]
pub enum SiteCommand {
    /// Show one site
    Get { site_id: String },
    /// List pages found in the newest page-creation events
    Pages {
        site_id: String,
        /// Events to scan (default from configuration)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show the site's event history, newest first
    Events {
        site_id: String,
        #[arg(long, default_value_t = 50)]
        page_size: usize,
    },
    /// Check whether an address may edit the site
    Authorized { site_id: String, address: String },
    /// List sites owned by an address
    Owned { owner: String },
}

pub async fn execute(args: SiteArgs, conn: &ConnectionArgs) -> CliResult {
    let cms = conn.connect()?;
    match args.command {
        SiteCommand::Get { site_id } => match cms.get_site(&site_id).await? {
            Some(site) => print_json(&site),
            None => Err(format!("site {} not found", site_id).into()),
        },
        SiteCommand::Pages { site_id, page_size } => {
            let page_size = page_size.unwrap_or(cms.config().event_page_size());
            let scan = cms.list_site_pages_with(&site_id, page_size).await?;
            if !scan.is_complete() {
                eprintln!(
                    "warning: scanned {} events; older pages may be missing",
                    scan.window.events_scanned
                );
            }
            print_json(&scan)
        }
        SiteCommand::Events { site_id, page_size } => {
            print_json(&cms.list_site_events(&site_id, page_size).await?)
        }
        SiteCommand::Authorized { site_id, address } => {
            let allowed = cms.is_authorized(&site_id, &address).await?;
            println!("{}", allowed);
            Ok(())
        }
        SiteCommand::Owned { owner } => print_json(&cms.list_user_sites(&owner).await?),
    }
}
