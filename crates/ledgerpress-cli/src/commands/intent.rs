//! Intent command
//!
//! Usage: ledgerpress intent <COMMAND_JSON | -> [--signer <ADDRESS>]
//!
//! Builds the intent locally and prints it with the clock bound to the
//! ledger's shared clock object. Nothing is signed or submitted.

use std::io::Read;

use clap::Args;
use ledgerpress_core::ledger::CLOCK_OBJECT_ID;
use ledgerpress_core::{build_intent, Command};

use crate::context::{print_json, CliResult, ConnectionArgs};

#[derive(Debug, Args)]
pub struct IntentArgs {
    /// Command as JSON, e.g. `{"op":"toggle_page_published","site_id":"0x..","page_id":"0x.."}`;
    /// `-` reads it from stdin
    pub command: String,
}

pub fn execute(args: IntentArgs, conn: &ConnectionArgs) -> CliResult {
    let raw = if args.command == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        args.command
    };
    let command: Command = serde_json::from_str(&raw)?;

    let config = conn.cms_config()?;
    let intent = build_intent(&config, &command)?;
    tracing::debug!(op = intent.op.as_str(), steps = intent.steps.len(), "intent built");
    print_json(&intent.with_clock(CLOCK_OBJECT_ID))
}
