//! Engine-level commands: everything that writes to a collaborator

use ledgerpress_core::errors::{CmsError, ExError, ExErrorKind};
use ledgerpress_core::ledger::{ExecutionOutcome, Signer};
use ledgerpress_core::rules::same_address;
use ledgerpress_core::{build_intent, Command};
use ledgerpress_core_types::RequestContext;
use ledgerpress_store::errors::Result;

use super::executor::TransactionExecutor;
use super::instrument::observed;
use super::{page_index, EngineContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Build, check and submit a state-changing cms operation
    Submit(Command),
    /// Store a blob and return its content id
    PublishContent { bytes: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommandResult {
    Submitted(ExecutionOutcome),
    ContentPublished { content_id: String },
}

/// Apply an engine command
///
/// For `Submit` the intent is built (and so validated) before anything
/// touches the network. With slug enforcement on, page commands are checked
/// against the site's scanned pages before submission. Submissions need a
/// signer; content publication does not.
///
/// # Errors
/// * Validation or authorization errors - no collaborator was called
/// * `Unauthorised` - `Submit` without a signer
/// * `DuplicateSlug` - the optimistic slug check found a clash
/// * `TransactionFailed` - the ledger rejected the intent
/// * Service kinds - transport or decode failures
pub async fn apply_engine_command(
    cmd: EngineCommand,
    ctx: EngineContext<'_>,
    signer: Option<&dyn Signer>,
    rc: &RequestContext,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::Submit(command) => {
            let op = command.entry_function();
            observed(op, rc, async {
                let intent = build_intent(ctx.config, &command)?;
                let signer = signer.ok_or_else(|| {
                    ExError::new(ExErrorKind::Unauthorised)
                        .with_message("a signer is required to submit a transaction")
                })?;
                if ctx.config.enforce_unique_slugs() {
                    ensure_slug_free(ctx, &command).await?;
                }
                let outcome = TransactionExecutor::new(ctx.ledger)
                    .execute(&intent, signer, rc)
                    .await?;
                Ok(EngineCommandResult::Submitted(outcome))
            })
            .await
        }

        EngineCommand::PublishContent { bytes } => {
            observed("content_publish", rc, async {
                let content_id = ctx.blobs.put(bytes).await?;
                Ok(EngineCommandResult::ContentPublished { content_id })
            })
            .await
        }
    }
}

/// Optimistic per-site slug check; the ledger stays the authority
async fn ensure_slug_free(ctx: EngineContext<'_>, command: &Command) -> Result<()> {
    let (site_id, slug, own_page) = match command {
        Command::CreatePage { site_id, slug, .. } => (site_id, slug, None),
        Command::UpdatePageMetadata {
            site_id,
            page_id,
            slug,
            ..
        } => (site_id, slug, Some(page_id.as_str())),
        _ => return Ok(()),
    };

    let existing = page_index::find_page_by_slug(ctx.ledger, ctx.config, site_id, slug).await?;
    match existing {
        Some(page) if !own_page.is_some_and(|id| same_address(id, &page.id)) => {
            Err(CmsError::DuplicateSlug {
                site_id: site_id.clone(),
                slug: slug.clone(),
                page_id: page.id,
            }
            .into())
        }
        _ => Ok(()),
    }
}
