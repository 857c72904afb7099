//! Engine-level read-only query surface
//!
//! `apply_engine_query` is the single entry point for reads that span the
//! ledger, the blob store and the core. It never submits anything.

use ledgerpress_core::{CmsEvent, Page, Site, Stats, Template};
use ledgerpress_core_types::RequestContext;
use ledgerpress_store::errors::Result;

use super::instrument::observed;
use super::read_tools::ScanResult;
use super::{page_index, record_reads, EngineContext};

/// Read-only queries supported by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineQuery {
    SiteGet { site_id: String },
    PageGet { page_id: String },
    TemplateGet { template_id: String },
    /// Registry counters
    StatsGet,
    /// Sites owned by an address
    SiteListByOwner { owner: String },
    /// Pages of a site found in the newest `page_size` creation events
    /// (configured default when `None`)
    SiteListPages {
        site_id: String,
        page_size: Option<usize>,
    },
    /// Event history of a site, newest first
    SiteListEvents {
        site_id: String,
        page_size: Option<usize>,
    },
    SiteIsAuthorized { site_id: String, address: String },
    ContentGet { content_id: String },
}

impl EngineQuery {
    pub fn op_name(&self) -> &'static str {
        match self {
            EngineQuery::SiteGet { .. } => "site_get",
            EngineQuery::PageGet { .. } => "page_get",
            EngineQuery::TemplateGet { .. } => "template_get",
            EngineQuery::StatsGet => "stats_get",
            EngineQuery::SiteListByOwner { .. } => "site_list_by_owner",
            EngineQuery::SiteListPages { .. } => "site_list_pages",
            EngineQuery::SiteListEvents { .. } => "site_list_events",
            EngineQuery::SiteIsAuthorized { .. } => "site_is_authorized",
            EngineQuery::ContentGet { .. } => "content_get",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineQueryResult {
    Site(Option<Site>),
    Page(Option<Page>),
    Template(Option<Template>),
    Stats(Option<Stats>),
    Sites(Vec<Site>),
    Pages(ScanResult<Page>),
    Events(ScanResult<CmsEvent>),
    Authorized(bool),
    Content(Option<Vec<u8>>),
}

/// Run a read-only query
///
/// # Errors
/// Validation errors before any collaborator call; service and
/// malformed-object errors from the collaborators.
pub async fn apply_engine_query(
    query: EngineQuery,
    ctx: EngineContext<'_>,
    rc: &RequestContext,
) -> Result<EngineQueryResult> {
    let op = query.op_name();
    let EngineContext {
        config,
        ledger,
        blobs,
    } = ctx;

    observed(op, rc, async move {
        match query {
            EngineQuery::SiteGet { site_id } => record_reads::get_site(ledger, config, &site_id)
                .await
                .map(EngineQueryResult::Site),

            EngineQuery::PageGet { page_id } => record_reads::get_page(ledger, config, &page_id)
                .await
                .map(EngineQueryResult::Page),

            EngineQuery::TemplateGet { template_id } => {
                record_reads::get_template(ledger, config, &template_id)
                    .await
                    .map(EngineQueryResult::Template)
            }

            EngineQuery::StatsGet => record_reads::get_stats(ledger, config)
                .await
                .map(EngineQueryResult::Stats),

            EngineQuery::SiteListByOwner { owner } => {
                record_reads::list_user_sites(ledger, config, &owner)
                    .await
                    .map(EngineQueryResult::Sites)
            }

            EngineQuery::SiteListPages { site_id, page_size } => {
                let page_size = page_size.unwrap_or(config.event_page_size());
                let scan = page_index::scan_site_pages(ledger, config, &site_id, page_size).await?;
                tracing::debug!(
                    site_id = site_id.as_str(),
                    events_scanned = scan.window.events_scanned,
                    result_len = scan.items.len(),
                    completeness = ?scan.completeness,
                    "site pages scanned"
                );
                Ok(EngineQueryResult::Pages(scan))
            }

            EngineQuery::SiteListEvents { site_id, page_size } => {
                let page_size = page_size.unwrap_or(config.event_page_size());
                page_index::scan_site_events(ledger, config, &site_id, page_size)
                    .await
                    .map(EngineQueryResult::Events)
            }

            EngineQuery::SiteIsAuthorized { site_id, address } => {
                record_reads::is_authorized(ledger, config, &site_id, &address)
                    .await
                    .map(EngineQueryResult::Authorized)
            }

            EngineQuery::ContentGet { content_id } => blobs
                .get(&content_id)
                .await
                .map(EngineQueryResult::Content),
        }
    })
    .await
}
