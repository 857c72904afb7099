//! Event-indexed scans
//!
//! Sites do not list their pages on the ledger. Pages are found by scanning
//! the page-creation event stream newest-first, one bounded page at a time,
//! and keeping events whose payload names the site. Each hit is resolved
//! through the record reconstructor.

use futures::future::try_join_all;
use futures::stream::{self, StreamExt, TryStreamExt};
use ledgerpress_core::hydration::{decode_event, hydrate_page, EventKind};
use ledgerpress_core::ledger::{EventOrder, EventQuery, EventRecord, LedgerClient};
use ledgerpress_core::rules::{canonical_address, same_address};
use ledgerpress_core::{CmsConfig, CmsError, CmsEvent, ExError, Page};
use ledgerpress_store::errors::Result;

use super::read_tools::{completeness_of, Completeness, ScanResult, ScanWindow};

/// Page objects read concurrently while resolving one scan
pub const PAGE_READ_CONCURRENCY: usize = 8;

/// Canonical site id, or a validation error for the id or the window
fn check_window(site_id: &str, page_size: usize) -> Result<String> {
    let site_id = canonical_address("site_id", site_id)?;
    if page_size == 0 {
        return Err(CmsError::InvalidArgument {
            field: "page_size".to_string(),
            reason: "must be greater than zero".to_string(),
        }
        .into());
    }
    Ok(site_id)
}

fn names_site(record: &EventRecord, site_id: &str) -> bool {
    record
        .payload
        .get("site_id")
        .and_then(|v| v.as_str())
        .is_some_and(|id| same_address(id, site_id))
}

async fn fetch_stream(
    ledger: &dyn LedgerClient,
    config: &CmsConfig,
    kind: EventKind,
    page_size: usize,
) -> Result<Vec<EventRecord>> {
    ledger
        .query_events(&EventQuery {
            event_type: config.type_tag(kind.struct_name()),
            page_size,
            order: EventOrder::Descending,
        })
        .await
}

/// Pages of `site_id` found in the newest `page_size` page-creation events
///
/// Pages that no longer exist are skipped. Malformed page objects and
/// transport failures are errors.
///
/// # Errors
/// `InvalidAddress` for a bad site id and `InvalidArgument` for a zero page
/// size, both before any ledger call; otherwise
/// whatever the ledger or reconstructor reports.
pub async fn scan_site_pages(
    ledger: &dyn LedgerClient,
    config: &CmsConfig,
    site_id: &str,
    page_size: usize,
) -> Result<ScanResult<Page>> {
    let site_id = check_window(site_id, page_size)?;

    let records = fetch_stream(ledger, config, EventKind::PageCreated, page_size).await?;
    let window = ScanWindow {
        page_size,
        events_scanned: records.len(),
    };

    let mut page_ids = Vec::new();
    let mut skipped = 0;
    for record in records.iter().filter(|r| names_site(r, &site_id)) {
        match decode_event(record) {
            Ok(Some(CmsEvent::PageCreated(event))) => page_ids.push(event.page_id),
            Ok(_) | Err(_) => {
                tracing::warn!(
                    site_id = site_id.as_str(),
                    tx_digest = record.tx_digest.as_str(),
                    "undecodable page-creation event skipped"
                );
                skipped += 1;
            }
        }
    }

    let package_id = config.package_id();
    let resolved: Vec<Option<Page>> = stream::iter(page_ids)
        .map(|page_id| async move {
            let page = match ledger.read_object(&page_id).await? {
                Some(object) => hydrate_page(package_id, &object)?,
                None => None,
            };
            Ok::<_, ExError>(page)
        })
        .buffered(PAGE_READ_CONCURRENCY)
        .try_collect()
        .await?;

    let found = resolved.len();
    let items: Vec<Page> = resolved.into_iter().flatten().collect();
    skipped += found - items.len();

    Ok(ScanResult {
        items,
        completeness: completeness_of(page_size, window.events_scanned),
        window,
        skipped,
    })
}

/// Page of `site_id` currently using `slug`, within the scanned window
///
/// # Errors
/// Same as `scan_site_pages`.
pub async fn find_page_by_slug(
    ledger: &dyn LedgerClient,
    config: &CmsConfig,
    site_id: &str,
    slug: &str,
) -> Result<Option<Page>> {
    let scan = scan_site_pages(ledger, config, site_id, config.event_page_size()).await?;
    Ok(scan.items.into_iter().find(|p| p.slug == slug))
}

/// Creation, page and author events of `site_id`, newest first
///
/// Each stream is scanned with its own bounded page; the result is partial
/// if any stream filled its page.
///
/// # Errors
/// Same validation as `scan_site_pages`; otherwise ledger errors.
pub async fn scan_site_events(
    ledger: &dyn LedgerClient,
    config: &CmsConfig,
    site_id: &str,
    page_size: usize,
) -> Result<ScanResult<CmsEvent>> {
    let site_id = check_window(site_id, page_size)?;

    let kinds = [
        EventKind::SiteCreated,
        EventKind::PageCreated,
        EventKind::AuthorAdded,
    ];
    let streams = try_join_all(
        kinds
            .iter()
            .map(|kind| fetch_stream(ledger, config, *kind, page_size)),
    )
    .await?;

    let mut completeness = Completeness::Complete;
    let mut events_scanned = 0;
    let mut skipped = 0;
    let mut items = Vec::new();
    for records in &streams {
        events_scanned += records.len();
        if completeness_of(page_size, records.len()) == Completeness::PossiblyPartial {
            completeness = Completeness::PossiblyPartial;
        }
        for record in records.iter().filter(|r| names_site(r, &site_id)) {
            match decode_event(record) {
                Ok(Some(event)) => items.push(event),
                Ok(None) | Err(_) => skipped += 1,
            }
        }
    }
    items.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

    Ok(ScanResult {
        items,
        completeness,
        window: ScanWindow {
            page_size,
            events_scanned,
        },
        skipped,
    })
}
