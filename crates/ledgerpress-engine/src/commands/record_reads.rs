//! Single-record reads by id

use ledgerpress_core::authz;
use ledgerpress_core::hydration::{
    hydrate_page, hydrate_site, hydrate_stats, hydrate_template, ObjectKind,
};
use ledgerpress_core::ledger::LedgerClient;
use ledgerpress_core::rules::{canonical_address, is_valid_address};
use ledgerpress_core::{CmsConfig, Page, Site, Stats, Template};
use ledgerpress_store::errors::Result;

/// Ids are read in canonical form, so `0X..` and unprefixed ids resolve too.
///
/// # Errors
/// `InvalidAddress` before any ledger call; ledger or malformed-object errors after.
pub async fn get_site(
    ledger: &dyn LedgerClient,
    config: &CmsConfig,
    site_id: &str,
) -> Result<Option<Site>> {
    let site_id = canonical_address("site_id", site_id)?;
    match ledger.read_object(&site_id).await? {
        Some(object) => Ok(hydrate_site(config.package_id(), &object)?),
        None => Ok(None),
    }
}

/// # Errors
/// Same as `get_site`.
pub async fn get_page(
    ledger: &dyn LedgerClient,
    config: &CmsConfig,
    page_id: &str,
) -> Result<Option<Page>> {
    let page_id = canonical_address("page_id", page_id)?;
    match ledger.read_object(&page_id).await? {
        Some(object) => Ok(hydrate_page(config.package_id(), &object)?),
        None => Ok(None),
    }
}

/// # Errors
/// Same as `get_site`.
pub async fn get_template(
    ledger: &dyn LedgerClient,
    config: &CmsConfig,
    template_id: &str,
) -> Result<Option<Template>> {
    let template_id = canonical_address("template_id", template_id)?;
    match ledger.read_object(&template_id).await? {
        Some(object) => Ok(hydrate_template(config.package_id(), &object)?),
        None => Ok(None),
    }
}

/// Counters of the configured registry
///
/// # Errors
/// Ledger or malformed-object errors.
pub async fn get_stats(ledger: &dyn LedgerClient, config: &CmsConfig) -> Result<Option<Stats>> {
    match ledger.read_object(config.registry_id()).await? {
        Some(object) => Ok(hydrate_stats(config.package_id(), &object)?),
        None => Ok(None),
    }
}

/// Sites whose owner capability objects `owner` holds
///
/// Owned objects of another type are skipped; a site that fails to
/// reconstruct is an error.
///
/// # Errors
/// `InvalidAddress` for a bad owner; ledger or malformed-object errors.
pub async fn list_user_sites(
    ledger: &dyn LedgerClient,
    config: &CmsConfig,
    owner: &str,
) -> Result<Vec<Site>> {
    let owner = canonical_address("owner", owner)?;
    let type_tag = config.type_tag(ObjectKind::Site.struct_name());
    let objects = ledger.list_owned_objects(&owner, &type_tag).await?;

    let mut sites = Vec::with_capacity(objects.len());
    for object in &objects {
        if let Some(site) = hydrate_site(config.package_id(), object)? {
            sites.push(site);
        }
    }
    Ok(sites)
}

/// Whether `address` may edit pages of `site_id`
///
/// Ids that fail the address grammar and absent sites answer `false`.
///
/// # Errors
/// Transport and malformed-object errors still propagate.
pub async fn is_authorized(
    ledger: &dyn LedgerClient,
    config: &CmsConfig,
    site_id: &str,
    address: &str,
) -> Result<bool> {
    if !is_valid_address(site_id) || !is_valid_address(address) {
        return Ok(false);
    }
    let site = get_site(ledger, config, site_id).await?;
    Ok(site.is_some_and(|s| authz::authorized(&s, address)))
}
