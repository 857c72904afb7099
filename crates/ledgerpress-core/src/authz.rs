//! Client-side authorization hints
//!
//! The ledger enforces every rule; these predicates only let callers avoid
//! submitting intents that are bound to fail.

use serde::Serialize;

use crate::model::Site;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteRole {
    Owner,
    Author,
}

/// Role of `address` on `site`; owner wins if the owner is also listed as author
///
/// Addresses compare by value, whatever their case or prefix.
pub fn role_of(site: &Site, address: &str) -> Option<SiteRole> {
    if site.is_owner(address) {
        Some(SiteRole::Owner)
    } else if site.has_author(address) {
        Some(SiteRole::Author)
    } else {
        None
    }
}

/// `address` may edit pages of `site`
pub fn authorized(site: &Site, address: &str) -> bool {
    role_of(site, address).is_some()
}

/// Only the owner manages the author set and site settings
pub fn can_manage_site(site: &Site, address: &str) -> bool {
    role_of(site, address) == Some(SiteRole::Owner)
}
