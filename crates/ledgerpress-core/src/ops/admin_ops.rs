//! Administrator-only operations
//!
//! Both require the administrator capability in the configuration. Its
//! absence is an authorization failure, reported before any argument is
//! looked at.

use super::single_call;
use crate::config::CmsConfig;
use crate::errors::{CmsError, Result};
use crate::intent::{Argument, Intent};
use crate::rules::validate_address;

fn admin_cap<'a>(config: &'a CmsConfig, op: &str) -> Result<&'a str> {
    config
        .admin_cap_id()
        .ok_or_else(|| CmsError::AdminCapabilityMissing { op: op.to_string() })
}

/// # Errors
/// `AdminCapabilityMissing`, then `InvalidAddress` for the site.
pub fn toggle_site_suspension(config: &CmsConfig, site_id: &str) -> Result<Intent> {
    let cap = admin_cap(config, "toggle_site_suspension")?;
    validate_address("site_id", site_id)?;

    let (intent, _) = single_call(
        config,
        "toggle_site_suspension",
        vec![Argument::object(cap), Argument::object(site_id), Argument::Clock],
    );
    Ok(intent)
}

/// Overwrite a site's name and description; `reason` lands in the ledger event
///
/// # Errors
/// `AdminCapabilityMissing`, then `InvalidAddress` for the site.
pub fn admin_emergency_update(
    config: &CmsConfig,
    site_id: &str,
    name: &str,
    description: &str,
    reason: &str,
) -> Result<Intent> {
    let cap = admin_cap(config, "admin_emergency_update_site")?;
    validate_address("site_id", site_id)?;

    let (intent, _) = single_call(
        config,
        "admin_emergency_update_site",
        vec![
            Argument::object(cap),
            Argument::object(site_id),
            Argument::string(name),
            Argument::string(description),
            Argument::string(reason),
            Argument::Clock,
        ],
    );
    Ok(intent)
}
