use super::{registry, single_call};
use crate::config::CmsConfig;
use crate::errors::Result;
use crate::intent::{Argument, Intent};
use crate::rules::{validate_address, validate_slug};

/// Build the intent creating a page in `site_id`
///
/// The title is free text; only the slug is checked. The created page is
/// transferred to `signer`.
///
/// # Errors
/// * `InvalidSlug` - slug fails the slug grammar
/// * `InvalidAddress` - signer or site is not an address
pub fn create_page(
    config: &CmsConfig,
    signer: &str,
    site_id: &str,
    title: &str,
    slug: &str,
    content_id: &str,
) -> Result<Intent> {
    validate_slug(slug)?;
    validate_address("signer", signer)?;
    validate_address("site_id", site_id)?;

    let (mut intent, step) = single_call(
        config,
        "create_page",
        vec![
            registry(config),
            Argument::object(site_id),
            Argument::string(title),
            Argument::string(slug),
            Argument::string(content_id),
            Argument::Clock,
        ],
    );
    intent.transfer_results(step, 1, signer);
    Ok(intent)
}

/// Replace the content reference of a page
///
/// # Errors
/// `InvalidAddress` for the site or page.
pub fn update_page_content(
    config: &CmsConfig,
    site_id: &str,
    page_id: &str,
    content_id: &str,
) -> Result<Intent> {
    validate_address("site_id", site_id)?;
    validate_address("page_id", page_id)?;

    let (intent, _) = single_call(
        config,
        "update_page",
        vec![
            Argument::object(site_id),
            Argument::object(page_id),
            Argument::string(content_id),
            Argument::Clock,
        ],
    );
    Ok(intent)
}

/// # Errors
/// `InvalidSlug` first, then `InvalidAddress` for the site or page.
pub fn update_page_metadata(
    config: &CmsConfig,
    site_id: &str,
    page_id: &str,
    title: &str,
    slug: &str,
) -> Result<Intent> {
    validate_slug(slug)?;
    validate_address("site_id", site_id)?;
    validate_address("page_id", page_id)?;

    let (intent, _) = single_call(
        config,
        "update_page_metadata",
        vec![
            Argument::object(site_id),
            Argument::object(page_id),
            Argument::string(title),
            Argument::string(slug),
            Argument::Clock,
        ],
    );
    Ok(intent)
}

/// # Errors
/// `InvalidAddress` for the site or page.
pub fn toggle_page_published(config: &CmsConfig, site_id: &str, page_id: &str) -> Result<Intent> {
    validate_address("site_id", site_id)?;
    validate_address("page_id", page_id)?;

    let (intent, _) = single_call(
        config,
        "toggle_page_published",
        vec![
            Argument::object(site_id),
            Argument::object(page_id),
            Argument::Clock,
        ],
    );
    Ok(intent)
}
