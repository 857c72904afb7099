use super::{registry, single_call};
use crate::config::{CmsConfig, DEFAULT_TEMPLATE_ID};
use crate::errors::Result;
use crate::intent::{Argument, Intent};
use crate::rules::{validate_address, validate_name};

/// Objects `create_site` returns: the site and its owner capability
const CREATE_SITE_RESULTS: usize = 2;

/// Build the intent creating a site owned by `signer`
///
/// The created site and owner capability are transferred to `signer` in
/// the same intent.
///
/// # Errors
/// * `InvalidName` - name fails the name grammar
/// * `InvalidAddress` - signer is not an address
pub fn create_site(
    config: &CmsConfig,
    signer: &str,
    name: &str,
    description: &str,
    template_id: Option<&str>,
) -> Result<Intent> {
    validate_name(name)?;
    validate_address("signer", signer)?;

    let (mut intent, step) = single_call(
        config,
        "create_site",
        vec![
            registry(config),
            Argument::string(name),
            Argument::string(description),
            Argument::string(template_id.unwrap_or(DEFAULT_TEMPLATE_ID)),
            Argument::Clock,
        ],
    );
    intent.transfer_results(step, CREATE_SITE_RESULTS, signer);
    Ok(intent)
}

/// # Errors
/// `InvalidAddress` naming the first of site, owner capability or author
/// that fails the address grammar.
pub fn add_author(
    config: &CmsConfig,
    site_id: &str,
    owner_cap_id: &str,
    author: &str,
) -> Result<Intent> {
    author_change(config, "add_author", site_id, owner_cap_id, author)
}

/// # Errors
/// Same as `add_author`.
pub fn remove_author(
    config: &CmsConfig,
    site_id: &str,
    owner_cap_id: &str,
    author: &str,
) -> Result<Intent> {
    author_change(config, "remove_author", site_id, owner_cap_id, author)
}

fn author_change(
    config: &CmsConfig,
    function: &str,
    site_id: &str,
    owner_cap_id: &str,
    author: &str,
) -> Result<Intent> {
    validate_address("site_id", site_id)?;
    validate_address("owner_cap_id", owner_cap_id)?;
    validate_address("author", author)?;

    let (intent, _) = single_call(
        config,
        function,
        vec![
            Argument::object(site_id),
            Argument::object(owner_cap_id),
            Argument::address(author),
            Argument::Clock,
        ],
    );
    Ok(intent)
}

/// Point the site at `template_id`
///
/// The template reference is passed through as a string; whether it names
/// an existing template is for the ledger to decide.
///
/// # Errors
/// `InvalidAddress` for the site or owner capability.
pub fn update_site_template(
    config: &CmsConfig,
    site_id: &str,
    owner_cap_id: &str,
    template_id: &str,
) -> Result<Intent> {
    owned_string_update(config, "update_site_template", site_id, owner_cap_id, template_id)
}

/// Record the deployment reference of a published site
///
/// # Errors
/// `InvalidAddress` for the site or owner capability.
pub fn set_deployment_id(
    config: &CmsConfig,
    site_id: &str,
    owner_cap_id: &str,
    deployment_id: &str,
) -> Result<Intent> {
    owned_string_update(config, "set_walrus_site_id", site_id, owner_cap_id, deployment_id)
}

fn owned_string_update(
    config: &CmsConfig,
    function: &str,
    site_id: &str,
    owner_cap_id: &str,
    value: &str,
) -> Result<Intent> {
    validate_address("site_id", site_id)?;
    validate_address("owner_cap_id", owner_cap_id)?;

    let (intent, _) = single_call(
        config,
        function,
        vec![
            Argument::object(site_id),
            Argument::object(owner_cap_id),
            Argument::string(value),
            Argument::Clock,
        ],
    );
    Ok(intent)
}
