use super::{registry, single_call};
use crate::config::CmsConfig;
use crate::errors::Result;
use crate::intent::{Argument, Intent};
use crate::rules::validate_address;

/// Build the intent creating a template owned by `signer`
///
/// Name and content references are taken as given. An absent script
/// becomes `""` and an absent visibility flag becomes public.
///
/// # Errors
/// `InvalidAddress` when the signer is not an address.
#[allow(clippy::too_many_arguments)]
pub fn create_template(
    config: &CmsConfig,
    signer: &str,
    name: &str,
    description: &str,
    layout_id: &str,
    style_id: &str,
    script_id: Option<&str>,
    is_public: Option<bool>,
) -> Result<Intent> {
    validate_address("signer", signer)?;

    let (mut intent, step) = single_call(
        config,
        "create_template",
        vec![
            registry(config),
            Argument::string(name),
            Argument::string(description),
            Argument::string(layout_id),
            Argument::string(style_id),
            Argument::string(script_id.unwrap_or_default()),
            Argument::Bool {
                value: is_public.unwrap_or(true),
            },
            Argument::Clock,
        ],
    );
    intent.transfer_results(step, 1, signer);
    Ok(intent)
}
