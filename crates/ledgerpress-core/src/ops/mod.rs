//! Intent-building operations, one function per entry point
//!
//! Every function validates all of its inputs before assembling any step,
//! so a returned error means no intent exists.

pub mod admin_ops;
pub mod page_ops;
pub mod site_ops;
pub mod template_ops;

use crate::config::CmsConfig;
use crate::intent::{Argument, Intent};

/// Start an intent whose primary call is `function`
///
/// Returns the intent and the index of the call step.
pub(crate) fn single_call(
    config: &CmsConfig,
    function: &str,
    arguments: Vec<Argument>,
) -> (Intent, usize) {
    let mut intent = Intent::new(function);
    let step = intent.call(config.entry_point(function), arguments);
    (intent, step)
}

pub(crate) fn registry(config: &CmsConfig) -> Argument {
    Argument::object(config.registry_id())
}
