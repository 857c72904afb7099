//! Command to intent dispatch

use crate::commands::Command;
use crate::config::CmsConfig;
use crate::errors::Result;
use crate::intent::Intent;
use crate::ops::{admin_ops, page_ops, site_ops, template_ops};

/// Build the intent for `cmd` under `config`
///
/// Pure: validates and assembles, never touches the network.
///
/// # Errors
/// Whatever validation error the matching operation raises.
pub fn build_intent(config: &CmsConfig, cmd: &Command) -> Result<Intent> {
    match cmd {
        Command::CreateSite {
            signer,
            name,
            description,
            template_id,
        } => site_ops::create_site(config, signer, name, description, template_id.as_deref()),

        Command::AddAuthor {
            site_id,
            owner_cap_id,
            author,
        } => site_ops::add_author(config, site_id, owner_cap_id, author),

        Command::RemoveAuthor {
            site_id,
            owner_cap_id,
            author,
        } => site_ops::remove_author(config, site_id, owner_cap_id, author),

        Command::UpdateSiteTemplate {
            site_id,
            owner_cap_id,
            template_id,
        } => site_ops::update_site_template(config, site_id, owner_cap_id, template_id),

        Command::SetDeploymentId {
            site_id,
            owner_cap_id,
            deployment_id,
        } => site_ops::set_deployment_id(config, site_id, owner_cap_id, deployment_id),

        Command::CreatePage {
            signer,
            site_id,
            title,
            slug,
            content_id,
        } => page_ops::create_page(config, signer, site_id, title, slug, content_id),

        Command::UpdatePageContent {
            site_id,
            page_id,
            content_id,
        } => page_ops::update_page_content(config, site_id, page_id, content_id),

        Command::UpdatePageMetadata {
            site_id,
            page_id,
            title,
            slug,
        } => page_ops::update_page_metadata(config, site_id, page_id, title, slug),

        Command::TogglePagePublished { site_id, page_id } => {
            page_ops::toggle_page_published(config, site_id, page_id)
        }

        Command::CreateTemplate {
            signer,
            name,
            description,
            layout_id,
            style_id,
            script_id,
            is_public,
        } => template_ops::create_template(
            config,
            signer,
            name,
            description,
            layout_id,
            style_id,
            script_id.as_deref(),
            *is_public,
        ),

        Command::ToggleSiteSuspension { site_id } => {
            admin_ops::toggle_site_suspension(config, site_id)
        }

        Command::AdminEmergencyUpdate {
            site_id,
            name,
            description,
            reason,
        } => admin_ops::admin_emergency_update(config, site_id, name, description, reason),
    }
}
