//! Command types for every state-changing cms operation
//!
//! Commands are turned into intents by `build_intent()`. They carry raw
//! caller input; nothing here is validated until the intent is built.

use serde::{Deserialize, Serialize};

/// One state-changing operation with its raw arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Create a site owned by `signer`; template defaults to `"default"`
    CreateSite {
        signer: String,
        name: String,
        description: String,
        #[serde(default)]
        template_id: Option<String>,
    },

    AddAuthor {
        site_id: String,
        owner_cap_id: String,
        author: String,
    },

    RemoveAuthor {
        site_id: String,
        owner_cap_id: String,
        author: String,
    },

    /// Point a site at another template; the template id is not checked
    UpdateSiteTemplate {
        site_id: String,
        owner_cap_id: String,
        template_id: String,
    },

    /// Record the external deployment reference of a site
    SetDeploymentId {
        site_id: String,
        owner_cap_id: String,
        deployment_id: String,
    },

    CreatePage {
        signer: String,
        site_id: String,
        title: String,
        slug: String,
        content_id: String,
    },

    /// Replace the content reference of a page
    UpdatePageContent {
        site_id: String,
        page_id: String,
        content_id: String,
    },

    UpdatePageMetadata {
        site_id: String,
        page_id: String,
        title: String,
        slug: String,
    },

    TogglePagePublished { site_id: String, page_id: String },

    /// Create a template owned by `signer`; public unless told otherwise
    CreateTemplate {
        signer: String,
        name: String,
        description: String,
        layout_id: String,
        style_id: String,
        #[serde(default)]
        script_id: Option<String>,
        #[serde(default)]
        is_public: Option<bool>,
    },

    /// Administrator only
    ToggleSiteSuspension { site_id: String },

    /// Administrator only; overwrites name and description, logging `reason`
    AdminEmergencyUpdate {
        site_id: String,
        name: String,
        description: String,
        reason: String,
    },
}

impl Command {
    /// Ledger entry function this command calls
    pub fn entry_function(&self) -> &'static str {
        match self {
            Command::CreateSite { .. } => "create_site",
            Command::AddAuthor { .. } => "add_author",
            Command::RemoveAuthor { .. } => "remove_author",
            Command::UpdateSiteTemplate { .. } => "update_site_template",
            Command::SetDeploymentId { .. } => "set_walrus_site_id",
            Command::CreatePage { .. } => "create_page",
            Command::UpdatePageContent { .. } => "update_page",
            Command::UpdatePageMetadata { .. } => "update_page_metadata",
            Command::TogglePagePublished { .. } => "toggle_page_published",
            Command::CreateTemplate { .. } => "create_template",
            Command::ToggleSiteSuspension { .. } => "toggle_site_suspension",
            Command::AdminEmergencyUpdate { .. } => "admin_emergency_update_site",
        }
    }

    /// Check if the command needs the administrator capability
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Command::ToggleSiteSuspension { .. } | Command::AdminEmergencyUpdate { .. }
        )
    }

    /// Site the command targets, if it targets an existing one
    pub fn site_id(&self) -> Option<&str> {
        match self {
            Command::CreateSite { .. } | Command::CreateTemplate { .. } => None,
            Command::AddAuthor { site_id, .. }
            | Command::RemoveAuthor { site_id, .. }
            | Command::UpdateSiteTemplate { site_id, .. }
            | Command::SetDeploymentId { site_id, .. }
            | Command::CreatePage { site_id, .. }
            | Command::UpdatePageContent { site_id, .. }
            | Command::UpdatePageMetadata { site_id, .. }
            | Command::TogglePagePublished { site_id, .. }
            | Command::ToggleSiteSuspension { site_id }
            | Command::AdminEmergencyUpdate { site_id, .. } => Some(site_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_from_json_applies_optional_defaults() {
        let json = r#"{
            "op": "create_template",
            "signer": "0xa",
            "name": "Clean",
            "description": "minimal",
            "layout_id": "L",
            "style_id": "S"
        }"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        match cmd {
            Command::CreateTemplate {
                script_id,
                is_public,
                ..
            } => {
                assert_eq!(script_id, None);
                assert_eq!(is_public, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_admin_commands() {
        let cmd = Command::ToggleSiteSuspension {
            site_id: "0x1".to_string(),
        };
        assert!(cmd.requires_admin());
        assert_eq!(cmd.entry_function(), "toggle_site_suspension");
        assert_eq!(cmd.site_id(), Some("0x1"));
    }
}
