//! Client configuration
//!
//! `CmsConfig` is built once and threaded explicitly through every
//! operation. It is validated at construction and immutable afterwards.

use serde::Deserialize;

use crate::errors::{CmsError, Result};
use crate::rules::validate_address;

/// Template reference used by `create_site` when none is given
pub const DEFAULT_TEMPLATE_ID: &str = "default";

/// Events fetched per query-engine scan
pub const DEFAULT_EVENT_PAGE_SIZE: usize = 1000;

/// Module of the cms program that hosts every entry point
pub const CMS_MODULE: &str = "cms";

pub const ENV_RPC_URL: &str = "LEDGERPRESS_RPC_URL";
pub const ENV_NETWORK: &str = "LEDGERPRESS_NETWORK";
pub const ENV_PACKAGE_ID: &str = "LEDGERPRESS_PACKAGE_ID";
pub const ENV_REGISTRY_ID: &str = "LEDGERPRESS_REGISTRY_ID";
pub const ENV_ADMIN_CAP_ID: &str = "LEDGERPRESS_ADMIN_CAP_ID";

/// Public networks with a known fullnode endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Network {
    Testnet,
    Mainnet,
    Devnet,
    Custom(String),
}

impl Network {
    pub fn rpc_url(&self) -> &str {
        match self {
            Network::Testnet => "https://fullnode.testnet.sui.io:443",
            Network::Mainnet => "https://fullnode.mainnet.sui.io:443",
            Network::Devnet => "https://fullnode.devnet.sui.io:443",
            Network::Custom(url) => url,
        }
    }
}

impl std::str::FromStr for Network {
    type Err = CmsError;

    /// Parse a preset name; anything that looks like a URL becomes `Custom`
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "testnet" => Ok(Network::Testnet),
            "mainnet" => Ok(Network::Mainnet),
            "devnet" => Ok(Network::Devnet),
            _ if s.starts_with("http://") || s.starts_with("https://") => {
                Ok(Network::Custom(s.to_string()))
            }
            _ => Err(CmsError::InvalidConfig {
                reason: format!(
                    "unknown network '{}' (expected testnet, mainnet, devnet or a URL)",
                    s
                ),
            }),
        }
    }
}

/// On-disk shape; converted through `CmsConfig::new` so every source is validated the same way
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    rpc_url: Option<String>,
    network: Option<String>,
    package_id: String,
    registry_id: String,
    admin_cap_id: Option<String>,
    #[serde(default)]
    enforce_unique_slugs: bool,
    #[serde(default = "default_event_page_size")]
    event_page_size: usize,
}

fn default_event_page_size() -> usize {
    DEFAULT_EVENT_PAGE_SIZE
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsConfig {
    rpc_url: String,
    package_id: String,
    registry_id: String,
    admin_cap_id: Option<String>,
    enforce_unique_slugs: bool,
    event_page_size: usize,
}

impl CmsConfig {
    /// Build a validated configuration
    ///
    /// An empty `admin_cap_id` is treated as absent.
    ///
    /// # Errors
    /// `InvalidConfig` when the endpoint is empty, `InvalidAddress` when the
    /// program id, registry or administrator capability fails the address
    /// grammar.
    pub fn new(
        rpc_url: impl Into<String>,
        package_id: impl Into<String>,
        registry_id: impl Into<String>,
        admin_cap_id: Option<String>,
    ) -> Result<Self> {
        let rpc_url = rpc_url.into();
        let package_id = package_id.into();
        let registry_id = registry_id.into();
        let admin_cap_id = admin_cap_id.filter(|id| !id.trim().is_empty());

        if rpc_url.trim().is_empty() {
            return Err(CmsError::InvalidConfig {
                reason: "rpc_url must not be empty".to_string(),
            });
        }
        validate_address("package_id", &package_id)?;
        validate_address("registry_id", &registry_id)?;
        if let Some(cap) = &admin_cap_id {
            validate_address("admin_cap_id", cap)?;
        }

        Ok(Self {
            rpc_url,
            package_id,
            registry_id,
            admin_cap_id,
            enforce_unique_slugs: false,
            event_page_size: DEFAULT_EVENT_PAGE_SIZE,
        })
    }

    pub fn for_network(
        network: &Network,
        package_id: impl Into<String>,
        registry_id: impl Into<String>,
        admin_cap_id: Option<String>,
    ) -> Result<Self> {
        Self::new(network.rpc_url(), package_id, registry_id, admin_cap_id)
    }

    /// Turn the optimistic per-site slug check on or off
    pub fn with_unique_slugs(mut self, enforce: bool) -> Self {
        self.enforce_unique_slugs = enforce;
        self
    }

    /// # Errors
    /// `InvalidConfig` when `size` is zero.
    pub fn with_event_page_size(mut self, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(CmsError::InvalidConfig {
                reason: "event_page_size must be greater than zero".to_string(),
            });
        }
        self.event_page_size = size;
        Ok(self)
    }

    /// Parse a TOML document
    ///
    /// Either `rpc_url` or `network` must be present; `rpc_url` wins when both are.
    ///
    /// # Errors
    /// `InvalidConfig` for unparseable TOML or a missing endpoint, plus
    /// everything `CmsConfig::new` rejects.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(input).map_err(|e| CmsError::InvalidConfig {
            reason: e.to_string(),
        })?;
        let rpc_url = resolve_endpoint(raw.rpc_url, raw.network)?;
        Self::new(rpc_url, raw.package_id, raw.registry_id, raw.admin_cap_id)?
            .with_unique_slugs(raw.enforce_unique_slugs)
            .with_event_page_size(raw.event_page_size)
    }

    /// Read the `LEDGERPRESS_*` environment variables
    ///
    /// # Errors
    /// `InvalidConfig` naming the first missing variable.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| CmsError::InvalidConfig {
                reason: format!("environment variable {} is not set", key),
            })
        };
        let rpc_url = resolve_endpoint(lookup(ENV_RPC_URL), lookup(ENV_NETWORK))?;
        Self::new(
            rpc_url,
            required(ENV_PACKAGE_ID)?,
            required(ENV_REGISTRY_ID)?,
            lookup(ENV_ADMIN_CAP_ID),
        )
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn package_id(&self) -> &str {
        &self.package_id
    }

    pub fn registry_id(&self) -> &str {
        &self.registry_id
    }

    pub fn admin_cap_id(&self) -> Option<&str> {
        self.admin_cap_id.as_deref()
    }

    pub fn enforce_unique_slugs(&self) -> bool {
        self.enforce_unique_slugs
    }

    pub fn event_page_size(&self) -> usize {
        self.event_page_size
    }

    /// Fully qualified entry point, e.g. `0xabc::cms::create_site`
    pub fn entry_point(&self, function: &str) -> String {
        format!("{}::{}::{}", self.package_id, CMS_MODULE, function)
    }

    /// Fully qualified type of a program struct or event
    pub fn type_tag(&self, name: &str) -> String {
        format!("{}::{}::{}", self.package_id, CMS_MODULE, name)
    }
}

fn resolve_endpoint(rpc_url: Option<String>, network: Option<String>) -> Result<String> {
    match (rpc_url, network) {
        (Some(url), _) => Ok(url),
        (None, Some(name)) => Ok(name.parse::<Network>()?.rpc_url().to_string()),
        (None, None) => Err(CmsError::InvalidConfig {
            reason: "either rpc_url or network must be set".to_string(),
        }),
    }
}
