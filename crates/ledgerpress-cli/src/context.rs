//! Connection settings shared by every networked subcommand

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use ledgerpress_core::CmsConfig;
use ledgerpress_engine::Cms;
use ledgerpress_store::BlobStoreConfig;

pub type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

const DEFAULT_PUBLISHER: &str = "https://publisher.walrus-testnet.walrus.space";
const DEFAULT_AGGREGATOR: &str = "https://aggregator.walrus-testnet.walrus.space";

#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// TOML configuration file; `LEDGERPRESS_*` variables are used when absent
    #[arg(long, global = true, env = "LEDGERPRESS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Blob publisher endpoint
    #[arg(long, global = true, env = "LEDGERPRESS_PUBLISHER_URL", default_value = DEFAULT_PUBLISHER)]
    pub publisher: String,

    /// Blob aggregator endpoint
    #[arg(long, global = true, env = "LEDGERPRESS_AGGREGATOR_URL", default_value = DEFAULT_AGGREGATOR)]
    pub aggregator: String,

    /// Bearer token for the publisher
    #[arg(long, global = true, env = "LEDGERPRESS_PUBLISHER_TOKEN", hide_env_values = true)]
    pub publisher_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl ConnectionArgs {
    pub fn cms_config(&self) -> CliResult<CmsConfig> {
        let config = match &self.config {
            Some(path) => CmsConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
            None => CmsConfig::from_env()?,
        };
        Ok(config)
    }

    pub fn blob_config(&self) -> BlobStoreConfig {
        let config = BlobStoreConfig::new(&self.publisher, &self.aggregator)
            .with_timeout(self.timeout());
        match &self.publisher_token {
            Some(token) => config.with_token(token),
            None => config,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect(&self) -> CliResult<Cms> {
        let cms = Cms::connect(self.cms_config()?, self.blob_config(), self.timeout())?;
        tracing::debug!(rpc_url = cms.config().rpc_url(), "connected");
        Ok(cms)
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
