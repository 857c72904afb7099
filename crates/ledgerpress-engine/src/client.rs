//! `Cms` facade
//!
//! Holds the configuration and the two collaborators, and exposes one typed
//! method per operation. Every call gets a fresh `RequestContext`; a trace
//! set with `Cms::with_trace_id` is carried into each of them.

use std::sync::Arc;
use std::time::Duration;

use ledgerpress_core::errors::{ExError, ExErrorKind};
use ledgerpress_core::ledger::{ExecutionOutcome, LedgerClient, Signer};
use ledgerpress_core::{
    build_intent, BlobStore, CmsConfig, CmsEvent, Command, Intent, Page, Site, Stats, Template,
};
use ledgerpress_core_types::{RequestContext, TraceId};
use ledgerpress_store::errors::Result;
use ledgerpress_store::{BlobStoreConfig, HttpBlobStore, JsonRpcLedger};

use crate::commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
use crate::commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};
use crate::commands::read_tools::ScanResult;
use crate::commands::EngineContext;

/// Common error shapes of the submitting methods
///
/// Every method that takes a `signer` validates its arguments first and
/// fails with a `Validation` category error (`InvalidAddress`,
/// `InvalidName`, `InvalidSlug`, or `DuplicateSlug` when unique slugs are
/// enforced) before the ledger is called. Admin operations
/// without a configured admin capability fail with `Unauthorised`. A
/// transaction the ledger refuses or aborts is `TransactionFailed`; an
/// unreachable or busy fullnode is a retryable `ExternalService` or
/// `Timeout`.
#[derive(Clone)]
pub struct Cms {
    config: CmsConfig,
    ledger: Arc<dyn LedgerClient>,
    blobs: Arc<dyn BlobStore>,
    trace_id: Option<TraceId>,
}

impl Cms {
    pub fn new(config: CmsConfig, ledger: Arc<dyn LedgerClient>, blobs: Arc<dyn BlobStore>) -> Self {
        Self {
            config,
            ledger,
            blobs,
            trace_id: None,
        }
    }

    /// Tag every later call's logs with `trace_id`
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Wire the JSON-RPC ledger and the HTTP blob store
    ///
    /// # Errors
    /// `Internal` when an HTTP client cannot be built.
    pub fn connect(config: CmsConfig, blob_config: BlobStoreConfig, timeout: Duration) -> Result<Self> {
        let ledger = JsonRpcLedger::from_config(&config, timeout)?;
        let blobs = HttpBlobStore::new(blob_config)?;
        Ok(Self::new(config, Arc::new(ledger), Arc::new(blobs)))
    }

    /// Configuration every call runs against
    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    fn request_context(&self) -> RequestContext {
        match &self.trace_id {
            Some(trace_id) => RequestContext::new().with_trace_id(trace_id.clone()),
            None => RequestContext::new(),
        }
    }

    fn ctx(&self) -> EngineContext<'_> {
        EngineContext {
            config: &self.config,
            ledger: self.ledger.as_ref(),
            blobs: self.blobs.as_ref(),
        }
    }

    /// Build the intent for `cmd` without submitting it
    ///
    /// # Errors
    /// Validation and authorization errors from intent building.
    pub fn intent(&self, cmd: &Command) -> Result<Intent> {
        Ok(build_intent(&self.config, cmd)?)
    }

    /// Build and submit any command
    ///
    /// # Errors
    /// See the error shapes on [`Cms`].
    pub async fn execute(&self, cmd: Command, signer: &dyn Signer) -> Result<ExecutionOutcome> {
        self.execute_in(cmd, signer, &self.request_context()).await
    }

    /// `execute` under a caller-supplied request context
    ///
    /// The caller's request and trace ids are logged and attached to errors
    /// instead of fresh ones.
    ///
    /// # Errors
    /// Same as `execute`.
    pub async fn execute_in(
        &self,
        cmd: Command,
        signer: &dyn Signer,
        rc: &RequestContext,
    ) -> Result<ExecutionOutcome> {
        let cmd = EngineCommand::Submit(cmd);
        match apply_engine_command(cmd, self.ctx(), Some(signer), rc).await? {
            EngineCommandResult::Submitted(outcome) => Ok(outcome),
            other => Err(unexpected("submit", &other)),
        }
    }

    async fn query(&self, query: EngineQuery) -> Result<EngineQueryResult> {
        apply_engine_query(query, self.ctx(), &self.request_context()).await
    }

    // Sites

    /// Create a site owned by the signer
    ///
    /// # Errors
    /// `InvalidName` for a bad name; otherwise the shapes on [`Cms`].
    pub async fn create_site(
        &self,
        signer: &dyn Signer,
        name: &str,
        description: &str,
        template_id: Option<&str>,
    ) -> Result<ExecutionOutcome> {
        let cmd = Command::CreateSite {
            signer: signer.address().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            template_id: template_id.map(str::to_string),
        };
        self.execute(cmd, signer).await
    }

    /// Let `author` edit the site's pages
    ///
    /// # Errors
    /// `InvalidAddress` for a bad site, capability or author id; otherwise
    /// the shapes on [`Cms`].
    pub async fn add_author(
        &self,
        signer: &dyn Signer,
        site_id: &str,
        owner_cap_id: &str,
        author: &str,
    ) -> Result<ExecutionOutcome> {
        let cmd = Command::AddAuthor {
            site_id: site_id.to_string(),
            owner_cap_id: owner_cap_id.to_string(),
            author: author.to_string(),
        };
        self.execute(cmd, signer).await
    }

    /// # Errors
    /// Same as `add_author`.
    pub async fn remove_author(
        &self,
        signer: &dyn Signer,
        site_id: &str,
        owner_cap_id: &str,
        author: &str,
    ) -> Result<ExecutionOutcome> {
        let cmd = Command::RemoveAuthor {
            site_id: site_id.to_string(),
            owner_cap_id: owner_cap_id.to_string(),
            author: author.to_string(),
        };
        self.execute(cmd, signer).await
    }

    /// # Errors
    /// `InvalidAddress` for a bad site or capability id; otherwise the shapes
    /// on [`Cms`].
    pub async fn update_site_template(
        &self,
        signer: &dyn Signer,
        site_id: &str,
        owner_cap_id: &str,
        template_id: &str,
    ) -> Result<ExecutionOutcome> {
        let cmd = Command::UpdateSiteTemplate {
            site_id: site_id.to_string(),
            owner_cap_id: owner_cap_id.to_string(),
            template_id: template_id.to_string(),
        };
        self.execute(cmd, signer).await
    }

    /// Record where the site's static build is hosted
    ///
    /// # Errors
    /// Same as `update_site_template`.
    pub async fn set_deployment_id(
        &self,
        signer: &dyn Signer,
        site_id: &str,
        owner_cap_id: &str,
        deployment_id: &str,
    ) -> Result<ExecutionOutcome> {
        let cmd = Command::SetDeploymentId {
            site_id: site_id.to_string(),
            owner_cap_id: owner_cap_id.to_string(),
            deployment_id: deployment_id.to_string(),
        };
        self.execute(cmd, signer).await
    }

    // Pages

    /// Create a page authored by the signer
    ///
    /// # Errors
    /// `InvalidSlug` for a bad slug, `DuplicateSlug` when unique slugs are
    /// enforced and another page of the site holds it; otherwise the shapes
    /// on [`Cms`].
    pub async fn create_page(
        &self,
        signer: &dyn Signer,
        site_id: &str,
        title: &str,
        slug: &str,
        content_id: &str,
    ) -> Result<ExecutionOutcome> {
        let cmd = Command::CreatePage {
            signer: signer.address().to_string(),
            site_id: site_id.to_string(),
            title: title.to_string(),
            slug: slug.to_string(),
            content_id: content_id.to_string(),
        };
        self.execute(cmd, signer).await
    }

    /// Point a page at new blob content
    ///
    /// # Errors
    /// `InvalidAddress` for a bad site or page id; otherwise the shapes on
    /// [`Cms`].
    pub async fn update_page_content(
        &self,
        signer: &dyn Signer,
        site_id: &str,
        page_id: &str,
        content_id: &str,
    ) -> Result<ExecutionOutcome> {
        let cmd = Command::UpdatePageContent {
            site_id: site_id.to_string(),
            page_id: page_id.to_string(),
            content_id: content_id.to_string(),
        };
        self.execute(cmd, signer).await
    }

    /// # Errors
    /// Same as `create_page`; a page keeping its own slug is not a duplicate.
    pub async fn update_page_metadata(
        &self,
        signer: &dyn Signer,
        site_id: &str,
        page_id: &str,
        title: &str,
        slug: &str,
    ) -> Result<ExecutionOutcome> {
        let cmd = Command::UpdatePageMetadata {
            site_id: site_id.to_string(),
            page_id: page_id.to_string(),
            title: title.to_string(),
            slug: slug.to_string(),
        };
        self.execute(cmd, signer).await
    }

    /// # Errors
    /// Same as `update_page_content`.
    pub async fn toggle_page_published(
        &self,
        signer: &dyn Signer,
        site_id: &str,
        page_id: &str,
    ) -> Result<ExecutionOutcome> {
        let cmd = Command::TogglePagePublished {
            site_id: site_id.to_string(),
            page_id: page_id.to_string(),
        };
        self.execute(cmd, signer).await
    }

    // Templates

    #[allow(clippy::too_many_arguments)]
    /// Create a template owned by the signer
    ///
    /// Name and content references are taken as given.
    ///
    /// # Errors
    /// `InvalidAddress` when the signer is not an address; otherwise the
    /// shapes on [`Cms`].
    pub async fn create_template(
        &self,
        signer: &dyn Signer,
        name: &str,
        description: &str,
        layout_id: &str,
        style_id: &str,
        script_id: Option<&str>,
        is_public: Option<bool>,
    ) -> Result<ExecutionOutcome> {
        let cmd = Command::CreateTemplate {
            signer: signer.address().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            layout_id: layout_id.to_string(),
            style_id: style_id.to_string(),
            script_id: script_id.map(str::to_string),
            is_public,
        };
        self.execute(cmd, signer).await
    }

    // Administration

    /// Suspend an active site or reactivate a suspended one
    ///
    /// # Errors
    /// `Unauthorised` without a configured admin capability; otherwise the
    /// shapes on [`Cms`].
    pub async fn toggle_site_suspension(
        &self,
        signer: &dyn Signer,
        site_id: &str,
    ) -> Result<ExecutionOutcome> {
        let cmd = Command::ToggleSiteSuspension {
            site_id: site_id.to_string(),
        };
        self.execute(cmd, signer).await
    }

    /// # Errors
    /// Same as `toggle_site_suspension`.
    pub async fn admin_emergency_update(
        &self,
        signer: &dyn Signer,
        site_id: &str,
        name: &str,
        description: &str,
        reason: &str,
    ) -> Result<ExecutionOutcome> {
        let cmd = Command::AdminEmergencyUpdate {
            site_id: site_id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            reason: reason.to_string(),
        };
        self.execute(cmd, signer).await
    }

    // Reads

    /// `None` when the object does not exist
    ///
    /// # Errors
    /// `InvalidAddress` before any ledger call; `MalformedObject` when the
    /// object is not a site of the configured package; transport errors.
    pub async fn get_site(&self, site_id: &str) -> Result<Option<Site>> {
        match self
            .query(EngineQuery::SiteGet {
                site_id: site_id.to_string(),
            })
            .await?
        {
            EngineQueryResult::Site(site) => Ok(site),
            other => Err(unexpected("site_get", &other)),
        }
    }

    /// # Errors
    /// Same as `get_site`.
    pub async fn get_page(&self, page_id: &str) -> Result<Option<Page>> {
        match self
            .query(EngineQuery::PageGet {
                page_id: page_id.to_string(),
            })
            .await?
        {
            EngineQueryResult::Page(page) => Ok(page),
            other => Err(unexpected("page_get", &other)),
        }
    }

    /// # Errors
    /// Same as `get_site`.
    pub async fn get_template(&self, template_id: &str) -> Result<Option<Template>> {
        match self
            .query(EngineQuery::TemplateGet {
                template_id: template_id.to_string(),
            })
            .await?
        {
            EngineQueryResult::Template(template) => Ok(template),
            other => Err(unexpected("template_get", &other)),
        }
    }

    /// Counters of the configured registry
    ///
    /// # Errors
    /// `MalformedObject` or transport errors.
    pub async fn get_stats(&self) -> Result<Option<Stats>> {
        match self.query(EngineQuery::StatsGet).await? {
            EngineQueryResult::Stats(stats) => Ok(stats),
            other => Err(unexpected("stats_get", &other)),
        }
    }

    /// Sites whose owner capability `owner` holds
    ///
    /// # Errors
    /// `InvalidAddress` for a bad owner; `MalformedObject` or transport errors.
    pub async fn list_user_sites(&self, owner: &str) -> Result<Vec<Site>> {
        match self
            .query(EngineQuery::SiteListByOwner {
                owner: owner.to_string(),
            })
            .await?
        {
            EngineQueryResult::Sites(sites) => Ok(sites),
            other => Err(unexpected("site_list_by_owner", &other)),
        }
    }

    /// Pages of a site found in the configured event window
    ///
    /// # Errors
    /// Same as `list_site_pages_with`.
    pub async fn list_site_pages(&self, site_id: &str) -> Result<ScanResult<Page>> {
        self.list_site_pages_with(site_id, self.config.event_page_size())
            .await
    }

    /// Pages of a site found in the newest `page_size` creation events
    ///
    /// # Errors
    /// `InvalidAddress` for a bad site id and `InvalidInput` for a zero
    /// `page_size`, both before any ledger call; `MalformedObject` or
    /// transport errors.
    pub async fn list_site_pages_with(
        &self,
        site_id: &str,
        page_size: usize,
    ) -> Result<ScanResult<Page>> {
        match self
            .query(EngineQuery::SiteListPages {
                site_id: site_id.to_string(),
                page_size: Some(page_size),
            })
            .await?
        {
            EngineQueryResult::Pages(scan) => Ok(scan),
            other => Err(unexpected("site_list_pages", &other)),
        }
    }

    /// Site, page and author events of a site, newest first
    ///
    /// # Errors
    /// Same validation as `list_site_pages_with`; transport errors.
    pub async fn list_site_events(
        &self,
        site_id: &str,
        page_size: usize,
    ) -> Result<ScanResult<CmsEvent>> {
        match self
            .query(EngineQuery::SiteListEvents {
                site_id: site_id.to_string(),
                page_size: Some(page_size),
            })
            .await?
        {
            EngineQueryResult::Events(scan) => Ok(scan),
            other => Err(unexpected("site_list_events", &other)),
        }
    }

    /// Whether `address` may edit the site's pages
    ///
    /// Malformed ids and absent sites answer `false`.
    ///
    /// # Errors
    /// `MalformedObject` or transport errors.
    pub async fn is_authorized(&self, site_id: &str, address: &str) -> Result<bool> {
        match self
            .query(EngineQuery::SiteIsAuthorized {
                site_id: site_id.to_string(),
                address: address.to_string(),
            })
            .await?
        {
            EngineQueryResult::Authorized(allowed) => Ok(allowed),
            other => Err(unexpected("site_is_authorized", &other)),
        }
    }

    // Content

    /// Store `bytes` in the blob store and return the content id
    ///
    /// # Errors
    /// `ExternalService` or `Timeout` from the blob store.
    pub async fn upload_content(&self, bytes: Vec<u8>) -> Result<String> {
        let rc = self.request_context();
        let cmd = EngineCommand::PublishContent { bytes };
        match apply_engine_command(cmd, self.ctx(), None, &rc).await? {
            EngineCommandResult::ContentPublished { content_id } => Ok(content_id),
            other => Err(unexpected("content_publish", &other)),
        }
    }

    /// `None` when the blob store does not know `content_id`
    ///
    /// # Errors
    /// Same as `upload_content`.
    pub async fn fetch_content(&self, content_id: &str) -> Result<Option<Vec<u8>>> {
        match self
            .query(EngineQuery::ContentGet {
                content_id: content_id.to_string(),
            })
            .await?
        {
            EngineQueryResult::Content(bytes) => Ok(bytes),
            other => Err(unexpected("content_get", &other)),
        }
    }
}

fn unexpected(op: &str, result: &impl std::fmt::Debug) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(op)
        .with_message(format!("unexpected engine result: {:?}", result))
}
