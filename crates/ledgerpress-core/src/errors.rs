use ledgerpress_core_types::RequestId;
use thiserror::Error;

/// Result type alias using CmsError
pub type Result<T> = std::result::Result<T, CmsError>;

// ========== Error Facility ==========

/// Coarse failure category callers branch on
///
/// Transport failures (`Service`) may be retried by the caller. Logical
/// rejections (`Transaction`) and local failures (`Validation`,
/// `Authorization`) must not be retried blindly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed caller input, detected locally before any network call
    Validation,
    /// The configuration does not hold a capability the operation needs
    Authorization,
    /// The ledger rejected or failed to execute a submitted intent
    Transaction,
    /// A collaborator was unreachable, timed out, or answered with garbage
    Service,
    /// Local invariant breakage
    Internal,
}

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable in tests, CLI output and
/// external API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    InvalidAddress,
    InvalidName,
    InvalidSlug,
    InvalidConfig,
    DuplicateSlug,

    // Authorization
    Unauthorised,

    // Ledger execution
    TransactionFailed,

    // Collaborators
    ExternalService,
    Timeout,
    Io,
    Serialization,
    /// The fullnode answered with a JSON-RPC error that retrying will not fix
    RpcRejected,
    /// A ledger object of the expected kind is missing a required field
    MalformedObject,
    /// An event payload does not carry the fields its kind promises
    MalformedEvent,

    // Internal
    /// Same content-id, different bytes in a local content store
    ContentCollision,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidAddress => "ERR_INVALID_ADDRESS",
            ExErrorKind::InvalidName => "ERR_INVALID_NAME",
            ExErrorKind::InvalidSlug => "ERR_INVALID_SLUG",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::DuplicateSlug => "ERR_DUPLICATE_SLUG",
            ExErrorKind::Unauthorised => "ERR_UNAUTHORISED",
            ExErrorKind::TransactionFailed => "ERR_TRANSACTION_FAILED",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::RpcRejected => "ERR_RPC_REJECTED",
            ExErrorKind::MalformedObject => "ERR_MALFORMED_OBJECT",
            ExErrorKind::MalformedEvent => "ERR_MALFORMED_EVENT",
            ExErrorKind::ContentCollision => "ERR_CONTENT_COLLISION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Map the kind onto the category callers branch on
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExErrorKind::InvalidInput
            | ExErrorKind::InvalidAddress
            | ExErrorKind::InvalidName
            | ExErrorKind::InvalidSlug
            | ExErrorKind::InvalidConfig
            | ExErrorKind::DuplicateSlug => ErrorCategory::Validation,
            ExErrorKind::Unauthorised => ErrorCategory::Authorization,
            ExErrorKind::TransactionFailed => ErrorCategory::Transaction,
            ExErrorKind::ExternalService
            | ExErrorKind::Timeout
            | ExErrorKind::Io
            | ExErrorKind::Serialization
            | ExErrorKind::RpcRejected
            | ExErrorKind::MalformedObject
            | ExErrorKind::MalformedEvent => ErrorCategory::Service,
            ExErrorKind::ContentCollision | ExErrorKind::Internal => ErrorCategory::Internal,
        }
    }
}

/// Canonical structured error type
///
/// Returned by the store and engine layers. Carries the kind plus optional
/// context: the operation, the ledger object involved, the transaction
/// digest when the ledger produced one, and the request id of the call.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    tx_digest: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            tx_digest: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the ledger object or content id involved
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add the transaction digest reported by the ledger
    pub fn with_tx_digest(mut self, digest: impl Into<String>) -> Self {
        self.tx_digest = Some(digest.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Transport failures are the only ones worth retrying
    ///
    /// Ledger submissions are not idempotent without caller-assigned nonces,
    /// so the decision to retry stays with the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ExErrorKind::ExternalService | ExErrorKind::Timeout | ExErrorKind::Io
        )
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn tx_digest(&self) -> Option<&str> {
        self.tx_digest.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message (for `TransactionFailed`, the ledger's detail)
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(digest) = &self.tx_digest {
            write!(f, " (tx_digest: {})", digest)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain errors raised by the pure core (validation, intent building,
/// hydration, configuration)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CmsError {
    /// A value in an address or object-reference position is not a ledger address
    #[error("Invalid {field}: '{value}' is not a valid ledger address")]
    InvalidAddress { field: String, value: String },

    /// Site or template name failed the name grammar
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// Page slug failed the slug grammar
    #[error("Invalid slug: {reason}")]
    InvalidSlug { reason: String },

    /// Configuration rejected at construction
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Any other malformed scalar argument
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    /// The optimistic uniqueness check found the slug already taken
    #[error("Slug '{slug}' is already used by page {page_id} in site {site_id}")]
    DuplicateSlug {
        site_id: String,
        slug: String,
        page_id: String,
    },

    /// Administrator-only operation without an administrator capability
    #[error("Operation '{op}' requires the administrator capability, which is not configured")]
    AdminCapabilityMissing { op: String },

    /// Ledger object of the expected kind lacks a required field
    #[error("Object {object_id} is malformed: field '{field}' {reason}")]
    MalformedObject {
        object_id: String,
        field: String,
        reason: String,
    },

    /// Event payload lacks a field its kind promises
    #[error("Event {event_type} is malformed: {reason}")]
    MalformedEvent { event_type: String, reason: String },

    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl CmsError {
    pub(crate) fn invalid_address(field: &str, value: &str) -> Self {
        CmsError::InvalidAddress {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Category of this error once lifted into the facility
    pub fn category(&self) -> ErrorCategory {
        ExError::from(self.clone()).category()
    }
}

impl From<CmsError> for ExError {
    fn from(err: CmsError) -> Self {
        let message = err.to_string();
        match err {
            CmsError::InvalidAddress { value, .. } => ExError::new(ExErrorKind::InvalidAddress)
                .with_entity_id(value)
                .with_message(message),
            CmsError::InvalidName { .. } => {
                ExError::new(ExErrorKind::InvalidName).with_message(message)
            }
            CmsError::InvalidSlug { .. } => {
                ExError::new(ExErrorKind::InvalidSlug).with_message(message)
            }
            CmsError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }
            CmsError::InvalidArgument { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
            CmsError::DuplicateSlug { page_id, .. } => ExError::new(ExErrorKind::DuplicateSlug)
                .with_entity_id(page_id)
                .with_message(message),
            CmsError::AdminCapabilityMissing { op } => ExError::new(ExErrorKind::Unauthorised)
                .with_op(op)
                .with_message(message),
            CmsError::MalformedObject { object_id, .. } => {
                ExError::new(ExErrorKind::MalformedObject)
                    .with_entity_id(object_id)
                    .with_message(message)
            }
            CmsError::MalformedEvent { .. } => {
                ExError::new(ExErrorKind::MalformedEvent).with_message(message)
            }
            CmsError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for CmsError {
    fn from(err: serde_json::Error) -> Self {
        CmsError::Serialization {
            reason: err.to_string(),
        }
    }
}
