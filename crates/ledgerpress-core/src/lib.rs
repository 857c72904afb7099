//! ledgerpress core
//!
//! Pure client-side logic for a ledger-backed CMS: validation, intent
//! building, record reconstruction and authorization hints. Network access
//! goes through the `LedgerClient` and `BlobStore` traits.

pub mod authz;
pub mod commands;
pub mod config;
pub mod content;
pub mod errors;
pub mod hydration;
pub mod intent;
pub mod intent_builder;
pub mod ledger;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;

// Macros resolve schema constants through this path
pub use ledgerpress_core_types;

pub use authz::{authorized, role_of, SiteRole};
pub use commands::Command;
pub use config::{CmsConfig, Network};
pub use content::BlobStore;
pub use errors::{CmsError, ErrorCategory, ExError, ExErrorKind, Result};
pub use intent::{Argument, Intent, IntentStep};
pub use intent_builder::build_intent;
pub use ledger::{
    EventOrder, EventQuery, EventRecord, ExecutionOutcome, ExecutionStatus, LedgerClient,
    LedgerObject, Signer, SignedIntent,
};
pub use model::{CmsEvent, Page, Site, Stats, Template};
pub use rules::{derive_slug, validate_address, validate_name, validate_slug};
