use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page - one document of a site
///
/// The body lives in the content store; the ledger only records its content
/// reference. Slugs are unique within a site, not globally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub site_id: String,
    pub title: String,
    pub slug: String,
    /// Opaque content-store id of the page body
    pub content_id: String,
    pub author: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub is_published: bool,
}

impl Page {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        super::millis_to_utc(self.created_at)
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        super::millis_to_utc(self.updated_at)
    }
}
