//! Typed payloads of the events the cms program emits

use serde::{Deserialize, Serialize};

/// Emitted once per `create_site`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteCreated {
    pub site_id: String,
    pub name: String,
    pub owner: String,
    pub timestamp: i64,
}

/// Emitted once per `create_page`; the only link from a site to its pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCreated {
    pub page_id: String,
    pub site_id: String,
    pub title: String,
    pub author: String,
    pub timestamp: i64,
}

/// Emitted once per `add_author`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorAdded {
    pub site_id: String,
    pub author: String,
    pub added_by: String,
    pub timestamp: i64,
}

/// Event kinds ledgerpress knows how to decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CmsEvent {
    SiteCreated(SiteCreated),
    PageCreated(PageCreated),
    AuthorAdded(AuthorAdded),
}

impl CmsEvent {
    /// Site the event belongs to
    pub fn site_id(&self) -> &str {
        match self {
            CmsEvent::SiteCreated(e) => &e.site_id,
            CmsEvent::PageCreated(e) => &e.site_id,
            CmsEvent::AuthorAdded(e) => &e.site_id,
        }
    }

    pub fn timestamp(&self) -> i64 {
        match self {
            CmsEvent::SiteCreated(e) => e.timestamp,
            CmsEvent::PageCreated(e) => e.timestamp,
            CmsEvent::AuthorAdded(e) => e.timestamp,
        }
    }
}
