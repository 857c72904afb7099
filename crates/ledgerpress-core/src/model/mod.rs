pub mod event;
pub mod page;
pub mod site;
pub mod stats;
pub mod template;

pub use event::{AuthorAdded, CmsEvent, PageCreated, SiteCreated};
pub use page::Page;
pub use site::Site;
pub use stats::Stats;
pub use template::Template;

use chrono::{DateTime, Utc};

/// Convert a ledger epoch-millisecond timestamp to UTC
///
/// Returns `None` for values chrono cannot represent.
pub fn millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}
