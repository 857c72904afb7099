use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rules::same_address;

/// Site - a publication owned by one address and edited by a set of authors
///
/// The owner's authority is implicit: the owner is never a member of
/// `authors` by virtue of owning the site, and author management never
/// touches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Ledger object id
    pub id: String,

    pub name: String,

    pub description: String,

    /// Address holding the owner capability
    pub owner: String,

    /// Template reference, `"default"` unless changed
    pub template_id: String,

    /// Author addresses in the order the ledger reports them
    pub authors: Vec<String>,

    /// Epoch milliseconds
    pub created_at: i64,

    /// Epoch milliseconds
    pub updated_at: i64,

    /// False while an administrator has the site suspended
    pub is_active: bool,

    /// External deployment reference; empty until the site is deployed
    pub deployment_id: String,

    pub page_count: u64,
}

impl Site {
    /// Check if `address` is listed as an author (owner excluded)
    pub fn has_author(&self, address: &str) -> bool {
        self.authors.iter().any(|a| same_address(a, address))
    }

    pub fn is_owner(&self, address: &str) -> bool {
        same_address(&self.owner, address)
    }

    pub fn is_deployed(&self) -> bool {
        !self.deployment_id.is_empty()
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        super::millis_to_utc(self.created_at)
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        super::millis_to_utc(self.updated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Site {
        Site {
            id: "0x01".to_string(),
            name: "My Blog".to_string(),
            description: "d".to_string(),
            owner: "0xowner".to_string(),
            template_id: "default".to_string(),
            authors: vec!["0xa1".to_string()],
            created_at: 1_700_000_000_000,
            updated_at: 1_700_000_000_500,
            is_active: true,
            deployment_id: String::new(),
            page_count: 0,
        }
    }

    #[test]
    fn test_owner_is_not_an_author() {
        let s = site();
        assert!(s.has_author("0xa1"));
        assert!(!s.has_author("0xowner"));
    }

    #[test]
    fn test_not_deployed_until_reference_set() {
        let mut s = site();
        assert!(!s.is_deployed());
        s.deployment_id = "walrus-site-1".to_string();
        assert!(s.is_deployed());
    }

    #[test]
    fn test_timestamps_convert_to_utc() {
        let s = site();
        let created = s.created_at_utc().unwrap();
        assert_eq!(created.timestamp_millis(), 1_700_000_000_000);
        assert!(s.updated_at_utc().unwrap() > created);
    }
}
