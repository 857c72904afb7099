#![allow(clippy::unwrap_used, clippy::expect_used)]

use ledgerpress_core::authz::{authorized, can_manage_site, role_of};
use ledgerpress_core::{Site, SiteRole};
use proptest::prelude::*;

fn site(owner: &str, authors: Vec<String>) -> Site {
    Site {
        id: "0x5".to_string(),
        name: "S".to_string(),
        description: String::new(),
        owner: owner.to_string(),
        template_id: "default".to_string(),
        authors,
        created_at: 0,
        updated_at: 0,
        is_active: true,
        deployment_id: String::new(),
        page_count: 0,
    }
}

fn address() -> impl Strategy<Value = String> {
    "0x[0-9a-f]{3}"
}

proptest! {
    #[test]
    fn prop_authorized_iff_owner_or_author(
        owner in address(),
        authors in prop::collection::vec(address(), 0..6),
        candidate in address(),
    ) {
        let s = site(&owner, authors.clone());
        let expected = candidate == owner || authors.contains(&candidate);
        prop_assert_eq!(authorized(&s, &candidate), expected);
    }

    #[test]
    fn prop_only_owner_manages(
        owner in address(),
        authors in prop::collection::vec(address(), 0..6),
        candidate in address(),
    ) {
        let s = site(&owner, authors);
        prop_assert_eq!(can_manage_site(&s, &candidate), candidate == owner);
    }
}

#[test]
fn test_owner_listed_as_author_is_owner() {
    let s = site("0xabc", vec!["0xabc".to_string()]);
    assert_eq!(role_of(&s, "0xabc"), Some(SiteRole::Owner));
}

#[test]
fn test_stranger_has_no_role() {
    let s = site("0xabc", vec!["0xdef".to_string()]);
    assert_eq!(role_of(&s, "0x123"), None);
    assert_eq!(role_of(&s, "0xdef"), Some(SiteRole::Author));
}

proptest! {
    #[test]
    fn prop_role_ignores_address_form(
        owner in "[0-9a-f]{64}",
        author in "[0-9a-f]{64}",
    ) {
        let s = site(&format!("0x{}", owner), vec![format!("0x{}", author)]);
        let owner_upper = format!("0X{}", owner.to_uppercase());
        let author_upper = format!("0x{}", author.to_uppercase());
        prop_assert!(can_manage_site(&s, &owner_upper));
        prop_assert!(authorized(&s, &author));
        prop_assert!(authorized(&s, &author_upper));
    }
}
