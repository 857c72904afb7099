#![allow(clippy::unwrap_used, clippy::expect_used)]

use ledgerpress_core::rules::{derive_slug, is_valid_slug, MAX_SLUG_LEN};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_derive_slug_is_idempotent(title in ".{0,120}") {
        let once = derive_slug(&title);
        prop_assert_eq!(derive_slug(&once), once.clone());
    }

    #[test]
    fn prop_derived_slug_is_empty_or_valid(title in ".{0,120}") {
        let slug = derive_slug(&title);
        prop_assert!(slug.is_empty() || is_valid_slug(&slug), "invalid slug {:?}", slug);
        prop_assert!(slug.chars().count() <= MAX_SLUG_LEN);
    }

    #[test]
    fn prop_ascii_words_survive(words in prop::collection::vec("[a-z0-9]{1,8}", 1..5)) {
        let title = words.join("  ");
        let slug = derive_slug(&title);
        prop_assert_eq!(slug, words.join("-"));
    }

    #[test]
    fn prop_no_edge_or_double_hyphens(title in "[ a-zA-Z0-9!?,.-]{0,80}") {
        let slug = derive_slug(&title);
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }
}
