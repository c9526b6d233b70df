//! Property-based tests for the list filter
//!
//! Uses proptest to generate post lists and queries and checks the view
//! against a direct reading of the matching rule.

use lagerblogs::shared::{ListFilter, Post};
use proptest::prelude::*;

fn post(id: i64, title: String, content: String) -> Post {
    Post {
        id,
        title,
        content,
        created_at: String::new(),
        image: None,
        caption: None,
        author: None,
    }
}

fn posts() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec(("[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,24}"), 0..20).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (title, content))| post(i as i64, title, content))
            .collect()
    })
}

fn filtered(source: Vec<Post>, query: &str) -> ListFilter<Post> {
    let mut filter = ListFilter::default();
    filter.set_source(source);
    filter.set_query(query);
    filter
}

proptest! {
    #[test]
    fn test_view_is_ordered_subsequence(source in posts(), query in "[a-zA-Z ]{0,4}") {
        let filter = filtered(source.clone(), &query);
        let ids: Vec<i64> = filter.view().map(|p| p.id).collect();

        let mut remaining = source.iter().map(|p| p.id);
        for id in &ids {
            prop_assert!(remaining.any(|s| s == *id), "id {} out of order or missing", id);
        }
    }

    #[test]
    fn test_blank_query_shows_everything(source in posts(), spaces in " {0,3}") {
        let filter = filtered(source.clone(), &spaces);
        prop_assert_eq!(filter.view_cloned(), source);
    }

    #[test]
    fn test_membership_matches_case_folded_substring(source in posts(), query in "[a-zA-Z]{1,3}") {
        let filter = filtered(source.clone(), &query);
        let needle = query.to_lowercase();

        let expected: Vec<i64> = source
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle) || p.content.to_lowercase().contains(&needle))
            .map(|p| p.id)
            .collect();
        let shown: Vec<i64> = filter.view().map(|p| p.id).collect();
        prop_assert_eq!(shown, expected);
    }

    #[test]
    fn test_setting_query_twice_is_idempotent(source in posts(), query in "[a-zA-Z ]{0,4}") {
        let mut once = filtered(source.clone(), &query);
        let mut twice = filtered(source, &query);
        twice.set_query(query.clone());

        prop_assert_eq!(once.view_cloned(), twice.view_cloned());
        once.set_query("");
        prop_assert_eq!(once.view_len(), once.source().len());
    }
}
