use crate::scraper::query::{build_query, DEFAULT_QUERY};

fn pairs(input: &[(&str, &str)]) -> Vec<(String, String)> {
    input
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn empty_input_falls_back_to_default_query() {
    assert_eq!(build_query(&[]), DEFAULT_QUERY);
    assert_eq!(
        DEFAULT_QUERY,
        "lang=&search_categories=&search_keywords=developer&search_location=&per_page=15&orderby=featured&order=DESC&page=2"
    );
}

#[test]
fn pairs_are_joined_in_iteration_order() {
    let query = build_query(&pairs(&[("search_keywords", "rust"), ("page", "1")]));
    assert_eq!(query, "search_keywords=rust&page=1&");
}

#[test]
fn unexpected_keys_are_forwarded_verbatim() {
    let query = build_query(&pairs(&[("totally_unknown", "x")]));
    assert_eq!(query, "totally_unknown=x&");
}

#[test]
fn non_empty_input_ignores_the_default() {
    let query = build_query(&pairs(&[("page", "3")]));
    assert!(!query.contains("developer"));
}

#[test]
fn empty_values_are_kept() {
    let query = build_query(&pairs(&[("search_location", "")]));
    assert_eq!(query, "search_location=&");
}
