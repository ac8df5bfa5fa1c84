/// Fallback body sent upstream when the request carries no search
/// parameters: keyword "developer", 15 results, featured first, page 2.
pub const DEFAULT_QUERY: &str = "lang=&search_categories=&search_keywords=developer&search_location=&per_page=15&orderby=featured&order=DESC&page=2";

/// Translate inbound query pairs into the upstream form body.
///
/// Pairs are forwarded verbatim in iteration order, each terminated by `&`.
/// Upstream accepts the trailing separator and is the sole arbiter of which
/// keys mean anything.
pub fn build_query(pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return DEFAULT_QUERY.to_string();
    }

    let mut query = String::new();
    for (key, value) in pairs {
        query.push_str(key);
        query.push('=');
        query.push_str(value);
        query.push('&');
    }

    query
}
