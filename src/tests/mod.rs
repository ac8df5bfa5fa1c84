mod normalize_tests;
mod query_tests;
