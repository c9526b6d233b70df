//! Property-based tests

mod list_filter_proptest;
mod validation_proptest;
