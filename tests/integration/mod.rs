//! Integration tests
//!
//! Every test here runs the real client against a wiremock backend.

mod app_test;
mod detail_test;
