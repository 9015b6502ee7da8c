//! Integration tests for robots-probe
//!
//! These tests use wiremock to serve robots.txt files from a mock HTTP server
//! and exercise retrieval, parsing, matching and caching end-to-end.

mod fetch_tests;
mod robots_tests;
