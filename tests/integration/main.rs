//! Integration test binary -- all integration tests consolidated into a single
//! binary so the crate links once.
//!
//! See the matklad pattern: <https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html>

// Allow unwrap/expect in test code
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod helpers;

mod classify_properties;
mod config_roundtrip;
mod host_bridge_session;
mod portuguese_corpus;
mod triage_precedence;
