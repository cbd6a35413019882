//! Integration tests
//!
//! HTTP tests against the full router, store tests against the
//! filesystem, and configuration loading from the environment.

mod config_test;
