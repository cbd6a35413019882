//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A test server over a temporary data directory
//! - Raw document fixtures written straight to disk
//! - Custom assertion macros

#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "ssr")]
pub use server::*;
pub use fixtures::*;
