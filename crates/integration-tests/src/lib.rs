//! Integration tests for Cartful.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cartful-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_sessions` - Cart state surviving session restarts through the
//!   file store
//! - `cart_recovery` - Corruption fallback and cross-consumer store sharing
//!
//! Tests run against real temp-directory-backed [`cartful_cart::FileStore`]
//! instances; no external services are involved.

#![cfg_attr(not(test), forbid(unsafe_code))]
