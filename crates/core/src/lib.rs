//! Blog Portal Core - Shared types library.
//!
//! This crate provides common types used across the Blog Portal components:
//! - `shopify` - REST Admin API session, exporter, and importer
//! - `cli` - Command-line entry point
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and handles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
