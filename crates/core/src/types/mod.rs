//! Core types for Blog Portal.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod handle;
pub mod id;

pub use handle::{Handle, HandleError};
pub use id::*;
