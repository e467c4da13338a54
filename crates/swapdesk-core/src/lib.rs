//! Swapdesk-core: Shared identifiers, errors, and configuration
//!
//! This crate provides the foundational types used across the Swapdesk workspace.

pub mod config;
pub mod errors;
pub mod swapper;
pub mod types;

pub use config::*;
pub use errors::*;
pub use swapper::*;
pub use types::*;
