//! swapdesk-api: HTTP API layer for Swapdesk
//!
//! Exposes Mayachain asset resolution, quote comparison and the ERC-20
//! allowance query as JSON endpoints.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::{AppState, QuoteBoard};
