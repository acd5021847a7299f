//! Shared types for the CRM backend
//!
//! Data models exchanged across the API boundary plus small
//! utility helpers (timestamps, ID generation).

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
