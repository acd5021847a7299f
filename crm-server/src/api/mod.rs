//! API route modules
//!
//! - [`health`] — health check
//! - [`orders`] — order management endpoints
//! - [`ai`] — generation endpoints (suggestions, insights, rule conversion)

pub mod ai;
pub mod health;
pub mod orders;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
