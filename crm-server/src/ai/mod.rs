//! AI Adapter
//!
//! Wraps the remote text-generation endpoint behind three typed
//! operations. Each operation builds a task-specific prompt, invokes
//! the endpoint with bounded output and a task temperature, and parses
//! the raw text into the task's shape. Every failure — transport,
//! non-success status, unparseable output — surfaces as a single
//! opaque [`AiError::GenerationFailed`] carrying the task name.

pub mod client;
pub mod parser;
pub mod service;

pub use client::GenerationClient;
pub use service::{AiError, AiService, GenerationTask};
