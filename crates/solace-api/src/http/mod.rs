//! HTTP layer for the Solace relay.
//!
//! Axum-based API with the chat endpoint at `/api/chat`, a configurable
//! CORS allow-list, and SPA-style static file serving for all other paths.

pub mod error;
pub mod handlers;
pub mod router;
