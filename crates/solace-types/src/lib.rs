//! Shared domain types for Solace.
//!
//! This crate contains the types used across the Solace relay: conversation
//! turns, the chat request/reply wire shapes, the upstream gateway payload,
//! and the gateway error type.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod error;
pub mod gateway;
