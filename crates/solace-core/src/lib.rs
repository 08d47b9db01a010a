//! Business logic for the Solace relay.
//!
//! This crate defines the "port" (the [`gateway::ChatGateway`] trait) that
//! the infrastructure layer implements, plus the pure request-processing
//! pieces: crisis screening, persona resolution, and conversation assembly.
//! It depends only on `solace-types` -- never on `solace-infra` or any
//! HTTP/IO crate.

pub mod conversation;
pub mod gateway;
pub mod persona;
pub mod safety;
