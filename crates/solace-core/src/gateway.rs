//! ChatGateway trait definition.
//!
//! The port the infrastructure layer implements: one outbound chat call
//! per invocation, returning the extracted reply text. Uses native async
//! fn in traits (RPITIT, Rust 2024 edition); handlers are generic over the
//! implementation, so no boxing is needed.

use solace_types::error::GatewayError;
use solace_types::gateway::GatewayMessage;

/// Trait for the model gateway backend.
///
/// The implementation lives in `solace-infra` (`OllamaGateway`); tests use
/// in-memory fakes. A single call per chat request, no retries -- the
/// caller does not retry either.
pub trait ChatGateway: Send + Sync {
    /// Send the assembled message list and return the extracted reply text.
    ///
    /// The returned string may be empty when the upstream body parsed but
    /// yielded no content from any known shape; the endpoint normalizes
    /// that to a placeholder. Transport failures, non-success statuses,
    /// and unparseable bodies surface as [`GatewayError`].
    fn reply(
        &self,
        messages: Vec<GatewayMessage>,
    ) -> impl std::future::Future<Output = Result<String, GatewayError>> + Send;
}
