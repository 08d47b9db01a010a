//! Test doubles for the HTTP layer.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use solace_core::gateway::ChatGateway;
use solace_types::error::GatewayError;
use solace_types::gateway::GatewayMessage;

enum MockBehavior {
    Reply(String),
    Fail,
}

/// In-memory [`ChatGateway`] that records every call and returns a canned
/// outcome. Lets endpoint tests assert both the forwarded conversation and
/// that the crisis short-circuit performs no call at all.
pub struct MockGateway {
    behavior: MockBehavior,
    calls: AtomicUsize,
    captured: Mutex<Vec<Vec<GatewayMessage>>>,
}

impl MockGateway {
    pub fn replying(text: &str) -> Self {
        Self {
            behavior: MockBehavior::Reply(text.to_string()),
            calls: AtomicUsize::new(0),
            captured: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            behavior: MockBehavior::Fail,
            calls: AtomicUsize::new(0),
            captured: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// All forwarded message lists, one entry per call.
    pub fn captured(&self) -> Vec<Vec<GatewayMessage>> {
        self.captured.lock().unwrap().clone()
    }

    /// The message list from the most recent call.
    pub fn last_messages(&self) -> Vec<GatewayMessage> {
        self.captured
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("gateway was never called")
    }
}

impl ChatGateway for MockGateway {
    async fn reply(&self, messages: Vec<GatewayMessage>) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.captured.lock().unwrap().push(messages);
        match &self.behavior {
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Fail => Err(GatewayError::Status {
                status: 500,
                body: "upstream unavailable".to_string(),
            }),
        }
    }
}
