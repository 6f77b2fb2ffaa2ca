use std::time::Duration;
use tokio::time::Instant;

/// Per-request execution context handed down the fetch pipeline.
///
/// Carries an optional deadline; the outbound catalog call is aborted once it
/// passes. Dropping the request future cancels the call as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context with no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
