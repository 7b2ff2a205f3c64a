//! Stream consumption for one generation attempt
//!
//! Fragments arrive in order from an opaque producer; the consumer
//! forwards each one unmodified, accumulates the full text by
//! concatenation, and settles on exactly one terminal outcome. The
//! by-value `done`/`fail` methods make a double terminal impossible to
//! express.

use crate::error::StreamError;
use tokio::sync::mpsc;
use tracing::debug;

/// Events delivered by the fragment producer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// One text fragment, to be appended verbatim
    Fragment(String),
    /// Attempt completed; the accumulated text is the full output
    Done,
    /// Producer failed before completion
    Failed(String),
}

/// Accumulates fragments from one generation attempt
///
/// No storage access, no side effects beyond invoking the fragment
/// callback. Dropping a consumer without calling `done` or `fail`
/// abandons the attempt.
#[derive(Debug)]
pub struct StreamConsumer<F = fn(&str)>
where
    F: FnMut(&str),
{
    buffer: String,
    on_fragment: F,
}

impl StreamConsumer {
    /// Consumer that accumulates without forwarding fragments anywhere
    #[inline]
    #[must_use]
    pub fn silent() -> Self {
        fn ignore(_: &str) {}
        Self::new(ignore as fn(&str))
    }
}

impl<F> StreamConsumer<F>
where
    F: FnMut(&str),
{
    /// Create a consumer forwarding each fragment to `on_fragment`
    #[inline]
    #[must_use]
    pub fn new(on_fragment: F) -> Self {
        Self {
            buffer: String::new(),
            on_fragment,
        }
    }

    /// Observe one fragment: forward it, then append to the buffer
    pub fn fragment(&mut self, text: &str) {
        (self.on_fragment)(text);
        self.buffer.push_str(text);
    }

    /// Text accumulated so far
    #[inline]
    #[must_use]
    pub fn buffered(&self) -> &str {
        &self.buffer
    }

    /// Terminal success: every fragment has been observed
    #[inline]
    #[must_use]
    pub fn done(self) -> String {
        self.buffer
    }

    /// Terminal failure before completion
    #[inline]
    #[must_use]
    pub fn fail(self, message: impl Into<String>) -> StreamError {
        StreamError::Transport(message.into())
    }

    /// Drain a producer channel to its terminal event
    ///
    /// A channel that closes without `Done` or `Failed` counts as a
    /// transport failure: the producer hung up mid-attempt.
    pub async fn drain(
        mut self,
        mut events: mpsc::Receiver<StreamEvent>,
    ) -> Result<String, StreamError> {
        while let Some(event) = events.recv().await {
            match event {
                StreamEvent::Fragment(text) => self.fragment(&text),
                StreamEvent::Done => {
                    debug!(bytes = self.buffer.len(), "stream completed");
                    return Ok(self.done());
                }
                StreamEvent::Failed(message) => {
                    debug!(%message, "stream failed");
                    return Err(self.fail(message));
                }
            }
        }
        Err(self.fail("stream closed before completion"))
    }
}
