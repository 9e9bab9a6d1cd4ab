use crate::domain::ports::EventPublisher;
use crate::domain::transaction::OutboundMessage;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::io::Write;
use tokio::sync::Mutex;

/// Publishes each message as one line of JSON to a writer.
///
/// Lines are flushed as they are written, so a consumer tailing the file sees
/// every notification that was acknowledged. Writes happen on the calling task,
/// so the writer should be a local file or an in-memory buffer.
pub struct JsonLinesPublisher<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesPublisher<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the publisher and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W: Write + Send> EventPublisher for JsonLinesPublisher<W> {
    async fn publish(&self, message: OutboundMessage) -> Result<()> {
        let mut line = serde_json::to_vec(&message)?;
        line.push(b'\n');

        let mut writer = self.writer.lock().await;
        writer
            .write_all(&line)
            .and_then(|_| writer.flush())
            .map_err(|e| PaymentError::PublishError(e.to_string()))
    }
}
