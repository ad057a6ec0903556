//! The clipboard capability consumed by the pipeline

use async_trait::async_trait;

use crate::error::Result;

/// Something that can place text on the system clipboard
#[async_trait]
pub trait ClipboardPublisher: Send + Sync {
    /// Short backend name for logs and messages
    fn name(&self) -> &str;

    /// Write `text` to the clipboard. Attempted once, never retried.
    async fn write(&self, text: &str) -> Result<()>;
}
