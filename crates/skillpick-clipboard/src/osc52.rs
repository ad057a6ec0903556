//! Clipboard via the OSC 52 terminal escape sequence
//!
//! The terminal emulator owns the clipboard, so this works over SSH and
//! inside containers without any helper program. Terminals do not
//! acknowledge the sequence: a successful write means it was emitted, not
//! that the terminal accepted it.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::IsTerminal;
use tokio::io::AsyncWriteExt;

use crate::error::{ClipboardError, Result};
use crate::publisher::ClipboardPublisher;

/// Encoded payload limit; several terminals drop longer sequences
pub const MAX_ENCODED_LEN: usize = 100_000;

/// OSC 52 publisher writing to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct Osc52Clipboard;

impl Osc52Clipboard {
    /// Create the publisher
    pub fn new() -> Self {
        Self
    }

    /// Check whether stderr is attached to a terminal that could receive it
    pub fn is_available() -> bool {
        std::io::stderr().is_terminal()
    }
}

/// Build the escape sequence setting the clipboard selection to `text`
pub fn sequence(text: &str) -> Result<String> {
    let encoded = STANDARD.encode(text.as_bytes());
    if encoded.len() > MAX_ENCODED_LEN {
        return Err(ClipboardError::Unsupported(format!(
            "text too large for OSC 52 ({} encoded bytes, limit {MAX_ENCODED_LEN})",
            encoded.len()
        )));
    }
    Ok(format!("\x1b]52;c;{encoded}\x07"))
}

#[async_trait]
impl ClipboardPublisher for Osc52Clipboard {
    fn name(&self) -> &str {
        "osc52"
    }

    async fn write(&self, text: &str) -> Result<()> {
        if !Self::is_available() {
            return Err(ClipboardError::Unsupported(
                "stderr is not a terminal".to_string(),
            ));
        }

        let seq = sequence(text)?;
        let mut stderr = tokio::io::stderr();
        stderr.write_all(seq.as_bytes()).await?;
        stderr.flush().await?;
        Ok(())
    }
}
