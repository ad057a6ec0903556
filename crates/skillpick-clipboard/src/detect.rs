//! Backend selection by configuration and host platform

use async_trait::async_trait;
use tracing::{debug, info};

use crate::command::CommandClipboard;
use crate::config::{Backend, ClipboardConfig};
use crate::error::{ClipboardError, Result};
use crate::osc52::Osc52Clipboard;
use crate::publisher::ClipboardPublisher;

/// Clipboard programs worth probing on `os`, in preference order
pub fn platform_candidates(os: &str, wayland: bool) -> Vec<CommandClipboard> {
    match os {
        "macos" => vec![CommandClipboard::pbcopy()],
        "windows" => vec![CommandClipboard::clip()],
        _ if wayland => vec![
            CommandClipboard::wl_copy(),
            CommandClipboard::xclip(),
            CommandClipboard::xsel(),
        ],
        _ => vec![
            CommandClipboard::xclip(),
            CommandClipboard::xsel(),
            CommandClipboard::wl_copy(),
        ],
    }
}

/// Pick a publisher for this host: first installed program, then OSC 52 when
/// attached to a terminal
pub fn detect() -> Result<Box<dyn ClipboardPublisher>> {
    let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
    let candidates = platform_candidates(std::env::consts::OS, wayland);

    if let Some(found) = candidates.iter().find(|c| c.is_available()) {
        debug!("Using clipboard program {}", found.program());
        return Ok(Box::new(found.clone()));
    }

    if Osc52Clipboard::is_available() {
        info!("No clipboard program found, falling back to OSC 52");
        return Ok(Box::new(Osc52Clipboard::new()));
    }

    let tried = candidates
        .iter()
        .map(CommandClipboard::program)
        .collect::<Vec<_>>()
        .join(", ");
    Err(ClipboardError::NoBackend { tried })
}

/// Publisher that detects the host mechanism when first asked to write
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoClipboard;

#[async_trait]
impl ClipboardPublisher for AutoClipboard {
    fn name(&self) -> &str {
        "auto"
    }

    async fn write(&self, text: &str) -> Result<()> {
        detect()?.write(text).await
    }
}

/// Build the publisher named by `config`
pub fn from_config(config: &ClipboardConfig) -> Result<Box<dyn ClipboardPublisher>> {
    let publisher: Box<dyn ClipboardPublisher> = match config.backend {
        Backend::Auto => Box::new(AutoClipboard),
        Backend::Pbcopy => Box::new(CommandClipboard::pbcopy()),
        Backend::WlCopy => Box::new(CommandClipboard::wl_copy()),
        Backend::Xclip => Box::new(CommandClipboard::xclip()),
        Backend::Xsel => Box::new(CommandClipboard::xsel()),
        Backend::Clip => Box::new(CommandClipboard::clip()),
        Backend::Osc52 => Box::new(Osc52Clipboard::new()),
        Backend::Command => Box::new(CommandClipboard::from_argv(&config.command)?),
    };
    debug!("Clipboard backend: {}", publisher.name());
    Ok(publisher)
}
