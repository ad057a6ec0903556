//! Configuration types for clipboard publishing

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ClipboardError;

/// Clipboard configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ClipboardConfig {
    /// Which mechanism to use
    #[serde(default)]
    pub backend: Backend,

    /// Program and arguments for [`Backend::Command`], e.g. `["xclip", "-i"]`
    #[serde(default)]
    pub command: Vec<String>,
}

/// Clipboard mechanism
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Pick by host platform at write time
    #[default]
    Auto,
    /// macOS `pbcopy`
    Pbcopy,
    /// Wayland `wl-copy`
    WlCopy,
    /// X11 `xclip -selection clipboard`
    Xclip,
    /// X11 `xsel --clipboard --input`
    Xsel,
    /// Windows `clip`
    Clip,
    /// Terminal escape sequence, works over SSH
    Osc52,
    /// User-supplied program from `clipboard.command`
    Command,
}

impl Backend {
    /// All names accepted by [`Backend::from_str`]
    pub const NAMES: &'static [&'static str] = &[
        "auto", "pbcopy", "wl-copy", "xclip", "xsel", "clip", "osc52", "command",
    ];

    /// Config/CLI spelling of this backend
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Auto => "auto",
            Backend::Pbcopy => "pbcopy",
            Backend::WlCopy => "wl-copy",
            Backend::Xclip => "xclip",
            Backend::Xsel => "xsel",
            Backend::Clip => "clip",
            Backend::Osc52 => "osc52",
            Backend::Command => "command",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = ClipboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Backend::Auto),
            "pbcopy" => Ok(Backend::Pbcopy),
            "wl-copy" | "wlcopy" => Ok(Backend::WlCopy),
            "xclip" => Ok(Backend::Xclip),
            "xsel" => Ok(Backend::Xsel),
            "clip" => Ok(Backend::Clip),
            "osc52" => Ok(Backend::Osc52),
            "command" => Ok(Backend::Command),
            other => Err(ClipboardError::Config(format!(
                "unknown clipboard backend '{other}' (expected one of: {})",
                Backend::NAMES.join(", ")
            ))),
        }
    }
}
