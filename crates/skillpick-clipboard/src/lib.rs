//! `skillpick` Clipboard Library
//!
//! One [`ClipboardPublisher`] capability with interchangeable backends:
//!
//! - [`CommandClipboard`]: pipe text into `pbcopy`, `wl-copy`, `xclip`,
//!   `xsel`, `clip` or a configured program
//! - [`Osc52Clipboard`]: ask the terminal emulator via an escape sequence
//! - [`AutoClipboard`]: choose by host platform at write time

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod command;
pub mod config;
pub mod detect;
pub mod error;
pub mod osc52;
pub mod publisher;

pub use command::CommandClipboard;
pub use config::{Backend, ClipboardConfig};
pub use detect::{detect, from_config, AutoClipboard};
pub use error::ClipboardError;
pub use osc52::Osc52Clipboard;
pub use publisher::ClipboardPublisher;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ClipboardConfig, ClipboardError, ClipboardPublisher};
}
