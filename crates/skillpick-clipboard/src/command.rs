//! Clipboard backed by an external program reading stdin
//!
//! The text goes through a pipe, never through a shell, so quotes and
//! newlines in skill bodies need no escaping.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{ClipboardError, Result};
use crate::publisher::ClipboardPublisher;

/// Clipboard program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Create a publisher running `program args...`
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from a configured argv (`["program", "arg", ...]`)
    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (program, args) = argv
            .split_first()
            .filter(|(program, _)| !program.trim().is_empty())
            .ok_or_else(|| {
                ClipboardError::Config("clipboard.command must name a program".to_string())
            })?;
        Ok(Self::new(program.clone(), args.iter().cloned()))
    }

    /// macOS
    pub fn pbcopy() -> Self {
        Self::new("pbcopy", Vec::<String>::new())
    }

    /// Wayland
    pub fn wl_copy() -> Self {
        Self::new("wl-copy", Vec::<String>::new())
    }

    /// X11 via xclip
    pub fn xclip() -> Self {
        Self::new("xclip", ["-selection", "clipboard"])
    }

    /// X11 via xsel
    pub fn xsel() -> Self {
        Self::new("xsel", ["--clipboard", "--input"])
    }

    /// Windows
    pub fn clip() -> Self {
        Self::new("clip", Vec::<String>::new())
    }

    /// Program name
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check whether the program can be found on `PATH`
    pub fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }
}

#[async_trait]
impl ClipboardPublisher for CommandClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    async fn write(&self, text: &str) -> Result<()> {
        debug!(
            "Copying {} bytes via {} {:?}",
            text.len(),
            self.program,
            self.args
        );

        // xclip and wl-copy fork to keep serving the selection; capturing their
        // output would wait on the forked child, so only the exit status is used.
        let mut child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(text.as_bytes()).await {
                Ok(()) => {}
                // Exit status below says why the program stopped reading
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("{} closed stdin early", self.program);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed {
                program: self.program.clone(),
                status: status.to_string(),
            })
        }
    }
}
