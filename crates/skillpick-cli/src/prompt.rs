//! Selection prompt: present candidate names, get one back

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stderr, Stdin};
use tokio::sync::Mutex;
use tracing::debug;

/// Something that lets the user choose one candidate
#[async_trait]
pub trait SelectionPrompt: Send + Sync {
    /// Present `candidates` (never empty) and return the chosen name
    async fn select_one(&self, candidates: &[String]) -> Result<String>;
}

/// Choice made up front, e.g. from `--skill`
#[derive(Debug, Clone)]
pub struct FixedChoice {
    name: String,
}

impl FixedChoice {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl SelectionPrompt for FixedChoice {
    async fn select_one(&self, _candidates: &[String]) -> Result<String> {
        Ok(self.name.clone())
    }
}

/// Numbered list on a terminal
///
/// Accepts a 1-based number or an exact name. An empty line picks the first
/// entry. End of input cancels the selection.
#[derive(Debug)]
pub struct TerminalPrompt<R, W> {
    io: Mutex<(R, W)>,
}

impl TerminalPrompt<BufReader<Stdin>, Stderr> {
    /// Read from stdin, draw on stderr so stdout only carries results
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stderr())
    }
}

impl<R, W> TerminalPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        self.io.into_inner()
    }
}

/// Interpret one line of user input against the candidate list
fn parse_choice(input: &str, candidates: &[String]) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return Some(0);
    }

    if let Ok(n) = input.parse::<usize>() {
        return (1..=candidates.len()).contains(&n).then(|| n - 1);
    }

    candidates.iter().position(|c| c == input)
}

#[async_trait]
impl<R, W> SelectionPrompt for TerminalPrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn select_one(&self, candidates: &[String]) -> Result<String> {
        if candidates.is_empty() {
            bail!("no skills to choose from");
        }

        let mut guard = self.io.lock().await;
        let (reader, writer) = &mut *guard;

        let mut menu = String::from("Select a skill to use:\n");
        for (i, name) in candidates.iter().enumerate() {
            menu.push_str(&format!("  {}) {}\n", i + 1, name));
        }
        writer.write_all(menu.as_bytes()).await?;

        loop {
            writer
                .write_all(format!("Choice [1-{}, default 1]: ", candidates.len()).as_bytes())
                .await?;
            writer.flush().await?;

            let mut line = String::new();
            if reader.read_line(&mut line).await? == 0 {
                writer.write_all(b"\n").await?;
                bail!("selection cancelled");
            }

            match parse_choice(&line, candidates) {
                Some(index) => {
                    debug!("Selected candidate {} of {}", index + 1, candidates.len());
                    return Ok(candidates[index].clone());
                }
                None => {
                    writer
                        .write_all(
                            format!(
                                "Please enter a number between 1 and {} or a skill name.\n",
                                candidates.len()
                            )
                            .as_bytes(),
                        )
                        .await?;
                }
            }
        }
    }
}
