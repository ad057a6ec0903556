//! `skillpick` command-line pipeline
//!
//! Ranks the skills of a repository against an optional file and copies the
//! chosen one to the clipboard. The binary in `main.rs` wires configuration,
//! logging and the terminal collaborators into [`service::SkillPickService`].

pub mod config;
pub mod prompt;
pub mod service;

pub use config::Config;
pub use prompt::{FixedChoice, SelectionPrompt, TerminalPrompt};
pub use service::{RunOutcome, SkillPickService};
