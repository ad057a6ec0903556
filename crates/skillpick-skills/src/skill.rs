//! Skill definition and parsing
//!
//! Each skill is a folder containing SKILL.md. The first line may carry a
//! keyword directive:
//!
//! ```text
//! keywords: react, frontend
//! Prefer function components and hooks...
//! ```

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Descriptor file expected inside every skill directory
pub const SKILL_FILE: &str = "SKILL.md";

/// Marker that opens the keyword directive line (matched case-insensitively)
pub const KEYWORDS_MARKER: &str = "keywords:";

/// A skill loaded from the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    /// Directory name, unique within one repository snapshot
    pub name: String,
    /// Path of the SKILL.md this entry was read from
    pub source_path: PathBuf,
    /// Full descriptor text, directive line included
    #[serde(skip)]
    pub raw_content: String,
    /// Lowercased keywords from the directive line, in file order
    pub keywords: Vec<String>,
}

impl SkillEntry {
    /// Build an entry from already-read descriptor text
    pub fn parse(
        name: impl Into<String>,
        source_path: impl Into<PathBuf>,
        raw_content: impl Into<String>,
    ) -> Self {
        let raw_content = raw_content.into();
        let keywords = parse_keywords(&raw_content);
        Self {
            name: name.into(),
            source_path: source_path.into(),
            raw_content,
            keywords,
        }
    }

    /// Load a skill from its directory.
    ///
    /// Returns `Ok(None)` when the directory has no SKILL.md yet or its name
    /// is not valid UTF-8; both are skipped rather than reported.
    pub fn from_dir(dir: &Path) -> Result<Option<Self>> {
        let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
            debug!("Skipping {:?}: directory name is not valid UTF-8", dir);
            return Ok(None);
        };

        let skill_file = dir.join(SKILL_FILE);
        if !skill_file.is_file() {
            debug!("Skipping {:?}: no {}", dir, SKILL_FILE);
            return Ok(None);
        }

        let bytes =
            fs::read(&skill_file).with_context(|| format!("Failed to read {:?}", skill_file))?;
        let content = String::from_utf8_lossy(&bytes).into_owned();

        Ok(Some(Self::parse(name, skill_file, content)))
    }

    /// Get the skill name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text handed to the clipboard: raw content minus the directive line
    pub fn publishable_content(&self) -> &str {
        strip_directive(&self.raw_content)
    }
}

/// Return the text after the marker if `line` is a keyword directive
fn directive_payload(line: &str) -> Option<&str> {
    let prefix = line.get(..KEYWORDS_MARKER.len())?;
    if prefix.eq_ignore_ascii_case(KEYWORDS_MARKER) {
        Some(&line[KEYWORDS_MARKER.len()..])
    } else {
        None
    }
}

/// Parse the keyword list from the first line of a descriptor.
///
/// Pieces are trimmed and lowercased, nothing more. Empty pieces (`"a,,b"`,
/// trailing comma, a bare `keywords:`) stay as `""`, which every probe
/// contains. Duplicates are kept and each one counts when matching.
pub fn parse_keywords(content: &str) -> Vec<String> {
    let first_line = content.split('\n').next().unwrap_or_default();
    let Some(payload) = directive_payload(first_line) else {
        return Vec::new();
    };

    payload
        .split(',')
        .map(|k| k.trim().to_lowercase())
        .collect()
}

/// Remove a single leading keyword directive line, if present
pub fn strip_directive(content: &str) -> &str {
    let (first_line, rest) = match content.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (content, ""),
    };

    if directive_payload(first_line).is_some() {
        rest
    } else {
        content
    }
}
