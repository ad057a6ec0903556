//! Keyword matching against a probe text.
//!
//! Plain substring containment: no stemming, no fuzzy matching. Each keyword
//! contributes at most 1 no matter how often it occurs in the probe.

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::skill::SkillEntry;

/// Lowercased text that skills are scored against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Probe {
    text: String,
}

impl Probe {
    /// Probe from arbitrary text (lowercased here)
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_lowercase(),
        }
    }

    /// Probe that matches no keyword
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read the probe from an optional file argument.
    ///
    /// No argument or a path that does not exist gives an empty probe.
    /// A path that exists but cannot be read is logged and also gives an
    /// empty probe. Invalid UTF-8 is decoded lossily.
    pub fn from_path(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::empty();
        };

        if !path.exists() {
            debug!("Probe file {:?} does not exist, ranking without it", path);
            return Self::empty();
        }

        match fs::read(path) {
            Ok(bytes) => Self::new(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                warn!("Could not read probe file {:?}: {}", path, e);
                Self::empty()
            }
        }
    }

    /// Lowercased probe text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Check if there is nothing to match against
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A skill together with its match count for one probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredSkill<'a> {
    /// The scored skill
    #[serde(flatten)]
    pub entry: &'a SkillEntry,
    /// Number of the skill's keywords found in the probe
    pub match_count: usize,
}

impl ScoredSkill<'_> {
    /// Name of the scored skill
    pub fn name(&self) -> &str {
        &self.entry.name
    }
}

/// Count keywords that occur in `probe`.
///
/// Duplicate keywords are counted once per occurrence in the list, so
/// `react, react` scores 2 against a probe mentioning react.
pub fn match_count(probe: &Probe, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|kw| probe.as_str().contains(kw.as_str()))
        .count()
}

/// Score a single skill
pub fn score<'a>(probe: &Probe, entry: &'a SkillEntry) -> ScoredSkill<'a> {
    ScoredSkill {
        entry,
        match_count: match_count(probe, &entry.keywords),
    }
}

/// Score every skill, keeping discovery order
pub fn score_all<'a>(probe: &Probe, skills: &'a [SkillEntry]) -> Vec<ScoredSkill<'a>> {
    skills.iter().map(|entry| score(probe, entry)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| (*k).to_string()).collect()
    }

    #[rstest]
    #[case("building a react component", &["react", "frontend"], 1)]
    #[case("react react react", &["react"], 1)]
    #[case("react frontend", &["react", "frontend"], 2)]
    #[case("reactive", &["react"], 1)]
    #[case("react", &["react", "react"], 2)]
    #[case("", &["react"], 0)]
    #[case("anything at all", &[], 0)]
    fn test_match_count(#[case] probe: &str, #[case] kws: &[&str], #[case] expected: usize) {
        assert_eq!(match_count(&Probe::new(probe), &keywords(kws)), expected);
    }

    #[test]
    fn test_probe_is_lowercased() {
        let probe = Probe::new("Building a REACT Component");
        assert_eq!(probe.as_str(), "building a react component");
        assert_eq!(match_count(&probe, &keywords(&["react"])), 1);
    }

    #[test]
    fn test_score_is_pure_per_skill() {
        let skills = vec![
            SkillEntry::parse("alpha", "a", "keywords: react\n"),
            SkillEntry::parse("beta", "b", "keywords: sql\n"),
        ];
        let probe = Probe::new("sql and react");

        let forward = score_all(&probe, &skills);
        let mut reversed: Vec<_> = skills.iter().rev().map(|s| score(&probe, s)).collect();
        reversed.reverse();

        assert_eq!(forward, reversed);
        assert!(forward.iter().all(|s| s.match_count == 1));
    }

    #[test]
    fn test_probe_from_missing_path() {
        let tmp = TempDir::new().unwrap();
        let probe = Probe::from_path(Some(tmp.path().join("nope.txt").as_path()));
        assert!(probe.is_empty());
        assert!(Probe::from_path(None).is_empty());
    }

    #[test]
    fn test_probe_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("App.tsx");
        std::fs::write(&path, "export const App = () => <React.Fragment/>").unwrap();

        let probe = Probe::from_path(Some(path.as_path()));
        assert!(probe.as_str().contains("react.fragment"));
    }

    #[test]
    fn test_probe_from_unreadable_path() {
        let tmp = TempDir::new().unwrap();
        // a directory exists but cannot be read as a file
        let probe = Probe::from_path(Some(tmp.path()));
        assert!(probe.is_empty());
    }
}
