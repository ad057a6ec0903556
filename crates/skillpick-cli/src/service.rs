//! Selection-to-publish pipeline
//!
//! Loader -> matcher -> ranker -> prompt -> clipboard, once per invocation.
//! Expected outcomes (empty repository, unknown name, clipboard failure) are
//! reported on `out` and returned as [`RunOutcome`]; only collaborator
//! failures that cannot be mitigated come back as errors.

use anyhow::Result;
use serde::Serialize;
use skillpick_clipboard::ClipboardPublisher;
use skillpick_skills::matcher::score_all;
use skillpick_skills::ranker::candidate_list;
use skillpick_skills::{CandidateList, Probe, ScoredSkill, SkillsRegistry, SkillsRoot};
use std::io::Write;
use tracing::{debug, info, warn};

use crate::prompt::SelectionPrompt;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Repository held no skills
    NoSkills,
    /// Candidates were printed instead of prompting
    Listed(usize),
    /// The chosen name is not in the loaded set
    NotFound(String),
    /// Skill text is on the clipboard
    Copied(String),
    /// Clipboard failed; the text was printed instead
    PrintedFallback {
        /// Chosen skill
        name: String,
        /// Clipboard failure message
        reason: String,
    },
}

/// `--list --json` document
#[derive(Debug, Serialize)]
struct ListReport<'a> {
    root: String,
    fallback: bool,
    candidates: Vec<ScoredSkill<'a>>,
}

/// Skillpick service - runs the pipeline for one invocation
pub struct SkillPickService {
    root: SkillsRoot,
    max_candidates: usize,
}

impl SkillPickService {
    /// Create a new service for an already resolved root
    pub fn new(root: SkillsRoot, max_candidates: usize) -> Self {
        Self {
            root,
            max_candidates,
        }
    }

    /// Repository root this service reads from
    pub fn root(&self) -> &SkillsRoot {
        &self.root
    }

    /// Scan the repository (creating it when missing)
    pub fn load(&self) -> Result<SkillsRegistry> {
        let mut registry = SkillsRegistry::new(self.root.path());
        registry.discover()?;
        Ok(registry)
    }

    /// Score and rank the loaded skills against `probe`
    pub fn candidates(&self, registry: &SkillsRegistry, probe: &Probe) -> CandidateList {
        let scored = score_all(probe, registry.skills());
        candidate_list(&scored, self.max_candidates)
    }

    /// Interactive run: rank, prompt, publish
    pub async fn run<W: Write>(
        &self,
        probe: &Probe,
        prompt: &dyn SelectionPrompt,
        clipboard: &dyn ClipboardPublisher,
        out: &mut W,
    ) -> Result<RunOutcome> {
        info!("Using skills directory {:?} ({:?})", self.root.path(), self.root.origin());

        let registry = self.load()?;
        if registry.is_empty() {
            return self.report_empty(out);
        }

        let candidates = self.candidates(&registry, probe);
        debug!(
            "Offering {} candidates (fallback: {})",
            candidates.len(),
            candidates.is_fallback()
        );

        let chosen = prompt.select_one(candidates.names()).await?;
        Self::publish(&registry, &chosen, clipboard, out).await
    }

    /// Non-interactive run: print the candidate list
    pub fn list<W: Write>(&self, probe: &Probe, json: bool, out: &mut W) -> Result<RunOutcome> {
        let registry = self.load()?;
        if registry.is_empty() && !json {
            return self.report_empty(out);
        }

        let scored = score_all(probe, registry.skills());
        let candidates = candidate_list(&scored, self.max_candidates);

        let listed: Vec<ScoredSkill<'_>> = candidates
            .names()
            .iter()
            .filter_map(|name| scored.iter().find(|s| s.name() == name.as_str()))
            .copied()
            .collect();

        if json {
            let report = ListReport {
                root: self.root.path().display().to_string(),
                fallback: candidates.is_fallback(),
                candidates: listed,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            return Ok(RunOutcome::Listed(report.candidates.len()));
        }

        if candidates.is_fallback() {
            writeln!(out, "No keyword matches; all skills:")?;
        }
        for skill in &listed {
            writeln!(out, "{:>3}  {}", skill.match_count, skill.name())?;
        }
        Ok(RunOutcome::Listed(listed.len()))
    }

    /// Look up the chosen skill and hand its text to the clipboard
    pub async fn publish<W: Write>(
        registry: &SkillsRegistry,
        chosen: &str,
        clipboard: &dyn ClipboardPublisher,
        out: &mut W,
    ) -> Result<RunOutcome> {
        let Some(skill) = registry.get(chosen) else {
            warn!("Selected skill {:?} is not in the loaded set", chosen);
            writeln!(out, "Skill not found: {chosen}")?;
            return Ok(RunOutcome::NotFound(chosen.to_string()));
        };

        let text = skill.publishable_content();
        match clipboard.write(text).await {
            Ok(()) => {
                info!("Copied skill {} via {}", skill.name, clipboard.name());
                writeln!(
                    out,
                    "Skill \"{}\" copied to clipboard! Paste it into your editor.",
                    skill.name
                )?;
                Ok(RunOutcome::Copied(skill.name.clone()))
            }
            Err(e) => {
                warn!("Clipboard write via {} failed: {}", clipboard.name(), e);
                writeln!(out, "Failed to copy to clipboard: {e}")?;
                writeln!(out, "Skill \"{}\" content:\n", skill.name)?;
                out.write_all(text.as_bytes())?;
                if !text.ends_with('\n') {
                    writeln!(out)?;
                }
                Ok(RunOutcome::PrintedFallback {
                    name: skill.name.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }

    fn report_empty<W: Write>(&self, out: &mut W) -> Result<RunOutcome> {
        writeln!(
            out,
            "No skills found in {}. Add a folder containing SKILL.md for each skill.",
            self.root.path().display()
        )?;
        Ok(RunOutcome::NoSkills)
    }
}
