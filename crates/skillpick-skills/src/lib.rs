//! `skillpick` Skills System
//!
//! Loads skill descriptors from a repository directory, scores them against
//! a probe text and reduces them to a short candidate list.
//!
//! ## Pipeline
//!
//! 1. Loader ([`SkillsRegistry`]): every immediate subdirectory holding a
//!    `SKILL.md` becomes a [`SkillEntry`], in directory-name order
//! 2. Matcher ([`matcher`]): count the skill's keywords contained in the probe
//! 3. Ranker ([`ranker`]): top matches by count, or every skill when none match
//!
//! Everything is recomputed per invocation; the repository on disk is the
//! only state.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod matcher;
pub mod ranker;
pub mod registry;
pub mod skill;

pub use matcher::{Probe, ScoredSkill};
pub use ranker::{CandidateList, MAX_CANDIDATES};
pub use registry::{RootOrigin, SkillsRegistry, SkillsRoot};
pub use skill::SkillEntry;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{CandidateList, Probe, ScoredSkill, SkillEntry, SkillsRegistry, SkillsRoot};
}
