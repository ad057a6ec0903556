//! Reduce scored skills to the list offered to the user

use tracing::debug;

use crate::matcher::ScoredSkill;

/// Upper bound on ranked candidates
pub const MAX_CANDIDATES: usize = 5;

/// Ordered skill names offered for selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateList {
    names: Vec<String>,
    fallback: bool,
}

impl CandidateList {
    /// Candidate names in offer order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Consume into the name list
    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    /// `true` when no skill matched and every skill is offered
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if there is nothing to offer
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Sort matching skills by descending match count and keep the top `limit`
///
/// `sort_by` is stable, so equal scores keep discovery order. Skills with a
/// zero count are dropped.
pub fn rank<'a>(scored: &[ScoredSkill<'a>], limit: usize) -> Vec<ScoredSkill<'a>> {
    let mut ranked: Vec<ScoredSkill<'a>> = scored
        .iter()
        .copied()
        .filter(|s| s.match_count > 0)
        .collect();
    ranked.sort_by(|a, b| b.match_count.cmp(&a.match_count));
    ranked.truncate(limit);
    ranked
}

/// Build the candidate list: the top matches, or every skill in discovery
/// order when nothing matched
pub fn candidate_list(scored: &[ScoredSkill<'_>], limit: usize) -> CandidateList {
    let ranked = rank(scored, limit);

    if ranked.is_empty() {
        debug!("No keyword matches, offering all {} skills", scored.len());
        return CandidateList {
            names: scored.iter().map(|s| s.name().to_string()).collect(),
            fallback: true,
        };
    }

    debug!("Offering {} ranked skills", ranked.len());
    CandidateList {
        names: ranked.iter().map(|s| s.name().to_string()).collect(),
        fallback: false,
    }
}
