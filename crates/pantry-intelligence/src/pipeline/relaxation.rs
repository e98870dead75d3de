// ABOUTME: Relaxation supervision for soft constraint stages
// ABOUTME: Rolls back stages that would empty the pool, except safety-critical ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{CandidatePool, ConstraintKind};

/// Record of a soft constraint that was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaxationNote {
    /// The constraint that was relaxed
    pub constraint: ConstraintKind,
    /// Candidates in the pool before the stage ran (and after it was rolled back)
    pub pool_size_before: usize,
}

/// Decides whether each stage's result is kept or rolled back
#[derive(Debug, Default)]
pub struct RelaxationController {
    notes: Vec<RelaxationNote>,
}

impl RelaxationController {
    /// Controller with no recorded relaxations
    #[must_use]
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Run `stage` on `pool` and decide whether to keep its result
    ///
    /// Non-empty results are accepted. An empty result is accepted only for a
    /// safety-critical constraint; for soft ones the input pool is returned and
    /// a note is recorded.
    pub fn apply_stage<'a, F>(
        &mut self,
        pool: CandidatePool<'a>,
        kind: ConstraintKind,
        stage: F,
    ) -> CandidatePool<'a>
    where
        F: FnOnce(&CandidatePool<'a>) -> CandidatePool<'a>,
    {
        let narrowed = stage(&pool);
        if !narrowed.is_empty() || kind.is_safety_critical() {
            return narrowed;
        }

        warn!(
            constraint = kind.as_str(),
            pool_size = pool.len(),
            "Constraint would eliminate every candidate, relaxing it"
        );
        self.notes.push(RelaxationNote {
            constraint: kind,
            pool_size_before: pool.len(),
        });
        pool
    }

    /// Relaxations recorded so far
    #[must_use]
    pub fn notes(&self) -> &[RelaxationNote] {
        &self.notes
    }

    /// Consume the controller, returning its notes
    #[must_use]
    pub fn into_notes(self) -> Vec<RelaxationNote> {
        self.notes
    }
}
