//! Soundness audit of an emitted pattern.
//!
//! The conflict check only looks at the exact tree, so a generalized pattern may
//! still match rejected words through its suffix wildcards. The audit compiles
//! the pattern with the `regex` crate and reports such words without changing
//! the pattern.

use regex::Regex;
use tracing::{debug, instrument};

use crate::application::{ApplicationResult, ProblemInput};
use crate::domain::Derivation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub derivation: Derivation,
    /// Rejected words the pattern matches
    pub rejected_matched: Vec<String>,
    /// Accepted words the pattern does not match
    pub accepted_missed: Vec<String>,
}

impl AuditReport {
    pub fn is_sound(&self) -> bool {
        self.rejected_matched.is_empty() && self.accepted_missed.is_empty()
    }
}

#[instrument(level = "debug", skip_all, fields(pattern = %derivation))]
pub fn audit(input: &ProblemInput, derivation: Derivation) -> ApplicationResult<AuditReport> {
    if derivation.matches_nothing() {
        return Ok(AuditReport {
            derivation,
            rejected_matched: Vec::new(),
            accepted_missed: input.accepted.clone(),
        });
    }

    let anchored = Regex::new(&format!("^(?:{})$", derivation.pattern))?;
    debug!("compiled {}", anchored.as_str());

    let rejected_matched = input
        .rejected
        .iter()
        .filter(|w| anchored.is_match(w))
        .cloned()
        .collect();
    let accepted_missed = input
        .accepted
        .iter()
        .filter(|w| !anchored.is_match(w))
        .cloned()
        .collect();

    Ok(AuditReport {
        derivation,
        rejected_matched,
        accepted_missed,
    })
}
