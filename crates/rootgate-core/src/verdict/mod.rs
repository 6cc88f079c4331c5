//! Aggregation of probe outcomes into a single verdict.
//!
//! Responsibilities:
//! - Evaluate every registered probe against one environment snapshot
//! - Reduce outcomes to one boolean via a disjunction policy
//! - Preserve the full, sorted set of triggered and degraded probe IDs
//! - Compute CI-compatible exit codes
//!
//! Non-responsibilities:
//! - Deciding what counts as evidence (handled by each probe)
//! - Touching the host (probes own all environment access)
//!
//! The policy is intentionally simple and explainable:
//!
//!   - Any Positive probe      → compromised
//!   - Negative/Indeterminate  → contributes false
//!
//! Probes are never short-circuited across: all of them run, so the
//! triggered set is complete and the verdict does not depend on registry
//! order. The reduction is stateless; one shot per call.

use crate::env::Environment;
use crate::probes::{Finding, Outcome, ProbeId, Registry};
use crate::util::deterministic::{sort_findings, sort_probe_ids};

/// Exit code for a clean verdict.
pub const EXIT_CLEAN: i32 = 0;
/// Exit code for a compromised verdict.
pub const EXIT_COMPROMISED: i32 = 1;

/// Final verdict over one environment snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub compromised: bool,
    /// Identities of every Positive probe, sorted canonically.
    pub triggered: Vec<ProbeId>,
    /// Identities of every Indeterminate probe, sorted canonically.
    /// These contributed `false` to the boolean but must not be read as
    /// confirmed negatives.
    pub indeterminate: Vec<ProbeId>,
    pub policy: String,
    pub exit_code: i32,
}

/// Full result of one assessment: every finding plus the reduced verdict.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub findings: Vec<Finding>,
    pub verdict: Verdict,
}

/// Evaluate every probe in `registry` against `env` and reduce.
///
/// Infallible by construction: probes downgrade their own faults to
/// `Indeterminate`, so there is nothing left to propagate.
///
/// Determinism guarantees:
/// - Same outcomes → identical `Verdict`
/// - Triggered and indeterminate IDs sorted canonically
/// - Findings sorted by probe ID, independent of registry order
pub fn evaluate(env: &dyn Environment, registry: &Registry) -> Assessment {
    let mut findings: Vec<Finding> = Vec::with_capacity(registry.len());

    for probe in registry.iter() {
        let id = probe.id();
        let outcome = probe.evaluate(env);

        match &outcome {
            Outcome::Positive { matched } => {
                log::debug!("probe {id}: positive (matched {matched})");
            }
            Outcome::Negative => log::debug!("probe {id}: negative"),
            Outcome::Indeterminate { reason } => {
                log::warn!("probe {id} could not complete: {reason}");
            }
        }

        findings.push(Finding {
            probe_id: id,
            outcome,
        });
    }

    sort_findings(&mut findings);

    let mut triggered: Vec<ProbeId> = findings
        .iter()
        .filter(|f| f.outcome.is_positive())
        .map(|f| f.probe_id.clone())
        .collect();
    sort_probe_ids(&mut triggered);

    let mut indeterminate: Vec<ProbeId> = findings
        .iter()
        .filter(|f| f.outcome.is_indeterminate())
        .map(|f| f.probe_id.clone())
        .collect();
    sort_probe_ids(&mut indeterminate);

    let compromised = !triggered.is_empty();
    let exit_code = if compromised {
        EXIT_COMPROMISED
    } else {
        EXIT_CLEAN
    };

    Assessment {
        findings,
        verdict: Verdict {
            compromised,
            triggered,
            indeterminate,
            policy: "any-positive".to_string(),
            exit_code,
        },
    }
}
