//! Deterministic ordering helpers.
//!
//! Identical environment snapshots must produce byte-identical reports, so
//! every list that ends up in a report is sorted here, independent of probe
//! registration or evaluation order.

use crate::probes::{Finding, ProbeId};

/// Sort probe IDs canonically (lexicographic).
///
/// This ordering is part of the report contract and must not change
/// without a schema version bump.
pub fn sort_probe_ids(ids: &mut [ProbeId]) {
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
}

/// Sort findings by probe ID, independent of evaluation order.
pub fn sort_findings(findings: &mut [Finding]) {
    findings.sort_by(|a, b| a.probe_id.as_str().cmp(b.probe_id.as_str()));
}
