use serde::{Deserialize, Serialize};

/// Stable probe identity. These strings are part of the report contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProbeId(pub String);

impl ProbeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProbeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tri-state result of a single probe.
///
/// `Indeterminate` means the probe could not complete (lookup denied,
/// unexpected fault). It contributes `false` to the verdict boolean but is
/// reported distinctly so a degraded assessment is never mistaken for a
/// confirmed-clean one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Evidence found; `matched` is the concrete path/identifier/marker
    /// that fired.
    Positive { matched: String },
    /// Scan completed, no evidence found.
    Negative,
    /// Scan could not complete.
    Indeterminate { reason: String },
}

impl Outcome {
    pub fn is_positive(&self) -> bool {
        matches!(self, Outcome::Positive { .. })
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Outcome::Indeterminate { .. })
    }
}

/// One probe's contribution to an assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub probe_id: ProbeId,
    pub outcome: Outcome,
}
