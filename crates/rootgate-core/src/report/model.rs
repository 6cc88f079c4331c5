use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;
use crate::checklist::ChecklistInfo;
use crate::probes::Outcome;
use crate::verdict::Assessment;

/// Top-level assessment report.
///
/// This struct is the stable JSON contract between the engine and any
/// diagnostics/telemetry consumer. It must remain deterministic for
/// identical environment snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub checklist: ChecklistInfo,
    pub findings: Vec<FindingInfo>,
    pub verdict: VerdictInfo,
}

impl Report {
    /// Assemble a report from pipeline outputs.
    ///
    /// Assumes `assessment` findings and ID lists are already
    /// deterministically sorted (the aggregator guarantees this).
    pub fn new(tool: ToolInfo, checklist: ChecklistInfo, assessment: Assessment) -> Self {
        let findings = assessment
            .findings
            .into_iter()
            .map(|f| {
                let (status, matched, reason) = match f.outcome {
                    Outcome::Positive { matched } => {
                        (FindingStatus::Positive, Some(matched), None)
                    }
                    Outcome::Negative => (FindingStatus::Negative, None, None),
                    Outcome::Indeterminate { reason } => {
                        (FindingStatus::Indeterminate, None, Some(reason))
                    }
                };
                FindingInfo {
                    probe_id: f.probe_id.0,
                    status,
                    matched,
                    reason,
                }
            })
            .collect();

        let v = assessment.verdict;
        let verdict = VerdictInfo {
            compromised: v.compromised,
            policy: v.policy,
            triggered_probe_ids: v.triggered.into_iter().map(|id| id.0).collect(),
            indeterminate_probe_ids: v.indeterminate.into_iter().map(|id| id.0).collect(),
            exit_code: v.exit_code,
        };

        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            checklist,
            findings,
            verdict,
        }
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
    pub commit: Option<String>,
}

/// One probe's reported outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingInfo {
    pub probe_id: String,
    pub status: FindingStatus,
    /// Concrete path/identifier/marker that fired, for positive findings.
    pub matched: Option<String>,
    /// Why the probe could not complete, for indeterminate findings.
    pub reason: Option<String>,
}

/// Report-facing outcome status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingStatus {
    Positive,
    Negative,
    Indeterminate,
}

impl std::fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FindingStatus::Positive => "POSITIVE",
            FindingStatus::Negative => "NEGATIVE",
            FindingStatus::Indeterminate => "INDETERMINATE",
        };
        f.write_str(s)
    }
}

/// Final verdict block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerdictInfo {
    pub compromised: bool,
    pub policy: String,
    pub triggered_probe_ids: Vec<String>,
    pub indeterminate_probe_ids: Vec<String>,
    pub exit_code: i32,
}
