pub mod checklist;
pub mod env;
pub mod probes;
pub mod report;
pub mod util;
pub mod verdict;

use checklist::{Checklist, ChecklistInfo};
use env::Environment;
use report::model::{Report, ToolInfo};

pub const TOOL_NAME: &str = "rootgate";

/// JSON schema version of assessment reports.
/// Bumped only when the report contract changes semantically.
pub const SCHEMA_VERSION: &str = "0.1.0";

pub const CHECKLIST_VERSION: &str = "0.1.0";

/// Run one full assessment over a point-in-time view of the host.
///
/// Builds the standard registry from `checklist`, evaluates every probe,
/// and assembles the deterministic report. Infallible: probe faults are
/// downgraded to indeterminate findings, never propagated.
pub fn assess(
    env: &dyn Environment,
    checklist: &Checklist,
    provenance: ChecklistInfo,
    tool: ToolInfo,
) -> Report {
    let registry = probes::Registry::standard(checklist);
    let assessment = verdict::evaluate(env, &registry);
    Report::new(tool, provenance, assessment)
}

/// The single inbound query: has this device's trusted-execution posture
/// likely been subverted?
///
/// Evaluates the builtin checklist and reduces to one boolean. An
/// indeterminate probe contributes `false` (cannot prove compromised);
/// callers needing to distinguish degraded assessments should use
/// [`assess`] and inspect the verdict block.
pub fn is_device_compromised(env: &dyn Environment) -> bool {
    let checklist = Checklist::builtin();
    let registry = probes::Registry::standard(&checklist);
    verdict::evaluate(env, &registry).verdict.compromised
}
