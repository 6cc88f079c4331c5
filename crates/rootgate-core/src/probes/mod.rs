//! Detection probes and the registry that holds them.
//!
//! Each probe inspects one class of evidence (build provenance, binary
//! presence, writable-surface violation, known-tooling presence) through
//! the [`Environment`] abstraction and reports a tri-state [`Outcome`].
//! Adding an evidence class means adding a probe implementation; the
//! aggregation policy never changes.

use crate::checklist::Checklist;
use crate::env::{EnvError, Environment};

pub mod binaries;
pub mod build_tag;
pub mod model;
pub mod packages;
pub mod writable;

pub use model::{Finding, Outcome, ProbeId};

/// Stable probe identifiers. Part of the report contract.
pub mod ids {
    pub const DEBUG_BUILD_TAG: &str = "debug-build-tag";
    pub const ELEVATED_SHELL_BINARY: &str = "elevated-shell-binary";
    pub const KNOWN_ELEVATION_APP: &str = "known-elevation-app";
    pub const WRITABLE_SYSTEM_PATH: &str = "writable-system-path";
    pub const SUSPICIOUS_APP_PRESENCE: &str = "suspicious-app-presence";
}

/// A single, independently testable detection probe.
///
/// Implementations are stateless and re-invocable: identical environment
/// snapshots must produce identical outcomes. `evaluate` never fails — any
/// lookup fault is downgraded to [`Outcome::Indeterminate`] inside the
/// probe, so the aggregator stays infallible.
pub trait Probe {
    /// Stable identity, reported in verdicts and findings.
    fn id(&self) -> ProbeId;

    /// Run the probe against a point-in-time view of the host.
    fn evaluate(&self, env: &dyn Environment) -> Outcome;
}

/// Scan an ordered evidence list, short-circuiting on the first hit.
///
/// A confirmed hit wins over an earlier lookup failure: the failure did not
/// degrade the evidence actually found. Only a hitless scan that saw at
/// least one failure is indeterminate, carrying the first failure as its
/// reason.
pub(crate) fn scan_list<'a, I, F>(items: I, mut lookup: F) -> Outcome
where
    I: IntoIterator<Item = &'a String>,
    F: FnMut(&str) -> Result<bool, EnvError>,
{
    let mut first_err: Option<EnvError> = None;

    for item in items {
        match lookup(item) {
            Ok(true) => {
                return Outcome::Positive {
                    matched: item.clone(),
                };
            }
            Ok(false) => {}
            Err(e) => {
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
    }

    match first_err {
        Some(e) => Outcome::Indeterminate {
            reason: e.to_string(),
        },
        None => Outcome::Negative,
    }
}

/// Ordered, immutable collection of probes.
///
/// Order determines evaluation (and therefore log) order only; the verdict
/// does not depend on it.
pub struct Registry {
    probes: Vec<Box<dyn Probe>>,
}

impl Registry {
    pub fn new(probes: Vec<Box<dyn Probe>>) -> Self {
        Self { probes }
    }

    /// The five canonical probes, wired to the given checklist.
    pub fn standard(checklist: &Checklist) -> Self {
        Self::new(vec![
            Box::new(build_tag::BuildTagProbe::from_checklist(checklist)),
            Box::new(binaries::ElevatedShellBinaryProbe::from_checklist(
                checklist,
            )),
            Box::new(packages::PackagePresenceProbe::known_elevation(checklist)),
            Box::new(writable::WritableSystemPathProbe::from_checklist(
                checklist,
            )),
            Box::new(packages::PackagePresenceProbe::suspicious(checklist)),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Probe> {
        self.probes.iter().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}
