use crate::checklist::Checklist;
use crate::env::Environment;
use crate::probes::model::{Outcome, ProbeId};
use crate::probes::{Probe, ids, scan_list};

/// Positive iff any identifier from a fixed package list is present in the
/// installed-application registry. Short-circuits on first hit.
///
/// Instantiated twice with distinct identities and lists: once for known
/// privilege-escalation managers, once for the broader suspicious-tooling
/// superset. The two are kept separate so a report attributes a hit to the
/// right evidence class; an identifier on both lists triggers both probes.
pub struct PackagePresenceProbe {
    id: ProbeId,
    packages: Vec<String>,
}

impl PackagePresenceProbe {
    pub fn new(id: ProbeId, packages: Vec<String>) -> Self {
        Self { id, packages }
    }

    /// Known privilege-escalation-management packages.
    pub fn known_elevation(checklist: &Checklist) -> Self {
        Self::new(
            ProbeId(ids::KNOWN_ELEVATION_APP.to_string()),
            checklist.known_elevation_packages.clone(),
        )
    }

    /// Broader suspicious-tooling list (superset of the known-elevation
    /// set plus hook/rootkit tooling).
    pub fn suspicious(checklist: &Checklist) -> Self {
        Self::new(
            ProbeId(ids::SUSPICIOUS_APP_PRESENCE.to_string()),
            checklist.suspicious_packages.clone(),
        )
    }
}

impl Probe for PackagePresenceProbe {
    fn id(&self) -> ProbeId {
        self.id.clone()
    }

    fn evaluate(&self, env: &dyn Environment) -> Outcome {
        scan_list(&self.packages, |pkg| env.app_installed(pkg))
    }
}
