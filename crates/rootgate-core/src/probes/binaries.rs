use std::path::Path;

use crate::checklist::Checklist;
use crate::env::Environment;
use crate::probes::model::{Outcome, ProbeId};
use crate::probes::{Probe, ids, scan_list};

/// Positive iff any well-known privilege-escalation-shell install location
/// exists on the filesystem.
///
/// The path list is scanned in order and the scan stops at the first hit;
/// order affects probe cost only, never the verdict.
pub struct ElevatedShellBinaryProbe {
    paths: Vec<String>,
}

impl ElevatedShellBinaryProbe {
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    pub fn from_checklist(checklist: &Checklist) -> Self {
        Self::new(checklist.elevated_shell_paths.clone())
    }
}

impl Probe for ElevatedShellBinaryProbe {
    fn id(&self) -> ProbeId {
        ProbeId(ids::ELEVATED_SHELL_BINARY.to_string())
    }

    fn evaluate(&self, env: &dyn Environment) -> Outcome {
        scan_list(&self.paths, |path| env.path_exists(Path::new(path)))
    }
}
