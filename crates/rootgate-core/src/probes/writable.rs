use std::path::Path;

use crate::checklist::Checklist;
use crate::env::Environment;
use crate::probes::model::{Outcome, ProbeId};
use crate::probes::{Probe, ids, scan_list};

/// Positive iff any path that should be read-only on a locked-down host
/// both exists and is reported writable.
///
/// Both conditions must hold per path; existence alone is never evidence.
/// The writability lookup is skipped for absent paths, so a missing mount
/// point costs one stat.
pub struct WritableSystemPathProbe {
    paths: Vec<String>,
}

impl WritableSystemPathProbe {
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    pub fn from_checklist(checklist: &Checklist) -> Self {
        Self::new(checklist.writable_system_paths.clone())
    }
}

impl Probe for WritableSystemPathProbe {
    fn id(&self) -> ProbeId {
        ProbeId(ids::WRITABLE_SYSTEM_PATH.to_string())
    }

    fn evaluate(&self, env: &dyn Environment) -> Outcome {
        scan_list(&self.paths, |p| {
            let path = Path::new(p);
            if !env.path_exists(path)? {
                return Ok(false);
            }
            env.path_writable(path)
        })
    }
}
