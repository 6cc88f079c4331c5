use crate::checklist::Checklist;
use crate::env::Environment;
use crate::probes::model::{Outcome, ProbeId};
use crate::probes::{Probe, ids};

/// Positive iff the platform build tag contains the non-production signing
/// marker. Case-sensitive substring match, no normalization.
///
/// A host without a build tag is a clean negative: absence of metadata is
/// not evidence of a debug build.
pub struct BuildTagProbe {
    marker: String,
}

impl BuildTagProbe {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn from_checklist(checklist: &Checklist) -> Self {
        Self::new(checklist.debug_build_marker.clone())
    }
}

impl Probe for BuildTagProbe {
    fn id(&self) -> ProbeId {
        ProbeId(ids::DEBUG_BUILD_TAG.to_string())
    }

    fn evaluate(&self, env: &dyn Environment) -> Outcome {
        match env.build_tag() {
            Ok(Some(tag)) if tag.contains(&self.marker) => Outcome::Positive {
                matched: self.marker.clone(),
            },
            Ok(_) => Outcome::Negative,
            Err(e) => Outcome::Indeterminate {
                reason: e.to_string(),
            },
        }
    }
}
