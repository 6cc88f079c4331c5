//! Versioned catalog of the static path/identifier lists the probes scan.
//!
//! The lists are data, not code: a builtin catalog is compiled in, and a
//! JSON document with the same shape can replace it without redeploying
//! detection logic. File-loaded catalogs are fingerprinted so a report can
//! be traced back to the exact list revision that produced it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::CHECKLIST_VERSION;

/// Static evidence lists consumed by the probe registry.
///
/// The suspicious-package list is deliberately kept distinct from (and a
/// superset of) the known-elevation list: the two feed separate probes, and
/// merging them would change which evidence classes a report attributes a
/// hit to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Checklist {
    /// Catalog revision; independent of the report schema version.
    pub version: String,

    /// Substring of the build tag associated with non-production signing
    /// keys. Case-sensitive, matched without normalization.
    pub debug_build_marker: String,

    /// Well-known install locations of privilege-escalation shells.
    pub elevated_shell_paths: Vec<String>,

    /// Paths that must be read-only on a properly locked-down host.
    pub writable_system_paths: Vec<String>,

    /// Identifiers of known privilege-escalation-management packages.
    pub known_elevation_packages: Vec<String>,

    /// Broader identifier list: the known-elevation set plus hook/rootkit
    /// tooling.
    pub suspicious_packages: Vec<String>,
}

/// Provenance of the checklist an assessment ran with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistInfo {
    pub version: String,
    /// `"builtin"` or the path the catalog was loaded from.
    pub source: String,
    /// Hex SHA-256 of the catalog file bytes; absent for the builtin.
    pub sha256: Option<String>,
}

impl Checklist {
    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();

        Self {
            version: CHECKLIST_VERSION.to_string(),
            debug_build_marker: "test-keys".to_string(),
            elevated_shell_paths: strings(&[
                "/system/app/Superuser.apk",
                "/sbin/su",
                "/system/bin/su",
                "/system/xbin/su",
                "/data/local/xbin/su",
                "/data/local/bin/su",
                "/system/sd/xbin/su",
                "/system/bin/failsafe/su",
                "/data/local/su",
            ]),
            writable_system_paths: strings(&[
                "/system",
                "/system/bin",
                "/system/sbin",
                "/system/xbin",
                "/data",
                "/data/local",
                "/data/local/bin",
                "/data/local/xbin",
                "/data/local/tmp",
                "/data/tmp",
                "/dev",
                "/proc",
                "/sys",
                "/vendor",
            ]),
            known_elevation_packages: strings(&[
                "com.noshufou.android.su",
                "com.thirdparty.superuser",
                "eu.chainfire.supersu",
                "com.koushikdutta.superuser",
                "com.zachspong.temprootremovejb",
                "com.ramdroid.appquarantine",
                "com.topjohnwu.magisk",
            ]),
            suspicious_packages: strings(&[
                "com.noshufou.android.su",
                "com.thirdparty.superuser",
                "eu.chainfire.supersu",
                "com.koushikdutta.superuser",
                "com.zachspong.temprootremovejb",
                "com.ramdroid.appquarantine",
                "com.topjohnwu.magisk",
                "com.kingroot.kinguser",
                "com.stealthy.hook",
                "com.eltechs.axs",
                "com.hammerpig.rootkit",
            ]),
        }
    }

    /// Load a checklist from a JSON file, returning it together with its
    /// provenance (source path and content fingerprint).
    ///
    /// The fingerprint depends only on the file bytes; filesystem metadata
    /// is ignored so identical catalogs always fingerprint identically.
    pub fn from_json_file(path: &Path) -> Result<(Self, ChecklistInfo)> {
        let bytes = fs::read(path)
            .with_context(|| format!("failed to read checklist: {}", path.display()))?;

        let checklist: Checklist = serde_json::from_slice(&bytes)
            .with_context(|| format!("invalid checklist JSON: {}", path.display()))?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hasher.finalize();

        let info = ChecklistInfo {
            version: checklist.version.clone(),
            source: path.display().to_string(),
            sha256: Some(hex::encode(digest)),
        };

        Ok((checklist, info))
    }

    /// Provenance block for the builtin catalog.
    pub fn builtin_info() -> ChecklistInfo {
        ChecklistInfo {
            version: CHECKLIST_VERSION.to_string(),
            source: "builtin".to_string(),
            sha256: None,
        }
    }
}
