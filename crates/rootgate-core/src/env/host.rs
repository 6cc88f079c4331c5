//! Live [`Environment`] backed by the local filesystem.
//!
//! All lookups are point-in-time reads: `symlink_metadata` for existence,
//! `access(2)` with `W_OK` for writability (no write is ever attempted),
//! and small-file parses for the package index and build properties.
//!
//! Every queried path is resolved under a configurable sysroot prefix, so
//! tests and sandboxed callers can point the whole environment at a fake
//! filesystem root without touching the real one.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::env::{EnvError, Environment};

/// Default location of the installed-package index on the host.
pub const DEFAULT_PACKAGE_INDEX: &str = "/data/system/packages.list";

/// Default location of the build properties file carrying `ro.build.tags`.
pub const DEFAULT_BUILD_PROP: &str = "/system/build.prop";

/// Property key holding the build signing tag.
const BUILD_TAGS_KEY: &str = "ro.build.tags";

/// Live host environment.
#[derive(Debug, Clone)]
pub struct HostEnvironment {
    sysroot: PathBuf,
    package_index: PathBuf,
    build_prop: PathBuf,
}

impl Default for HostEnvironment {
    fn default() -> Self {
        Self::new("/")
    }
}

impl HostEnvironment {
    /// Environment rooted at `sysroot`, with default index/property paths
    /// (themselves resolved under the sysroot).
    pub fn new(sysroot: impl Into<PathBuf>) -> Self {
        Self {
            sysroot: sysroot.into(),
            package_index: PathBuf::from(DEFAULT_PACKAGE_INDEX),
            build_prop: PathBuf::from(DEFAULT_BUILD_PROP),
        }
    }

    /// Override the package index location (still resolved under the sysroot).
    pub fn with_package_index(mut self, path: impl Into<PathBuf>) -> Self {
        self.package_index = path.into();
        self
    }

    /// Override the build properties location (still resolved under the sysroot).
    pub fn with_build_prop(mut self, path: impl Into<PathBuf>) -> Self {
        self.build_prop = path.into();
        self
    }

    /// Rebase an absolute host path under the configured sysroot.
    fn resolve(&self, path: &Path) -> PathBuf {
        match path.strip_prefix("/") {
            Ok(rel) => self.sysroot.join(rel),
            Err(_) => self.sysroot.join(path),
        }
    }

    /// Read a small text file, mapping absence to `Ok(None)`.
    fn read_optional(&self, path: &Path) -> Result<Option<String>, EnvError> {
        let resolved = self.resolve(path);
        match fs::read_to_string(&resolved) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(EnvError::from_io(format!("read {}", resolved.display()), &e)),
        }
    }
}

impl Environment for HostEnvironment {
    fn path_exists(&self, path: &Path) -> Result<bool, EnvError> {
        let resolved = self.resolve(path);
        match fs::symlink_metadata(&resolved) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(EnvError::from_io(format!("stat {}", resolved.display()), &e)),
        }
    }

    #[cfg(unix)]
    fn path_writable(&self, path: &Path) -> Result<bool, EnvError> {
        use nix::errno::Errno;
        use nix::unistd::{AccessFlags, access};

        let resolved = self.resolve(path);
        match access(&resolved, AccessFlags::W_OK) {
            Ok(()) => Ok(true),
            // Write permission refused IS the answer here, not a fault:
            // the probe asks "could this process write", and the kernel
            // said no. Same for a read-only mount or an absent path.
            Err(Errno::EACCES | Errno::EROFS | Errno::ENOENT | Errno::ENOTDIR) => Ok(false),
            Err(errno) => Err(EnvError::Unexpected {
                what: format!("access {}", resolved.display()),
                detail: errno.desc().to_string(),
            }),
        }
    }

    #[cfg(not(unix))]
    fn path_writable(&self, path: &Path) -> Result<bool, EnvError> {
        // Permission-bit heuristic; coarser than access(2) but the crate
        // targets unix hosts.
        let resolved = self.resolve(path);
        match fs::metadata(&resolved) {
            Ok(meta) => Ok(!meta.permissions().readonly()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(EnvError::from_io(format!("stat {}", resolved.display()), &e)),
        }
    }

    fn app_installed(&self, identifier: &str) -> Result<bool, EnvError> {
        // No package index means no package can be proven installed.
        let Some(index) = self.read_optional(&self.package_index)? else {
            return Ok(false);
        };

        // One package per line. Accepts both the raw index format
        // ("com.example.app 10061 0 /data/...") and `pm list packages`
        // output ("package:com.example.app").
        let found = index
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                line.strip_prefix("package:")
                    .unwrap_or(line)
                    .split_whitespace()
                    .next()
            })
            .any(|name| name == identifier);

        Ok(found)
    }

    fn build_tag(&self) -> Result<Option<String>, EnvError> {
        let Some(props) = self.read_optional(&self.build_prop)? else {
            return Ok(None);
        };

        for line in props.lines() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            if let Some(value) = line.strip_prefix(BUILD_TAGS_KEY) {
                if let Some(value) = value.trim_start().strip_prefix('=') {
                    let value = value.trim();
                    if value.is_empty() {
                        return Ok(None);
                    }
                    return Ok(Some(value.to_string()));
                }
            }
        }

        Ok(None)
    }
}
