//! Read-only abstraction over the host being assessed.
//!
//! Probes never touch the filesystem or package registry directly; they go
//! through [`Environment`], which keeps them testable against scripted
//! hosts and keeps the live implementation in one place.
//!
//! Error contract:
//! - Absence is **not** an error. A missing path or package maps to
//!   `Ok(false)`; a missing build tag maps to `Ok(None)`.
//! - `Err` means the lookup itself could not complete (permission refused,
//!   I/O fault). Callers downgrade that to an indeterminate outcome rather
//!   than treating it as a confirmed negative.

use std::path::Path;

use thiserror::Error;

pub mod host;

pub use host::HostEnvironment;

/// A lookup fault the host accessor could not resolve on its own.
///
/// `NotFound` is deliberately absent: resource absence is a legitimate
/// answer (`Ok(false)`), not a fault.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvError {
    /// The platform refused the lookup (e.g., EACCES on a stat).
    #[error("access denied: {what}")]
    AccessDenied { what: String },

    /// Any other fault encountered during the lookup.
    #[error("lookup failed: {what}: {detail}")]
    Unexpected { what: String, detail: String },
}

impl EnvError {
    pub(crate) fn from_io(what: impl Into<String>, err: &std::io::Error) -> Self {
        let what = what.into();
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => EnvError::AccessDenied { what },
            _ => EnvError::Unexpected {
                what,
                detail: err.to_string(),
            },
        }
    }
}

/// Read-only view of the host under assessment.
///
/// Implementations must be side-effect-free: every method is a point-in-time
/// read, safe to repeat, and owns no mutable state across calls.
pub trait Environment {
    /// Whether `path` exists on the host. Absence is `Ok(false)`.
    fn path_exists(&self, path: &Path) -> Result<bool, EnvError>;

    /// Whether the current process could write to `path`.
    ///
    /// Must not attempt an actual write; absence is `Ok(false)`.
    fn path_writable(&self, path: &Path) -> Result<bool, EnvError>;

    /// Whether an application with the given stable identifier is installed.
    /// An absent identifier is `Ok(false)`, as is an unreadable registry
    /// entry that can still be attributed to absence.
    fn app_installed(&self, identifier: &str) -> Result<bool, EnvError>;

    /// Platform build metadata tag, if the host exposes one.
    fn build_tag(&self) -> Result<Option<String>, EnvError>;
}
