use std::collections::BTreeSet;
use std::path::Path;

use rootgate_core::checklist::Checklist;
use rootgate_core::env::{EnvError, Environment};
use rootgate_core::probes::ids;
use rootgate_core::report::model::{Report, ToolInfo};

/// Scriptable host snapshot for pipeline-level tests.
#[derive(Default, Clone)]
struct MockEnvironment {
    build_tag: Option<String>,
    existing_paths: BTreeSet<String>,
    writable_paths: BTreeSet<String>,
    installed: BTreeSet<String>,
    denied_paths: BTreeSet<String>,
    deny_build_tag: bool,
    deny_all: bool,
}

impl MockEnvironment {
    fn clean() -> Self {
        Self {
            build_tag: Some("release-keys".into()),
            ..Default::default()
        }
    }

    fn with_tag(mut self, tag: &str) -> Self {
        self.build_tag = Some(tag.into());
        self
    }

    fn with_path(mut self, path: &str) -> Self {
        self.existing_paths.insert(path.into());
        self
    }

    fn with_writable_path(mut self, path: &str) -> Self {
        self.existing_paths.insert(path.into());
        self.writable_paths.insert(path.into());
        self
    }

    fn with_installed(mut self, pkg: &str) -> Self {
        self.installed.insert(pkg.into());
        self
    }

    fn denying_path(mut self, path: &str) -> Self {
        self.denied_paths.insert(path.into());
        self
    }

    fn denying_everything() -> Self {
        Self {
            deny_all: true,
            ..Default::default()
        }
    }

    fn denied(&self, what: String) -> Result<(), EnvError> {
        if self.deny_all {
            return Err(EnvError::AccessDenied { what });
        }
        Ok(())
    }
}

impl Environment for MockEnvironment {
    fn path_exists(&self, path: &Path) -> Result<bool, EnvError> {
        let p = path.to_string_lossy().to_string();
        self.denied(format!("stat {p}"))?;
        if self.denied_paths.contains(&p) {
            return Err(EnvError::AccessDenied {
                what: format!("stat {p}"),
            });
        }
        Ok(self.existing_paths.contains(&p))
    }

    fn path_writable(&self, path: &Path) -> Result<bool, EnvError> {
        let p = path.to_string_lossy().to_string();
        self.denied(format!("access {p}"))?;
        Ok(self.writable_paths.contains(&p))
    }

    fn app_installed(&self, identifier: &str) -> Result<bool, EnvError> {
        self.denied(format!("query {identifier}"))?;
        Ok(self.installed.contains(identifier))
    }

    fn build_tag(&self) -> Result<Option<String>, EnvError> {
        self.denied("read build tag".into())?;
        if self.deny_build_tag {
            return Err(EnvError::AccessDenied {
                what: "read build tag".into(),
            });
        }
        Ok(self.build_tag.clone())
    }
}

fn tool() -> ToolInfo {
    ToolInfo {
        name: "rootgate".into(),
        version: "0.1.0-test".into(),
        commit: None,
    }
}

/// Runs the full assess pipeline with the builtin checklist.
fn assess(env: &MockEnvironment) -> Report {
    rootgate_core::assess(env, &Checklist::builtin(), Checklist::builtin_info(), tool())
}

fn triggered(report: &Report) -> Vec<String> {
    report.verdict.triggered_probe_ids.clone()
}

#[test]
fn clean_release_device_is_not_compromised() {
    let report = assess(&MockEnvironment::clean());

    assert!(!report.verdict.compromised);
    assert!(triggered(&report).is_empty());
    assert!(report.verdict.indeterminate_probe_ids.is_empty());
    assert_eq!(report.verdict.exit_code, 0);
}

#[test]
fn test_keys_build_tag_triggers_exactly_one_probe() {
    let report = assess(&MockEnvironment::clean().with_tag("test-keys"));

    assert!(report.verdict.compromised);
    assert_eq!(triggered(&report), vec![ids::DEBUG_BUILD_TAG]);
    assert_eq!(report.verdict.exit_code, 1);
}

#[test]
fn su_binary_triggers_elevated_shell_probe() {
    let report = assess(&MockEnvironment::clean().with_path("/system/bin/su"));

    assert!(report.verdict.compromised);
    assert_eq!(triggered(&report), vec![ids::ELEVATED_SHELL_BINARY]);
}

#[test]
fn writable_system_partition_triggers_writable_probe() {
    let report = assess(&MockEnvironment::clean().with_writable_path("/system"));

    assert!(report.verdict.compromised);
    assert_eq!(triggered(&report), vec![ids::WRITABLE_SYSTEM_PATH]);
}

#[test]
fn existing_read_only_system_partition_is_clean() {
    // Existence alone is not evidence; the path must also be writable.
    let report = assess(&MockEnvironment::clean().with_path("/system"));

    assert!(!report.verdict.compromised);
}

#[test]
fn magisk_triggers_both_overlapping_package_probes() {
    let report = assess(&MockEnvironment::clean().with_installed("com.topjohnwu.magisk"));

    assert!(report.verdict.compromised);
    // The two package lists overlap on this identifier; both probes must
    // report it, not just one.
    assert_eq!(
        triggered(&report),
        vec![ids::KNOWN_ELEVATION_APP, ids::SUSPICIOUS_APP_PRESENCE]
    );
}

#[test]
fn hook_tooling_triggers_only_the_suspicious_probe() {
    let report = assess(&MockEnvironment::clean().with_installed("com.stealthy.hook"));

    assert!(report.verdict.compromised);
    assert_eq!(triggered(&report), vec![ids::SUSPICIOUS_APP_PRESENCE]);
}

#[test]
fn total_access_failure_is_not_compromised_but_fully_degraded() {
    let report = assess(&MockEnvironment::denying_everything());

    // Fail-closed to "cannot prove compromised".
    assert!(!report.verdict.compromised);
    assert_eq!(report.verdict.exit_code, 0);
    assert!(triggered(&report).is_empty());

    // Every probe must surface as indeterminate in diagnostics.
    let mut expected = vec![
        ids::DEBUG_BUILD_TAG,
        ids::ELEVATED_SHELL_BINARY,
        ids::KNOWN_ELEVATION_APP,
        ids::SUSPICIOUS_APP_PRESENCE,
        ids::WRITABLE_SYSTEM_PATH,
    ];
    expected.sort();
    assert_eq!(report.verdict.indeterminate_probe_ids, expected);

    for f in &report.findings {
        assert!(f.reason.is_some(), "{} missing a reason", f.probe_id);
    }
}

#[test]
fn single_denied_lookup_degrades_only_that_probe() {
    let env = MockEnvironment::clean().denying_path("/sbin/su");
    let report = assess(&env);

    assert!(!report.verdict.compromised);
    assert_eq!(
        report.verdict.indeterminate_probe_ids,
        vec![ids::ELEVATED_SHELL_BINARY]
    );
}

#[test]
fn denied_build_tag_degrades_only_the_tag_probe() {
    let mut env = MockEnvironment::clean();
    env.deny_build_tag = true;
    let report = assess(&env);

    assert!(!report.verdict.compromised);
    assert_eq!(
        report.verdict.indeterminate_probe_ids,
        vec![ids::DEBUG_BUILD_TAG]
    );
}

#[test]
fn multiple_evidence_classes_all_reported() {
    let env = MockEnvironment::clean()
        .with_tag("test-keys")
        .with_path("/system/bin/su")
        .with_writable_path("/data")
        .with_installed("com.topjohnwu.magisk");

    let report = assess(&env);

    assert!(report.verdict.compromised);
    assert_eq!(
        triggered(&report),
        vec![
            ids::DEBUG_BUILD_TAG,
            ids::ELEVATED_SHELL_BINARY,
            ids::KNOWN_ELEVATION_APP,
            ids::SUSPICIOUS_APP_PRESENCE,
            ids::WRITABLE_SYSTEM_PATH,
        ]
    );
}

#[test]
fn repeated_assessment_of_same_snapshot_is_identical() {
    let env = MockEnvironment::clean()
        .with_tag("test-keys")
        .with_installed("com.topjohnwu.magisk");

    let a = serde_json::to_string(&assess(&env)).unwrap();
    let b = serde_json::to_string(&assess(&env)).unwrap();

    assert_eq!(a, b);
}

#[test]
fn boolean_query_mirrors_the_verdict() {
    assert!(!rootgate_core::is_device_compromised(
        &MockEnvironment::clean()
    ));
    assert!(rootgate_core::is_device_compromised(
        &MockEnvironment::clean().with_tag("test-keys")
    ));
    assert!(!rootgate_core::is_device_compromised(
        &MockEnvironment::denying_everything()
    ));
}

#[test]
fn report_json_has_stable_top_level_shape() {
    let report = assess(&MockEnvironment::clean());
    let value: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert!(value.get("schema_version").is_some());
    assert!(value.get("tool").is_some());
    assert!(value.get("checklist").is_some());
    assert!(value.get("findings").is_some());
    assert!(value.get("verdict").is_some());

    let findings = value["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 5);
}

#[test]
fn custom_checklist_narrows_the_registry_scope() {
    // A checklist without package lists cannot attribute package evidence.
    let mut checklist = Checklist::builtin();
    checklist.known_elevation_packages.clear();
    checklist.suspicious_packages.clear();

    let env = MockEnvironment::clean().with_installed("com.topjohnwu.magisk");
    let report = rootgate_core::assess(&env, &checklist, Checklist::builtin_info(), tool());

    assert!(!report.verdict.compromised);
}
