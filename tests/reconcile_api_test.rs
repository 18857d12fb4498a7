//! End-to-end reconciliation through the public API.

use depcheck::config::DepcheckConfig;
use depcheck::packages::{MemoryEnvironment, PackageEnvironment};
use depcheck::platform::Platform;
use depcheck::reconcile::{select_list, CheckOutcome, ListKind, Preflight, Reconciler};
use depcheck::requirements::{is_satisfied, Requirement, RequirementList};
use depcheck::ui::MockReporter;
use depcheck::version::Version;
use depcheck::DepcheckError;
use std::cmp::Ordering;
use std::fs;
use tempfile::TempDir;

fn project(cpu: &str, gpu: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("requirements.txt"), cpu).unwrap();
    fs::write(temp.path().join("requirements-gpu.txt"), gpu).unwrap();
    temp
}

#[test]
fn installs_exactly_the_missing_requirement() {
    let mut env = MemoryEnvironment::new().with_package("alpha", "1.0");
    let mut reporter = MockReporter::new();
    let list = RequirementList::from_lines(["alpha==1.0", "beta>=2.0"]);

    let summary = Reconciler::new(&mut env, &mut reporter)
        .reconcile(&list)
        .unwrap();

    assert_eq!(env.install_calls(), &["beta>=2.0"]);
    assert_eq!(summary.already_satisfied(), vec!["alpha==1.0"]);
    assert_eq!(summary.installed(), vec!["beta>=2.0"]);
    assert!(reporter.errors().is_empty());
}

#[test]
fn install_failure_aborts_and_is_reported_once() {
    let temp = project("alpha==1.0\nbeta>=2.0\ngamma\n", "");
    let config = DepcheckConfig::default();
    let mut env = MemoryEnvironment::new()
        .with_package("alpha", "1.0")
        .fail_install("beta>=2.0");
    let mut reporter = MockReporter::new();

    let outcome =
        Preflight::new(&config, temp.path(), Platform::Linux, false).run(&mut env, &mut reporter);

    assert!(matches!(
        outcome,
        CheckOutcome::Degraded(DepcheckError::InstallFailed { .. })
    ));
    assert_eq!(env.install_calls(), &["beta>=2.0"]);
    assert!(!env.queries().iter().any(|q| q == "gamma"));
    assert!(reporter.has_error("beta>=2.0"));
    let hints = reporter
        .errors()
        .iter()
        .filter(|m| m.contains("install dependencies manually"))
        .count();
    assert_eq!(hints, 1);
}

#[test]
fn earlier_installs_are_kept_after_a_failure() {
    let mut env = MemoryEnvironment::new().fail_install("beta>=2.0");
    let mut reporter = MockReporter::new();
    let list = RequirementList::from_lines(["alpha==1.0", "beta>=2.0"]);

    let result = Reconciler::new(&mut env, &mut reporter).reconcile(&list);

    assert!(result.is_err());
    assert!(env.contains("alpha"));
    assert_eq!(env.installed_version("alpha").unwrap().as_deref(), Some("1.0"));
}

#[test]
fn second_pass_installs_nothing() {
    let mut env = MemoryEnvironment::new();
    let list = RequirementList::parse("alpha==1.0\nbeta>=2.0\n");

    let mut first = MockReporter::new();
    Reconciler::new(&mut env, &mut first).reconcile(&list).unwrap();
    assert_eq!(env.install_calls().len(), 2);

    let mut second = MockReporter::new();
    let summary = Reconciler::new(&mut env, &mut second)
        .reconcile(&list)
        .unwrap();
    assert_eq!(env.install_calls().len(), 2);
    assert!(summary.installed().is_empty());
}

#[test]
fn absent_package_is_never_satisfied() {
    let env = MemoryEnvironment::new();
    for line in ["pkg", "pkg==1.0.0", "pkg>=1.0.0"] {
        let req = Requirement::parse(line).unwrap();
        assert!(!is_satisfied(&req, &env).unwrap(), "{}", line);
    }
}

#[test]
fn operator_semantics() {
    let cases = [
        ("pkg==1.0.0", "1.0.0", true),
        ("pkg==1.0.0", "1.0.1", false),
        ("pkg>=1.0.0", "1.2.0", true),
        ("pkg>=1.0.0", "0.9.0", false),
        ("pkg", "0.0.1", true),
    ];
    for (line, installed, expected) in cases {
        let env = MemoryEnvironment::new().with_package("pkg", installed);
        let req = Requirement::parse(line).unwrap();
        assert_eq!(
            is_satisfied(&req, &env).unwrap(),
            expected,
            "{} against {}",
            line,
            installed
        );
    }
}

#[test]
fn trailing_zeros_compare_equal() {
    let a = Version::parse("1.2.0").unwrap();
    let b = Version::parse("1.2").unwrap();
    assert_eq!(a.compare(&b), Ordering::Equal);
}

#[test]
fn apple_always_uses_cpu_list() {
    assert_eq!(select_list(Platform::MacOS, true), ListKind::Cpu);
    assert_eq!(select_list(Platform::MacOS, false), ListKind::Cpu);
    assert_eq!(select_list(Platform::Linux, true), ListKind::Gpu);
    assert_eq!(select_list(Platform::Windows, true), ListKind::Gpu);
    assert_eq!(select_list(Platform::Linux, false), ListKind::Cpu);
}
