//! Bringing the environment in line with a requirement list.
//!
//! Requirements are processed strictly in order. The first failure stops
//! the pass; installs that already succeeded are left in place.

use crate::error::Result;
use crate::packages::PackageEnvironment;
use crate::requirements::{is_satisfied, Requirement, RequirementList};
use crate::ui::Reporter;

/// What happened to one requirement during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementOutcome {
    /// Already met; nothing was installed.
    AlreadySatisfied,
    /// The install primitive ran and succeeded.
    Installed,
}

/// Per-requirement outcomes of a completed pass, in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    outcomes: Vec<(String, RequirementOutcome)>,
}

impl ReconcileSummary {
    fn record(&mut self, requirement: &str, outcome: RequirementOutcome) {
        self.outcomes.push((requirement.to_string(), outcome));
    }

    /// Requirements that were installed during the pass.
    pub fn installed(&self) -> Vec<&str> {
        self.with_outcome(RequirementOutcome::Installed)
    }

    /// Requirements that were already satisfied.
    pub fn already_satisfied(&self) -> Vec<&str> {
        self.with_outcome(RequirementOutcome::AlreadySatisfied)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    fn with_outcome(&self, wanted: RequirementOutcome) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == wanted)
            .map(|(req, _)| req.as_str())
            .collect()
    }
}

/// Installs whatever a requirement list needs.
pub struct Reconciler<'a> {
    env: &'a mut dyn PackageEnvironment,
    reporter: &'a mut dyn Reporter,
    app_name: String,
}

impl<'a> Reconciler<'a> {
    /// Create a reconciler over the given environment and reporter.
    pub fn new(env: &'a mut dyn PackageEnvironment, reporter: &'a mut dyn Reporter) -> Self {
        Self {
            env,
            reporter,
            app_name: "the application".to_string(),
        }
    }

    /// Name the dependent application in failure warnings.
    pub fn with_app_name(mut self, name: &str) -> Self {
        self.app_name = name.to_string();
        self
    }

    /// Reconcile every line of `list`, in order.
    ///
    /// Stops at the first line that fails to parse, check or install, and
    /// returns that error after reporting which requirement caused it.
    pub fn reconcile(&mut self, list: &RequirementList) -> Result<ReconcileSummary> {
        let mut summary = ReconcileSummary::default();

        for line in list.lines() {
            match self.reconcile_one(line) {
                Ok(outcome) => summary.record(line, outcome),
                Err(e) => {
                    self.reporter.error(&format!(
                        "Failed to install {}: {}. {} may not work until it is restarted.",
                        line, e, self.app_name
                    ));
                    return Err(e);
                }
            }
        }

        Ok(summary)
    }

    fn reconcile_one(&mut self, line: &str) -> Result<RequirementOutcome> {
        let req = Requirement::parse(line)?;

        if is_satisfied(&req, &*self.env)? {
            tracing::debug!("{} already satisfied", req.raw);
            return Ok(RequirementOutcome::AlreadySatisfied);
        }

        self.reporter.info(&format!("Install {}", req.raw));
        self.env.install(&[req.raw.as_str()])?;
        self.reporter
            .info(&format!("Successfully installed: {}", req.raw));

        Ok(RequirementOutcome::Installed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DepcheckError;
    use crate::packages::MemoryEnvironment;
    use crate::ui::MockReporter;

    #[test]
    fn installs_only_unsatisfied_requirements() {
        let mut env = MemoryEnvironment::new().with_package("alpha", "1.0");
        let mut reporter = MockReporter::new();
        let list = RequirementList::from_lines(["alpha==1.0", "beta>=2.0"]);

        let summary = Reconciler::new(&mut env, &mut reporter)
            .reconcile(&list)
            .unwrap();

        assert_eq!(env.install_calls(), &["beta>=2.0"]);
        assert_eq!(summary.installed(), vec!["beta>=2.0"]);
        assert_eq!(summary.already_satisfied(), vec!["alpha==1.0"]);
        assert!(reporter.has_info("Install beta>=2.0"));
        assert!(reporter.has_info("Successfully installed: beta>=2.0"));
        assert!(reporter.errors().is_empty());
    }

    #[test]
    fn upgrades_mismatched_versions() {
        let mut env = MemoryEnvironment::new().with_package("onnx", "1.13.1");
        let mut reporter = MockReporter::new();
        let list = RequirementList::from_lines(["onnx==1.14.0"]);

        Reconciler::new(&mut env, &mut reporter)
            .reconcile(&list)
            .unwrap();

        assert_eq!(
            env.installed_version("onnx").unwrap().as_deref(),
            Some("1.14.0")
        );
    }

    #[test]
    fn install_failure_stops_the_pass() {
        let mut env = MemoryEnvironment::new()
            .with_package("alpha", "1.0")
            .fail_install("beta>=2.0");
        let mut reporter = MockReporter::new();
        let list = RequirementList::from_lines(["alpha==1.0", "beta>=2.0", "gamma"]);

        let err = Reconciler::new(&mut env, &mut reporter)
            .with_app_name("faceswap")
            .reconcile(&list)
            .unwrap_err();

        assert!(matches!(err, DepcheckError::InstallFailed { .. }));
        assert_eq!(env.install_calls(), &["beta>=2.0"]);
        assert_eq!(env.queries(), vec!["alpha", "beta"]);
        assert_eq!(reporter.errors().len(), 1);
        assert!(reporter.has_error("Failed to install beta>=2.0"));
        assert!(reporter.has_error("faceswap may not work"));
    }

    #[test]
    fn earlier_installs_are_kept_after_failure() {
        let mut env = MemoryEnvironment::new().fail_install("broken");
        let mut reporter = MockReporter::new();
        let list = RequirementList::from_lines(["first==1.0", "broken"]);

        let result = Reconciler::new(&mut env, &mut reporter).reconcile(&list);

        assert!(result.is_err());
        assert!(env.contains("first"));
    }

    #[test]
    fn malformed_line_aborts_before_later_lines() {
        let mut env = MemoryEnvironment::new();
        let mut reporter = MockReporter::new();
        let list = RequirementList::from_lines(["numpy<2", "tqdm"]);

        let err = Reconciler::new(&mut env, &mut reporter)
            .reconcile(&list)
            .unwrap_err();

        assert!(matches!(err, DepcheckError::MalformedRequirement { .. }));
        assert!(env.install_calls().is_empty());
        assert!(env.queries().is_empty());
        assert!(reporter.has_error("numpy<2"));
    }

    #[test]
    fn version_query_error_propagates() {
        let mut env = MemoryEnvironment::new().with_package("torch", "garbage");
        let mut reporter = MockReporter::new();
        let list = RequirementList::from_lines(["torch>=2.0", "tqdm"]);

        let err = Reconciler::new(&mut env, &mut reporter)
            .reconcile(&list)
            .unwrap_err();

        assert!(matches!(err, DepcheckError::VersionQuery { .. }));
        assert!(env.install_calls().is_empty());
    }

    #[test]
    fn empty_list_is_a_noop() {
        let mut env = MemoryEnvironment::new();
        let mut reporter = MockReporter::new();

        let summary = Reconciler::new(&mut env, &mut reporter)
            .reconcile(&RequirementList::default())
            .unwrap();

        assert!(summary.is_empty());
        assert!(reporter.entries().is_empty());
    }

    #[test]
    fn second_pass_installs_nothing() {
        let mut env = MemoryEnvironment::new();
        let mut reporter = MockReporter::new();
        let list = RequirementList::from_lines(["insightface==0.7.3", "onnx>=1.14"]);

        Reconciler::new(&mut env, &mut reporter)
            .reconcile(&list)
            .unwrap();
        let summary = Reconciler::new(&mut env, &mut reporter)
            .reconcile(&list)
            .unwrap();

        assert_eq!(env.install_calls().len(), 2);
        assert_eq!(summary.already_satisfied().len(), 2);
        assert_eq!(summary.len(), 2);
    }
}
