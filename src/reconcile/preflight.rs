//! The preflight check run before the dependent application starts.
//!
//! [`Preflight::run`] is the outermost boundary: any failure from list
//! selection, loading or reconciliation is caught here exactly once,
//! reported with a remediation hint, and handed back as
//! [`CheckOutcome::Degraded`] so the host keeps running.

use crate::config::DepcheckConfig;
use crate::error::{DepcheckError, Result};
use crate::packages::PackageEnvironment;
use crate::platform::Platform;
use crate::reconcile::reconciler::{ReconcileSummary, Reconciler};
use crate::reconcile::selector::{select_list, ListKind};
use crate::requirements::{check, CheckResult, Requirement, RequirementList};
use crate::ui::Reporter;
use std::path::{Path, PathBuf};

/// Result of a preflight run.
#[derive(Debug)]
pub enum CheckOutcome {
    /// Every requirement is satisfied.
    Ready(ReconcileSummary),
    /// Reconciliation stopped; the application may not work.
    Degraded(DepcheckError),
}

impl CheckOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, CheckOutcome::Ready(_))
    }
}

/// Inputs for one preflight run.
pub struct Preflight<'a> {
    config: &'a DepcheckConfig,
    project_root: PathBuf,
    platform: Platform,
    gpu_capable: bool,
}

impl<'a> Preflight<'a> {
    pub fn new(
        config: &'a DepcheckConfig,
        project_root: &Path,
        platform: Platform,
        gpu_capable: bool,
    ) -> Self {
        Self {
            config,
            project_root: project_root.to_path_buf(),
            platform,
            gpu_capable,
        }
    }

    /// The requirement list kind this run uses.
    pub fn list_kind(&self) -> ListKind {
        select_list(self.platform, self.gpu_capable)
    }

    /// Path of the selected requirement list.
    pub fn list_path(&self) -> PathBuf {
        self.config.list_path(self.list_kind(), &self.project_root)
    }

    /// Check and install every requirement of the selected list.
    ///
    /// Never returns an error: failures are reported and become `Degraded`.
    pub fn run(
        &self,
        env: &mut dyn PackageEnvironment,
        reporter: &mut dyn Reporter,
    ) -> CheckOutcome {
        match self.reconcile(env, reporter) {
            Ok(summary) => CheckOutcome::Ready(summary),
            Err(e) => {
                reporter.error(&format!(
                    "{} install failed: {}. {}",
                    self.config.display_name(),
                    e,
                    self.remediation_hint()
                ));
                CheckOutcome::Degraded(e)
            }
        }
    }

    /// Report the status of every requirement without installing anything.
    pub fn status(&self, env: &dyn PackageEnvironment) -> Result<Vec<CheckResult>> {
        let list = RequirementList::load(&self.list_path())?;
        list.lines()
            .iter()
            .map(|line| {
                let req = Requirement::parse(line)?;
                Ok(CheckResult {
                    requirement: req.raw.clone(),
                    status: check(&req, env)?,
                })
            })
            .collect()
    }

    fn reconcile(
        &self,
        env: &mut dyn PackageEnvironment,
        reporter: &mut dyn Reporter,
    ) -> Result<ReconcileSummary> {
        let kind = self.list_kind();
        reporter.info(&format!("Use {} requirements", kind));

        let list = RequirementList::load(&self.list_path())?;
        if let Some(source) = list.source() {
            tracing::debug!("Loaded {} requirements from {}", list.len(), source.display());
        }
        reporter.info(&format!(
            "Checking {} requirements",
            self.config.display_name()
        ));

        let summary = Reconciler::new(env, reporter)
            .with_app_name(self.config.display_name())
            .reconcile(&list)?;

        reporter.info(&format!(
            "{} requirements satisfied ({} installed)",
            summary.len(),
            summary.installed().len()
        ));
        Ok(summary)
    }

    fn remediation_hint(&self) -> String {
        format!(
            "You can try to install dependencies manually by activating the virtual environment and installing {} or {}",
            self.config.requirements.display(),
            self.config.gpu_requirements.display()
        )
    }
}
