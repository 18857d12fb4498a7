//! In-memory package environment.
//!
//! Records every install and uninstall call so tests can assert on them,
//! and can be told to fail installs for specific requirements.
//!
//! # Example
//!
//! ```
//! use depcheck::packages::{MemoryEnvironment, PackageEnvironment};
//!
//! let mut env = MemoryEnvironment::new().with_package("numpy", "1.26.4");
//! assert_eq!(env.installed_version("NumPy").unwrap().as_deref(), Some("1.26.4"));
//!
//! env.install(&["onnx==1.14.0"]).unwrap();
//! assert_eq!(env.installed_version("onnx").unwrap().as_deref(), Some("1.14.0"));
//! assert_eq!(env.install_calls(), &["onnx==1.14.0"]);
//! ```

use crate::error::{DepcheckError, Result};
use crate::packages::PackageEnvironment;
use crate::requirements::{normalize_name, Constraint, Requirement};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Version recorded for packages installed without a pin.
const UNPINNED_VERSION: &str = "0.0.0";

/// A fake environment backed by a map of package name to version string.
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    packages: HashMap<String, String>,
    failing_installs: HashSet<String>,
    unavailable: bool,
    install_calls: Vec<String>,
    uninstall_calls: Vec<String>,
    queries: RefCell<Vec<String>>,
}

impl MemoryEnvironment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an installed package.
    pub fn with_package(mut self, name: &str, version: &str) -> Self {
        self.packages
            .insert(normalize_name(name), version.to_string());
        self
    }

    /// Make installs of this exact requirement string fail.
    pub fn fail_install(mut self, requirement: &str) -> Self {
        self.failing_installs.insert(requirement.to_string());
        self
    }

    /// Make every metadata query fail as if the interpreter were missing.
    pub fn metadata_unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Requirement strings passed to `install`, in call order.
    pub fn install_calls(&self) -> &[String] {
        &self.install_calls
    }

    /// Package names passed to `uninstall`, in call order.
    pub fn uninstall_calls(&self) -> &[String] {
        &self.uninstall_calls
    }

    /// Package names queried through `installed_version`, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }

    /// Whether `name` is currently installed.
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(&normalize_name(name))
    }
}

impl PackageEnvironment for MemoryEnvironment {
    fn installed_version(&self, name: &str) -> Result<Option<String>> {
        self.queries.borrow_mut().push(name.to_string());
        if self.unavailable {
            return Err(DepcheckError::PackageMetadataUnavailable {
                package: name.to_string(),
                message: "no interpreter".to_string(),
            });
        }
        Ok(self.packages.get(&normalize_name(name)).cloned())
    }

    fn install(&mut self, requirements: &[&str]) -> Result<()> {
        for requirement in requirements {
            self.install_calls.push(requirement.to_string());
            if self.failing_installs.contains(*requirement) {
                return Err(DepcheckError::InstallFailed {
                    requirement: requirement.to_string(),
                    code: Some(1),
                });
            }

            let parsed = Requirement::parse(requirement)?;
            let version = match &parsed.constraint {
                Constraint::Any => UNPINNED_VERSION.to_string(),
                Constraint::Exact(v) | Constraint::AtLeast(v) => v.to_string(),
            };
            self.packages
                .insert(normalize_name(parsed.package()), version);
        }
        Ok(())
    }

    fn uninstall(&mut self, packages: &[&str]) -> Result<()> {
        for package in packages {
            self.uninstall_calls.push(package.to_string());
            if self.packages.remove(&normalize_name(package)).is_none() {
                return Err(DepcheckError::UninstallFailed {
                    packages: package.to_string(),
                    code: Some(1),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_name_normalized() {
        let env = MemoryEnvironment::new().with_package("opencv_python", "4.8.0.74");
        assert_eq!(
            env.installed_version("OpenCV-Python").unwrap().as_deref(),
            Some("4.8.0.74")
        );
        assert!(env.installed_version("onnx").unwrap().is_none());
        assert_eq!(env.queries(), vec!["OpenCV-Python", "onnx"]);
    }

    #[test]
    fn install_records_pinned_version() {
        let mut env = MemoryEnvironment::new();
        env.install(&["insightface==0.7.3", "protobuf>=3.20", "tqdm"])
            .unwrap();
        assert_eq!(
            env.installed_version("insightface").unwrap().as_deref(),
            Some("0.7.3")
        );
        assert_eq!(
            env.installed_version("protobuf").unwrap().as_deref(),
            Some("3.20")
        );
        assert_eq!(
            env.installed_version("tqdm").unwrap().as_deref(),
            Some(UNPINNED_VERSION)
        );
        assert_eq!(env.install_calls().len(), 3);
    }

    #[test]
    fn install_strips_extras() {
        let mut env = MemoryEnvironment::new();
        env.install(&["uvicorn[standard]>=0.23"]).unwrap();
        assert!(env.contains("uvicorn"));
    }

    #[test]
    fn failing_install_is_recorded_and_errors() {
        let mut env = MemoryEnvironment::new().fail_install("beta>=2.0");
        let err = env.install(&["beta>=2.0"]).unwrap_err();
        assert!(matches!(err, DepcheckError::InstallFailed { .. }));
        assert_eq!(env.install_calls(), &["beta>=2.0"]);
        assert!(!env.contains("beta"));
    }

    #[test]
    fn uninstall_removes_package() {
        let mut env = MemoryEnvironment::new().with_package("onnx", "1.14.0");
        env.uninstall(&["onnx"]).unwrap();
        assert!(!env.contains("onnx"));
        assert_eq!(env.uninstall_calls(), &["onnx"]);
    }

    #[test]
    fn uninstall_missing_package_fails() {
        let mut env = MemoryEnvironment::new();
        let err = env.uninstall(&["ghost"]).unwrap_err();
        assert!(matches!(err, DepcheckError::UninstallFailed { .. }));
    }

    #[test]
    fn unavailable_metadata_errors() {
        let env = MemoryEnvironment::new().metadata_unavailable();
        assert!(matches!(
            env.installed_version("numpy").unwrap_err(),
            DepcheckError::PackageMetadataUnavailable { .. }
        ));
    }
}
