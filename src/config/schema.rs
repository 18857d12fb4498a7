//! Configuration schema definitions.
//!
//! Maps to the optional `depcheck.yml` project file.

use crate::platform::GpuMode;
use crate::reconcile::ListKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for depcheck.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepcheckConfig {
    /// Application name used in log messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Python interpreter that owns the package environment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// GPU capability: true, false or auto
    pub gpu: GpuMode,

    /// Default (CPU) requirement list, relative to the project root
    pub requirements: PathBuf,

    /// GPU requirement list, relative to the project root
    pub gpu_requirements: PathBuf,
}

impl Default for DepcheckConfig {
    fn default() -> Self {
        Self {
            app_name: None,
            python: None,
            gpu: GpuMode::default(),
            requirements: PathBuf::from("requirements.txt"),
            gpu_requirements: PathBuf::from("requirements-gpu.txt"),
        }
    }
}

impl DepcheckConfig {
    /// Name shown in messages about the dependent application.
    pub fn display_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or("the application")
    }

    /// The configured file for a requirement list kind.
    pub fn list_file(&self, kind: ListKind) -> &Path {
        match kind {
            ListKind::Gpu => &self.gpu_requirements,
            ListKind::Cpu => &self.requirements,
        }
    }

    /// Resolve a list file against the project root.
    pub fn list_path(&self, kind: ListKind, project_root: &Path) -> PathBuf {
        project_root.join(self.list_file(kind))
    }
}
