//! Requirement status types.
//!
//! Each satisfaction check produces a `RequirementStatus` describing
//! whether and how the requirement is met by the installed packages.

use serde::Serialize;

/// The result of checking a single requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RequirementStatus {
    /// Package is installed and meets the constraint.
    Satisfied {
        /// Installed version string as reported by the environment
        installed: String,
    },

    /// Package is installed but its version does not meet the constraint.
    Mismatch {
        /// Installed version string as reported by the environment
        installed: String,
    },

    /// Package is not installed.
    Missing,
}

impl RequirementStatus {
    /// Whether the requirement is satisfied.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, RequirementStatus::Satisfied { .. })
    }

    /// The installed version, if the package is installed at all.
    pub fn installed(&self) -> Option<&str> {
        match self {
            RequirementStatus::Satisfied { installed }
            | RequirementStatus::Mismatch { installed } => Some(installed),
            RequirementStatus::Missing => None,
        }
    }
}

/// The result of checking one requirement line.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// The requirement line that was checked
    pub requirement: String,
    /// The status of the requirement
    #[serde(flatten)]
    pub status: RequirementStatus,
}
