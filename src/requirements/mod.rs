//! Requirement parsing and satisfaction checks.
//!
//! # Modules
//!
//! - [`requirement`] - Parsing `name`, `name==version`, `name>=version`
//! - [`list`] - Requirement list files
//! - [`resolver`] - Checking a requirement against installed packages
//! - [`status`] - Requirement status types

pub mod list;
pub mod requirement;
pub mod resolver;
pub mod status;

pub use list::RequirementList;
pub use requirement::{normalize_name, Constraint, Requirement};
pub use resolver::{check, is_satisfied};
pub use status::{CheckResult, RequirementStatus};
