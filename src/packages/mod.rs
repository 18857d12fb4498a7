//! The package environment capability.
//!
//! [`PackageEnvironment`] is the single object through which the resolver
//! reads installed package metadata and the reconciler mutates the
//! environment. Production code uses [`PipEnvironment`]; tests substitute
//! [`MemoryEnvironment`].
//!
//! # Modules
//!
//! - [`pip`] - Backend that drives a Python interpreter's `pip`
//! - [`memory`] - In-memory environment for tests and dry runs

pub mod memory;
pub mod pip;

pub use memory::MemoryEnvironment;
pub use pip::PipEnvironment;

use crate::error::Result;

/// Reads and mutates the set of installed packages.
pub trait PackageEnvironment {
    /// The installed version string of `name`, or `None` if not installed.
    ///
    /// Fails with `PackageMetadataUnavailable` when the query cannot run.
    fn installed_version(&self, name: &str) -> Result<Option<String>>;

    /// Install the given requirement strings.
    ///
    /// Fails with `InstallFailed` when the package manager reports failure.
    fn install(&mut self, requirements: &[&str]) -> Result<()>;

    /// Remove the given packages.
    ///
    /// Fails with `UninstallFailed` when the package manager reports failure.
    fn uninstall(&mut self, packages: &[&str]) -> Result<()>;
}
