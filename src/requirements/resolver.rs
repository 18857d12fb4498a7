//! Requirement satisfaction checks.
//!
//! The installed version is queried fresh for every requirement; nothing
//! is cached between checks because installs change the answer.

use crate::error::{DepcheckError, Result};
use crate::packages::PackageEnvironment;
use crate::requirements::requirement::Requirement;
use crate::requirements::status::RequirementStatus;
use crate::version::Version;

/// Check a requirement against the environment.
///
/// An absent package is `Missing`, never an error. A version string the
/// environment reports but that cannot be parsed fails with `VersionQuery`.
pub fn check(req: &Requirement, env: &dyn PackageEnvironment) -> Result<RequirementStatus> {
    let Some(installed) = env.installed_version(req.package())? else {
        return Ok(RequirementStatus::Missing);
    };

    let version = Version::parse(&installed).map_err(|e| DepcheckError::VersionQuery {
        package: req.package().to_string(),
        message: e.to_string(),
    })?;

    if req.constraint.allows(&version) {
        Ok(RequirementStatus::Satisfied { installed })
    } else {
        Ok(RequirementStatus::Mismatch { installed })
    }
}

/// Whether the requirement is satisfied by what is installed.
pub fn is_satisfied(req: &Requirement, env: &dyn PackageEnvironment) -> Result<bool> {
    check(req, env).map(|status| status.is_satisfied())
}
