//! Requirement line parsing.
//!
//! A requirement line names a package and optionally pins it:
//! `name`, `name==version` or `name>=version`.

use crate::error::{DepcheckError, Result};
use crate::version::Version;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?(?:\[[A-Za-z0-9._,\s-]*\])?$")
        .expect("name pattern is valid")
});

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_.]+").expect("separator pattern is valid"));

/// The version constraint carried by a requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Any installed version satisfies the requirement.
    Any,
    /// The installed version must equal this one (`==`).
    Exact(Version),
    /// The installed version must be at least this one (`>=`).
    AtLeast(Version),
}

impl Constraint {
    /// Whether `installed` meets this constraint.
    pub fn allows(&self, installed: &Version) -> bool {
        match self {
            Constraint::Any => true,
            Constraint::Exact(required) => installed == required,
            Constraint::AtLeast(required) => installed >= required,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Any => Ok(()),
            Constraint::Exact(v) => write!(f, "=={}", v),
            Constraint::AtLeast(v) => write!(f, ">={}", v),
        }
    }
}

/// A parsed requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Package identifier as written, including any `[extras]`.
    pub name: String,
    /// Version constraint.
    pub constraint: Constraint,
    /// The trimmed source line, handed verbatim to the installer.
    pub raw: String,
}

impl Requirement {
    /// Parse a requirement line.
    ///
    /// `==` is recognised before `>=`. Both sides are trimmed, and the name
    /// must be a valid package identifier so that stray operator characters
    /// never end up in it.
    pub fn parse(line: &str) -> Result<Self> {
        let raw = line.trim();

        let (name, constraint) = if let Some((name, version)) = raw.split_once("==") {
            (name, Constraint::Exact(parse_version(raw, version)?))
        } else if let Some((name, version)) = raw.split_once(">=") {
            (name, Constraint::AtLeast(parse_version(raw, version)?))
        } else {
            (raw, Constraint::Any)
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(DepcheckError::MalformedRequirement {
                line: raw.to_string(),
                message: "missing package name".to_string(),
            });
        }
        if !NAME_PATTERN.is_match(name) {
            return Err(DepcheckError::MalformedRequirement {
                line: raw.to_string(),
                message: format!("invalid package name '{}'", name),
            });
        }

        Ok(Self {
            name: name.to_string(),
            constraint,
            raw: raw.to_string(),
        })
    }

    /// The package name without extras, as used for metadata lookups.
    pub fn package(&self) -> &str {
        match self.name.split_once('[') {
            Some((base, _)) => base.trim_end(),
            None => &self.name,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.constraint)
    }
}

fn parse_version(line: &str, version: &str) -> Result<Version> {
    let version = version.trim();
    Version::parse(version).map_err(|_| DepcheckError::MalformedRequirement {
        line: line.to_string(),
        message: format!("invalid version '{}'", version),
    })
}

/// Normalize a package name for comparison.
///
/// Lowercases and collapses runs of `-`, `_` and `.` into a single `-`.
pub fn normalize_name(name: &str) -> String {
    SEPARATOR_RUN
        .replace_all(&name.trim().to_ascii_lowercase(), "-")
        .into_owned()
}
