//! Requirement list files.
//!
//! A requirement list is read in full before any line is processed.
//! Blank lines and `#` comments are dropped here, so they never reach
//! [`Requirement::parse`](super::Requirement::parse).

use crate::error::{DepcheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// An ordered sequence of requirement lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementList {
    source: Option<PathBuf>,
    lines: Vec<String>,
}

impl RequirementList {
    /// Build a list from in-memory lines, filtering blanks and comments.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            source: None,
            lines: lines
                .into_iter()
                .filter_map(|line| strip_line(line.as_ref()))
                .collect(),
        }
    }

    /// Parse the contents of a requirements file.
    pub fn parse(content: &str) -> Self {
        Self::from_lines(content.lines())
    }

    /// Read a requirements file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| DepcheckError::RequirementListUnreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let mut list = Self::parse(&content);
        list.source = Some(path.to_path_buf());
        Ok(list)
    }

    /// The file this list was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The requirement lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn strip_line(line: &str) -> Option<String> {
    let line = match line.find(" #").or_else(|| line.find("\t#")) {
        Some(idx) => &line[..idx],
        None => line,
    };
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        None
    } else {
        Some(line.to_string())
    }
}
