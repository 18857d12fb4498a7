//! depcheck - Keep an application's Python requirements installed.
//!
//! Before a Python application starts, depcheck reads its requirement list,
//! compares every entry with the installed package environment and installs
//! whatever is missing or at the wrong version. On macOS, or when no GPU is
//! available, the CPU requirement list is used instead of the GPU one.
//! Failures never stop the host: they are reported once with a hint for
//! manual installation.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and parsing
//! - [`error`] - Error types and result aliases
//! - [`packages`] - The package environment capability and its backends
//! - [`platform`] - Host platform and GPU detection
//! - [`reconcile`] - List selection, reconciliation and the preflight boundary
//! - [`requirements`] - Requirement parsing and satisfaction checks
//! - [`shell`] - Process execution
//! - [`ui`] - Message reporting
//! - [`version`] - Version parsing and ordering
//!
//! # Example
//!
//! ```
//! use depcheck::packages::MemoryEnvironment;
//! use depcheck::reconcile::Reconciler;
//! use depcheck::requirements::RequirementList;
//! use depcheck::ui::MockReporter;
//!
//! let mut env = MemoryEnvironment::new().with_package("numpy", "1.26.4");
//! let mut reporter = MockReporter::new();
//! let list = RequirementList::parse("numpy>=1.24\ntqdm\n");
//!
//! let summary = Reconciler::new(&mut env, &mut reporter)
//!     .reconcile(&list)
//!     .unwrap();
//! assert_eq!(summary.installed(), vec!["tqdm"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod packages;
pub mod platform;
pub mod reconcile;
pub mod requirements;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{DepcheckError, Result};
