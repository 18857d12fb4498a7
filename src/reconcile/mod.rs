//! Reconciliation of the package environment with a requirement list.
//!
//! # Modules
//!
//! - [`selector`] - Choosing the GPU or CPU requirement list
//! - [`reconciler`] - Installing unsatisfied requirements in order
//! - [`preflight`] - The outermost boundary that reports failures

pub mod preflight;
pub mod reconciler;
pub mod selector;

pub use preflight::{CheckOutcome, Preflight};
pub use reconciler::{ReconcileSummary, Reconciler, RequirementOutcome};
pub use selector::{select_list, ListKind};
