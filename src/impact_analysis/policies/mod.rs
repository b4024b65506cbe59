//! Business rule tables for report synthesis.
//!
//! These tables are compiled in: adding an architecture or server type to
//! them is a code change, not configuration.
mod dependency_catalog;
mod effort_estimation;

pub use dependency_catalog::DependencyCatalog;
pub use effort_estimation::EffortEstimation;
