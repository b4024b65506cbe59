use crate::impact_analysis::domain::{ImpactedComponent, Severity};

/// Effort buckets as (inclusive upper bound on total weight, label), ascending
const EFFORT_BUCKETS: [(u32, &str); 3] = [(3, "1-2 weeks"), (6, "2-4 weeks"), (10, "1-2 months")];

/// Label used once the total weight exceeds every bucket
const LARGEST_EFFORT: &str = "2-3 months";

/// EffortEstimation policy for turning impacted components into effort and timeline strings
///
/// Each component contributes a weight by severity:
/// CRITICAL = 4, HIGH = 3, MEDIUM = 2, LOW = 1.
/// The summed weight is mapped to the first bucket whose upper bound it does not exceed.
pub struct EffortEstimation;

impl EffortEstimation {
    pub fn weight(severity: Severity) -> u32 {
        match severity {
            Severity::Critical => 4,
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }

    pub fn total_weight(components: &[ImpactedComponent]) -> u32 {
        components.iter().map(|c| Self::weight(c.severity)).sum()
    }

    /// Maps the components' total weight to an effort bucket
    pub fn estimate_effort(components: &[ImpactedComponent]) -> String {
        let total = Self::total_weight(components);
        EFFORT_BUCKETS
            .iter()
            .find(|(upper, _)| total <= *upper)
            .map(|(_, label)| *label)
            .unwrap_or(LARGEST_EFFORT)
            .to_string()
    }

    /// Effort string plus an urgency marker
    pub fn timeline(components: &[ImpactedComponent]) -> String {
        let effort = Self::estimate_effort(components);
        if components.iter().any(|c| c.severity == Severity::Critical) {
            format!("{} (Urgent - Critical impacts detected)", effort)
        } else {
            format!("{} (Standard timeline)", effort)
        }
    }
}
