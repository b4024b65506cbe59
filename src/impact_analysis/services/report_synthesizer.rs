use crate::impact_analysis::domain::{
    AnalysisRequest, AnalysisResult, ArchitectureType, ComponentCategory, ImpactedComponent,
    Recommendation, RecommendationCategory, Severity,
};
use crate::impact_analysis::policies::{DependencyCatalog, EffortEstimation};

/// Summary used when a model reply could not be turned into a report
const FALLBACK_SUMMARY: &str =
    "The analysis service replied, but its response could not be interpreted as an impact report. \
     A baseline report is shown; manual review of the change is recommended.";

/// ReportSynthesizer service for building complete impact reports
///
/// Consumes the heuristic engine's component list and the request shape;
/// all text is templated, nothing is generated.
pub struct ReportSynthesizer;

impl ReportSynthesizer {
    /// Builds the full report for a request from its impacted components
    pub fn synthesize(
        request: &AnalysisRequest,
        components: Vec<ImpactedComponent>,
        model_used: &str,
    ) -> AnalysisResult {
        let summary = Self::summary(&components, request.architecture());
        let recommendations = Self::recommendations(&components);
        let estimated_effort = EffortEstimation::estimate_effort(&components);
        let timeline = EffortEstimation::timeline(&components);
        let dependencies = DependencyCatalog::dependencies_for(request);

        AnalysisResult::new(
            summary,
            components,
            recommendations,
            estimated_effort,
            timeline,
            dependencies,
            model_used.to_string(),
        )
    }

    /// Canned report substituted when a provider reply is unusable
    pub fn fallback(model_used: &str) -> AnalysisResult {
        let components = Vec::new();
        AnalysisResult::new(
            FALLBACK_SUMMARY.to_string(),
            Vec::new(),
            Self::recommendations(&components),
            EffortEstimation::estimate_effort(&components),
            EffortEstimation::timeline(&components),
            Vec::new(),
            model_used.to_string(),
        )
    }

    pub fn summary(components: &[ImpactedComponent], architecture: ArchitectureType) -> String {
        let critical_count = components
            .iter()
            .filter(|c| c.severity == Severity::Critical)
            .count();

        let mut summary = format!(
            "Analysis identified {} potentially impacted component(s) in the {} architecture.",
            components.len(),
            architecture
        );

        if critical_count > 0 {
            summary.push_str(&format!(
                " {} critical impact(s) require immediate attention before this change proceeds.",
                critical_count
            ));
        } else {
            summary.push_str(
                " No critical impacts were detected; the change can follow the standard release process.",
            );
        }

        summary
    }

    /// Fixed-order recommendation list: database (conditional), security, operational
    pub fn recommendations(components: &[ImpactedComponent]) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if components
            .iter()
            .any(|c| c.category == ComponentCategory::Database)
        {
            recommendations.push(Recommendation::new(
                Severity::High,
                RecommendationCategory::Technical,
                "Protect data during the change",
                "Database components are affected; plan migrations and backups before deploying",
                &[
                    "Snapshot all affected databases",
                    "Rehearse the migration and its rollback in staging",
                    "Monitor replication lag and query latency after release",
                ],
            ));
        }

        recommendations.push(Recommendation::new(
            Severity::Medium,
            RecommendationCategory::Security,
            "Review security implications",
            "Check that the change does not widen access or expose new attack surface",
            &[
                "Review authentication and authorization paths touched by the change",
                "Update firewall and network policies if new traffic flows appear",
                "Run a dependency vulnerability scan",
            ],
        ));

        recommendations.push(Recommendation::new(
            Severity::Medium,
            RecommendationCategory::Operational,
            "Prepare monitoring and rollback",
            "Make the rollout observable and reversible",
            &[
                "Add dashboards and alerts for affected components",
                "Document and test the rollback procedure",
                "Brief the on-call team before release",
            ],
        ));

        recommendations
    }
}
