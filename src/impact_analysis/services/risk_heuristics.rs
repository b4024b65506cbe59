use crate::impact_analysis::domain::{
    AnalysisRequest, ArchitectureType, ComponentCategory, ImpactedComponent, ServerType, Severity,
};

/// Keyword that marks a diagram as touching persistent storage (case-sensitive)
const DATABASE_KEYWORD: &str = "database";

/// RiskHeuristicEngine service for rule-based impact detection
///
/// Pure business logic with no I/O. Three independent passes over the request
/// (architecture, servers, diagrams) are concatenated in that order without
/// deduplication.
pub struct RiskHeuristicEngine;

impl RiskHeuristicEngine {
    /// Runs all heuristic passes over the request
    pub fn analyze(request: &AnalysisRequest) -> Vec<ImpactedComponent> {
        let mut components = Self::architecture_pass(request.architecture());
        components.extend(Self::server_pass(request));
        components.extend(Self::diagram_pass(request));
        components
    }

    fn architecture_pass(architecture: ArchitectureType) -> Vec<ImpactedComponent> {
        match architecture {
            ArchitectureType::Microservices => vec![ImpactedComponent::new(
                "Inter-service Communication",
                ComponentCategory::Service,
                Severity::Medium,
                "Changes may affect API contracts and message flows between services",
                &[
                    "Version service APIs and keep old versions available during rollout",
                    "Run contract tests between dependent services",
                    "Roll out behind feature flags, one service at a time",
                ],
            )],
            ArchitectureType::Monolithic => vec![ImpactedComponent::new(
                "Monolithic Application",
                ComponentCategory::Service,
                Severity::High,
                "Any change requires rebuilding and redeploying the entire application",
                &[
                    "Run the full regression suite before release",
                    "Use blue-green deployment to allow instant rollback",
                    "Schedule the release in a maintenance window",
                ],
            )],
            _ => Vec::new(),
        }
    }

    fn server_pass(request: &AnalysisRequest) -> Vec<ImpactedComponent> {
        request
            .servers()
            .iter()
            .filter_map(|server| {
                if server.is_type(ServerType::Container) {
                    Some(ImpactedComponent::new(
                        "Container Infrastructure",
                        ComponentCategory::Server,
                        Severity::Medium,
                        "Container images, resource limits and orchestration config may need updates",
                        &[
                            "Rebuild and scan affected container images",
                            "Review CPU and memory limits for the new workload",
                            "Use rolling updates with readiness probes",
                        ],
                    ))
                } else if server.is_type(ServerType::Serverless) {
                    Some(ImpactedComponent::new(
                        "Serverless Functions",
                        ComponentCategory::Server,
                        Severity::Low,
                        "Function code and triggers may need redeployment",
                        &[
                            "Deploy new function versions behind aliases",
                            "Watch cold-start latency and concurrency limits",
                        ],
                    ))
                } else {
                    None
                }
            })
            .collect()
    }

    fn diagram_pass(request: &AnalysisRequest) -> Vec<ImpactedComponent> {
        request
            .diagrams()
            .iter()
            .filter_map(|diagram| diagram.inline_text())
            .filter(|text| text.contains(DATABASE_KEYWORD))
            .map(|_| {
                ImpactedComponent::new(
                    "Database Layer",
                    ComponentCategory::Database,
                    Severity::High,
                    "The diagram shows database components that the change may touch",
                    &[
                        "Take a verified backup before migrating",
                        "Write reversible schema migrations",
                        "Test migrations against a production-sized dataset",
                    ],
                )
            })
            .collect()
    }

    /// Rolls component severities up into the overall risk level
    ///
    /// Ordered decision list, first match wins:
    /// 1. any CRITICAL component -> CRITICAL
    /// 2. more than two HIGH components -> HIGH
    /// 3. any HIGH component, or more than three components in total -> MEDIUM
    /// 4. otherwise -> LOW
    pub fn calculate_overall_risk_level(components: &[ImpactedComponent]) -> Severity {
        let high_count = components
            .iter()
            .filter(|c| c.severity == Severity::High)
            .count();

        if components.iter().any(|c| c.severity == Severity::Critical) {
            Severity::Critical
        } else if high_count > 2 {
            Severity::High
        } else if high_count > 0 || components.len() > 3 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}
