use crate::impact_analysis::domain::{AnalysisRequest, ArchitectureType, ServerType};

const MICROSERVICES_DEPENDENCIES: [&str; 3] =
    ["API Gateway", "Service Discovery", "Load Balancer"];

const CONTAINER_DEPENDENCIES: [&str; 2] = ["Container Registry", "Orchestration Platform"];

const SERVERLESS_DEPENDENCIES: [&str; 2] = ["Function Runtime", "Event Triggers"];

/// DependencyCatalog policy for listing external dependencies touched by a change
///
/// Derived purely from the request shape, never from impacted components.
/// Order: architecture-derived, then container-derived, then serverless-derived.
/// No deduplication.
pub struct DependencyCatalog;

impl DependencyCatalog {
    pub fn dependencies_for(request: &AnalysisRequest) -> Vec<String> {
        let mut dependencies = Vec::new();

        if request.architecture() == ArchitectureType::Microservices {
            dependencies.extend(MICROSERVICES_DEPENDENCIES.iter().map(|d| d.to_string()));
        }

        if request.has_server_type(ServerType::Container) {
            dependencies.extend(CONTAINER_DEPENDENCIES.iter().map(|d| d.to_string()));
        }

        if request.has_server_type(ServerType::Serverless) {
            dependencies.extend(SERVERLESS_DEPENDENCIES.iter().map(|d| d.to_string()));
        }

        dependencies
    }
}
