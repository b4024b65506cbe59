use super::Severity;
use crate::impact_analysis::services::RiskHeuristicEngine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Server,
    Database,
    Service,
    Network,
    Security,
}

impl ComponentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentCategory::Server => "server",
            ComponentCategory::Database => "database",
            ComponentCategory::Service => "service",
            ComponentCategory::Network => "network",
            ComponentCategory::Security => "security",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Technical,
    Operational,
    Security,
    Performance,
}

impl RecommendationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationCategory::Technical => "technical",
            RecommendationCategory::Operational => "operational",
            RecommendationCategory::Security => "security",
            RecommendationCategory::Performance => "performance",
        }
    }
}

/// A part of the system the change is expected to affect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactedComponent {
    pub name: String,
    #[serde(rename = "type")]
    pub category: ComponentCategory,
    #[serde(rename = "impactLevel")]
    pub severity: Severity,
    pub description: String,
    #[serde(default)]
    pub mitigation_steps: Vec<String>,
}

impl ImpactedComponent {
    pub fn new(
        name: impl Into<String>,
        category: ComponentCategory,
        severity: Severity,
        description: impl Into<String>,
        mitigation_steps: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            category,
            severity,
            description: description.into(),
            mitigation_steps: mitigation_steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Severity,
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub implementation_steps: Vec<String>,
}

impl Recommendation {
    pub fn new(
        priority: Severity,
        category: RecommendationCategory,
        title: impl Into<String>,
        description: impl Into<String>,
        implementation_steps: &[&str],
    ) -> Self {
        Self {
            priority,
            category,
            title: title.into(),
            description: description.into(),
            implementation_steps: implementation_steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The impact report produced by one successful analysis
///
/// The overall risk level is always derived from the impacted components;
/// there is no way to set it independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    analysis_id: Uuid,
    summary: String,
    risk_level: Severity,
    impacted_components: Vec<ImpactedComponent>,
    recommendations: Vec<Recommendation>,
    estimated_effort: String,
    timeline: String,
    dependencies: Vec<String>,
    model_used: String,
    analysis_timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn new(
        summary: String,
        impacted_components: Vec<ImpactedComponent>,
        recommendations: Vec<Recommendation>,
        estimated_effort: String,
        timeline: String,
        dependencies: Vec<String>,
        model_used: String,
    ) -> Self {
        let risk_level = RiskHeuristicEngine::calculate_overall_risk_level(&impacted_components);
        Self {
            analysis_id: Uuid::new_v4(),
            summary,
            risk_level,
            impacted_components,
            recommendations,
            estimated_effort,
            timeline,
            dependencies,
            model_used,
            analysis_timestamp: Utc::now(),
        }
    }

    /// Replaces the creation timestamp
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.analysis_timestamp = timestamp;
        self
    }

    pub fn analysis_id(&self) -> Uuid {
        self.analysis_id
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn risk_level(&self) -> Severity {
        self.risk_level
    }

    pub fn impacted_components(&self) -> &[ImpactedComponent] {
        &self.impacted_components
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn estimated_effort(&self) -> &str {
        &self.estimated_effort
    }

    pub fn timeline(&self) -> &str {
        &self.timeline
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn model_used(&self) -> &str {
        &self.model_used
    }

    pub fn analysis_timestamp(&self) -> DateTime<Utc> {
        self.analysis_timestamp
    }
}
