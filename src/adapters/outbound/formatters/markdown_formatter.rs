use crate::impact_analysis::domain::{AnalysisResult, ImpactedComponent, Recommendation};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for impacted components
const COMPONENT_TABLE_HEADER: &str = "| Component | Type | Impact | Description |\n";

/// Markdown table separator line for impacted components
const COMPONENT_TABLE_SEPARATOR: &str = "|-----------|------|--------|-------------|\n";

/// MarkdownFormatter adapter for human-readable impact reports
///
/// Sections follow the report fields in order: overview, impacted components
/// (table plus per-component mitigations), recommendations, dependencies.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_steps(output: &mut String, steps: &[String]) {
        for (i, step) in steps.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, step));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, result: &AnalysisResult) {
        output.push_str("# Impact Analysis Report\n\n");
        output.push_str(&format!("- **Analysis ID**: {}\n", result.analysis_id()));
        output.push_str(&format!("- **Model**: {}\n", result.model_used()));
        output.push_str(&format!(
            "- **Generated**: {}\n\n",
            result.analysis_timestamp().to_rfc3339()
        ));
    }

    fn render_overview(&self, output: &mut String, result: &AnalysisResult) {
        output.push_str("## Overview\n\n");
        output.push_str(&format!("{}\n\n", result.summary()));
        output.push_str(&format!("- **Overall Risk**: {}\n", result.risk_level()));
        output.push_str(&format!(
            "- **Estimated Effort**: {}\n",
            result.estimated_effort()
        ));
        output.push_str(&format!("- **Timeline**: {}\n\n", result.timeline()));
    }

    fn render_components(&self, output: &mut String, components: &[ImpactedComponent]) {
        output.push_str("## Impacted Components\n\n");

        if components.is_empty() {
            output.push_str("*No impacted components identified*\n\n");
            return;
        }

        output.push_str(COMPONENT_TABLE_HEADER);
        output.push_str(COMPONENT_TABLE_SEPARATOR);
        for component in components {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&component.name),
                component.category.as_str(),
                component.severity,
                Self::escape_markdown_table_cell(&component.description)
            ));
        }
        output.push('\n');

        for component in components.iter().filter(|c| !c.mitigation_steps.is_empty()) {
            output.push_str(&format!("### Mitigation: {}\n\n", component.name));
            Self::render_steps(output, &component.mitigation_steps);
        }
    }

    fn render_recommendations(&self, output: &mut String, recommendations: &[Recommendation]) {
        output.push_str("## Recommendations\n\n");

        if recommendations.is_empty() {
            output.push_str("*No recommendations*\n\n");
            return;
        }

        for recommendation in recommendations {
            output.push_str(&format!(
                "### [{}] {} ({})\n\n",
                recommendation.priority,
                recommendation.title,
                recommendation.category.as_str()
            ));
            output.push_str(&format!("{}\n\n", recommendation.description));
            if !recommendation.implementation_steps.is_empty() {
                Self::render_steps(output, &recommendation.implementation_steps);
            }
        }
    }

    fn render_dependencies(&self, output: &mut String, dependencies: &[String]) {
        output.push_str("## Dependencies\n\n");

        if dependencies.is_empty() {
            output.push_str("*No infrastructure dependencies identified*\n");
            return;
        }

        for dependency in dependencies {
            output.push_str(&format!("- {}\n", dependency));
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, result: &AnalysisResult) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, result);
        self.render_overview(&mut output, result);
        self.render_components(&mut output, result.impacted_components());
        self.render_recommendations(&mut output, result.recommendations());
        self.render_dependencies(&mut output, result.dependencies());

        Ok(output)
    }
}
