use crate::impact_analysis::domain::{
    AnalysisRequest, ChangeRequestRef, Descriptor, DescriptorValue, DiagramKind, DiagramSource,
    ServerSpec,
};

/// System instruction shared by every remote backend
pub const SYSTEM_PROMPT: &str = "You are a senior systems architect. You assess how a proposed change \
affects an existing system and answer with a single JSON object only.";

/// Response shape the model is asked to produce
const RESPONSE_FORMAT: &str = r#"{
  "summary": "string",
  "riskLevel": "LOW | MEDIUM | HIGH | CRITICAL",
  "impactedComponents": [
    {
      "name": "string",
      "type": "server | database | service | network | security",
      "impactLevel": "LOW | MEDIUM | HIGH | CRITICAL",
      "description": "string",
      "mitigationSteps": ["string"]
    }
  ],
  "recommendations": [
    {
      "priority": "LOW | MEDIUM | HIGH | CRITICAL",
      "category": "technical | operational | security | performance",
      "title": "string",
      "description": "string",
      "implementationSteps": ["string"]
    }
  ],
  "estimatedEffort": "string",
  "timeline": "string",
  "dependencies": ["string"]
}"#;

/// Builds the natural-language prompt describing a request
pub struct AnalysisPrompt;

impl AnalysisPrompt {
    pub fn build(request: &AnalysisRequest) -> String {
        let mut prompt = String::new();

        prompt.push_str("Analyze the impact of the following change request on this system.\n\n");
        prompt.push_str(&format!("## Architecture\n{}\n\n", request.architecture()));

        prompt.push_str("## Servers\n");
        if request.servers().is_empty() {
            prompt.push_str("No server inventory provided.\n");
        }
        for (i, server) in request.servers().iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", i + 1, Self::describe_server(server)));
        }
        prompt.push('\n');

        prompt.push_str("## Architecture Diagrams\n");
        if request.diagrams().is_empty() {
            prompt.push_str("No diagrams provided.\n");
        }
        for (i, diagram) in request.diagrams().iter().enumerate() {
            let kind = match diagram.kind {
                DiagramKind::Pdf => "PDF",
                DiagramKind::MermaidSource => "Mermaid",
            };
            match &diagram.source {
                DiagramSource::File(file) => {
                    prompt.push_str(&format!(
                        "{}. {} diagram (file: {})\n",
                        i + 1,
                        kind,
                        file.name
                    ));
                }
                DiagramSource::Inline(text) => {
                    prompt.push_str(&format!(
                        "{}. {} diagram:\n```\n{}\n```\n",
                        i + 1,
                        kind,
                        text
                    ));
                }
            }
        }
        prompt.push('\n');

        prompt.push_str("## Change Request\n");
        match request.change_request() {
            ChangeRequestRef::Text { content } => {
                prompt.push_str(&format!("{}\n", content));
            }
            ChangeRequestRef::File { file } => {
                prompt.push_str(&format!("See attached document: {}\n", file.name));
            }
        }
        prompt.push('\n');

        prompt.push_str("Respond with a JSON object in exactly this format:\n");
        prompt.push_str(RESPONSE_FORMAT);

        prompt
    }

    fn describe_server(server: &ServerSpec) -> String {
        let fields = [
            ("platform", Self::field(&server.platform)),
            ("type", Self::field(&server.server_type)),
            ("ram", Self::field(&server.ram)),
            ("storage", Self::field(&server.storage)),
            ("os", Self::field(&server.os)),
        ];

        fields
            .iter()
            .filter_map(|(label, value)| value.map(|v| format!("{}: {}", label, v)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn field<T: DescriptorValue>(value: &Option<Descriptor<T>>) -> Option<&str> {
        value.as_ref().map(|d| d.as_str())
    }
}
