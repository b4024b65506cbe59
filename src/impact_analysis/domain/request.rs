use crate::shared::error::AppError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Architecture topology of the system being changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchitectureType {
    Monolithic,
    Microservices,
    ClientServer,
    Serverless,
    EventDriven,
    Layered,
    ServiceOriented,
}

impl ArchitectureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchitectureType::Monolithic => "monolithic",
            ArchitectureType::Microservices => "microservices",
            ArchitectureType::ClientServer => "client-server",
            ArchitectureType::Serverless => "serverless",
            ArchitectureType::EventDriven => "event-driven",
            ArchitectureType::Layered => "layered",
            ArchitectureType::ServiceOriented => "service-oriented",
        }
    }
}

impl FromStr for ArchitectureType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monolithic" => Ok(ArchitectureType::Monolithic),
            "microservices" => Ok(ArchitectureType::Microservices),
            "client-server" => Ok(ArchitectureType::ClientServer),
            "serverless" => Ok(ArchitectureType::Serverless),
            "event-driven" => Ok(ArchitectureType::EventDriven),
            "layered" => Ok(ArchitectureType::Layered),
            "service-oriented" => Ok(ArchitectureType::ServiceOriented),
            _ => Err(format!("Invalid architecture type: {}", s)),
        }
    }
}

impl fmt::Display for ArchitectureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value from one of the fixed option tables
pub trait DescriptorValue {
    fn as_str(&self) -> &'static str;
}

/// A server attribute: either a value from a fixed option table or a free-text override
///
/// Deserialization tries the option table first, so `"container"` becomes
/// `Known(ServerType::Container)` while `"bare-metal k8s node"` stays `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Descriptor<T> {
    Known(T),
    Custom(String),
}

impl<T: DescriptorValue> Descriptor<T> {
    pub fn as_str(&self) -> &str {
        match self {
            Descriptor::Known(value) => value.as_str(),
            Descriptor::Custom(text) => text,
        }
    }
}

impl<T: PartialEq> Descriptor<T> {
    /// True only for the table value; free text never matches
    pub fn is(&self, value: &T) -> bool {
        matches!(self, Descriptor::Known(known) if known == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentPlatform {
    OnPremise,
    Aws,
    Azure,
    Gcp,
    Hybrid,
}

impl DescriptorValue for DeploymentPlatform {
    fn as_str(&self) -> &'static str {
        match self {
            DeploymentPlatform::OnPremise => "on-premise",
            DeploymentPlatform::Aws => "aws",
            DeploymentPlatform::Azure => "azure",
            DeploymentPlatform::Gcp => "gcp",
            DeploymentPlatform::Hybrid => "hybrid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServerType {
    Physical,
    Virtual,
    Container,
    Serverless,
}

impl DescriptorValue for ServerType {
    fn as_str(&self) -> &'static str {
        match self {
            ServerType::Physical => "physical",
            ServerType::Virtual => "virtual",
            ServerType::Container => "container",
            ServerType::Serverless => "serverless",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RamSize {
    #[serde(rename = "4GB")]
    Gb4,
    #[serde(rename = "8GB")]
    Gb8,
    #[serde(rename = "16GB")]
    Gb16,
    #[serde(rename = "32GB")]
    Gb32,
    #[serde(rename = "64GB")]
    Gb64,
    #[serde(rename = "128GB")]
    Gb128,
}

impl DescriptorValue for RamSize {
    fn as_str(&self) -> &'static str {
        match self {
            RamSize::Gb4 => "4GB",
            RamSize::Gb8 => "8GB",
            RamSize::Gb16 => "16GB",
            RamSize::Gb32 => "32GB",
            RamSize::Gb64 => "64GB",
            RamSize::Gb128 => "128GB",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    Ssd,
    Hdd,
    Nvme,
    San,
    Nas,
}

impl DescriptorValue for StorageType {
    fn as_str(&self) -> &'static str {
        match self {
            StorageType::Ssd => "ssd",
            StorageType::Hdd => "hdd",
            StorageType::Nvme => "nvme",
            StorageType::San => "san",
            StorageType::Nas => "nas",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperatingSystem {
    Ubuntu,
    Rhel,
    Debian,
    WindowsServer,
    AmazonLinux,
}

impl DescriptorValue for OperatingSystem {
    fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Ubuntu => "ubuntu",
            OperatingSystem::Rhel => "rhel",
            OperatingSystem::Debian => "debian",
            OperatingSystem::WindowsServer => "windows-server",
            OperatingSystem::AmazonLinux => "amazon-linux",
        }
    }
}

/// One entry of the server inventory. Any combination of attributes is legal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Descriptor<DeploymentPlatform>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub server_type: Option<Descriptor<ServerType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<Descriptor<RamSize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<Descriptor<StorageType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<Descriptor<OperatingSystem>>,
}

impl ServerSpec {
    /// Creates a server with only its type set
    pub fn of_type(server_type: ServerType) -> Self {
        Self {
            server_type: Some(Descriptor::Known(server_type)),
            ..Self::default()
        }
    }

    pub fn is_type(&self, server_type: ServerType) -> bool {
        self.server_type
            .as_ref()
            .is_some_and(|t| t.is(&server_type))
    }
}

/// Opaque reference to an uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl FileRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_type: None,
            size_bytes: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagramKind {
    Pdf,
    MermaidSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramSource {
    File(FileRef),
    Inline(String),
}

/// An architecture diagram, either uploaded or given as inline source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramRef {
    pub kind: DiagramKind,
    pub source: DiagramSource,
}

impl DiagramRef {
    pub fn pdf(file: FileRef) -> Self {
        Self {
            kind: DiagramKind::Pdf,
            source: DiagramSource::File(file),
        }
    }

    pub fn mermaid(source: impl Into<String>) -> Self {
        Self {
            kind: DiagramKind::MermaidSource,
            source: DiagramSource::Inline(source.into()),
        }
    }

    /// Inline diagram text, if the diagram was not uploaded as a file
    pub fn inline_text(&self) -> Option<&str> {
        match &self.source {
            DiagramSource::Inline(text) => Some(text),
            DiagramSource::File(_) => None,
        }
    }
}

/// The change being proposed: an uploaded document or free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChangeRequestRef {
    File { file: FileRef },
    Text { content: String },
}

impl ChangeRequestRef {
    pub fn text(content: impl Into<String>) -> Self {
        ChangeRequestRef::Text {
            content: content.into(),
        }
    }
}

/// Everything the caller knows about the system and the proposed change
///
/// Immutable once built; use [`AnalysisRequest::builder`] to construct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    architecture: ArchitectureType,
    #[serde(default)]
    servers: Vec<ServerSpec>,
    #[serde(default)]
    diagrams: Vec<DiagramRef>,
    change_request: ChangeRequestRef,
}

impl AnalysisRequest {
    pub fn builder(architecture: ArchitectureType) -> AnalysisRequestBuilder {
        AnalysisRequestBuilder {
            architecture,
            servers: Vec::new(),
            diagrams: Vec::new(),
            change_request: None,
        }
    }

    pub fn architecture(&self) -> ArchitectureType {
        self.architecture
    }

    pub fn servers(&self) -> &[ServerSpec] {
        &self.servers
    }

    pub fn diagrams(&self) -> &[DiagramRef] {
        &self.diagrams
    }

    pub fn change_request(&self) -> &ChangeRequestRef {
        &self.change_request
    }

    pub fn has_server_type(&self, server_type: ServerType) -> bool {
        self.servers.iter().any(|s| s.is_type(server_type))
    }
}

pub struct AnalysisRequestBuilder {
    architecture: ArchitectureType,
    servers: Vec<ServerSpec>,
    diagrams: Vec<DiagramRef>,
    change_request: Option<ChangeRequestRef>,
}

impl AnalysisRequestBuilder {
    pub fn server(mut self, server: ServerSpec) -> Self {
        self.servers.push(server);
        self
    }

    pub fn diagram(mut self, diagram: DiagramRef) -> Self {
        self.diagrams.push(diagram);
        self
    }

    pub fn change_request(mut self, change_request: ChangeRequestRef) -> Self {
        self.change_request = Some(change_request);
        self
    }

    /// # Errors
    /// Returns a validation error when no change request was supplied
    pub fn build(self) -> Result<AnalysisRequest> {
        let change_request = self.change_request.ok_or_else(|| AppError::Validation {
            message: "an analysis request needs a change request (file or text)".to_string(),
        })?;

        Ok(AnalysisRequest {
            architecture: self.architecture,
            servers: self.servers,
            diagrams: self.diagrams,
            change_request,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_change_request() {
        let result = AnalysisRequest::builder(ArchitectureType::Monolithic).build();
        let err = result.unwrap_err().to_string();
        assert!(err.contains("change request"));
    }

    #[test]
    fn test_builder_preserves_order() {
        let request = AnalysisRequest::builder(ArchitectureType::Microservices)
            .server(ServerSpec::of_type(ServerType::Container))
            .server(ServerSpec::of_type(ServerType::Serverless))
            .diagram(DiagramRef::pdf(FileRef::named("topology.pdf")))
            .diagram(DiagramRef::mermaid("graph TD; A-->B"))
            .change_request(ChangeRequestRef::text("Add caching layer"))
            .build()
            .unwrap();

        assert_eq!(request.architecture(), ArchitectureType::Microservices);
        assert!(request.servers()[0].is_type(ServerType::Container));
        assert!(request.servers()[1].is_type(ServerType::Serverless));
        assert_eq!(request.diagrams()[0].inline_text(), None);
        assert_eq!(request.diagrams()[1].inline_text(), Some("graph TD; A-->B"));
    }

    #[test]
    fn test_descriptor_known_and_custom() {
        let server: ServerSpec =
            serde_json::from_str(r#"{"type": "container", "ram": "16GB", "os": "Alpine 3.19"}"#)
                .unwrap();
        assert!(server.is_type(ServerType::Container));
        assert_eq!(server.ram, Some(Descriptor::Known(RamSize::Gb16)));
        assert_eq!(
            server.os,
            Some(Descriptor::Custom("Alpine 3.19".to_string()))
        );
        assert_eq!(server.os.as_ref().map(|os| os.as_str()), Some("Alpine 3.19"));
    }

    #[test]
    fn test_custom_server_type_never_matches() {
        let server: ServerSpec =
            serde_json::from_str(r#"{"type": "container-ish VM"}"#).unwrap();
        assert!(!server.is_type(ServerType::Container));
    }

    #[test]
    fn test_request_json_shape() {
        let json = r#"{
            "architecture": "client-server",
            "diagrams": [{"kind": "mermaid-source", "source": {"inline": "erDiagram database"}}],
            "change_request": {"type": "text", "content": "Add caching layer"}
        }"#;
        let request: AnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.architecture(), ArchitectureType::ClientServer);
        assert!(request.servers().is_empty());
        assert_eq!(request.diagrams()[0].inline_text(), Some("erDiagram database"));
        assert_eq!(
            request.change_request(),
            &ChangeRequestRef::text("Add caching layer")
        );
    }

    #[test]
    fn test_request_without_change_request_is_rejected() {
        let json = r#"{"architecture": "monolithic"}"#;
        assert!(serde_json::from_str::<AnalysisRequest>(json).is_err());
    }

    #[test]
    fn test_architecture_from_str() {
        assert_eq!(
            "Client-Server".parse::<ArchitectureType>().unwrap(),
            ArchitectureType::ClientServer
        );
        assert!("mesh".parse::<ArchitectureType>().is_err());
    }
}
