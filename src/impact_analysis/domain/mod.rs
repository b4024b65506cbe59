pub mod report;
pub mod request;
pub mod severity;

pub use report::{
    AnalysisResult, ComponentCategory, ImpactedComponent, Recommendation, RecommendationCategory,
};
pub use request::{
    AnalysisRequest, AnalysisRequestBuilder, ArchitectureType, ChangeRequestRef, DeploymentPlatform,
    Descriptor, DescriptorValue, DiagramKind, DiagramRef, DiagramSource, FileRef, OperatingSystem,
    RamSize, ServerSpec, ServerType, StorageType,
};
pub use severity::Severity;
