//! arch-impact - change impact analysis for system architectures
//!
//! Given a description of a system (architecture style, server inventory,
//! diagrams) and a proposed change, produces a structured impact report:
//! impacted components with severities, an overall risk level, prioritized
//! recommendations, an effort estimate, a timeline and infrastructure
//! dependencies.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`impact_analysis`): Request/report models, the risk
//!   heuristics and the compiled-in policy tables
//! - **Application Layer** (`application`): The analysis orchestrator,
//!   provider registry and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Analysis backends, file system, console
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use arch_impact::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let request = AnalysisRequest::builder(ArchitectureType::Microservices)
//!     .server(ServerSpec::of_type(ServerType::Container))
//!     .change_request(ChangeRequestRef::text("Add a caching layer"))
//!     .build()?;
//!
//! let orchestrator = AnalysisOrchestrator::new(
//!     AppConfig::default(),
//!     ProviderRegistry::with_defaults()?,
//!     SystemClock,
//!     StderrProgressReporter::new(),
//! );
//!
//! let result = orchestrator.analyze(&request).await?;
//! println!("{}", MarkdownFormatter::new().format(&result)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod impact_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::local::LocalHeuristicProvider;
    pub use crate::adapters::outbound::network::{GeminiProvider, OpenAiProvider};
    pub use crate::adapters::outbound::system::SystemClock;
    pub use crate::application::dto::{OutputFormat, RiskGate};
    pub use crate::application::factories::ProviderRegistry;
    pub use crate::application::use_cases::AnalysisOrchestrator;
    pub use crate::config::{AnalysisSettings, AppConfig, ModelConfig, ProviderKind};
    pub use crate::impact_analysis::domain::{
        AnalysisRequest, AnalysisResult, ArchitectureType, ChangeRequestRef, DiagramRef, FileRef,
        ImpactedComponent, Recommendation, ServerSpec, ServerType, Severity,
    };
    pub use crate::impact_analysis::services::{ReportSynthesizer, RiskHeuristicEngine};
    pub use crate::ports::outbound::{
        AnalysisProvider, Clock, OutputPresenter, ProgressReporter, ReportFormatter,
        RequestReader,
    };
    pub use crate::shared::error::AnalysisError;
    pub use crate::shared::Result;
}
