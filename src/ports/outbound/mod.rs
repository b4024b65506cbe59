/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (analysis backends, file system, console, clock).
pub mod analysis_provider;
pub mod clock;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod request_reader;

pub use analysis_provider::AnalysisProvider;
pub use clock::Clock;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use request_reader::RequestReader;
