/// Result alias used at the application edges, where errors are reported
/// to the user rather than matched on.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
