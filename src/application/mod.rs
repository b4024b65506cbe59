/// Application layer - the analysis use case and the pieces that wire it up
///
/// Owns the orchestrator (model resolution, cache, retry), the provider
/// registry and the factories that map CLI choices onto adapters.
pub mod dto;
pub mod factories;
pub mod use_cases;
