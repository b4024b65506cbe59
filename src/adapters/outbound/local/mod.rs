/// In-process analysis backends
mod heuristic_provider;

pub use heuristic_provider::LocalHeuristicProvider;
