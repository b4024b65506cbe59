//! Impact analysis domain: request/report value objects, heuristic rules
//! and report synthesis. No I/O lives here.
pub mod domain;
pub mod policies;
pub mod services;
