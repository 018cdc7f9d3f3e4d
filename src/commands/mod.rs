//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `headers.rs` — `apply` and `header-file-help`.
//! - `fixtures.rs` — `bits`.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod fixtures;
pub mod headers;

pub use fixtures::handle_fixture_commands;
pub use headers::handle_header_commands;
