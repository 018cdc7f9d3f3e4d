//! Service layer containing the header/footer logic and side-effect helpers.
//!
//! ## Service map
//! - `resolver.rs` — pure spec parsing, tag substitution, detection and content assembly.
//! - `apply.rs` — per-file read/resolve/write loop producing reports.
//! - `scan.rs` — target discovery (walk, suffix filter, exclusions).
//! - `bits.rs` — random bit-pattern fixtures.
//! - `prompt.rs` — `[Y/n]` confirmation gates.
//! - `storage.rs` — config file loading, option resolution, audit log.
//! - `logging.rs` — tracing subscriber setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod apply;
pub mod bits;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod resolver;
pub mod scan;
pub mod storage;
