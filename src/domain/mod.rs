//! Shared data model layer (structs/constants/errors only).
//!
//! ## Files
//! - `models.rs` — header/footer spec, tag context, file state and report structs.
//! - `constants.rs` — spec file markers, tag tokens and user-facing messages.
//! - `errors.rs` — typed spec and per-file errors.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Report structs are serialized for `--json` output. Keep field changes explicit.

pub mod constants;
pub mod errors;
pub mod models;
