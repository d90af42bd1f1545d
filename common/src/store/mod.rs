//! The schema store: single source of truth for the form being built.
//!
//! Submodules
//! - `state`: the [`FormStore`] struct and its operations.
//! - `commands`: the [`Command`] values the UI dispatches and the [`Outcome`]
//!   they produce.
//! - `update`: the reducer applying a [`Command`] to a [`FormStore`].
//! - `seed`: the example fields a new session starts with.

mod commands;
mod seed;
mod state;
mod update;

pub use commands::{Command, ImportSummary, Outcome};
pub use seed::seeded_fields;
pub use state::FormStore;
