//! Platform-independent core of the form builder.
//!
//! Everything the browser application renders is derived from a single
//! [`store::FormStore`]. The store is mutated only through [`store::Command`]
//! values, validated with [`validation::validate`] while previewing, and
//! converted to and from the JSON schema format by [`serializer`].

pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod naming;
pub mod preview;
pub mod schema;
pub mod serializer;
pub mod store;
pub mod validation;
