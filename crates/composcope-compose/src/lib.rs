//! # composcope-compose
//!
//! Parser and service model for compose documents.
//!
//! Handles:
//! - **Parser**: YAML decoding and conversion of raw service mappings into
//!   typed [`model::Service`] records.
//! - **Model**: the `Service`, `Port`, `Volume`, and `Extends` value types
//!   consumed by the graph renderer.
//! - **Compose**: the ordered service collection and its network
//!   extraction query.

pub mod compose;
pub mod model;
pub mod parser;
