//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for external data sources, such as the bundled dataset files.

pub mod dataset;
