//! Driving adapters for the catalog services.

pub mod mcp;
