//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Console output on stderr (stdout carries the MCP protocol)
//! - Optional JSON log files with rotation

pub mod logger;

pub use logger::LoggerImpl;
