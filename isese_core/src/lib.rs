#![forbid(unsafe_code)]

//! Core domain model and calendar engine for Ìṣẹ̀ṣẹ.
//!
//! This crate provides:
//! - Domain types (patrons, moon phases, days, months, calendar)
//! - Authored pattern tables
//! - The calendar builder and shared one-time instance
//! - Gregorian date resolution onto the 364-day cycle
//! - Read-only queries, export, configuration and logging

pub mod types;
pub mod error;
pub mod tables;
pub mod moon;
pub mod builder;
pub mod resolver;
pub mod query;
pub mod export;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, ErrorClass, Result};
pub use types::*;
pub use builder::{build, calendar};
pub use config::{Config, OutputFormat};
pub use export::{export_to, ExportFormat};
pub use moon::resolve_phase;
pub use resolver::{resolve, upcoming};
