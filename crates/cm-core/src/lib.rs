//! Core types, errors, and configuration for the converge-migrate tool.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Error types for configuration loading
//! - [`MigrationConfig`], the workspace conventions the generator applies
//! - Domain types (`ProjectConfiguration`, `PackageManifest`, `TsConfig`,
//!   `MigrationSchema`, `UserLog`, `MigrationStatus`)
//! - Type aliases for `FxHashSet` (faster than std)

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod types;

pub use config::MigrationConfig;
pub use error::ConfigError;
pub use hash::{FxHashSet, fx_hash_set_with_capacity};
pub use types::{
    ApiExtractorConfig, CompilerOptions, LogEntry, MigrationMode, MigrationSchema,
    MigrationStatus, PackageManifest, ProjectConfiguration, ProjectEntry, Severity, TagSet,
    TsConfig, UserLog, WorkspaceFile, normalize_package_name,
};
