//! Domain types for the converge-migrate tool.
//!
//! # Module Organization
//!
//! - [`project`] - Project configurations and tag sets
//! - [`workspace`] - The on-disk workspace registry file
//! - [`manifest`] - Package manifests (`package.json`)
//! - [`tsconfig`] - TypeScript and api-extractor config records
//! - [`schema`] - The migration request and its resolved mode
//! - [`log`] - The user-facing log accumulated during a run
//! - [`status`] - Per-project migration status
//!
//! All public types are re-exported at this module level and at the crate
//! root:
//!
//! ```
//! use cm_core::{MigrationSchema, ProjectConfiguration, UserLog};
//! ```

pub mod log;
pub mod manifest;
pub mod project;
pub mod schema;
pub mod status;
pub mod tsconfig;
pub mod workspace;

pub use log::{LogEntry, Severity, UserLog};
pub use manifest::PackageManifest;
pub use project::{ProjectConfiguration, TagSet, normalize_package_name};
pub use schema::{MigrationMode, MigrationSchema};
pub use status::MigrationStatus;
pub use tsconfig::{ApiExtractorConfig, CompilerOptions, TsConfig};
pub use workspace::{ProjectEntry, WorkspaceFile};
