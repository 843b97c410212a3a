//! Project tree and workspace registry access for converge-migrate.
//!
//! # Overview
//!
//! - [`Tree`]: the abstract file store every migration step reads and writes
//! - [`MemoryTree`]: in-memory tree for tests and embedding
//! - [`FsTree`]: disk-backed tree that stages changes until committed
//! - [`ProjectRegistry`]: project lookups joined with `package.json` data
//! - [`MigrationStats`]: coverage counters for the stats report
//!
//! # Architecture
//!
//! ```text
//! ProjectRegistry ──reads/writes──> dyn Tree
//!                                     │
//!                     ┌───────────────┴───────────────┐
//!                 MemoryTree                        FsTree
//!                 (BTreeMap)              (disk + staged changes,
//!                                          ignore::WalkBuilder)
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod error;
mod fs;
mod memory;
mod registry;
mod stats;
mod tree;

pub use error::{RegistryError, TreeError};
pub use fs::{ChangeKind, FileChange, FsTree};
pub use memory::MemoryTree;
pub use registry::ProjectRegistry;
pub use stats::MigrationStats;
pub use tree::{Tree, TreeExt};
