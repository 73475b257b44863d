//! Version registry layer
//!
//! This module discovers the Minecraft versions the mod supports and resolves
//! per-version dependency metadata from `<version>.properties` files.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│  Registry   │────▶│  Renderers  │
//! │ (directory) │     │ (list/info) │     │ (fragments) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │  Ordering   │
//!                     │ (dotted cmp)│
//!                     └─────────────┘
//! ```
//!
//! Nothing is cached: every registry call re-reads the source, so edits to the
//! properties directory are visible on the next call.
//!
//! # Modules
//!
//! - [`source`]: Source trait and the directory-backed implementation
//! - [`registry`]: Listing, lookup, latest and support checks
//! - [`ordering`]: Dotted numeric version ordering
//! - [`error`]: Error types for source access

pub mod error;
pub mod ordering;
pub mod registry;
pub mod source;

pub use registry::VersionRegistry;
pub use source::{DirectorySource, VersionSource};
