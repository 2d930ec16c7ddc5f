//! Version discovery layer
//!
//! This module provides the core functionality for fetching versions from
//! remote sources and reducing them to a single "latest" version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registries │────▶│  Resolver   │────▶│   Semver    │
//! │(GitHub,PyPI)│     │  (latest)   │     │(clean, max) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Traits for fetching tags and package versions
//! - [`registries`]: Concrete implementations (GitHub tags, PyPI)
//! - [`resolver`]: Latest tag and latest package version entry points
//! - [`semver`]: Tag cleaning and semantic version reduction
//! - [`error`]: Error types for registry operations

pub mod error;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod semver;
