//! Domain models for document sharding.
//!
//! This module contains the pure, filesystem-agnostic parts of the pipeline:
//! heading classification, slug derivation, section detection and index
//! rendering, plus the configuration type.

pub mod heading;

/// Index document entries and rendering.
pub mod index;
pub use index::IndexEntry;

/// Section records and the segmenter.
pub mod section;
pub use section::{Section, segment};

pub mod slug;
pub use slug::{filename, slug};

mod config;
pub use config::{Config, Error as ConfigError};
