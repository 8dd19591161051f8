//! Markdown document sharding
//!
//! Splits one long markdown document into a document per `## ` section, with
//! headings shifted up one level, and writes an index linking them in order.
//!
//! The pipeline runs in three stages:
//!
//! 1. [`Document::load`] reads the source into lines.
//! 2. [`segment`] finds the section boundaries, skipping fenced blocks.
//! 3. [`Emitter::emit`] writes each section and then the index.

pub mod domain;
pub use domain::{Config, ConfigError, IndexEntry, Section, segment};

/// Filesystem input and output.
pub mod storage;
pub use storage::{Created, Document, EmitError, Emitter, LoadError, ShardReport};
