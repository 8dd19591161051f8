/// Loading the source document.
pub mod document;
pub mod emitter;

pub use document::{Document, LoadError};
pub use emitter::{Created, EmitError, Emitter, ShardReport};
