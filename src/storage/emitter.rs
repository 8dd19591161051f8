//! Writing section documents and the index.
//!
//! Files are written one at a time, sections first and the index last. There
//! is no rollback: if a write fails, files written before it stay in place.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::{
    domain::{
        Config, IndexEntry, Section, heading,
        index::{FILENAME as INDEX_FILENAME, Index},
    },
    storage::Document,
};

/// Writes sections of a document into an output directory.
#[derive(Debug, Clone)]
pub struct Emitter<'a> {
    output_dir: &'a Path,
    index_title: &'a str,
    index_description: &'a str,
}

/// A file written by [`Emitter::emit_with`].
#[derive(Debug, Clone, Copy)]
pub enum Created<'a> {
    /// A section document.
    Section {
        /// The section that was written.
        section: &'a Section,
        /// Where it was written.
        path: &'a Path,
    },
    /// The index document.
    Index(&'a Path),
}

impl Created<'_> {
    /// The path of the written file.
    #[must_use]
    pub const fn path(&self) -> &Path {
        match self {
            Self::Section { path, .. } | Self::Index(path) => *path,
        }
    }
}

/// The outcome of a successful [`Emitter::emit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardReport {
    /// The section files written, in section order.
    pub files: Vec<PathBuf>,
    /// The entries listed in the index.
    pub entries: Vec<IndexEntry>,
    /// The index file.
    pub index: PathBuf,
}

impl<'a> Emitter<'a> {
    /// Creates an emitter writing into `output_dir`.
    #[must_use]
    pub const fn new(output_dir: &'a Path, index_title: &'a str, index_description: &'a str) -> Self {
        Self {
            output_dir,
            index_title,
            index_description,
        }
    }

    /// Creates an emitter using the index text from `config`.
    ///
    /// `output_dir` is taken separately so the caller can resolve the
    /// configured directory against a root first.
    #[must_use]
    pub fn from_config(output_dir: &'a Path, config: &'a Config) -> Self {
        Self::new(output_dir, &config.index_title, &config.index_description)
    }

    /// Writes every section, then the index.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created or any file
    /// cannot be written. Files written before the failure are left in place.
    ///
    /// # Panics
    ///
    /// Panics if `sections` were not found in `document`, and one of them
    /// extends past its last line.
    pub fn emit(&self, document: &Document, sections: &[Section]) -> Result<ShardReport, EmitError> {
        self.emit_with(document, sections, |_| {})
    }

    /// Like [`emit`](Self::emit), calling `on_created` for each file as soon
    /// as it has been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created or any file
    /// cannot be written. Files written before the failure are left in place.
    ///
    /// # Panics
    ///
    /// Panics if `sections` were not found in `document`, and one of them
    /// extends past its last line.
    #[instrument(level = "debug", skip_all, fields(output_dir = %self.output_dir.display(), sections = sections.len()))]
    pub fn emit_with(
        &self,
        document: &Document,
        sections: &[Section],
        mut on_created: impl FnMut(Created<'_>),
    ) -> Result<ShardReport, EmitError> {
        std::fs::create_dir_all(self.output_dir).map_err(|source| EmitError::CreateDir {
            path: self.output_dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::with_capacity(sections.len());
        let mut entries = Vec::with_capacity(sections.len());

        for section in sections {
            let path = self.write_section(document, section)?;
            on_created(Created::Section {
                section,
                path: &path,
            });
            files.push(path);
            entries.push(IndexEntry::from(section));
        }

        let index = Index::new(self.index_title, self.index_description, entries);
        let index_path = self.write_index(&index)?;
        on_created(Created::Index(&index_path));

        Ok(ShardReport {
            files,
            entries: index.entries().to_vec(),
            index: index_path,
        })
    }

    /// Writes one section, with its headings shifted up a level.
    fn write_section(&self, document: &Document, section: &Section) -> Result<PathBuf, EmitError> {
        let path = self.output_dir.join(section.filename());
        let lines = section.slice(document.lines());

        write_file(&path, |writer| {
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    writer.write_all(b"\n")?;
                }
                writer.write_all(heading::shift(line).as_bytes())?;
            }
            Ok(())
        })?;

        tracing::debug!(
            "wrote {} lines of '{}' to {}",
            lines.len(),
            section.heading(),
            path.display()
        );
        Ok(path)
    }

    fn write_index(&self, index: &Index<'_>) -> Result<PathBuf, EmitError> {
        let path = self.output_dir.join(INDEX_FILENAME);
        write_file(&path, |writer| write!(writer, "{index}"))?;
        tracing::debug!("wrote index of {} entries to {}", index.entries().len(), path.display());
        Ok(path)
    }
}

/// Creates or truncates `path` and fills it using `contents`.
fn write_file(
    path: &Path,
    contents: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<(), EmitError> {
    let write = || {
        let mut writer = BufWriter::new(File::create(path)?);
        contents(&mut writer)?;
        writer.flush()
    };
    write().map_err(|source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Errors that can occur when writing the output documents.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// The output directory.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The file being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}
