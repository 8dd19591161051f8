use clap::Parser;
use docshard::{Config, Created, Document, Emitter, Section, segment};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser, Default)]
#[command(about = "Split the source document into one file per section")]
pub struct Command {}

impl Command {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let document = Document::load(&config.source)?;
        let sections = segment(document.lines());

        print_sections(&sections);

        let emitter = Emitter::from_config(&config.output_dir, config);
        let report = emitter.emit_with(&document, &sections, |file| match file {
            Created::Section { path, .. } => {
                println!("{} {}", "Created:".info(), path.display());
            }
            Created::Index(path) => {
                println!("{} {}", "Created index:".info(), path.display());
            }
        })?;

        tracing::info!(
            "wrote {} sections and {}",
            report.files.len(),
            report.index.display()
        );

        println!();
        println!(
            "{}",
            format!(
                "Successfully sharded {} into {} files",
                config.source.display(),
                report.files.len()
            )
            .success()
        );

        Ok(())
    }
}

pub fn print_sections(sections: &[Section]) {
    println!("Found {} level 2 sections:", sections.len());
    for section in sections {
        println!(
            "  - {} {} {}",
            section.heading(),
            "->".dim(),
            section.filename()
        );
    }
}
