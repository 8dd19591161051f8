use std::path::Path;

use clap::Parser;
use docshard::{Config, Document, Section, segment};
use serde::Serialize;
use tracing::instrument;

use super::{run::print_sections, terminal::Colorize};

#[derive(Debug, Parser, Default)]
#[command(about = "List the sections that would be written, without writing anything")]
pub struct Command {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let document = Document::load(&config.source)?;
        let sections = segment(document.lines());

        match self.output {
            OutputFormat::Table => Self::output_table(config, &sections),
            OutputFormat::Json => Self::output_json(config, &sections)?,
        }

        Ok(())
    }

    fn output_table(config: &Config, sections: &[Section]) {
        print_sections(sections);

        if sections.is_empty() {
            return;
        }

        println!();
        println!("{}", "Line ranges:".info());
        for section in sections {
            // One-based and inclusive, as an editor would show them.
            println!(
                "  {:>5}-{:<5} {}",
                section.start_line() + 1,
                section.end_line(),
                config.output_dir.join(section.filename()).display()
            );
        }
    }

    fn output_json(config: &Config, sections: &[Section]) -> anyhow::Result<()> {
        let plan = Plan::new(config, sections);
        println!("{}", serde_json::to_string_pretty(&plan)?);
        Ok(())
    }
}

/// The JSON form of a plan.
#[derive(Debug, Serialize)]
struct Plan<'a> {
    source: &'a Path,
    output_dir: &'a Path,
    sections: &'a [Section],
}

impl<'a> Plan<'a> {
    fn new(config: &'a Config, sections: &'a [Section]) -> Self {
        Self {
            source: &config.source,
            output_dir: &config.output_dir,
            sections,
        }
    }
}
