use std::path::PathBuf;

mod plan;
mod run;
mod terminal;

use clap::ArgAction;
use docshard::Config;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The directory relative paths are resolved against, and where
    /// `shard.toml` is looked for
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    /// The document to split [default: docs/architecture.md]
    #[arg(short, long, global = true)]
    source: Option<PathBuf>,

    /// The directory to write sections and the index to [default:
    /// docs/architecture]
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// The title of the index document
    #[arg(long, global = true)]
    title: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self.config();
        self.command.unwrap_or_default().run(&config)
    }

    /// Loads `shard.toml`, applies command line overrides and resolves paths
    /// against the root.
    fn config(&self) -> Config {
        let mut config = Config::load_or_default(&self.root);

        if let Some(source) = &self.source {
            config.source.clone_from(source);
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir.clone_from(output_dir);
        }
        if let Some(title) = &self.title {
            config.index_title.clone_from(title);
        }

        config.source = self.root.join(&config.source);
        config.output_dir = self.root.join(&config.output_dir);
        tracing::debug!(?config, "resolved configuration");
        config
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Split the source document and write the index (default)
    Run(run::Command),

    /// Show the sections that would be written, without writing anything
    Plan(plan::Command),
}

impl Default for Command {
    fn default() -> Self {
        Self::Run(run::Command::default())
    }
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Run(command) => command.run(config)?,
            Self::Plan(command) => command.run(config)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_run() {
        let cli = Cli::try_parse_from(["shard"]).unwrap();
        assert!(matches!(cli.command.unwrap_or_default(), Command::Run(_)));
    }

    #[test]
    fn paths_resolve_against_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["shard", "--root", root]).unwrap();

        let config = cli.config();

        assert_eq!(config.source, tmp.path().join("docs/architecture.md"));
        assert_eq!(config.output_dir, tmp.path().join("docs/architecture"));
    }

    #[test]
    fn flags_override_config_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("shard.toml"),
            "_version = \"1\"\nsource = \"from-file.md\"\nindex_title = \"From File\"\n",
        )
        .unwrap();
        let root = tmp.path().to_str().unwrap();

        let config = Cli::try_parse_from(["shard", "-r", root, "--title", "From Flag"])
            .unwrap()
            .config();

        assert_eq!(config.source, tmp.path().join("from-file.md"));
        assert_eq!(config.index_title, "From Flag");

        let config = Cli::try_parse_from(["shard", "-r", root, "plan", "-s", "other.md"])
            .unwrap()
            .config();

        assert_eq!(config.source, tmp.path().join("other.md"));
        assert_eq!(config.index_title, "From File");
    }

    #[test]
    fn short_flags_match_long_flags() {
        let short = Cli::try_parse_from(["shard", "-r", "a", "-s", "b.md", "-o", "c"]).unwrap();
        let long = Cli::try_parse_from([
            "shard",
            "--root",
            "a",
            "--source",
            "b.md",
            "--output-dir",
            "c",
        ])
        .unwrap();

        assert_eq!(short.root, long.root);
        assert_eq!(short.source, long.source);
        assert_eq!(short.output_dir, long.output_dir);
    }
}
