//! CLI for the urlkit URL helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{self, UrlkitConfig};
use crate::logging;

use commands::{run_append, run_host, run_join, run_merge, run_parse, run_uri};

/// Top-level CLI for urlkit.
#[derive(Debug, Parser)]
#[command(name = "urlkit")]
#[command(about = "urlkit: merge, split and extend URLs for HTTP test clients", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/urlkit/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Merge a (possibly relative) URI onto a base URL.
    Merge {
        /// Reference to merge, e.g. "users?page=2".
        uri: String,
        /// Base URL (default: base_url from config).
        #[arg(long, value_name = "URL")]
        base: Option<String>,
    },

    /// Print the path?query#fragment part of a URL.
    Uri {
        url: String,
    },

    /// Print scheme://host[:port] of a URL.
    Host {
        url: String,
    },

    /// Append a path (or #fragment) to a URL, dropping its query and fragment.
    Append {
        url: String,
        path: String,
    },

    /// Append several path segments in order to the base URL.
    Join {
        /// Segments to append.
        #[arg(required = true)]
        segments: Vec<String>,
        /// Base URL (default: base_url from config).
        #[arg(long, value_name = "URL")]
        base: Option<String>,
    },

    /// Show the parsed components of a URL.
    Parse {
        url: String,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        logging::init_logging()?;
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_default()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let output = cli.command.run(&cfg)?;
        println!("{output}");
        Ok(())
    }
}

impl CliCommand {
    /// Run the command and return what should be printed.
    pub fn run(&self, cfg: &UrlkitConfig) -> Result<String> {
        match self {
            CliCommand::Merge { uri, base } => run_merge(cfg, base.as_deref(), uri),
            CliCommand::Uri { url } => run_uri(url),
            CliCommand::Host { url } => run_host(url),
            CliCommand::Append { url, path } => run_append(url, path),
            CliCommand::Join { segments, base } => run_join(cfg, base.as_deref(), segments),
            CliCommand::Parse { url } => run_parse(url),
        }
    }
}

#[cfg(test)]
mod tests;
