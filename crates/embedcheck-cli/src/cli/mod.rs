//! CLI for the embedcheck URL classifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use embedcheck_core::config;
use embedcheck_core::Provider;
use std::io;
use std::process::ExitCode;

use commands::{run_check, run_matches, run_providers, CheckOptions};

/// Top-level CLI for embedcheck.
#[derive(Debug, Parser)]
#[command(name = "embedcheck")]
#[command(about = "Classify URLs against known embeddable media providers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify URLs given as arguments, or one per line on stdin.
    Check {
        /// Absolute URLs to classify. Reads stdin when omitted.
        urls: Vec<String>,

        /// Print one JSON object per URL instead of a table.
        #[arg(long)]
        json: bool,

        /// Fail on the first input that is not an absolute URL.
        #[arg(long)]
        strict: bool,
    },

    /// Exit 0 if the URL is embeddable (optionally by one provider), 1 otherwise.
    Matches {
        /// Absolute URL to test.
        url: String,

        /// Only accept this provider (youtube, vimeo, twitter, flickr, issuu, instagram).
        #[arg(long, short)]
        provider: Option<Provider>,
    },

    /// List providers and the URL patterns each accepts.
    Providers,
}

impl CliCommand {
    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { urls, json, strict } => {
                let opts = CheckOptions::from_flags(&cfg, json, strict);
                let mut stdout = io::stdout().lock();
                if urls.is_empty() {
                    run_check(io::stdin().lines(), &opts, &mut stdout)?;
                } else {
                    run_check(urls.into_iter().map(Ok), &opts, &mut stdout)?;
                }
            }
            CliCommand::Matches { url, provider } => {
                if !run_matches(&url, provider) {
                    return Ok(ExitCode::FAILURE);
                }
            }
            CliCommand::Providers => run_providers(&mut io::stdout().lock())?,
        }

        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests;
