//! `embedcheck check` – classify URLs and print one verdict per URL.

use anyhow::{bail, Context, Result};
use embedcheck_core::config::{EmbedCheckConfig, InvalidInputPolicy, OutputFormat};
use embedcheck_core::{Classification, EmbedUrlProcessor};
use serde::Serialize;
use std::io::{self, Write};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    pub format: OutputFormat,
    pub invalid_input: InvalidInputPolicy,
}

impl CheckOptions {
    /// Config values, with `--json` and `--strict` taking precedence when set.
    pub fn from_flags(cfg: &EmbedCheckConfig, json: bool, strict: bool) -> Self {
        Self {
            format: if json { OutputFormat::Json } else { cfg.output },
            invalid_input: if strict {
                InvalidInputPolicy::Error
            } else {
                cfg.invalid_input
            },
        }
    }
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub checked: usize,
    pub embeddable: usize,
    pub skipped: usize,
}

#[derive(Serialize)]
struct CheckRecord<'a> {
    url: &'a str,
    #[serde(flatten)]
    classification: Classification,
}

/// Classifies each input line and writes the verdicts to `out`.
///
/// Lines are trimmed; blank lines and `#` comments are ignored. Inputs that do
/// not parse as absolute URLs, and lines that are not valid UTF-8, are skipped
/// or rejected per `opts.invalid_input`. Other read errors abort the run.
/// The classifier always sees the trimmed input, not the parsed URL's
/// normalized form.
pub fn run_check<I, W>(inputs: I, opts: &CheckOptions, out: &mut W) -> Result<CheckSummary>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut summary = CheckSummary::default();
    if opts.format == OutputFormat::Text {
        writeln!(out, "{:<9} {:<20} {}", "EMBED", "PROVIDERS", "URL")?;
    }

    for line in inputs {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => match opts.invalid_input {
                InvalidInputPolicy::Skip => {
                    tracing::warn!("skipping unreadable input line: {}", e);
                    eprintln!("skipping unreadable input line: {}", e);
                    summary.skipped += 1;
                    continue;
                }
                InvalidInputPolicy::Error => bail!("unreadable input line: {}", e),
            },
            Err(e) => return Err(e).context("read input"),
        };
        let input = line.trim();
        if input.is_empty() || input.starts_with('#') {
            continue;
        }

        if let Err(e) = Url::parse(input) {
            match opts.invalid_input {
                InvalidInputPolicy::Skip => {
                    tracing::warn!("skipping {:?}: {}", input, e);
                    eprintln!("skipping {:?}: {}", input, e);
                    summary.skipped += 1;
                    continue;
                }
                InvalidInputPolicy::Error => bail!("invalid URL {:?}: {}", input, e),
            }
        }

        let classification = EmbedUrlProcessor::new(input).classify();
        summary.checked += 1;
        if classification.is_valid_embed {
            summary.embeddable += 1;
        }

        match opts.format {
            OutputFormat::Text => writeln!(out, "{}", render_text(input, &classification))?,
            OutputFormat::Json => {
                let record = CheckRecord {
                    url: input,
                    classification,
                };
                writeln!(out, "{}", serde_json::to_string(&record)?)?;
            }
        }
    }

    tracing::info!(
        "checked {} url(s): {} embeddable, {} skipped",
        summary.checked,
        summary.embeddable,
        summary.skipped
    );
    Ok(summary)
}

fn render_text(url: &str, c: &Classification) -> String {
    let verdict = if c.is_valid_embed { "yes" } else { "no" };
    let providers = c.providers().map(|p| p.slug()).collect::<Vec<_>>().join(",");
    let providers = if providers.is_empty() { "-".to_string() } else { providers };
    format!("{:<9} {:<20} {}", verdict, providers, url)
}
