//! `embedcheck providers` – list providers and their accepted URL shapes.

use anyhow::Result;
use embedcheck_core::patterns;
use embedcheck_core::Provider;
use std::io::Write;

pub fn run_providers<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{:<10} {:<20} {}", "PROVIDER", "RULE", "PATTERN")?;
    for provider in Provider::ALL {
        for rule in patterns::rules_for(provider) {
            writeln!(out, "{:<10} {:<20} {}", provider.slug(), rule.label, rule.pattern)?;
        }
    }
    Ok(())
}
