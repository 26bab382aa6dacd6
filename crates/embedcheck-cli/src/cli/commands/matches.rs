//! `embedcheck matches` – exit status says whether a URL is embeddable.

use embedcheck_core::{EmbedUrlProcessor, Provider};

/// True when `url` is embeddable, or embeddable by `provider` when one is given.
pub fn run_matches(url: &str, provider: Option<Provider>) -> bool {
    let processor = EmbedUrlProcessor::new(url);
    let hit = match provider {
        Some(p) => processor.is_embed_for(p).then_some(p),
        None => processor.provider(),
    };
    match hit {
        Some(p) => {
            tracing::debug!(
                "{} matches {} ({})",
                url,
                p,
                processor.matched_rule(p).unwrap_or("?")
            );
            true
        }
        None => {
            tracing::debug!("{} matches no embed provider", url);
            false
        }
    }
}
