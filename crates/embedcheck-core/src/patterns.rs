//! Static table of accepted URL shapes per provider.
//!
//! Every pattern is matched case-insensitively against the full URL string.
//! A provider matches when any one of its rules occurs in the URL. All rules
//! anchor at both ends except the Twitter ones, which have no leading `^` and
//! therefore accept an arbitrary prefix.

use crate::provider::Provider;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// One accepted URL shape for a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    pub provider: Provider,
    /// Short tag naming the shape, e.g. "short link".
    pub label: &'static str,
    pub pattern: &'static str,
}

const fn rule(provider: Provider, label: &'static str, pattern: &'static str) -> PatternRule {
    PatternRule {
        provider,
        label,
        pattern,
    }
}

/// Rules grouped by provider, in `Provider::ALL` order.
pub static RULES: &[PatternRule] = &[
    rule(
        Provider::YouTube,
        "watch/embed",
        r"^https?://(www.|m.)?youtube.com/(watch\?v=|embed/)[A-Za-z0-9_-]+$",
    ),
    rule(
        Provider::YouTube,
        "short link",
        r"^https?://youtu.be/[A-Za-z0-9_-]+$",
    ),
    rule(
        Provider::YouTube,
        "playlist",
        r"^https?://((m|www)\.)?youtube\.com/playlist[\S]+$",
    ),
    rule(Provider::Vimeo, "video", r"^https?://vimeo.com/[0-9]+$"),
    rule(
        Provider::Vimeo,
        "channel video",
        r"^https?://vimeo.com/channels/[A-Za-z0-9]+/[0-9]+$",
    ),
    rule(
        Provider::Vimeo,
        "player embed",
        r"^https://player.vimeo.com/video/[0-9]+$",
    ),
    rule(
        Provider::Twitter,
        "status",
        r"https?://(www\.)?twitter\.com/\w{1,15}/status(es)?/[\S]+$",
    ),
    rule(
        Provider::Twitter,
        "profile",
        r"https?://(www\.)?twitter\.com/\w{1,15}$",
    ),
    rule(
        Provider::Twitter,
        "likes",
        r"https?://(www\.)?twitter\.com/\w{1,15}/likes$",
    ),
    rule(
        Provider::Twitter,
        "list",
        r"https?://(www\.)?twitter\.com/\w{1,15}/lists/[\S]+$",
    ),
    rule(
        Provider::Twitter,
        "moment",
        r"https?://(www\.)?twitter\.com/i/moments/[\S]+$",
    ),
    rule(
        Provider::Flickr,
        "photo/gallery/short",
        r"^https?://(www.)?(flickr.com|flic\.kr)/(photos|p|s)/[\S]+$",
    ),
    rule(
        Provider::Issuu,
        "doc page",
        r"^https?://(www\.)?issuu\.com/.+/docs/[\S]+$",
    ),
    rule(
        Provider::Instagram,
        "post",
        r"^https?://(www\.)?instagr(\.am|am\.com)/p/[\S]+$",
    ),
];

struct CompiledRule {
    rule: &'static PatternRule,
    regex: Regex,
}

static COMPILED: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|rule| CompiledRule {
            rule,
            regex: RegexBuilder::new(rule.pattern)
                .case_insensitive(true)
                .build()
                .unwrap_or_else(|e| {
                    panic!("invalid {} pattern {:?}: {e}", rule.provider, rule.label)
                }),
        })
        .collect()
});

/// Rules for one provider, in table order.
pub fn rules_for(provider: Provider) -> impl Iterator<Item = &'static PatternRule> {
    RULES.iter().filter(move |r| r.provider == provider)
}

/// First rule of `provider` whose pattern occurs in `url`.
pub fn matching_rule(provider: Provider, url: &str) -> Option<&'static PatternRule> {
    let hit = COMPILED
        .iter()
        .filter(|c| c.rule.provider == provider)
        .find(|c| c.regex.is_match(url))
        .map(|c| c.rule);
    if let Some(rule) = hit {
        tracing::trace!(provider = %provider, rule = rule.label, url, "embed rule matched");
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_compile() {
        assert_eq!(COMPILED.len(), RULES.len());
    }

    #[test]
    fn every_provider_has_rules() {
        for p in Provider::ALL {
            assert!(rules_for(p).next().is_some(), "{p} has no rules");
        }
        assert_eq!(rules_for(Provider::YouTube).count(), 3);
        assert_eq!(rules_for(Provider::Vimeo).count(), 3);
        assert_eq!(rules_for(Provider::Twitter).count(), 5);
        assert_eq!(rules_for(Provider::Flickr).count(), 1);
        assert_eq!(rules_for(Provider::Issuu).count(), 1);
        assert_eq!(rules_for(Provider::Instagram).count(), 1);
    }

    #[test]
    fn only_twitter_rules_lack_start_anchor() {
        for r in RULES {
            assert_eq!(
                r.pattern.starts_with('^'),
                r.provider != Provider::Twitter,
                "{} {}",
                r.provider,
                r.label
            );
        }
    }

    #[test]
    fn matching_rule_reports_label() {
        let rule = matching_rule(Provider::YouTube, "https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(rule.label, "short link");
        let rule = matching_rule(Provider::Twitter, "https://twitter.com/i/moments/1234").unwrap();
        assert_eq!(rule.label, "moment");
        assert!(matching_rule(Provider::Vimeo, "https://youtu.be/dQw4w9WgXcQ").is_none());
    }

    #[test]
    fn table_grouped_in_provider_order() {
        let order: Vec<Provider> = RULES.iter().map(|r| r.provider).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }
}
