//! Embed classification of a single URL.
//!
//! `EmbedUrlProcessor` holds the absolute textual form of a URL and answers,
//! per provider, whether it matches one of that provider's accepted shapes.
//! Nothing is normalized: the string is matched exactly as given.

use crate::patterns;
use crate::provider::Provider;
use serde::Serialize;
use url::Url;

/// Classifier over one URL. Cheap to construct; every query is pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedUrlProcessor<'a> {
    url: &'a str,
}

impl<'a> EmbedUrlProcessor<'a> {
    /// Wraps the absolute string form of a URL. The caller is responsible for
    /// passing an absolute URL; anything else simply matches nothing.
    pub fn new(url: &'a str) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &'a str {
        self.url
    }

    /// Watch, embed, short-link and playlist URLs.
    pub fn is_youtube_embed(&self) -> bool {
        self.is_embed_for(Provider::YouTube)
    }

    /// Video, channel video and https player URLs.
    pub fn is_vimeo_embed(&self) -> bool {
        self.is_embed_for(Provider::Vimeo)
    }

    /// Tweet, profile, likes, list and moment URLs.
    pub fn is_twitter_embed(&self) -> bool {
        self.is_embed_for(Provider::Twitter)
    }

    /// Photo, gallery and flic.kr short URLs.
    pub fn is_flickr_embed(&self) -> bool {
        self.is_embed_for(Provider::Flickr)
    }

    pub fn is_issuu_embed(&self) -> bool {
        self.is_embed_for(Provider::Issuu)
    }

    pub fn is_instagram_embed(&self) -> bool {
        self.is_embed_for(Provider::Instagram)
    }

    /// True iff any known provider accepts the URL.
    pub fn is_valid_embed(&self) -> bool {
        self.provider().is_some()
    }

    pub fn is_embed_for(&self, provider: Provider) -> bool {
        patterns::matching_rule(provider, self.url).is_some()
    }

    /// First provider (in `Provider::ALL` order) that accepts the URL.
    pub fn provider(&self) -> Option<Provider> {
        Provider::ALL.into_iter().find(|p| self.is_embed_for(*p))
    }

    /// Label of the rule through which `provider` accepts the URL.
    pub fn matched_rule(&self, provider: Provider) -> Option<&'static str> {
        patterns::matching_rule(provider, self.url).map(|r| r.label)
    }

    /// Evaluates every provider once.
    pub fn classify(&self) -> Classification {
        Classification {
            is_youtube_embed: self.is_youtube_embed(),
            is_vimeo_embed: self.is_vimeo_embed(),
            is_twitter_embed: self.is_twitter_embed(),
            is_flickr_embed: self.is_flickr_embed(),
            is_issuu_embed: self.is_issuu_embed(),
            is_instagram_embed: self.is_instagram_embed(),
            is_valid_embed: false,
        }
        .with_aggregate()
    }
}

impl<'a> From<&'a Url> for EmbedUrlProcessor<'a> {
    fn from(url: &'a Url) -> Self {
        Self::new(url.as_str())
    }
}

impl<'a> From<&'a str> for EmbedUrlProcessor<'a> {
    fn from(url: &'a str) -> Self {
        Self::new(url)
    }
}

/// Per-provider verdicts for one URL plus the aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub is_youtube_embed: bool,
    pub is_vimeo_embed: bool,
    pub is_twitter_embed: bool,
    pub is_flickr_embed: bool,
    pub is_issuu_embed: bool,
    pub is_instagram_embed: bool,
    pub is_valid_embed: bool,
}

impl Classification {
    fn with_aggregate(mut self) -> Self {
        self.is_valid_embed = Provider::ALL.into_iter().any(|p| self.get(p));
        self
    }

    pub fn get(&self, provider: Provider) -> bool {
        match provider {
            Provider::YouTube => self.is_youtube_embed,
            Provider::Vimeo => self.is_vimeo_embed,
            Provider::Twitter => self.is_twitter_embed,
            Provider::Flickr => self.is_flickr_embed,
            Provider::Issuu => self.is_issuu_embed,
            Provider::Instagram => self.is_instagram_embed,
        }
    }

    /// Matched providers, in `Provider::ALL` order.
    pub fn providers(&self) -> impl Iterator<Item = Provider> + '_ {
        Provider::ALL.into_iter().filter(move |p| self.get(*p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(url: &str) -> EmbedUrlProcessor<'_> {
        EmbedUrlProcessor::new(url)
    }

    #[test]
    fn youtube_shapes() {
        assert!(check("https://www.youtube.com/watch?v=dQw4w9WgXcQ").is_youtube_embed());
        assert!(check("https://youtu.be/dQw4w9WgXcQ").is_youtube_embed());
        assert!(check("http://m.youtube.com/embed/dQw4w9WgXcQ").is_youtube_embed());
        assert!(
            check("https://www.youtube.com/playlist?list=PLx0sYbCqOb8TBPRdmBHs5Iftvv9TPboYG")
                .is_youtube_embed()
        );
        assert!(check("https://YOUTUBE.com/watch?v=abc123").is_youtube_embed());
    }

    #[test]
    fn youtube_rejects_other_pages() {
        assert!(!check("https://www.youtube.com/channel/UCxxxx").is_youtube_embed());
        assert!(!check("https://www.youtube.com/watch?v=abc&t=10").is_youtube_embed());
        assert!(!check("https://youtu.be/").is_youtube_embed());
    }

    #[test]
    fn vimeo_shapes() {
        assert!(check("https://vimeo.com/12345678").is_vimeo_embed());
        assert!(check("http://vimeo.com/channels/staffpicks/12345678").is_vimeo_embed());
        assert!(check("https://player.vimeo.com/video/12345678").is_vimeo_embed());
        assert!(!check("http://player.vimeo.com/video/12345678").is_vimeo_embed());
        assert!(!check("https://vimeo.com/not-a-number").is_vimeo_embed());
    }

    #[test]
    fn twitter_shapes() {
        assert!(check("https://twitter.com/someuser/status/123456789").is_twitter_embed());
        assert!(check("https://www.twitter.com/someuser/statuses/123456789").is_twitter_embed());
        assert!(check("https://twitter.com/jack").is_twitter_embed());
        assert!(check("https://twitter.com/jack/likes").is_twitter_embed());
        assert!(check("https://twitter.com/jack/lists/friends").is_twitter_embed());
        assert!(check("https://twitter.com/i/moments/650667182356082688").is_twitter_embed());
        assert!(!check("https://twitter.com/this_name_is_far_too_long").is_twitter_embed());
        assert!(!check("https://twitter.com/jack/media").is_twitter_embed());
    }

    #[test]
    fn twitter_username_length_limit() {
        // 15 word characters is the longest accepted handle.
        assert!(check("https://twitter.com/abcdefghij12345").is_twitter_embed());
        assert!(check("https://twitter.com/abcdefghij12345/likes").is_twitter_embed());
        assert!(!check("https://twitter.com/abcdefghij123456").is_twitter_embed());
        assert!(!check("https://twitter.com/abcdefghij123456/status/1").is_twitter_embed());
    }

    #[test]
    fn flickr_issuu_instagram() {
        assert!(check("https://www.flickr.com/photos/someuser/123456/").is_flickr_embed());
        assert!(check("https://flic.kr/p/2jP5Xa1").is_flickr_embed());
        assert!(check("https://issuu.com/someuser/docs/mydoc").is_issuu_embed());
        assert!(!check("https://issuu.com/someuser").is_issuu_embed());
        assert!(check("https://instagram.com/p/AbCdEfG/").is_instagram_embed());
        assert!(check("http://instagr.am/p/AbCdEfG").is_instagram_embed());
        assert!(!check("https://instagram.com/someuser").is_instagram_embed());
    }

    #[test]
    fn unrelated_and_empty_match_nothing() {
        for url in ["https://example.com/", ""] {
            let c = check(url).classify();
            assert_eq!(c, Classification::default(), "{url:?}");
            assert!(!check(url).is_valid_embed());
            assert_eq!(check(url).provider(), None);
        }
    }

    #[test]
    fn classify_sets_aggregate() {
        let c = check("https://youtu.be/dQw4w9WgXcQ").classify();
        assert!(c.is_youtube_embed);
        assert!(c.is_valid_embed);
        assert_eq!(c.providers().collect::<Vec<_>>(), vec![Provider::YouTube]);
    }

    #[test]
    fn matched_rule_label() {
        let p = check("https://vimeo.com/channels/staffpicks/42");
        assert_eq!(p.matched_rule(Provider::Vimeo), Some("channel video"));
        assert_eq!(p.matched_rule(Provider::YouTube), None);
        assert_eq!(p.provider(), Some(Provider::Vimeo));
    }

    #[test]
    fn from_parsed_url_uses_absolute_string() {
        let url = Url::parse("https://vimeo.com/12345678").unwrap();
        let p = EmbedUrlProcessor::from(&url);
        assert_eq!(p.url(), "https://vimeo.com/12345678");
        assert!(p.is_vimeo_embed());
    }

    #[test]
    fn classification_serializes_flag_names() {
        let c = check("https://issuu.com/someuser/docs/mydoc").classify();
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json["is_issuu_embed"], true);
        assert_eq!(json["is_valid_embed"], true);
        assert_eq!(json["is_youtube_embed"], false);
    }
}
