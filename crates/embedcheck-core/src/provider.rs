//! Identifiers for the supported embed providers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A media service whose URLs can be rendered inline as an embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    YouTube,
    Vimeo,
    Twitter,
    Flickr,
    Issuu,
    Instagram,
}

impl Provider {
    /// Every provider, in the order classification reports them.
    pub const ALL: [Provider; 6] = [
        Provider::YouTube,
        Provider::Vimeo,
        Provider::Twitter,
        Provider::Flickr,
        Provider::Issuu,
        Provider::Instagram,
    ];

    /// Lowercase identifier used on the command line and in config/JSON.
    pub fn slug(self) -> &'static str {
        match self {
            Provider::YouTube => "youtube",
            Provider::Vimeo => "vimeo",
            Provider::Twitter => "twitter",
            Provider::Flickr => "flickr",
            Provider::Issuu => "issuu",
            Provider::Instagram => "instagram",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Provider::YouTube => "YouTube",
            Provider::Vimeo => "Vimeo",
            Provider::Twitter => "Twitter",
            Provider::Flickr => "Flickr",
            Provider::Issuu => "Issuu",
            Provider::Instagram => "Instagram",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Returned when a string names no known provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseProviderError {
    #[error("unknown provider {0:?}, expected youtube/vimeo/twitter/flickr/issuu/instagram")]
    Unknown(String),
}

impl FromStr for Provider {
    type Err = ParseProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Provider::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseProviderError::Unknown(s.to_string()))
    }
}
