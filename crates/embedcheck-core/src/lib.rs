//! Classifies URLs against a fixed set of embeddable media providers.

pub mod classifier;
pub mod config;
pub mod logging;
pub mod patterns;
pub mod provider;

pub use classifier::{Classification, EmbedUrlProcessor};
pub use provider::{ParseProviderError, Provider};
