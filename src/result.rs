//! Result types for extraction output.
//!
//! This module defines the structured output of one extraction call: the
//! article text, its media, outbound links and document metadata. Every value
//! here is built fresh per call and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An image found in the article region or declared by page-level meta tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedImage {
    /// Absolute image URL, or a `data:` URI kept byte-identical.
    pub url: String,

    /// Alt text from `<img alt="...">`.
    pub alt: String,

    /// Caption text, taken from the `title` attribute.
    pub caption: String,

    /// Declared width in pixels (or the chosen srcset width).
    pub width: Option<u32>,

    /// Declared height in pixels.
    pub height: Option<u32>,

    /// True only for images sourced from `og:image`, `twitter:image` or
    /// `link rel=image_src`.
    pub is_main_image: bool,
}

/// Hosting platform of an embedded or native video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPlatform {
    /// youtube.com / youtu.be embeds.
    Youtube,
    /// vimeo.com embeds.
    Vimeo,
    /// Native `<video>` elements.
    Direct,
    /// Anything else, labelled by the caller.
    #[serde(untagged)]
    Other(String),
}

impl VideoPlatform {
    /// Lowercase label for the platform.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Youtube => "youtube",
            Self::Vimeo => "vimeo",
            Self::Direct => "direct",
            Self::Other(label) => label,
        }
    }
}

/// A video embed or native video element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedVideo {
    pub url: String,
    pub title: String,
    /// Synthesized for YouTube, taken from `poster` for native video.
    pub thumbnail: Option<String>,
    /// Raw duration attribute, when present.
    pub duration: Option<String>,
    pub platform: VideoPlatform,
}

/// An audio source: `<audio>` element, linked audio file, or meta fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedAudio {
    pub url: String,
    /// Defaults to [`DEFAULT_AUDIO_TITLE`] when nothing better is known.
    pub title: String,
    pub duration: Option<String>,
}

/// Title given to audio entries without a title-bearing attribute or link text.
pub const DEFAULT_AUDIO_TITLE: &str = "Audio";

/// An outbound anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedLink {
    /// Absolute URL.
    pub url: String,
    /// Trimmed anchor text.
    pub title: String,
    /// The anchor's `title` attribute (tooltip).
    pub description: String,
    /// True when `url` does not start with the base URL string.
    pub is_external: bool,
}

/// Document metadata gathered by the metadata cascades.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentMetadata {
    /// Best-guess author, after the plausibility filter.
    pub author: Option<String>,

    /// Publication date.
    pub publish_date: Option<DateTime<Utc>>,

    /// Section or category name.
    pub category: Option<String>,

    /// Tags/keywords in document order, without duplicates.
    pub tags: Vec<String>,

    /// Primary language subtag (e.g. `en`, `de`).
    pub language: Option<String>,

    /// Site name (`og:site_name`, `application-name`).
    pub site_name: Option<String>,

    /// Canonical URL (`link rel=canonical`, `og:url`).
    pub canonical_url: Option<String>,

    pub word_count: usize,
    pub reading_time: usize,
}

/// Structured article representation returned by every extraction call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub title: String,
    pub description: String,
    pub main_text: String,
    pub images: Vec<ExtractedImage>,
    pub videos: Vec<ExtractedVideo>,
    pub audios: Vec<ExtractedAudio>,
    pub links: Vec<ExtractedLink>,
    pub metadata: ContentMetadata,
    /// Minutes, never below 1.
    pub reading_time: usize,
    pub word_count: usize,
}

impl ExtractedContent {
    /// Serializes the result as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
