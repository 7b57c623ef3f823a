//! Core types for Postlint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

/// Supported social platforms
///
/// The enumeration is closed: every platform the limit table knows about is
/// listed here, including `Twitter`, which is only reachable through the
/// limit table and the inline status helpers (no publishing rules target it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Instagram,
    Tiktok,
    Youtube,
    Facebook,
    Pinterest,
    Linkedin,
    Bluesky,
    GoogleBusiness,
    Twitter,
}

impl Platform {
    /// All platforms, in limit-table order
    pub const ALL: [Platform; 9] = [
        Platform::Instagram,
        Platform::Tiktok,
        Platform::Youtube,
        Platform::Facebook,
        Platform::Pinterest,
        Platform::Linkedin,
        Platform::Bluesky,
        Platform::GoogleBusiness,
        Platform::Twitter,
    ];

    /// Lowercase identifier for the platform (e.g., "instagram", "google_business")
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Facebook => "facebook",
            Platform::Pinterest => "pinterest",
            Platform::Linkedin => "linkedin",
            Platform::Bluesky => "bluesky",
            Platform::GoogleBusiness => "google_business",
            Platform::Twitter => "twitter",
        }
    }

    /// Human-readable display name (e.g., "Instagram", "Google Business")
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Tiktok => "TikTok",
            Platform::Youtube => "YouTube",
            Platform::Facebook => "Facebook",
            Platform::Pinterest => "Pinterest",
            Platform::Linkedin => "LinkedIn",
            Platform::Bluesky => "Bluesky",
            Platform::GoogleBusiness => "Google Business",
            Platform::Twitter => "Twitter",
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "tiktok" => Ok(Platform::Tiktok),
            "youtube" => Ok(Platform::Youtube),
            "facebook" => Ok(Platform::Facebook),
            "pinterest" => Ok(Platform::Pinterest),
            "linkedin" => Ok(Platform::Linkedin),
            "bluesky" => Ok(Platform::Bluesky),
            "google_business" | "google-business" => Ok(Platform::GoogleBusiness),
            "twitter" => Ok(Platform::Twitter),
            _ => Err(format!(
                "Unknown platform: '{}'. Valid options: instagram, tiktok, youtube, facebook, \
                 pinterest, linkedin, bluesky, google_business, twitter",
                s
            )),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structural kind of content being published on a platform
///
/// Not every platform supports every post type; rules that only make sense
/// for a given post type declare it and are skipped otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Feed,
    Reel,
    Story,
    Carousel,
    Pin,
    Video,
    Article,
    Thread,
}

impl FromStr for PostType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feed" => Ok(PostType::Feed),
            "reel" => Ok(PostType::Reel),
            "story" => Ok(PostType::Story),
            "carousel" => Ok(PostType::Carousel),
            "pin" => Ok(PostType::Pin),
            "video" => Ok(PostType::Video),
            "article" => Ok(PostType::Article),
            "thread" => Ok(PostType::Thread),
            _ => Err(format!(
                "Unknown post type: '{}'. Valid options: feed, reel, story, carousel, pin, \
                 video, article, thread",
                s
            )),
        }
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PostType::Feed => "feed",
            PostType::Reel => "reel",
            PostType::Story => "story",
            PostType::Carousel => "carousel",
            PostType::Pin => "pin",
            PostType::Video => "video",
            PostType::Article => "article",
            PostType::Thread => "thread",
        };
        write!(f, "{}", s)
    }
}

/// Media kind of an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Video => write!(f, "video"),
        }
    }
}

/// A media attachment under validation
///
/// Width and height are in pixels and must be positive for aspect-ratio rules
/// to judge the media meaningfully; zero dimensions are classified as a
/// dedicated validation error rather than letting a division produce NaN.
/// Duration is only present for videos; rules that need it skip media
/// without one instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    /// Unique identifier for the media item (UUID v4 by default)
    pub id: String,
    /// Image or video
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// File size in bytes
    pub size: u64,
    /// Duration in seconds (videos only)
    pub duration: Option<f64>,
    /// MIME type (e.g., "image/jpeg", "video/mp4")
    pub mime_type: String,
}

impl MediaInfo {
    /// Create an image attachment with a generated id
    pub fn image(width: u32, height: u32, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            media_type: MediaType::Image,
            width,
            height,
            size,
            duration: None,
            mime_type: mime_type.into(),
        }
    }

    /// Create a video attachment with a generated id
    pub fn video(
        width: u32,
        height: u32,
        size: u64,
        duration: f64,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            media_type: MediaType::Video,
            width,
            height,
            size,
            duration: Some(duration),
            mime_type: mime_type.into(),
        }
    }

    /// Width/height ratio, or `None` when either dimension is zero
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(f64::from(self.width) / f64::from(self.height))
    }
}

/// Everything the engine needs to judge one post, immutable per evaluation
///
/// A fresh context is built for every run (per keystroke for the inline
/// helpers, once before a publish action for the full rule pass). The engine
/// never mutates it; auto-fixes return replacement values instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationContext {
    /// Caption text
    pub caption: String,
    /// Hashtags in input order, `#`-prefixed
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Mention handles in input order
    #[serde(default)]
    pub mentions: Vec<String>,
    /// Media attachments in input order
    #[serde(default)]
    pub media: Vec<MediaInfo>,
    /// Target platforms
    #[serde(default)]
    pub platforms: Vec<Platform>,
    /// Selected post type per platform
    #[serde(default)]
    pub post_types: HashMap<Platform, PostType>,
    /// Scheduled publish time, if any
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl ValidationContext {
    /// Create a context with a caption and target platforms
    pub fn new(caption: impl Into<String>, platforms: Vec<Platform>) -> Self {
        Self {
            caption: caption.into(),
            platforms,
            ..Default::default()
        }
    }

    /// Media items of the given type, in input order
    pub fn media_of_type(&self, media_type: MediaType) -> impl Iterator<Item = &MediaInfo> {
        self.media.iter().filter(move |m| m.media_type == media_type)
    }

    /// Whether the given platform is targeted
    pub fn targets(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}

/// Severity of a single rule verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Pass,
    Warning,
    Error,
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationStatus::Pass => write!(f, "pass"),
            ValidationStatus::Warning => write!(f, "warning"),
            ValidationStatus::Error => write!(f, "error"),
        }
    }
}

/// Verdict produced by one rule's check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Pass, warning, or error
    pub status: ValidationStatus,
    /// Human-readable summary
    pub message: String,
    /// Optional elaboration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Hint that the violation can be repaired automatically
    #[serde(default)]
    pub can_auto_fix: bool,
}

impl ValidationResult {
    /// A passing verdict
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            status: ValidationStatus::Pass,
            message: message.into(),
            details: None,
            can_auto_fix: false,
        }
    }

    /// A non-blocking warning verdict
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            status: ValidationStatus::Warning,
            message: message.into(),
            details: None,
            can_auto_fix: false,
        }
    }

    /// A blocking error verdict
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ValidationStatus::Error,
            message: message.into(),
            details: None,
            can_auto_fix: false,
        }
    }

    /// Attach an elaboration to the verdict
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Mark the verdict as auto-fixable
    pub fn fixable(mut self) -> Self {
        self.can_auto_fix = true;
        self
    }
}

/// Replacement value produced by an auto-fix
///
/// The caller merges the value back into its own content model; the engine
/// never mutates the original context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "field", content = "value")]
pub enum FixedValue {
    Caption(String),
    Hashtags(Vec<String>),
}

/// Outcome of applying a rule's auto-fix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoFixResult {
    /// Whether anything was changed
    pub fixed: bool,
    /// Human-readable summary of the repair
    pub message: String,
    /// The corrected field value, when one was produced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<FixedValue>,
}
