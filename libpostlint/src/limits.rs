//! Static per-platform content limits
//!
//! A read-only table of the numeric and structural constraints each platform
//! enforces at publish time: caption length, hashtag counts, and image/video
//! constraints. Each platform's entry is independent; there is no defaulting
//! between platforms. A missing sub-section means the platform has no such
//! concept and rules referencing it treat the limit as unbounded.
//!
//! The constants reflect the platforms' published rules and are part of the
//! engine's external contract: thresholds like Instagram's 2200-character
//! caption or TikTok's 1-600 second video window are relied on by callers.

use crate::types::Platform;
use serde::Serialize;

/// Caption (or primary text) length limits, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaptionLimits {
    /// Hard maximum; exceeding it is an error
    pub max: usize,
    /// Soft ceiling for engagement; exceeding it is a warning
    pub recommended: Option<usize>,
}

/// Hashtag count limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HashtagLimits {
    /// Hard maximum; exceeding it is an error
    pub max: usize,
    /// Soft ceiling for engagement; exceeding it is a warning
    pub recommended: Option<usize>,
}

/// Image constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageLimits {
    /// Minimum width in pixels accepted by the platform
    pub min_width: Option<u32>,
    /// Maximum width in pixels before the platform downscales
    pub max_width: Option<u32>,
    /// Width below which the platform may visibly upscale
    pub recommended_width: Option<u32>,
    /// Aspect ratios the platform displays without cropping
    pub aspect_ratios: &'static [&'static str],
    /// Maximum file size in bytes
    pub max_size: Option<u64>,
    /// Accepted file formats
    pub formats: &'static [&'static str],
    /// Maximum number of images per post
    pub max_count: Option<usize>,
}

/// Video constraints
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VideoLimits {
    /// Minimum duration in seconds
    pub min_duration: Option<f64>,
    /// Maximum duration in seconds
    pub max_duration: Option<f64>,
    /// Maximum file size in bytes
    pub max_size: Option<u64>,
    /// Accepted file formats
    pub formats: &'static [&'static str],
    /// Minimum width in pixels
    pub min_width: Option<u32>,
    /// Maximum width in pixels
    pub max_width: Option<u32>,
}

/// Full limit set for one platform
///
/// Sub-sections are optional: YouTube has no caption in the feed-post sense,
/// Bluesky has no separate hashtag budget (tags count against the caption).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlatformLimits {
    pub caption: Option<CaptionLimits>,
    pub hashtags: Option<HashtagLimits>,
    pub image: Option<ImageLimits>,
    pub video: Option<VideoLimits>,
}

const MB: u64 = 1024 * 1024;
const GB: u64 = 1024 * MB;

static INSTAGRAM_LIMITS: PlatformLimits = PlatformLimits {
    caption: Some(CaptionLimits {
        max: 2200,
        recommended: Some(125),
    }),
    hashtags: Some(HashtagLimits {
        max: 30,
        recommended: Some(5),
    }),
    image: Some(ImageLimits {
        min_width: Some(320),
        max_width: Some(1440),
        recommended_width: Some(1440),
        aspect_ratios: &["1:1", "4:5", "1.91:1"],
        max_size: Some(30 * MB),
        formats: &["jpg", "png"],
        max_count: Some(10),
    }),
    video: Some(VideoLimits {
        min_duration: Some(3.0),
        max_duration: Some(90.0),
        max_size: Some(650 * MB),
        formats: &["mp4", "mov"],
        min_width: None,
        max_width: None,
    }),
};

static TIKTOK_LIMITS: PlatformLimits = PlatformLimits {
    caption: Some(CaptionLimits {
        max: 2200,
        recommended: Some(100),
    }),
    hashtags: None,
    image: None,
    video: Some(VideoLimits {
        min_duration: Some(1.0),
        max_duration: Some(600.0),
        max_size: Some(2 * GB),
        formats: &["mp4", "mov", "webm"],
        min_width: Some(360),
        max_width: None,
    }),
};

static YOUTUBE_LIMITS: PlatformLimits = PlatformLimits {
    // YouTube has a title/description pair rather than a caption; the
    // description ceiling stands in for the caption budget here.
    caption: Some(CaptionLimits {
        max: 5000,
        recommended: None,
    }),
    hashtags: Some(HashtagLimits {
        max: 15,
        recommended: Some(3),
    }),
    image: None,
    video: Some(VideoLimits {
        min_duration: Some(1.0),
        max_duration: Some(43_200.0),
        max_size: Some(256 * GB),
        formats: &["mp4", "mov", "avi", "webm"],
        min_width: None,
        max_width: None,
    }),
};

static FACEBOOK_LIMITS: PlatformLimits = PlatformLimits {
    caption: Some(CaptionLimits {
        max: 63_206,
        recommended: Some(80),
    }),
    hashtags: Some(HashtagLimits {
        max: 30,
        recommended: Some(2),
    }),
    image: Some(ImageLimits {
        min_width: Some(320),
        max_width: Some(2048),
        recommended_width: None,
        aspect_ratios: &["1:1", "4:5", "1.91:1", "16:9"],
        max_size: Some(30 * MB),
        formats: &["jpg", "png", "gif"],
        max_count: Some(10),
    }),
    video: Some(VideoLimits {
        min_duration: Some(1.0),
        max_duration: Some(14_400.0),
        max_size: Some(10 * GB),
        formats: &["mp4", "mov"],
        min_width: None,
        max_width: None,
    }),
};

static PINTEREST_LIMITS: PlatformLimits = PlatformLimits {
    caption: Some(CaptionLimits {
        max: 500,
        recommended: Some(100),
    }),
    hashtags: Some(HashtagLimits {
        max: 20,
        recommended: None,
    }),
    image: Some(ImageLimits {
        min_width: Some(600),
        max_width: None,
        recommended_width: Some(1000),
        aspect_ratios: &["2:3", "1:1"],
        max_size: Some(20 * MB),
        formats: &["jpg", "png"],
        max_count: Some(1),
    }),
    video: Some(VideoLimits {
        min_duration: Some(4.0),
        max_duration: Some(900.0),
        max_size: Some(2 * GB),
        formats: &["mp4", "mov"],
        min_width: None,
        max_width: None,
    }),
};

static LINKEDIN_LIMITS: PlatformLimits = PlatformLimits {
    caption: Some(CaptionLimits {
        max: 3000,
        recommended: Some(150),
    }),
    hashtags: Some(HashtagLimits {
        max: 5,
        recommended: Some(3),
    }),
    image: Some(ImageLimits {
        min_width: Some(400),
        max_width: Some(7680),
        recommended_width: Some(1200),
        aspect_ratios: &["1.91:1", "1:1"],
        max_size: Some(8 * MB),
        formats: &["jpg", "png", "gif"],
        max_count: Some(9),
    }),
    video: Some(VideoLimits {
        min_duration: Some(3.0),
        max_duration: Some(600.0),
        max_size: Some(5 * GB),
        formats: &["mp4"],
        min_width: Some(256),
        max_width: Some(4096),
    }),
};

static BLUESKY_LIMITS: PlatformLimits = PlatformLimits {
    caption: Some(CaptionLimits {
        max: 300,
        recommended: None,
    }),
    // Hashtags count against the 300-character budget; no separate limit.
    hashtags: None,
    image: Some(ImageLimits {
        min_width: None,
        max_width: Some(2000),
        recommended_width: None,
        aspect_ratios: &["1:1", "16:9", "4:5"],
        max_size: Some(MB),
        formats: &["jpg", "png", "webp"],
        max_count: Some(4),
    }),
    video: Some(VideoLimits {
        min_duration: None,
        max_duration: Some(60.0),
        max_size: Some(50 * MB),
        formats: &["mp4"],
        min_width: None,
        max_width: None,
    }),
};

static GOOGLE_BUSINESS_LIMITS: PlatformLimits = PlatformLimits {
    caption: Some(CaptionLimits {
        max: 1500,
        recommended: Some(150),
    }),
    hashtags: None,
    image: Some(ImageLimits {
        min_width: Some(400),
        max_width: None,
        recommended_width: Some(720),
        aspect_ratios: &["4:3", "16:9"],
        max_size: Some(10 * MB),
        formats: &["jpg", "png"],
        max_count: Some(1),
    }),
    video: None,
};

static TWITTER_LIMITS: PlatformLimits = PlatformLimits {
    caption: Some(CaptionLimits {
        max: 280,
        recommended: None,
    }),
    hashtags: Some(HashtagLimits {
        max: 10,
        recommended: Some(2),
    }),
    image: Some(ImageLimits {
        min_width: None,
        max_width: Some(4096),
        recommended_width: None,
        aspect_ratios: &["16:9", "1:1"],
        max_size: Some(5 * MB),
        formats: &["jpg", "png", "gif", "webp"],
        max_count: Some(4),
    }),
    video: Some(VideoLimits {
        min_duration: Some(0.5),
        max_duration: Some(140.0),
        max_size: Some(512 * MB),
        formats: &["mp4", "mov"],
        min_width: Some(32),
        max_width: Some(1920),
    }),
};

/// Look up the limit set for a platform
///
/// The platform enumeration is closed, so every lookup succeeds; there is no
/// inheritance or defaulting between entries.
pub fn platform_limits(platform: Platform) -> &'static PlatformLimits {
    match platform {
        Platform::Instagram => &INSTAGRAM_LIMITS,
        Platform::Tiktok => &TIKTOK_LIMITS,
        Platform::Youtube => &YOUTUBE_LIMITS,
        Platform::Facebook => &FACEBOOK_LIMITS,
        Platform::Pinterest => &PINTEREST_LIMITS,
        Platform::Linkedin => &LINKEDIN_LIMITS,
        Platform::Bluesky => &BLUESKY_LIMITS,
        Platform::GoogleBusiness => &GOOGLE_BUSINESS_LIMITS,
        Platform::Twitter => &TWITTER_LIMITS,
    }
}

/// Hashtags associated with platform-side reach suppression ("shadowban")
///
/// Lowercase, without the leading `#`. Matching is case-insensitive and
/// ignores the prefix.
pub static BANNED_HASHTAGS: &[&str] = &[
    "followforfollow",
    "follow4follow",
    "f4f",
    "likeforlike",
    "like4like",
    "l4l",
    "likeforfollow",
    "followme",
    "followback",
    "tagsforlikes",
    "instafollow",
    "shoutout4shoutout",
    "sfs",
    "comment4comment",
    "sub4sub",
];

/// Whether a hashtag is on the banned list
///
/// Strips a leading `#` and compares case-insensitively.
pub fn is_banned_hashtag(tag: &str) -> bool {
    let normalized = tag.trim_start_matches('#').to_lowercase();
    BANNED_HASHTAGS.contains(&normalized.as_str())
}
