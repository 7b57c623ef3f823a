//! Inline status helpers for live-typing feedback
//!
//! These functions re-derive a view from the platform limit table on every
//! call without going through the rule registry: they run on each keystroke,
//! so they stay O(1) aside from the obvious string/array length scans. Their
//! status vocabulary is `ok`/`warning`/`error`, deliberately distinct from
//! the rule engine's `pass`/`warning`/`error`.

use crate::limits::platform_limits;
use crate::types::{MediaType, Platform};
use serde::Serialize;

/// Severity for inline feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineStatus {
    Ok,
    Warning,
    Error,
}

impl std::fmt::Display for InlineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InlineStatus::Ok => write!(f, "ok"),
            InlineStatus::Warning => write!(f, "warning"),
            InlineStatus::Error => write!(f, "error"),
        }
    }
}

/// Live character-count feedback for a caption field
///
/// `limit` is `None` when the platform has no caption concept; in that case
/// `remaining` and `percentage` are `None` too and the status is always `ok`.
/// `remaining` goes negative past the limit; `percentage` is capped at 100
/// for display, but `remaining` is never capped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterStatus {
    pub count: usize,
    pub limit: Option<usize>,
    pub recommended: Option<usize>,
    pub status: InlineStatus,
    pub remaining: Option<i64>,
    pub percentage: Option<f64>,
}

/// Live character-count feedback for `text` on `platform`
pub fn character_status(text: &str, platform: Platform) -> CharacterStatus {
    let count = text.chars().count();

    let Some(caption) = platform_limits(platform).caption else {
        return CharacterStatus {
            count,
            limit: None,
            recommended: None,
            status: InlineStatus::Ok,
            remaining: None,
            percentage: None,
        };
    };

    let limit = caption.max;
    let remaining = limit as i64 - count as i64;
    let raw_percentage = count as f64 / limit as f64 * 100.0;

    let status = if count > limit {
        InlineStatus::Error
    } else if caption.recommended.is_some_and(|rec| count > rec) {
        InlineStatus::Warning
    } else if raw_percentage > 80.0 {
        InlineStatus::Warning
    } else {
        InlineStatus::Ok
    };

    CharacterStatus {
        count,
        limit: Some(limit),
        recommended: caption.recommended,
        status,
        remaining: Some(remaining),
        percentage: Some(raw_percentage.min(100.0)),
    }
}

/// Live hashtag-count feedback
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HashtagStatus {
    pub count: usize,
    pub limit: Option<usize>,
    pub recommended: Option<usize>,
    pub status: InlineStatus,
    pub message: Option<String>,
}

/// Live hashtag-count feedback for `hashtags` on `platform`
pub fn hashtag_status(hashtags: &[String], platform: Platform) -> HashtagStatus {
    let count = hashtags.len();

    let Some(limits) = platform_limits(platform).hashtags else {
        return HashtagStatus {
            count,
            limit: None,
            recommended: None,
            status: InlineStatus::Ok,
            message: None,
        };
    };

    let (status, message) = if count > limits.max {
        (
            InlineStatus::Error,
            Some(format!("Max {} hashtags allowed", limits.max)),
        )
    } else if let Some(rec) = limits.recommended.filter(|rec| count > *rec) {
        (
            InlineStatus::Warning,
            Some(format!("{} hashtags recommended for best engagement", rec)),
        )
    } else if limits.max > 0 && count as f64 > limits.max as f64 * 0.8 {
        (
            InlineStatus::Warning,
            Some(format!("Approaching limit of {}", limits.max)),
        )
    } else {
        (InlineStatus::Ok, None)
    };

    HashtagStatus {
        count,
        limit: Some(limits.max),
        recommended: limits.recommended,
        status,
        message,
    }
}

/// Live aspect-ratio feedback for a media item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaAspectStatus {
    /// Width/height ratio (0.0 when the dimensions are invalid)
    pub ratio: f64,
    /// Human-readable ratio, snapped to a named ratio when close
    pub ratio_string: String,
    pub status: InlineStatus,
    pub message: Option<String>,
    pub is_optimal: bool,
}

// Named ratios the ratio string snaps to.
const NAMED_RATIOS: [(f64, &str); 6] = [
    (1.0, "1:1"),
    (1.91, "1.91:1"),
    (0.8, "4:5"),
    (0.5625, "9:16"),
    (16.0 / 9.0, "16:9"),
    (2.0 / 3.0, "2:3"),
];
const RATIO_SNAP_TOLERANCE: f64 = 0.02;

fn ratio_string(ratio: f64) -> String {
    let nearest = NAMED_RATIOS
        .iter()
        .map(|(value, name)| ((ratio - value).abs(), *name))
        .min_by(|a, b| a.0.total_cmp(&b.0));

    match nearest {
        Some((distance, name)) if distance < RATIO_SNAP_TOLERANCE => name.to_string(),
        _ => format!("{:.2}:1", ratio),
    }
}

// The inline helper's square window (0.05) is looser than the rule engine's
// (0.01). The drift is inherited behavior and kept as-is.
const IG_SQUARE_WINDOW: f64 = 0.05;
const IG_LANDSCAPE_WINDOW: f64 = 0.15;
const IG_PORTRAIT_WINDOW: f64 = 0.1;
const TIKTOK_VERTICAL_WINDOW: f64 = 0.05;
const PINTEREST_TALL_WINDOW: f64 = 0.1;

/// Live aspect-ratio feedback for a `width` x `height` media item
///
/// `media_type` defaults to image and is reserved: the optimal-ratio windows
/// currently do not differ by media type on any platform.
pub fn media_aspect_status(
    width: u32,
    height: u32,
    platform: Platform,
    _media_type: Option<MediaType>,
) -> MediaAspectStatus {
    if width == 0 || height == 0 {
        return MediaAspectStatus {
            ratio: 0.0,
            ratio_string: "invalid".to_string(),
            status: InlineStatus::Error,
            message: Some("Width and height must be greater than zero".to_string()),
            is_optimal: false,
        };
    }

    let ratio = f64::from(width) / f64::from(height);
    let ratio_string = ratio_string(ratio);

    let (optimal, message) = match platform {
        Platform::Instagram => {
            let optimal = (ratio - 1.0).abs() < IG_SQUARE_WINDOW
                || (ratio - 1.91).abs() < IG_LANDSCAPE_WINDOW
                || (ratio - 0.8).abs() < IG_PORTRAIT_WINDOW;
            (
                optimal,
                "This media may be cropped on Instagram, use 1:1, 4:5, or 1.91:1",
            )
        }
        Platform::Tiktok => {
            let optimal = (ratio - 0.5625).abs() < TIKTOK_VERTICAL_WINDOW;
            (optimal, "This aspect ratio is not optimal for TikTok, use 9:16")
        }
        Platform::Pinterest => {
            let optimal = (ratio - 0.667).abs() < PINTEREST_TALL_WINDOW;
            (optimal, "This aspect ratio is not optimal for Pinterest, use 2:3")
        }
        // No platform-specific judgement for the rest.
        _ => {
            return MediaAspectStatus {
                ratio,
                ratio_string,
                status: InlineStatus::Ok,
                message: None,
                is_optimal: true,
            };
        }
    };

    if optimal {
        MediaAspectStatus {
            ratio,
            ratio_string,
            status: InlineStatus::Ok,
            message: None,
            is_optimal: true,
        }
    } else {
        MediaAspectStatus {
            ratio,
            ratio_string,
            status: InlineStatus::Warning,
            message: Some(message.to_string()),
            is_optimal: false,
        }
    }
}
