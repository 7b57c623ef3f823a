//! Postlint - pre-publish validation for cross-posted social content
//!
//! This library evaluates a post (caption, hashtags, media, target
//! platforms) against per-platform publishing constraints and reports a
//! per-rule verdict set plus a publish-readiness summary, with optional
//! automatic remediation for fixable violations. It is a pure in-process
//! engine: synchronous, stateless, no I/O.
//!
//! # Example
//!
//! ```
//! use libpostlint::{validate_post, Platform, ValidationContext};
//!
//! let mut ctx = ValidationContext::new("Fresh out of the oven", vec![Platform::Instagram]);
//! ctx.hashtags.push("#sourdough".to_string());
//!
//! let report = validate_post(&ctx);
//! let summary = report.summary();
//! assert!(summary.can_publish);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod limits;
pub mod logging;
pub mod rules;
pub mod status;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use engine::{auto_fix, validate_post, ValidationReport, ValidationSummary};
pub use error::{PostlintError, Result};
pub use limits::{platform_limits, PlatformLimits, BANNED_HASHTAGS};
pub use status::{
    character_status, hashtag_status, media_aspect_status, CharacterStatus, HashtagStatus,
    InlineStatus, MediaAspectStatus,
};
pub use types::{
    AutoFixResult, FixedValue, MediaInfo, MediaType, Platform, PostType, ValidationContext,
    ValidationResult, ValidationStatus,
};
