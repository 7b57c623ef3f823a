//! postlint - check a social post against platform publishing rules
//!
//! Builds a validation context from the command line, runs the full rule
//! pass, and prints a per-rule report plus a publish-readiness summary.
//! Exits 0 when the post can publish, 1 when errors block it, 3 on bad
//! input.

use clap::Parser;
use libpostlint::logging::{self, LogFormat, LoggingConfig};
use libpostlint::{
    auto_fix, validate_post, MediaInfo, MediaType, Platform, PostType, PostlintError,
    ValidationContext, ValidationStatus,
};
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "postlint", version)]
#[command(about = "Check a social post against platform publishing rules", long_about = None)]
struct Cli {
    /// Caption text (reads from stdin if not provided)
    caption: Option<String>,

    /// Target platforms, comma-separated (falls back to config defaults)
    #[arg(short, long, value_delimiter = ',')]
    platforms: Vec<String>,

    /// Hashtags, comma-separated, `#` prefix optional
    #[arg(long, value_delimiter = ',')]
    hashtags: Vec<String>,

    /// Mention handles, comma-separated
    #[arg(long, value_delimiter = ',')]
    mentions: Vec<String>,

    /// Media item spec, repeatable
    /// (e.g. "type=video,width=1080,height=1920,duration=30,size=1500000")
    #[arg(short, long)]
    media: Vec<String>,

    /// Post type selection per platform, repeatable (e.g. "instagram=reel")
    #[arg(long = "post-type")]
    post_type: Vec<String>,

    /// Output format (text or json; falls back to config, then text)
    #[arg(short, long)]
    format: Option<String>,

    /// Print auto-fix suggestions for fixable findings
    #[arg(long)]
    fix: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // POSTLINT_LOG_FORMAT / POSTLINT_LOG_LEVEL drive logging; --verbose
    // overrides the level with debug.
    if cli.verbose {
        let format = std::env::var("POSTLINT_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(LogFormat::Text);
        LoggingConfig::new(format, "debug".to_string(), true).init();
    } else {
        logging::init_default();
    }

    match run(cli) {
        Ok(can_publish) => {
            if !can_publish {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = e
                .downcast_ref::<PostlintError>()
                .map(PostlintError::exit_code)
                .unwrap_or(1);
            std::process::exit(code);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = libpostlint::Config::load().unwrap_or_else(|e| {
        debug!("using default config: {}", e);
        libpostlint::Config::default_config()
    });

    let caption = match cli.caption {
        Some(caption) => caption,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer.trim_end().to_string()
        }
    };

    let platform_names = if cli.platforms.is_empty() {
        config.defaults.platforms.clone()
    } else {
        cli.platforms
    };
    let platforms = parse_platforms(&platform_names)?;

    let ctx = ValidationContext {
        caption,
        hashtags: cli.hashtags.iter().map(|tag| normalize_hashtag(tag)).collect(),
        mentions: cli.mentions,
        media: parse_media_specs(&cli.media)?,
        platforms,
        post_types: parse_post_types(&cli.post_type)?,
        scheduled_at: None,
    };

    let report = validate_post(&ctx);
    let summary = report.summary();

    let format = cli.format.unwrap_or(config.defaults.format);
    match format.as_str() {
        "json" => print_json(&ctx, &report, cli.fix)?,
        "text" => print_text(&ctx, &report, cli.fix),
        other => {
            return Err(PostlintError::InvalidInput(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))
            .into());
        }
    }

    Ok(summary.can_publish)
}

fn parse_platforms(names: &[String]) -> anyhow::Result<Vec<Platform>> {
    names
        .iter()
        .map(|name| {
            name.parse::<Platform>()
                .map_err(|e| PostlintError::InvalidInput(e).into())
        })
        .collect()
}

/// Ensure a single leading `#`
fn normalize_hashtag(tag: &str) -> String {
    format!("#{}", tag.trim_start_matches('#'))
}

/// Parse one `key=value,key=value` media spec
///
/// Required keys: `type`, `width`, `height`. Optional: `size`, `duration`,
/// `mime` (defaults by media type).
fn parse_media_spec(spec: &str) -> Result<MediaInfo, PostlintError> {
    let invalid = |detail: String| PostlintError::InvalidInput(detail);

    let mut fields: HashMap<&str, &str> = HashMap::new();
    for pair in spec.split(',') {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| invalid(format!("Media spec entry '{}' is not key=value", pair)))?;
        fields.insert(key.trim(), value.trim());
    }

    let media_type = match fields.get("type") {
        Some(&"image") => MediaType::Image,
        Some(&"video") => MediaType::Video,
        Some(other) => {
            return Err(invalid(format!(
                "Media type must be 'image' or 'video', got '{}'",
                other
            )))
        }
        None => return Err(invalid("Media spec is missing 'type'".to_string())),
    };

    let parse_u32 = |key: &str| -> Result<u32, PostlintError> {
        fields
            .get(key)
            .ok_or_else(|| invalid(format!("Media spec is missing '{}'", key)))?
            .parse()
            .map_err(|_| invalid(format!("Media spec '{}' is not a number", key)))
    };

    let width = parse_u32("width")?;
    let height = parse_u32("height")?;
    let size: u64 = match fields.get("size") {
        Some(value) => value
            .parse()
            .map_err(|_| invalid("Media spec 'size' is not a number".to_string()))?,
        None => 0,
    };
    let duration: Option<f64> = match fields.get("duration") {
        Some(value) => Some(
            value
                .parse()
                .map_err(|_| invalid("Media spec 'duration' is not a number".to_string()))?,
        ),
        None => None,
    };

    let default_mime = match media_type {
        MediaType::Image => "image/jpeg",
        MediaType::Video => "video/mp4",
    };
    let mime = fields.get("mime").copied().unwrap_or(default_mime);

    let media = match media_type {
        MediaType::Image => MediaInfo::image(width, height, size, mime),
        MediaType::Video => {
            let mut media = MediaInfo::video(width, height, size, 0.0, mime);
            // A spec without a duration stays unknown so duration rules skip it.
            media.duration = duration;
            media
        }
    };
    Ok(media)
}

fn parse_media_specs(specs: &[String]) -> Result<Vec<MediaInfo>, PostlintError> {
    specs.iter().map(|spec| parse_media_spec(spec)).collect()
}

/// Parse repeated `platform=post_type` selections
fn parse_post_types(pairs: &[String]) -> Result<HashMap<Platform, PostType>, PostlintError> {
    let mut post_types = HashMap::new();
    for pair in pairs {
        let (platform, post_type) = pair.split_once('=').ok_or_else(|| {
            PostlintError::InvalidInput(format!(
                "Post type '{}' is not platform=type (e.g. instagram=reel)",
                pair
            ))
        })?;
        let platform: Platform = platform.parse().map_err(PostlintError::InvalidInput)?;
        let post_type: PostType = post_type.parse().map_err(PostlintError::InvalidInput)?;
        post_types.insert(platform, post_type);
    }
    Ok(post_types)
}

fn print_text(ctx: &ValidationContext, report: &libpostlint::ValidationReport, fix: bool) {
    for (id, result) in report.iter() {
        let label = match result.status {
            ValidationStatus::Pass => "PASS",
            ValidationStatus::Warning => "WARN",
            ValidationStatus::Error => "FAIL",
        };
        println!("[{}] {}: {}", label, id, result.message);
        if let Some(details) = &result.details {
            println!("       {}", details);
        }
        if fix && result.can_auto_fix {
            if let Some(suggestion) = auto_fix(id, ctx) {
                println!("  fix: {}", suggestion.message);
            }
        }
    }

    let summary = report.summary();
    println!(
        "\n{} passed, {} warning(s), {} error(s)",
        summary.passed, summary.warnings, summary.errors
    );
    if summary.can_publish {
        println!("Ready to publish");
    } else {
        println!("Not ready to publish");
    }
}

fn print_json(
    ctx: &ValidationContext,
    report: &libpostlint::ValidationReport,
    fix: bool,
) -> anyhow::Result<()> {
    let mut output = serde_json::json!({
        "results": report,
        "summary": report.summary(),
    });

    if fix {
        let mut fixes = serde_json::Map::new();
        for (id, result) in report.iter() {
            if result.can_auto_fix {
                if let Some(suggestion) = auto_fix(id, ctx) {
                    fixes.insert(id.to_string(), serde_json::to_value(suggestion)?);
                }
            }
        }
        output["fixes"] = serde_json::Value::Object(fixes);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
