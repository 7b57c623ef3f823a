//! Rule evaluation and publish-readiness aggregation
//!
//! `validate_post` runs every applicable rule against a context and collects
//! the verdicts into a [`ValidationReport`], an insertion-ordered map keyed
//! by rule id. Evaluation is full and independent: no rule is skipped because
//! an earlier rule failed, so callers always receive the complete picture.

use crate::rules::{find_rule, registry, RuleScope, ValidationRule};
use crate::types::{AutoFixResult, ValidationContext, ValidationResult, ValidationStatus};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

/// Verdicts of one evaluation, keyed by rule id in registry order
///
/// Backed by a vector of pairs: the registry is small, ids are unique, and
/// callers mostly iterate for display, so a linear `get` beats carrying a
/// second index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    entries: Vec<(&'static str, ValidationResult)>,
}

impl ValidationReport {
    fn insert(&mut self, id: &'static str, result: ValidationResult) {
        // Ids are unique in a correct registry; a duplicate overwrites.
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == id) {
            entry.1 = result;
        } else {
            self.entries.push((id, result));
        }
    }

    /// Verdict for a rule id, if the rule was applicable
    pub fn get(&self, id: &str) -> Option<&ValidationResult> {
        self.entries
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, result)| result)
    }

    /// Whether a rule was applicable in this evaluation
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterate verdicts in registry order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ValidationResult)> {
        self.entries.iter().map(|(id, result)| (*id, result))
    }

    /// Number of rules that ran
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no rules were applicable
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reduce the verdicts into counts and a publish gate
    pub fn summary(&self) -> ValidationSummary {
        let mut summary = ValidationSummary {
            errors: 0,
            warnings: 0,
            passed: 0,
            can_publish: true,
        };

        for (_, result) in &self.entries {
            match result.status {
                ValidationStatus::Pass => summary.passed += 1,
                ValidationStatus::Warning => summary.warnings += 1,
                ValidationStatus::Error => summary.errors += 1,
            }
        }

        // Warnings never block publishing.
        summary.can_publish = summary.errors == 0;
        summary
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, result) in &self.entries {
            map.serialize_entry(id, result)?;
        }
        map.end()
    }
}

/// Counts of verdicts by status plus the publish gate
///
/// `can_publish` is advisory: the engine never blocks anything itself, it
/// only reports. Interpreting the gate before a publish action is the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub errors: usize,
    pub warnings: usize,
    pub passed: usize,
    pub can_publish: bool,
}

fn rule_applies(rule: &ValidationRule, ctx: &ValidationContext) -> bool {
    let platform = match rule.scope {
        RuleScope::All => return true,
        RuleScope::Only(platform) => platform,
    };
    if !ctx.targets(platform) {
        return false;
    }

    // A post-type-scoped rule only runs when the context selects one of its
    // post types for the rule's platform.
    match rule.post_types {
        None => true,
        Some(kinds) => ctx
            .post_types
            .get(&platform)
            .is_some_and(|selected| kinds.contains(selected)),
    }
}

/// Evaluate every applicable rule against the context
///
/// Rules are filtered by target platform (and post type, for rules scoped to
/// one), then all of them run; results are keyed by rule id in registration
/// order. Calling twice with the same context yields the same report.
pub fn validate_post(ctx: &ValidationContext) -> ValidationReport {
    let mut report = ValidationReport::default();

    for rule in registry() {
        if !rule_applies(rule, ctx) {
            continue;
        }

        let result = (rule.check)(ctx);
        debug!(rule = rule.id, status = %result.status, "rule evaluated");
        report.insert(rule.id, result);
    }

    let summary = report.summary();
    debug!(
        passed = summary.passed,
        warnings = summary.warnings,
        errors = summary.errors,
        can_publish = summary.can_publish,
        "validation complete"
    );

    report
}

/// Run a rule's auto-fix against the context
///
/// Returns `None` when the rule does not exist, has no auto-fix, or found
/// nothing to fix; callers treat `None` as "skip, nothing changed". The
/// context is never mutated; the result carries the replacement value.
pub fn auto_fix(rule_id: &str, ctx: &ValidationContext) -> Option<AutoFixResult> {
    let rule = find_rule(rule_id)?;
    let fix = rule.auto_fix?;
    fix(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FixedValue, MediaInfo, Platform, PostType};

    #[test]
    fn test_empty_context_all_platforms_passes() {
        for platform in Platform::ALL {
            let ctx = ValidationContext::new("", vec![platform]);
            let report = validate_post(&ctx);

            for (id, result) in report.iter() {
                assert_eq!(
                    result.status,
                    ValidationStatus::Pass,
                    "rule {} should pass an empty context on {}",
                    id,
                    platform
                );
            }
            assert!(report.summary().can_publish);
        }
    }

    #[test]
    fn test_platform_filtering() {
        let mut ctx = ValidationContext::new("a".repeat(2500), vec![Platform::Tiktok]);
        ctx.media.push(MediaInfo::video(1080, 1920, 1, 60.0, "video/mp4"));

        let report = validate_post(&ctx);

        // Instagram's caption rule is not applicable, even though the
        // caption would violate it.
        assert!(!report.contains("caption-length-instagram"));
        assert!(report.contains("video-duration-tiktok"));
        assert!(report.contains("banned-hashtags"));
    }

    #[test]
    fn test_all_scoped_rule_always_runs() {
        let ctx = ValidationContext::new("", vec![Platform::Youtube]);
        let report = validate_post(&ctx);
        assert!(report.contains("banned-hashtags"));
    }

    #[test]
    fn test_post_type_scoped_rules_skipped_without_selection() {
        let mut ctx = ValidationContext::new("", vec![Platform::Instagram]);
        ctx.media.push(MediaInfo::video(1080, 1920, 1, 120.0, "video/mp4"));

        let report = validate_post(&ctx);
        assert!(!report.contains("video-duration-reel"));
        assert!(!report.contains("video-duration-story"));
        assert!(!report.contains("carousel-count-instagram"));
    }

    #[test]
    fn test_reel_rule_runs_when_reel_selected() {
        let mut ctx = ValidationContext::new("", vec![Platform::Instagram]);
        ctx.post_types.insert(Platform::Instagram, PostType::Reel);
        ctx.media.push(MediaInfo::video(1080, 1920, 1, 120.0, "video/mp4"));

        let report = validate_post(&ctx);
        let result = report.get("video-duration-reel").unwrap();
        assert_eq!(result.status, ValidationStatus::Error);
        // The story rule is for a different post type and stays out.
        assert!(!report.contains("video-duration-story"));
    }

    #[test]
    fn test_all_applicable_rules_run_despite_failures() {
        let mut ctx = ValidationContext::new("a".repeat(2500), vec![Platform::Instagram]);
        ctx.hashtags = (0..35).map(|i| format!("#tag{}", i)).collect();

        let report = validate_post(&ctx);
        assert_eq!(
            report.get("caption-length-instagram").unwrap().status,
            ValidationStatus::Error
        );
        assert_eq!(
            report.get("hashtag-count-instagram").unwrap().status,
            ValidationStatus::Error
        );
        // Later rules still ran.
        assert!(report.contains("image-aspect-instagram"));
        assert!(report.contains("image-resolution-instagram"));
    }

    #[test]
    fn test_report_preserves_registry_order() {
        let ctx = ValidationContext::new("", vec![Platform::Instagram, Platform::Bluesky]);
        let report = validate_post(&ctx);

        let ids: Vec<&str> = report.iter().map(|(id, _)| id).collect();
        let expected: Vec<&str> = crate::rules::registry()
            .iter()
            .filter(|rule| ids.contains(&rule.id))
            .map(|rule| rule.id)
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_validate_post_is_idempotent() {
        let mut ctx = ValidationContext::new("hello", vec![Platform::Instagram]);
        ctx.hashtags = vec!["#followforfollow".to_string()];
        ctx.media.push(MediaInfo::image(1000, 600, 1, "image/jpeg"));

        let first = validate_post(&ctx);
        let second = validate_post(&ctx);
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_counts_and_gate() {
        let mut report = ValidationReport::default();
        report.insert("a", ValidationResult::pass("ok"));
        report.insert("b", ValidationResult::pass("ok"));
        report.insert("c", ValidationResult::warning("hm"));
        report.insert("d", ValidationResult::error("no"));

        let summary = report.summary();
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.warnings, 1);
        assert_eq!(summary.errors, 1);
        assert!(!summary.can_publish);
    }

    #[test]
    fn test_warnings_do_not_block_publishing() {
        let mut report = ValidationReport::default();
        report.insert("a", ValidationResult::warning("hm"));
        report.insert("b", ValidationResult::warning("hm"));

        let summary = report.summary();
        assert_eq!(summary.errors, 0);
        assert!(summary.can_publish);
    }

    #[test]
    fn test_empty_report_summary() {
        let report = ValidationReport::default();
        let summary = report.summary();
        assert_eq!(summary.passed, 0);
        assert!(summary.can_publish);
        assert!(report.is_empty());
    }

    #[test]
    fn test_insert_overwrites_duplicate_id() {
        let mut report = ValidationReport::default();
        report.insert("a", ValidationResult::pass("ok"));
        report.insert("a", ValidationResult::error("no"));

        assert_eq!(report.len(), 1);
        assert_eq!(report.get("a").unwrap().status, ValidationStatus::Error);
    }

    #[test]
    fn test_auto_fix_dispatch() {
        let ctx = ValidationContext {
            caption: "a".repeat(2300),
            platforms: vec![Platform::Instagram],
            ..Default::default()
        };

        let fix = auto_fix("caption-length-instagram", &ctx).unwrap();
        assert!(fix.fixed);
        let Some(FixedValue::Caption(caption)) = fix.new_value else {
            panic!("expected a caption fix");
        };
        assert_eq!(caption.chars().count(), 2200);
        // The original context is untouched.
        assert_eq!(ctx.caption.chars().count(), 2300);
    }

    #[test]
    fn test_auto_fix_none_when_nothing_to_fix() {
        let ctx = ValidationContext::new("fine", vec![Platform::Instagram]);
        assert!(auto_fix("caption-length-instagram", &ctx).is_none());
    }

    #[test]
    fn test_auto_fix_unknown_rule_or_unfixable_rule() {
        let ctx = ValidationContext::new("", vec![Platform::Instagram]);
        assert!(auto_fix("no-such-rule", &ctx).is_none());
        assert!(auto_fix("image-aspect-instagram", &ctx).is_none());
    }

    #[test]
    fn test_report_serializes_as_map() {
        let mut ctx = ValidationContext::new("", vec![Platform::Bluesky]);
        ctx.hashtags = vec!["#f4f".to_string()];

        let report = validate_post(&ctx);
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.is_object());
        assert_eq!(json["banned-hashtags"]["status"], "error");
        assert_eq!(json["caption-length-bluesky"]["status"], "pass");
    }
}
