//! Raw envelope to recommendation
//!
//! ```text
//! envelope → extract_text → clean → parse → aggregate → build_recommendation
//!     └──────────── any error ───────────→ fallback
//! ```

use crate::aggregate::aggregate;
use crate::envelope::extract_text;
use crate::error::RecommenderError;
use crate::fallback::fallback;
use crate::parser::parse;
use crate::recommendation::build_recommendation;
use crate::sanitize::clean;
use fitcoach_domain::{Activity, Recommendation};
use tracing::{debug, warn};

/// Turn a raw provider envelope into a recommendation
///
/// Never fails: any extraction, parse or aggregation error is logged by kind
/// and replaced with the fallback recommendation for `activity`.
pub fn process_response(activity: &Activity, raw: &str) -> Recommendation {
    match try_process_response(activity, raw) {
        Ok(recommendation) => recommendation,
        Err(e) => {
            warn!(
                activity_id = %activity.id,
                error_kind = e.kind(),
                "Falling back to generic recommendation: {}",
                e
            );
            fallback(activity)
        }
    }
}

/// Like [`process_response`], but surfaces the first failing stage
pub fn try_process_response(
    activity: &Activity,
    raw: &str,
) -> Result<Recommendation, RecommenderError> {
    let text = extract_text(raw)?;
    debug!("Extracted {} chars of model text", text.len());

    let cleaned = clean(&text);
    let doc = parse(&cleaned)?;
    let sections = aggregate(&doc)?;

    debug!(
        "Aggregated {} improvements, {} suggestions, {} safety guidelines",
        sections.improvements.len(),
        sections.suggestions.len(),
        sections.safety.len()
    );

    Ok(build_recommendation(
        activity,
        sections.narrative,
        sections.improvements,
        sections.suggestions,
        sections.safety,
    ))
}
