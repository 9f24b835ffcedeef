//! Generic recommendation used when a response cannot be read

use crate::recommendation::build_recommendation;
use fitcoach_domain::{Activity, Recommendation};

/// Narrative of the fallback recommendation
pub const FALLBACK_NARRATIVE: &str = "Unable to generate detailed analysis";

const FALLBACK_IMPROVEMENT: &str = "Continue with your current workout";
const FALLBACK_SUGGESTION: &str = "Consult a fitness trainer";
const FALLBACK_SAFETY: [&str; 3] = [
    "Always warmup before exercise",
    "Stay hydrated",
    "Listen to your body",
];

/// Fixed recommendation for `activity`
pub fn fallback(activity: &Activity) -> Recommendation {
    build_recommendation(
        activity,
        FALLBACK_NARRATIVE.to_string(),
        vec![FALLBACK_IMPROVEMENT.to_string()],
        vec![FALLBACK_SUGGESTION.to_string()],
        FALLBACK_SAFETY.iter().map(|s| s.to_string()).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fallback_content() {
        let start = NaiveDate::from_ymd_opt(2025, 4, 4)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let activity = Activity::new("act-9", "user-2", "HIIT", 20, 300, start);

        let rec = fallback(&activity);

        assert_eq!(rec.activity_id(), "act-9");
        assert_eq!(rec.user_id(), "user-2");
        assert_eq!(rec.activity_type(), "HIIT");
        assert_eq!(rec.recommendation(), "Unable to generate detailed analysis");
        assert_eq!(rec.improvements(), ["Continue with your current workout"]);
        assert_eq!(rec.suggestions(), ["Consult a fitness trainer"]);
        assert_eq!(
            rec.safety(),
            ["Always warmup before exercise", "Stay hydrated", "Listen to your body"]
        );
    }
}
