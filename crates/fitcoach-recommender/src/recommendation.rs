//! Recommendation assembly

use chrono::Utc;
use fitcoach_domain::{Activity, Recommendation};

/// Assemble a recommendation for `activity`, stamped with the current time
pub fn build_recommendation(
    activity: &Activity,
    narrative: String,
    improvements: Vec<String>,
    suggestions: Vec<String>,
    safety: Vec<String>,
) -> Recommendation {
    Recommendation::new(
        activity,
        narrative,
        improvements,
        suggestions,
        safety,
        Utc::now(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_build_stamps_creation_time() {
        let start = NaiveDate::from_ymd_opt(2025, 2, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let activity = Activity::new("act-1", "user-1", "YOGA", 50, 180, start);

        let before = Utc::now();
        let rec = build_recommendation(
            &activity,
            "Overall: Calm".to_string(),
            vec!["Balance: Hold poses longer".to_string()],
            vec!["Flow: 30 minute vinyasa".to_string()],
            vec!["Use a mat".to_string()],
        );
        let after = Utc::now();

        assert!(rec.created_at() >= before && rec.created_at() <= after);
        assert_eq!(rec.activity_id(), "act-1");
        assert_eq!(rec.recommendation(), "Overall: Calm");
        assert_eq!(rec.safety(), ["Use a mat".to_string()]);
    }
}
