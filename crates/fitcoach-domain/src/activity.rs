//! Activity module - a recorded workout submitted for analysis

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A recorded fitness activity
///
/// Activities arrive already validated and persisted; this crate never
/// mutates them. `additional_metrics` is an ordered map so anything rendered
/// from it is deterministic regardless of how the caller built it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Identifier assigned by the activity store
    pub id: String,

    /// Owner of the activity
    pub user_id: String,

    /// Activity label, e.g. "RUNNING" or "CYCLING"
    #[serde(rename = "type")]
    pub activity_type: String,

    /// Duration in whole minutes
    pub duration: u32,

    /// Calories burned during the activity
    pub calories_burned: u32,

    /// When the activity started
    pub start_time: NaiveDateTime,

    /// Free-form extra metrics (distance, average speed, max heart rate...)
    #[serde(default)]
    pub additional_metrics: BTreeMap<String, Value>,
}

impl Activity {
    /// Create a new activity with no additional metrics
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        activity_type: impl Into<String>,
        duration: u32,
        calories_burned: u32,
        start_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            activity_type: activity_type.into(),
            duration,
            calories_burned,
            start_time,
            additional_metrics: BTreeMap::new(),
        }
    }

    /// Attach an additional metric
    pub fn with_metric(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional_metrics.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_activity_wire_format_uses_type_key() {
        let activity = Activity::new("act-1", "user-1", "RUNNING", 45, 420, start())
            .with_metric("distance", 8.2);

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "RUNNING");
        assert_eq!(json["userId"], "user-1");
        assert_eq!(json["caloriesBurned"], 420);
        assert_eq!(json["additionalMetrics"]["distance"], 8.2);
    }

    #[test]
    fn test_activity_deserializes_without_metrics() {
        let json = r#"{
            "id": "act-2",
            "userId": "user-9",
            "type": "SWIMMING",
            "duration": 30,
            "caloriesBurned": 250,
            "startTime": "2025-03-14T07:30:00"
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.activity_type, "SWIMMING");
        assert_eq!(activity.start_time, start());
        assert!(activity.additional_metrics.is_empty());
    }

    #[test]
    fn test_metrics_are_key_ordered() {
        let activity = Activity::new("a", "u", "WALKING", 10, 40, start())
            .with_metric("zone", 2)
            .with_metric("avgSpeed", 5.1);

        let keys: Vec<_> = activity.additional_metrics.keys().cloned().collect();
        assert_eq!(keys, vec!["avgSpeed".to_string(), "zone".to_string()]);
    }
}
