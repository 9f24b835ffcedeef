//! LLM prompt engineering for activity analysis

use fitcoach_domain::Activity;
use serde_json::{Map, Value};

/// Builds the analysis prompt for a single activity
///
/// Output is a pure function of the activity: no clock, locale or map
/// iteration order leaks into it.
pub struct PromptBuilder<'a> {
    activity: &'a Activity,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(activity: &'a Activity) -> Self {
        Self { activity }
    }

    /// Build the complete analysis prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Instruction and response schema
        prompt.push_str(RESPONSE_SCHEMA_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The activity to analyze
        prompt.push_str("Analyze this activity:\n");
        prompt.push_str(&format!("Activity Type: {}\n", self.activity.activity_type));
        prompt.push_str(&format!("Duration: {} minutes\n", self.activity.duration));
        prompt.push_str(&format!("Calories Burned: {}\n", self.activity.calories_burned));
        prompt.push_str(&format!("Additional Metrics: {}\n\n", self.render_metrics()));

        // 3. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }

    /// Render additional metrics as compact JSON with sorted keys
    fn render_metrics(&self) -> String {
        let metrics: Map<String, Value> = self
            .activity
            .additional_metrics
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Value::Object(metrics).to_string()
    }
}

// Keys here must match the ones read in `aggregate.rs`.
const RESPONSE_SCHEMA_INSTRUCTIONS: &str = r#"Analyze the fitness activity and provide detailed recommendations in the following format:

{
  "analysis": {
    "overall": "Overall analysis here",
    "pace": "Pace analysis here",
    "hearRate": "Heart rate analysis here",
    "caloriesBurned": "Calories analysis here"
  },
  "improvements": [
    {
      "area": "Area name",
      "recommendation": "Detailed recommendation"
    }
  ],
  "suggestions": [
    {
      "workout": "Workout name",
      "description": "Detailed workout description"
    }
  ],
  "safety": [
    "Safety point 1",
    "Safety point 2"
  ]
}"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Provide detailed analysis focusing on performance, improvements, next workout suggestions and safety guidelines.
Ensure the response follows the exact JSON format shown above."#;
