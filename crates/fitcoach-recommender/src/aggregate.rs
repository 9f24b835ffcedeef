//! Turn a parsed model response into display sections
//!
//! Absent keys are never errors: a missing analysis entry is skipped and an
//! empty or missing list gets a placeholder. Only the document shape is
//! checked: a non-object root or `analysis`, or a list key holding something
//! other than an array, is an [`RecommenderError::Aggregation`] and sends the
//! pipeline to the fallback. Malformed entries inside a list degrade to empty
//! text instead.

use crate::error::RecommenderError;
use crate::lookup::field;
use crate::parser::ParsedDocument;
use serde_json::Value;

/// Analysis keys in narrative order, with their display labels
///
/// The heart-rate key is spelled the way the prompt's schema spells it.
pub(crate) const ANALYSIS_FIELDS: [(&str, &str); 4] = [
    ("overall", "Overall"),
    ("pace", "Pace"),
    ("hearRate", "Heart Rate"),
    ("caloriesBurned", "Calories Burned "),
];

/// Accepted when a model corrects the schema's `hearRate` spelling
const HEART_RATE_ALIAS: &str = "heartRate";

pub(crate) const IMPROVEMENT_FIELDS: [&str; 2] = ["area", "recommendation"];
pub(crate) const SUGGESTION_FIELDS: [&str; 2] = ["workout", "description"];

/// Placeholder when no improvements were extracted
pub const NO_IMPROVEMENTS: &str = "No specific Improvements provided";
/// Placeholder when no suggestions were extracted
pub const NO_SUGGESTIONS: &str = "No specific suggestions provided";
/// Placeholder when no safety guidelines were extracted
pub const NO_SAFETY: &str = "No specific safetyGuideLines provided";

/// The four optional analysis sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisSections {
    /// Overall assessment
    pub overall: Option<String>,
    /// Pace assessment
    pub pace: Option<String>,
    /// Heart-rate assessment
    pub heart_rate: Option<String>,
    /// Calorie assessment
    pub calories_burned: Option<String>,
}

impl AnalysisSections {
    /// Flatten present sections into `"<Label>: <value>"` paragraphs
    ///
    /// Returns an empty string when every section is absent.
    pub fn narrative(&self) -> String {
        let values = [
            &self.overall,
            &self.pace,
            &self.heart_rate,
            &self.calories_burned,
        ];

        let mut narrative = String::new();
        for ((_, label), value) in ANALYSIS_FIELDS.iter().zip(values) {
            if let Some(value) = value {
                narrative.push_str(&format!("{}: {}\n\n", label, value));
            }
        }
        narrative.trim_end().to_string()
    }
}

/// Aggregated, display-ready sections of a model response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    /// Flattened analysis; empty when the response had none
    pub narrative: String,
    /// `"<area>: <recommendation>"` entries, never empty
    pub improvements: Vec<String>,
    /// `"<workout>: <description>"` entries, never empty
    pub suggestions: Vec<String>,
    /// Safety guidelines, never empty
    pub safety: Vec<String>,
}

/// Read every section out of a parsed response
pub fn aggregate(doc: &ParsedDocument) -> Result<Sections, RecommenderError> {
    let root = doc.root();
    if !root.is_object() {
        return Err(RecommenderError::Aggregation(
            "response is not a JSON object".to_string(),
        ));
    }

    let narrative = read_analysis(root)?.narrative();
    let improvements = read_pairs(root, "improvements", IMPROVEMENT_FIELDS)?;
    let suggestions = read_pairs(root, "suggestions", SUGGESTION_FIELDS)?;
    let safety = read_list(root, "safety")?.iter().map(display_text).collect();

    Ok(Sections {
        narrative,
        improvements: or_placeholder(improvements, NO_IMPROVEMENTS),
        suggestions: or_placeholder(suggestions, NO_SUGGESTIONS),
        safety: or_placeholder(safety, NO_SAFETY),
    })
}

/// Read the `analysis` object; absent or null yields no sections
pub fn read_analysis(root: &Value) -> Result<AnalysisSections, RecommenderError> {
    let analysis = match field(root, &["analysis".into()]) {
        None | Some(Value::Null) => return Ok(AnalysisSections::default()),
        Some(obj @ Value::Object(_)) => obj,
        Some(_) => {
            return Err(RecommenderError::Aggregation(
                "'analysis' is not an object".to_string(),
            ))
        }
    };

    let [overall, pace, heart_rate, calories] = ANALYSIS_FIELDS.map(|(key, _)| key);

    let heart_rate =
        section(analysis, heart_rate).or_else(|| section(analysis, HEART_RATE_ALIAS));

    Ok(AnalysisSections {
        overall: section(analysis, overall),
        pace: section(analysis, pace),
        heart_rate,
        calories_burned: section(analysis, calories),
    })
}

fn section(analysis: &Value, key: &str) -> Option<String> {
    match field(analysis, &[key.into()]) {
        None | Some(Value::Null) => None,
        Some(value) => Some(display_text(value)),
    }
}

/// Array under `key`; absent or null reads as empty
fn read_list<'v>(root: &'v Value, key: &str) -> Result<&'v [Value], RecommenderError> {
    match field(root, &[key.into()]) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(RecommenderError::Aggregation(format!(
            "'{}' is not an array",
            key
        ))),
    }
}

/// Collapse each entry in `key` to `"<first>: <second>"`
///
/// An entry that is not an object has neither field and renders `": "`.
fn read_pairs(
    root: &Value,
    key: &str,
    [first, second]: [&str; 2],
) -> Result<Vec<String>, RecommenderError> {
    let pairs = read_list(root, key)?
        .iter()
        .map(|item| {
            let a = item.get(first).map(display_text).unwrap_or_default();
            let b = item.get(second).map(display_text).unwrap_or_default();
            format!("{}: {}", a, b)
        })
        .collect();
    Ok(pairs)
}

/// Scalar as display text; null and nested structures are empty
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn or_placeholder(items: Vec<String>, placeholder: &str) -> Vec<String> {
    if items.is_empty() {
        vec![placeholder.to_string()]
    } else {
        items
    }
}
