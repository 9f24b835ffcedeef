//! Recommendation module - the structured output of an activity analysis

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Activity;

/// A coaching recommendation for a single activity
///
/// Recommendations are immutable once built. The durable identifier is
/// assigned by the persistence layer through [`Recommendation::with_id`],
/// which consumes the value and returns a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    activity_id: String,
    user_id: String,
    activity_type: String,
    recommendation: String,
    improvements: Vec<String>,
    suggestions: Vec<String>,
    safety: Vec<String>,
    created_at: DateTime<Utc>,
}

impl Recommendation {
    /// Assemble a recommendation for `activity`
    ///
    /// Identity fields are copied from the activity; no id is assigned.
    pub fn new(
        activity: &Activity,
        recommendation: String,
        improvements: Vec<String>,
        suggestions: Vec<String>,
        safety: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            activity_id: activity.id.clone(),
            user_id: activity.user_id.clone(),
            activity_type: activity.activity_type.clone(),
            recommendation,
            improvements,
            suggestions,
            safety,
            created_at,
        }
    }

    /// Return a copy carrying the identifier assigned by storage
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Storage identifier, if one has been assigned
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Activity this recommendation was generated for
    pub fn activity_id(&self) -> &str {
        &self.activity_id
    }

    /// Owner of the activity
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Activity label copied from the activity
    pub fn activity_type(&self) -> &str {
        &self.activity_type
    }

    /// Narrative analysis text
    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    /// Improvement areas, one display string each
    pub fn improvements(&self) -> &[String] {
        &self.improvements
    }

    /// Next-workout suggestions, one display string each
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Safety guidelines
    pub fn safety(&self) -> &[String] {
        &self.safety
    }

    /// When the recommendation was assembled
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Compare everything except the creation timestamp and storage id
    pub fn same_content(&self, other: &Recommendation) -> bool {
        self.activity_id == other.activity_id
            && self.user_id == other.user_id
            && self.activity_type == other.activity_type
            && self.recommendation == other.recommendation
            && self.improvements == other.improvements
            && self.suggestions == other.suggestions
            && self.safety == other.safety
    }
}
