//! Feedback records: the wire model shared by the browser form and the
//! feedback server, plus validation.
//!
//! The server side (storage and HTTP handlers) only builds for native targets.

#[cfg(not(target_arch = "wasm32"))]
pub mod api;
pub mod client;
#[cfg(not(target_arch = "wasm32"))]
pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Path of the feedback collection on the server
pub const FEEDBACK_PATH: &str = "/api/feedback";

/// Body of `POST /api/feedback`.
///
/// Every field is optional at the parsing boundary so a missing required field
/// surfaces as a validation error rather than a body-parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_discovery: Option<String>,
}

/// A submission that passed validation, ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct ValidFeedback {
    pub name: String,
    pub designation: String,
    pub institute: String,
    pub query: String,
    pub suggestion: Option<String>,
    pub platform_discovery: Option<String>,
}

/// A stored feedback entry. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub institute: String,
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_discovery: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FeedbackRecord {
    pub fn new(id: String, feedback: ValidFeedback, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: feedback.name,
            designation: feedback.designation,
            institute: feedback.institute,
            query: feedback.query,
            suggestion: feedback.suggestion,
            platform_discovery: feedback.platform_discovery,
            created_at,
            updated_at: created_at,
        }
    }
}

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl FeedbackError {
    pub fn is_validation(&self) -> bool {
        matches!(self, FeedbackError::MissingField(_))
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, FeedbackError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(FeedbackError::MissingField(field)),
    }
}

impl FeedbackSubmission {
    /// Check the four required fields. Blank strings count as missing.
    pub fn validate(self) -> Result<ValidFeedback, FeedbackError> {
        Ok(ValidFeedback {
            name: required(self.name, "name")?,
            designation: required(self.designation, "designation")?,
            institute: required(self.institute, "institute")?,
            query: required(self.query, "query")?,
            suggestion: self.suggestion,
            platform_discovery: self.platform_discovery,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FeedbackSubmission {
        FeedbackSubmission {
            name: Some("Ada".to_string()),
            designation: Some("Prof".to_string()),
            institute: Some("X".to_string()),
            query: Some("Q".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_submission_validates() {
        let valid = complete().validate().unwrap();
        assert_eq!(valid.name, "Ada");
        assert_eq!(valid.suggestion, None);
    }

    #[test]
    fn test_each_required_field_is_checked() {
        let cases: [(&str, fn(&mut FeedbackSubmission)); 4] = [
            ("name", |s| s.name = None),
            ("designation", |s| s.designation = None),
            ("institute", |s| s.institute = None),
            ("query", |s| s.query = Some("   ".to_string())),
        ];
        for (field, clear) in cases {
            let mut submission = complete();
            clear(&mut submission);
            match submission.validate() {
                Err(FeedbackError::MissingField(f)) => assert_eq!(f, field),
                other => panic!("expected missing {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_submission_wire_names() {
        let json = r#"{"name":"Ada","designation":"Prof","institute":"X","query":"Q","platformDiscovery":"Search"}"#;
        let submission: FeedbackSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.platform_discovery.as_deref(), Some("Search"));

        let empty: FeedbackSubmission = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, FeedbackSubmission::default());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let created = DateTime::parse_from_rfc3339("2026-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let valid = complete().validate().unwrap();
        let record = FeedbackRecord::new("abc".to_string(), valid, created);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["createdAt"], "2026-03-01T10:00:00Z");
        assert_eq!(value["updatedAt"], value["createdAt"]);
        assert!(value.get("suggestion").is_none());

        let back: FeedbackRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
