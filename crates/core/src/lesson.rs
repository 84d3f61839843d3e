//! Lesson Request and Result Types
//!
//! A `LessonRequest` describes what the learner asked for. A `LessonResult` is
//! the mapping handed back to callers, produced by normalizing the raw text of
//! the generative service through `LessonBody`.

use crate::error::LessonError;
use serde_json::{Map, Value};

pub const DEFAULT_LEVEL: &str = "Beginner";
pub const DEFAULT_PREFERENCE: &str = "Theoretical";

/// Key used when the service reply is not a structured mapping.
pub const PLAIN_TEXT_KEY: &str = "lesson_content";

/// The lesson payload returned to callers. Never empty.
pub type LessonResult = Map<String, Value>;

/// The parameters of a single lesson request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRequest {
    pub topic: String,
    pub level: String,
    pub preference: String,
}

impl LessonRequest {
    /// Creates a request with the default level and preference.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            level: DEFAULT_LEVEL.to_string(),
            preference: DEFAULT_PREFERENCE.to_string(),
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_preference(mut self, preference: impl Into<String>) -> Self {
        self.preference = preference.into();
        self
    }

    /// Rejects a blank topic. Level and preference are free text and pass through.
    pub fn validate(&self) -> Result<(), LessonError> {
        if self.topic.trim().is_empty() {
            return Err(LessonError::Validation);
        }
        Ok(())
    }
}

/// The two shapes a service reply can take once normalized.
#[derive(Debug, Clone, PartialEq)]
pub enum LessonBody {
    /// The reply parsed as a non-empty JSON object. Keys are kept as-is.
    Structured(Map<String, Value>),
    /// Anything else, kept verbatim.
    PlainText(String),
}

impl LessonBody {
    /// Normalizes raw service content. Never fails.
    pub fn from_content(content: String) -> Self {
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) if !map.is_empty() => LessonBody::Structured(map),
            _ => LessonBody::PlainText(content),
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, LessonBody::Structured(_))
    }

    /// Collapses both variants into the external mapping shape.
    pub fn into_result(self) -> LessonResult {
        match self {
            LessonBody::Structured(map) => map,
            LessonBody::PlainText(text) => {
                let mut map = Map::new();
                map.insert(PLAIN_TEXT_KEY.to_string(), Value::String(text));
                map
            }
        }
    }
}
