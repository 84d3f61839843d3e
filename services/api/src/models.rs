//! API and Database Models
//!
//! This module defines the core data structures used for both database mapping
//! with `sqlx` and for generating OpenAPI documentation with `utoipa`.

use chrono::{DateTime, Utc};
use learnagent_core::{LessonRequest, LessonResult};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, FromRow, Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, FromRow, Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub total_points: i64,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateUserPayload {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginQuery {
    /// Email address the user registered with.
    pub email: String,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LessonQuery {
    /// Topic of the lesson.
    pub topic: String,
    /// Learner level, e.g. Beginner, Intermediate or Advanced.
    pub level: Option<String>,
    /// Learning preference, e.g. Theoretical or Practical.
    pub preference: Option<String>,
    /// User to award points to once the lesson is generated.
    pub user_id: Option<i64>,
}

impl LessonQuery {
    /// Builds the core request, applying the default level and preference.
    pub fn to_request(&self) -> LessonRequest {
        let mut request = LessonRequest::new(self.topic.clone());
        if let Some(level) = &self.level {
            request = request.with_level(level.clone());
        }
        if let Some(preference) = &self.preference {
            request = request.with_preference(preference.clone());
        }
        request
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct LessonResponse {
    #[schema(example = "machine learning")]
    pub topic: String,
    /// Lesson sections, or `{"lesson_content": "..."}` for plain text replies.
    #[schema(value_type = Object)]
    pub content: LessonResult,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn lesson_query(level: Option<&str>, preference: Option<&str>) -> LessonQuery {
        LessonQuery {
            topic: "Recursion".to_string(),
            level: level.map(str::to_string),
            preference: preference.map(str::to_string),
            user_id: None,
        }
    }

    #[test]
    fn test_lesson_query_defaults() {
        let request = lesson_query(None, None).to_request();
        assert_eq!(request.topic, "Recursion");
        assert_eq!(request.level, "Beginner");
        assert_eq!(request.preference, "Theoretical");
    }

    #[test]
    fn test_lesson_query_overrides() {
        let request = lesson_query(Some("Advanced"), Some("Practical")).to_request();
        assert_eq!(request.level, "Advanced");
        assert_eq!(request.preference, "Practical");
    }

    #[test]
    fn test_user_serialization() {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let user = User {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            total_points: 30,
            created_at,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], json!(7));
        assert_eq!(value["email"], json!("ada@example.com"));
        assert_eq!(value["total_points"], json!(30));

        let deserialized: User = serde_json::from_value(value).unwrap();
        assert_eq!(deserialized, user);
    }

    #[test]
    fn test_create_user_payload_missing_field() {
        let result: Result<CreateUserPayload, _> = serde_json::from_str(r#"{"name": "Ada"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_lesson_response_shape() {
        let mut content = LessonResult::new();
        content.insert("lesson_content".to_string(), json!("# Hello"));
        let response = LessonResponse {
            topic: "greetings".to_string(),
            content,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r##"{"topic":"greetings","content":{"lesson_content":"# Hello"}}"##
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse {
            message: "User not found".to_string(),
        };

        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"message":"User not found"}"#);
    }
}
