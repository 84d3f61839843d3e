//! Lesson generation core: prompt composition, the generative service client
//! boundary, response normalization, and the `LessonService` facade.

pub mod error;
pub mod lesson;
pub mod llm_client;
pub mod prompt;
pub mod service;

pub use error::{LessonError, ServiceError};
pub use lesson::{LessonRequest, LessonResult};
pub use service::{GenerationSettings, LessonService};
