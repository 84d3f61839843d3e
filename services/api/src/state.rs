//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds all shared,
//! clonable resources like the database pool and the lesson service.

use crate::config::Config;
use learnagent_core::LessonService;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<crate::db::Db>,
    pub lesson_service: Arc<LessonService>,
    pub config: Arc<Config>,
}
