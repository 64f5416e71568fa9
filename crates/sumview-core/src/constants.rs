//! Application-wide constants
//!
//! Centralized location for magic strings and configuration values
//! that are used across multiple modules.

/// Default backend API base URL (the FastAPI summarizer service)
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Environment variable consulted for the tracing filter directive
pub const LOG_FILTER_ENV: &str = "SUMVIEW_LOG";

/// Default filter directive when LOG_FILTER_ENV is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
