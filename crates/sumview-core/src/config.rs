use std::path::PathBuf;

use crate::constants::DEFAULT_API_BASE;

#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Base URL of the summarizer backend
    pub api_base: String,
    /// Optional log destination (the terminal owns stdout)
    pub log_file: Option<PathBuf>,
}

impl CoreConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            log_file: None,
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
