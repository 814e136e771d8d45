//! Assessment Configuration

/// Assessment application configuration
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    /// Questions returned by the debug sample route
    pub sample_size: usize,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self { sample_size: 5 }
    }
}
