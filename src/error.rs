//! Configuration errors

/// Errors raised while building or loading a playfield
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Geometry value that would break the physics math
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfiguration { field: &'static str, value: f32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, value: f32) -> Self {
        ConfigError::InvalidConfiguration { field, value }
    }
}
