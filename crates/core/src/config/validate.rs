use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Upstream page size stays within the provider's 1-50 window
/// - Timeout and retry settings are usable
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Video search validation
    let search = &config.video_search;
    if search.max_results == 0 || search.max_results > 50 {
        return Err(ConfigError::ValidationError(
            "video_search.max_results must be between 1 and 50".to_string(),
        ));
    }
    if search.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "video_search.timeout_secs cannot be 0".to_string(),
        ));
    }
    if search.retry.max_attempts == 0 {
        return Err(ConfigError::ValidationError(
            "video_search.retry.max_attempts must be at least 1".to_string(),
        ));
    }
    if search.retry.base_delay_secs > search.retry.max_delay_secs {
        return Err(ConfigError::ValidationError(
            "video_search.retry.base_delay_secs cannot exceed max_delay_secs".to_string(),
        ));
    }

    Ok(())
}
