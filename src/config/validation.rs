use crate::config::types::{Config, InputConfig, OutputConfig, ProbeConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_input_config(&config.input)?;
    validate_output_config(&config.output)?;
    validate_probe_config(&config.probe)?;
    validate_distinct_paths(config)?;
    Ok(())
}

/// Validates input configuration
fn validate_input_config(config: &InputConfig) -> Result<(), ConfigError> {
    if config.path.is_empty() {
        return Err(ConfigError::Validation(
            "input path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.extracts_path.is_empty() {
        return Err(ConfigError::Validation(
            "extracts_path cannot be empty".to_string(),
        ));
    }

    if config.failures_path.is_empty() {
        return Err(ConfigError::Validation(
            "failures_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates probe configuration
fn validate_probe_config(config: &ProbeConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if !config.sitemap_path.starts_with('/') || config.sitemap_path.len() < 2 {
        return Err(ConfigError::Validation(format!(
            "sitemap_path must be an absolute path such as '/sitemap.xml', got '{}'",
            config.sitemap_path
        )));
    }

    if config.max_redirects > 100 {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be at most 100, got {}",
            config.max_redirects
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be blank".to_string(),
        ));
    }

    Ok(())
}

/// The input and both outputs must be three different files
fn validate_distinct_paths(config: &Config) -> Result<(), ConfigError> {
    let input = &config.input.path;
    let extracts = &config.output.extracts_path;
    let failures = &config.output.failures_path;

    if extracts == failures {
        return Err(ConfigError::Validation(format!(
            "extracts_path and failures_path must differ, both are '{}'",
            extracts
        )));
    }

    if input == extracts || input == failures {
        return Err(ConfigError::Validation(format!(
            "input path '{}' would be overwritten by an output file",
            input
        )));
    }

    Ok(())
}
