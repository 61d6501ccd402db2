// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Config, Dashboard};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, validates it, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        // Optionally, one could add environment variables here as well.
        // .add_source(config::Environment::with_prefix("VANTAGE"));
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.dashboard.top_products == 0 {
        return Err(ConfigError::Validation(
            "dashboard.top_products must be at least 1".to_string(),
        ));
    }
    if let (Some(start), Some(end)) = (config.dashboard.start_date, config.dashboard.end_date)
        && start > end
    {
        return Err(ConfigError::Validation(format!(
            "dashboard.start_date {start} is after dashboard.end_date {end}"
        )));
    }
    Ok(())
}
