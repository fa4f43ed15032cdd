use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "SENSOR";

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    pub telemetry_enabled: bool,
    #[validate(length(min = 1))]
    pub telemetry_prefix: String,
    #[validate(range(min = 1.0))]
    pub telemetry_factor: f32,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}
