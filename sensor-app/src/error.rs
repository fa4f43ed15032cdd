use common::subject_observer::ObserverError;
use config::ConfigError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unable to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationErrors),
    #[error("Broadcast interrupted: {0}")]
    Broadcast(#[from] ObserverError),
}
