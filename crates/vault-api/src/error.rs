use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Service error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Client(#[from] vault_client::ClientError),
}
