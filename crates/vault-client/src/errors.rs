use solana_sdk::pubkey::ParsePubkeyError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid pubkey: {0}")]
    InvalidPubkey(#[from] ParsePubkeyError),

    #[error("Invalid keypair material: {0}")]
    InvalidKeypair(String),

    #[error("Airdrop failed: {0}")]
    AirdropFailed(String),

    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<solana_client::client_error::ClientError> for ClientError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        ClientError::RpcError(err.to_string())
    }
}
