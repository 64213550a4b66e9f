//! Environment-driven configuration with local-validator defaults.

use std::str::FromStr;

use solana_sdk::pubkey::Pubkey;
use vault_client::addresses;

use crate::error::{ApiError, Result};

pub const DEFAULT_PORT: u16 = 4001;
pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rpc_url: String,
    pub vault_program_id: Pubkey,
}

impl Config {
    /// Read configuration from the environment (and any `.env` file already
    /// loaded). Missing variables fall back to the local validator defaults;
    /// present but unparsable ones are an error.
    pub fn from_env() -> Result<Self> {
        let port = match dotenv::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| ApiError::InvalidConfig(format!("PORT: {e}")))?,
            Err(_) => DEFAULT_PORT,
        };

        let rpc_url = dotenv::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());

        let vault_program_id = match dotenv::var("VAULT_PROGRAM_ID") {
            Ok(raw) => Pubkey::from_str(&raw)
                .map_err(|e| ApiError::InvalidConfig(format!("VAULT_PROGRAM_ID: {e}")))?,
            Err(_) => addresses::BULK_PROGRAM_ID,
        };

        Ok(Self {
            port,
            rpc_url,
            vault_program_id,
        })
    }
}
