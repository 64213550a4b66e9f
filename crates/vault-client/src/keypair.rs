//! Signer bootstrap: load the keypair from the environment or generate one,
//! then top it up via airdrop on the local validator.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    signature::{Keypair, Signer},
};

use crate::errors::{ClientError, Result};

/// How the signer is sourced and funded.
#[derive(Debug, Clone)]
pub struct KeypairConfig {
    /// Environment variable holding the secret key as a JSON byte array.
    pub env_variable: String,
    /// Airdrop target when the signer balance is below it. Zero disables the
    /// airdrop entirely.
    pub airdrop_lamports: u64,
}

impl Default for KeypairConfig {
    fn default() -> Self {
        Self {
            env_variable: "PRIVATE_KEY".to_string(),
            airdrop_lamports: crate::LAMPORTS_PER_SOL,
        }
    }
}

/// Load the signer from the environment, or generate a fresh one, and make
/// sure it can pay fees.
pub async fn initialize_keypair(client: &RpcClient, config: &KeypairConfig) -> Result<Keypair> {
    let keypair = match dotenv::var(&config.env_variable) {
        Ok(raw) => keypair_from_json(&raw)?,
        Err(_) => {
            let keypair = Keypair::new();
            tracing::info!(pubkey = %keypair.pubkey(), "generated ephemeral signer");
            keypair
        }
    };

    if config.airdrop_lamports > 0 {
        ensure_funded(client, &keypair, config.airdrop_lamports).await?;
    }

    Ok(keypair)
}

fn keypair_from_json(raw: &str) -> Result<Keypair> {
    let bytes: Vec<u8> = serde_json::from_str(raw)
        .map_err(|e| ClientError::InvalidKeypair(format!("not a JSON byte array: {e}")))?;
    Keypair::try_from(bytes.as_slice()).map_err(|e| ClientError::InvalidKeypair(e.to_string()))
}

async fn ensure_funded(client: &RpcClient, keypair: &Keypair, lamports: u64) -> Result<()> {
    let balance = client.get_balance(&keypair.pubkey()).await?;
    if balance >= lamports {
        return Ok(());
    }

    let signature = client
        .request_airdrop(&keypair.pubkey(), lamports)
        .await
        .map_err(|e| ClientError::AirdropFailed(e.to_string()))?;
    let blockhash = client.get_latest_blockhash().await?;
    client
        .confirm_transaction_with_spinner(&signature, &blockhash, CommitmentConfig::confirmed())
        .await
        .map_err(|e| ClientError::AirdropFailed(e.to_string()))?;

    tracing::info!(pubkey = %keypair.pubkey(), lamports, "airdrop confirmed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypair_from_json_round_trips() {
        let keypair = Keypair::new();
        let raw = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();
        let parsed = keypair_from_json(&raw).unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
    }

    #[test]
    fn keypair_from_json_rejects_garbage() {
        assert!(keypair_from_json("not json").is_err());
        assert!(keypair_from_json("[1,2,3]").is_err());
    }
}
