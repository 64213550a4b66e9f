//! Seam between the HTTP handlers and the chain client.

use std::future::Future;
use std::sync::Arc;

use solana_sdk::signature::Signer;
use vault_client::{initialize_keypair, KeypairConfig, VaultClient};

use crate::error::Result;

/// Chain operations the HTTP surface depends on. Handlers are generic over
/// this trait so the 200/500 contract can be exercised without a validator.
pub trait VaultGateway: Clone + Send + Sync + 'static {
    fn init_vault(&self, vault_id: String) -> impl Future<Output = Result<()>> + Send;

    fn deposit(
        &self,
        vault_id: String,
        user_pubkey: String,
        amount: f32,
        fund_status: String,
        bot_status: String,
    ) -> impl Future<Output = Result<()>> + Send;

    fn update_user_info(
        &self,
        vault_id: String,
        user_pubkey: String,
        amount: f32,
        fund_status: String,
        bot_status: String,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Production gateway: bootstrap the signer per request, then make one client
/// call.
#[derive(Clone)]
pub struct RpcGateway {
    client: Arc<VaultClient>,
    keypair_config: Arc<KeypairConfig>,
}

impl RpcGateway {
    pub fn new(client: VaultClient) -> Self {
        Self {
            client: Arc::new(client),
            keypair_config: Arc::new(KeypairConfig::default()),
        }
    }
}

impl VaultGateway for RpcGateway {
    async fn init_vault(&self, vault_id: String) -> Result<()> {
        let signer = initialize_keypair(self.client.rpc(), &self.keypair_config).await?;
        let signature = self.client.initialize_vault(&signer, &vault_id).await?;
        tracing::info!(%signature, vault_id, "vault initialized");
        Ok(())
    }

    async fn deposit(
        &self,
        vault_id: String,
        user_pubkey: String,
        amount: f32,
        fund_status: String,
        bot_status: String,
    ) -> Result<()> {
        let signer = initialize_keypair(self.client.rpc(), &self.keypair_config).await?;
        let signature = self
            .client
            .deposit(
                &signer,
                &vault_id,
                &user_pubkey,
                amount,
                &fund_status,
                &bot_status,
            )
            .await?;

        let balance = self.client.balance(&signer.pubkey()).await?;
        tracing::info!(%signature, balance, "signer balance after deposit");
        Ok(())
    }

    async fn update_user_info(
        &self,
        vault_id: String,
        user_pubkey: String,
        amount: f32,
        fund_status: String,
        bot_status: String,
    ) -> Result<()> {
        let signer = initialize_keypair(self.client.rpc(), &self.keypair_config).await?;
        let signature = self
            .client
            .update_user_info(
                &signer,
                &vault_id,
                &user_pubkey,
                amount,
                &fund_status,
                &bot_status,
            )
            .await?;

        let balance = self.client.balance(&signer.pubkey()).await?;
        tracing::info!(%signature, balance, "signer balance after withdraw");
        Ok(())
    }
}
