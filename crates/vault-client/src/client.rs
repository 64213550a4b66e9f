//! Vault program client over a long-lived RPC connection.

use borsh::BorshDeserialize;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::{
    errors::{ClientError, Result},
    instruction, pda,
    state::UserInfoState,
};

/// Client for the bulk vault program. One instance holds the shared RPC
/// connection reused across requests.
pub struct VaultClient {
    client: RpcClient,
    program_id: Pubkey,
}

impl VaultClient {
    pub fn new(rpc_url: &str, program_id: Pubkey) -> Self {
        Self {
            client: RpcClient::new_with_commitment(
                rpc_url.to_string(),
                CommitmentConfig::confirmed(),
            ),
            program_id,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.client
    }

    /// Initialize the vault PDA for `vault_id`, wiring up its drift accounts.
    pub async fn initialize_vault(&self, signer: &Keypair, vault_id: &str) -> Result<Signature> {
        let ix = instruction::initialize_vault(&self.program_id, &signer.pubkey(), vault_id)?;
        self.send(signer, ix).await
    }

    /// Deposit into the vault, creating or updating the user-info account.
    pub async fn deposit(
        &self,
        signer: &Keypair,
        vault_id: &str,
        user_pubkey: &str,
        amount: f32,
        fund_status: &str,
        bot_status: &str,
    ) -> Result<Signature> {
        let ix = instruction::deposit(
            &self.program_id,
            &signer.pubkey(),
            vault_id,
            user_pubkey,
            amount,
            fund_status,
            bot_status,
        )?;
        self.send(signer, ix).await
    }

    /// Update the user-info account. The program exposes this as its withdraw
    /// instruction.
    pub async fn update_user_info(
        &self,
        signer: &Keypair,
        vault_id: &str,
        user_pubkey: &str,
        amount: f32,
        fund_status: &str,
        bot_status: &str,
    ) -> Result<Signature> {
        let ix = instruction::withdraw(
            &self.program_id,
            &signer.pubkey(),
            vault_id,
            user_pubkey,
            amount,
            fund_status,
            bot_status,
        )?;
        self.send(signer, ix).await
    }

    /// Fetch and decode the user-info account owned by `signer` for
    /// `user_pubkey`.
    pub async fn read_user_info(
        &self,
        signer: &Pubkey,
        user_pubkey: &str,
    ) -> Result<UserInfoState> {
        let address = pda::user_info_pda(&self.program_id, signer, user_pubkey);
        let account = self
            .client
            .get_account(&address)
            .await
            .map_err(|_| ClientError::AccountNotFound(address.to_string()))?;
        UserInfoState::try_from_slice(&account.data)
            .map_err(|e| ClientError::DeserializeFailed(e.to_string()))
    }

    /// Lamport balance of an account.
    pub async fn balance(&self, pubkey: &Pubkey) -> Result<u64> {
        Ok(self.client.get_balance(pubkey).await?)
    }

    async fn send(&self, signer: &Keypair, ix: Instruction) -> Result<Signature> {
        let blockhash = self.client.get_latest_blockhash().await?;
        let tx =
            Transaction::new_signed_with_payer(&[ix], Some(&signer.pubkey()), &[signer], blockhash);
        self.client
            .send_and_confirm_transaction(&tx)
            .await
            .map_err(|e| ClientError::TransactionFailed(e.to_string()))
    }
}
