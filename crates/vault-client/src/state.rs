//! Mirror of the on-chain user-info account layout.

use borsh::{BorshDeserialize, BorshSerialize};

#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct UserInfoState {
    pub is_initialized: bool,
    pub vault_id: String,
    pub user_pubkey: String,
    pub amount: f32,
    pub fund_status: String,
    pub bot_status: String,
}
