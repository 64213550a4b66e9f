//! Fixed account lists required by the Drift program.
//!
//! Ordering and flags are dictated by Drift's instruction handlers and must
//! match them byte for byte.

use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, system_program, sysvar};

use crate::{addresses, pda};

/// Accounts the vault program forwards to Drift when initializing a vault's
/// drift user and user-stats accounts. The vault PDA appears three times: once
/// as the authority being registered and twice as the payer the program signs
/// for.
pub fn initialize_drift_keys(
    signer: &Pubkey,
    program_id: &Pubkey,
    vault_id: &str,
) -> Vec<AccountMeta> {
    let vault = pda::vault_pda(program_id, vault_id);
    let user = pda::drift_user(&vault, 0);
    let user_stats = pda::drift_user_stats(&vault);
    let state = pda::drift_state();

    vec![
        AccountMeta::new_readonly(*signer, true),
        AccountMeta::new(vault, false),
        AccountMeta::new(user, false),
        AccountMeta::new(user_stats, false),
        AccountMeta::new(state, false),
        AccountMeta::new(vault, true),
        AccountMeta::new(vault, true),
        AccountMeta::new_readonly(sysvar::rent::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ]
}

/// Remaining accounts every order placement must carry: the pricing oracles
/// read-only, the market accounts writable.
pub fn remaining_accounts_for_orders() -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(addresses::SOL_ORACLE, false),
        AccountMeta::new_readonly(addresses::USDC_ORACLE, false),
        AccountMeta::new(addresses::SOL_SPOT_MARKET, false),
        AccountMeta::new(addresses::USDC_SPOT_MARKET, false),
        AccountMeta::new(addresses::SOL_PERP_MARKET, false),
    ]
}
