//! Program-derived address helpers.
//!
//! All derivations are deterministic; the seeds mirror what the on-chain
//! handlers verify with `find_program_address`.

use solana_sdk::pubkey::Pubkey;

use crate::addresses::DRIFT_PROGRAM_ID;

/// Vault PDA for a vault identifier.
pub fn vault_pda(program_id: &Pubkey, vault_id: &str) -> Pubkey {
    let (pda, _bump) = Pubkey::find_program_address(&[vault_id.as_bytes()], program_id);
    pda
}

/// User-info PDA, seeded by the initializer and the user's pubkey string.
pub fn user_info_pda(program_id: &Pubkey, initializer: &Pubkey, user_pubkey: &str) -> Pubkey {
    let (pda, _bump) =
        Pubkey::find_program_address(&[initializer.as_ref(), user_pubkey.as_bytes()], program_id);
    pda
}

/// Treasury PDA collecting withdrawal fees for a vault.
pub fn treasury_pda(program_id: &Pubkey, vault_id: &str) -> Pubkey {
    let (pda, _bump) =
        Pubkey::find_program_address(&[b"treasury", vault_id.as_bytes()], program_id);
    pda
}

/// Drift user account for an authority and sub-account index.
pub fn drift_user(authority: &Pubkey, sub_account_id: u16) -> Pubkey {
    let (pda, _bump) = Pubkey::find_program_address(
        &[b"user", authority.as_ref(), &sub_account_id.to_le_bytes()],
        &DRIFT_PROGRAM_ID,
    );
    pda
}

/// Drift user-stats account for an authority.
pub fn drift_user_stats(authority: &Pubkey) -> Pubkey {
    let (pda, _bump) =
        Pubkey::find_program_address(&[b"user_stats", authority.as_ref()], &DRIFT_PROGRAM_ID);
    pda
}

/// Drift global state account.
pub fn drift_state() -> Pubkey {
    let (pda, _bump) = Pubkey::find_program_address(&[b"drift_state"], &DRIFT_PROGRAM_ID);
    pda
}
