//! Wire encoding for the bulk vault program.
//!
//! The program unpacks a one-byte variant tag followed by a borsh payload,
//! which is exactly the borsh enum encoding.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::{drift, errors::Result, pda};

/// Instruction set of the on-chain vault program. `amount` crosses the wire
/// as `f32` because that is the program's ABI.
#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub enum VaultInstruction {
    InitializeVault {
        vault_id: String,
    },
    Deposit {
        vault_id: String,
        user_pubkey: String,
        amount: f32,
        fund_status: String,
        bot_status: String,
    },
    Withdraw {
        vault_id: String,
        user_pubkey: String,
        amount: f32,
        fund_status: String,
        bot_status: String,
    },
}

impl VaultInstruction {
    pub fn pack(&self) -> Result<Vec<u8>> {
        Ok(borsh::to_vec(self)?)
    }
}

/// Accounts: initializer (signer), vault PDA, system program, then the nine
/// drift accounts the program forwards when registering the vault with Drift.
pub fn initialize_vault(
    program_id: &Pubkey,
    initializer: &Pubkey,
    vault_id: &str,
) -> Result<Instruction> {
    let vault = pda::vault_pda(program_id, vault_id);

    let mut accounts = vec![
        AccountMeta::new(*initializer, true),
        AccountMeta::new(vault, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    accounts.extend(drift::initialize_drift_keys(initializer, program_id, vault_id));

    let data = VaultInstruction::InitializeVault {
        vault_id: vault_id.to_string(),
    }
    .pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data,
    })
}

/// Accounts: initializer (signer), user-info PDA, vault PDA, treasury PDA,
/// system program. The system program is needed for first-deposit account
/// creation.
pub fn deposit(
    program_id: &Pubkey,
    initializer: &Pubkey,
    vault_id: &str,
    user_pubkey: &str,
    amount: f32,
    fund_status: &str,
    bot_status: &str,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(*initializer, true),
        AccountMeta::new(pda::user_info_pda(program_id, initializer, user_pubkey), false),
        AccountMeta::new(pda::vault_pda(program_id, vault_id), false),
        AccountMeta::new(pda::treasury_pda(program_id, vault_id), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    let data = VaultInstruction::Deposit {
        vault_id: vault_id.to_string(),
        user_pubkey: user_pubkey.to_string(),
        amount,
        fund_status: fund_status.to_string(),
        bot_status: bot_status.to_string(),
    }
    .pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data,
    })
}

/// Accounts: initializer (signer), user-info PDA, vault PDA, treasury PDA, in
/// the order the withdraw handler walks them.
pub fn withdraw(
    program_id: &Pubkey,
    initializer: &Pubkey,
    vault_id: &str,
    user_pubkey: &str,
    amount: f32,
    fund_status: &str,
    bot_status: &str,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(*initializer, true),
        AccountMeta::new(pda::user_info_pda(program_id, initializer, user_pubkey), false),
        AccountMeta::new(pda::vault_pda(program_id, vault_id), false),
        AccountMeta::new(pda::treasury_pda(program_id, vault_id), false),
    ];

    let data = VaultInstruction::Withdraw {
        vault_id: vault_id.to_string(),
        user_pubkey: user_pubkey.to_string(),
        amount,
        fund_status: fund_status.to_string(),
        bot_status: bot_status.to_string(),
    }
    .pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data,
    })
}
