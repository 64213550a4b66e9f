//! Off-chain client for the bulk vault program.
//!
//! Derives the program addresses the vault and Drift instruction handlers
//! expect, assembles their account lists in ABI order, and submits signed
//! transactions over a long-lived RPC connection.

pub mod addresses;
pub mod client;
pub mod drift;
pub mod errors;
pub mod instruction;
pub mod keypair;
pub mod pda;
pub mod state;

pub use client::VaultClient;
pub use errors::{ClientError, Result};
pub use instruction::VaultInstruction;
pub use keypair::{initialize_keypair, KeypairConfig};
pub use state::UserInfoState;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
