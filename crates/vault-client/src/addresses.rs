//! Program ids and fixed mainnet accounts the instruction handlers reference.

use solana_sdk::{pubkey, pubkey::Pubkey};

/// Drift perpetuals program.
pub const DRIFT_PROGRAM_ID: Pubkey = pubkey!("dRiftyHA39MWEi3m9aunc5MzRF1JYuBsbn6VPcn33UH");

/// Drift vault authority.
pub const DRIFT_VAULT: Pubkey = pubkey!("JCNCMFXo5M5qwUPg2Utu1u6YWp3MbygxqBsBeXXJfrw");

pub const DRIFT_MARGIN_PRECISION: u64 = 10_000;

// Pricing oracles
pub const SOL_ORACLE: Pubkey = pubkey!("BAtFj4kQttZRVep3UZS2aZRDixkGYgWsbqTBVDbnSsPF");
pub const USDC_ORACLE: Pubkey = pubkey!("En8hkHLkRe9d9DraYmBTrus518BvmVH448YcvmrFM6Ce");

// Market accounts
pub const SOL_SPOT_MARKET: Pubkey = pubkey!("3x85u7SWkmmr7YQGYhtjARgxwegTLJgkSLRprfXod6rh");
pub const USDC_SPOT_MARKET: Pubkey = pubkey!("6gMq3mRCKf8aP3ttTyYhuijVZ2LGi14oDsBbkgubfLB3");
pub const SOL_PERP_MARKET: Pubkey = pubkey!("8UJgxaiQx5nTrdDgph5FiahMmzduuLTLf5WmsPegYA6W");

/// Bulk vault program as deployed on the local validator.
pub const BULK_PROGRAM_ID: Pubkey = pubkey!("HHswWcPUCB6nCV927y5TbZyLwjTt2Enguc6f61U35gog");
