//! HTTP surface: three POST endpoints mirroring the vault operations.
//!
//! Failures are logged and reported to the caller as an undifferentiated 500
//! with a static body.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::gateway::VaultGateway;

#[derive(Debug, Deserialize)]
pub struct InitVaultRequest {
    pub vault_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub vault_id: String,
    pub user_pubkey: String,
    pub amount: f32,
    #[serde(default)]
    pub fund_status: String,
    #[serde(default)]
    pub bot_status: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserInfoRequest {
    #[serde(default)]
    pub vault_id: String,
    pub user_pubkey: String,
    pub amount: f32,
    #[serde(default)]
    pub fund_status: String,
    #[serde(default)]
    pub bot_status: String,
}

pub fn router<G: VaultGateway>(gateway: G) -> Router {
    Router::new()
        .route("/initVault", post(init_vault::<G>))
        .route("/deposit", post(deposit::<G>))
        .route("/updateUserInfo", post(update_user_info::<G>))
        .layer(CorsLayer::permissive())
        .with_state(gateway)
}

async fn init_vault<G: VaultGateway>(
    State(gateway): State<G>,
    Json(req): Json<InitVaultRequest>,
) -> (StatusCode, &'static str) {
    match gateway.init_vault(req.vault_id).await {
        Ok(()) => (StatusCode::OK, "Initialized Vault successfully"),
        Err(err) => {
            tracing::error!(error = %err, "initVault failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error initializing vault")
        }
    }
}

async fn deposit<G: VaultGateway>(
    State(gateway): State<G>,
    Json(req): Json<DepositRequest>,
) -> (StatusCode, &'static str) {
    match gateway
        .deposit(
            req.vault_id,
            req.user_pubkey,
            req.amount,
            req.fund_status,
            req.bot_status,
        )
        .await
    {
        Ok(()) => (StatusCode::OK, "Deposited successfully"),
        Err(err) => {
            tracing::error!(error = %err, "deposit failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error during deposit")
        }
    }
}

async fn update_user_info<G: VaultGateway>(
    State(gateway): State<G>,
    Json(req): Json<UpdateUserInfoRequest>,
) -> (StatusCode, &'static str) {
    match gateway
        .update_user_info(
            req.vault_id,
            req.user_pubkey,
            req.amount,
            req.fund_status,
            req.bot_status,
        )
        .await
    {
        Ok(()) => (StatusCode::OK, "Updated user info successfully"),
        Err(err) => {
            tracing::error!(error = %err, "updateUserInfo failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error updating user info",
            )
        }
    }
}
