//! HTTP contract tests: each handler answers 200 with its static body on
//! gateway success and 500 on gateway failure, driven through the router with
//! a mock gateway.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use vault_api::{
        error::{ApiError, Result},
        gateway::VaultGateway,
        routes,
    };
    use vault_client::ClientError;

    #[derive(Clone, Default)]
    struct MockGateway {
        fail: bool,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockGateway {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn outcome(&self, call: String) -> Result<()> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                Err(ApiError::Client(ClientError::RpcError(
                    "connection refused".to_string(),
                )))
            } else {
                Ok(())
            }
        }
    }

    impl VaultGateway for MockGateway {
        async fn init_vault(&self, vault_id: String) -> Result<()> {
            self.outcome(format!("init:{vault_id}"))
        }

        async fn deposit(
            &self,
            vault_id: String,
            user_pubkey: String,
            amount: f32,
            fund_status: String,
            bot_status: String,
        ) -> Result<()> {
            self.outcome(format!(
                "deposit:{vault_id}:{user_pubkey}:{amount}:{fund_status}:{bot_status}"
            ))
        }

        async fn update_user_info(
            &self,
            vault_id: String,
            user_pubkey: String,
            amount: f32,
            fund_status: String,
            bot_status: String,
        ) -> Result<()> {
            self.outcome(format!(
                "update:{vault_id}:{user_pubkey}:{amount}:{fund_status}:{bot_status}"
            ))
        }
    }

    async fn post(
        gateway: &MockGateway,
        path: &str,
        body: serde_json::Value,
    ) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = routes::router(gateway.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn init_vault_returns_200_on_success() {
        let gateway = MockGateway::default();
        let (status, body) = post(
            &gateway,
            "/initVault",
            serde_json::json!({ "vault_id": "sunit" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Initialized Vault successfully");
        assert_eq!(gateway.calls(), ["init:sunit"]);
    }

    #[tokio::test]
    async fn init_vault_returns_500_on_gateway_failure() {
        let gateway = MockGateway::failing();
        let (status, body) = post(
            &gateway,
            "/initVault",
            serde_json::json!({ "vault_id": "sunit" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error initializing vault");
    }

    #[tokio::test]
    async fn deposit_forwards_body_fields() {
        let gateway = MockGateway::default();
        let (status, body) = post(
            &gateway,
            "/deposit",
            serde_json::json!({
                "vault_id": "sunit",
                "user_pubkey": "7mhcgF",
                "amount": 1.5,
                "fund_status": "funded",
                "bot_status": "active",
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Deposited successfully");
        assert_eq!(gateway.calls(), ["deposit:sunit:7mhcgF:1.5:funded:active"]);
    }

    #[tokio::test]
    async fn deposit_defaults_missing_statuses() {
        let gateway = MockGateway::default();
        let (status, _body) = post(
            &gateway,
            "/deposit",
            serde_json::json!({
                "vault_id": "sunit",
                "user_pubkey": "7mhcgF",
                "amount": 2,
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(gateway.calls(), ["deposit:sunit:7mhcgF:2::"]);
    }

    #[tokio::test]
    async fn deposit_returns_500_on_gateway_failure() {
        let gateway = MockGateway::failing();
        let (status, body) = post(
            &gateway,
            "/deposit",
            serde_json::json!({
                "vault_id": "sunit",
                "user_pubkey": "7mhcgF",
                "amount": 1.5,
            }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error during deposit");
    }

    #[tokio::test]
    async fn update_user_info_returns_200_on_success() {
        let gateway = MockGateway::default();
        let (status, body) = post(
            &gateway,
            "/updateUserInfo",
            serde_json::json!({
                "user_pubkey": "7mhcgF",
                "amount": 0.25,
                "fund_status": "funded",
                "bot_status": "paused",
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Updated user info successfully");
        assert_eq!(gateway.calls(), ["update::7mhcgF:0.25:funded:paused"]);
    }

    #[tokio::test]
    async fn update_user_info_returns_500_on_gateway_failure() {
        let gateway = MockGateway::failing();
        let (status, body) = post(
            &gateway,
            "/updateUserInfo",
            serde_json::json!({ "user_pubkey": "7mhcgF", "amount": 0.25 }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error updating user info");
    }

    #[tokio::test]
    async fn missing_required_field_is_rejected_before_the_gateway() {
        let gateway = MockGateway::default();
        let (status, _body) = post(&gateway, "/deposit", serde_json::json!({ "amount": 1 })).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(gateway.calls().is_empty());
    }
}
