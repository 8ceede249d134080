//! Test helpers for mailgate-server unit tests.

use mailgate_types::{CredentialPolicy, GatewayConfig, IndexMode};

use crate::state::AppState;

/// Create a minimal `AppState` for testing, pointed at `upstream`.
pub fn test_app_state(upstream: &str, policy: CredentialPolicy, index_mode: IndexMode) -> AppState {
    let config = GatewayConfig {
        upstream_base_url: upstream.to_string(),
        credential_policy: policy,
        api_key: Some("test-key".to_string()),
        request_timeout_secs: 2,
        index_mode,
        ..GatewayConfig::default()
    }
    .validate_startup()
    .expect("test config must validate");

    AppState::new(config).expect("failed to create test AppState")
}
