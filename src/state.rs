// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::JwksManager;
use crate::store::Store;

/// Authentication configuration shared across requests.
///
/// With `jwks` set the service runs in production mode and verifies
/// token signatures against the identity provider; without it tokens
/// are only structurally decoded (development mode).
#[derive(Clone, Default)]
pub struct AuthConfig {
    pub jwks: Option<JwksManager>,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub auth_config: AuthConfig,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            auth_config: AuthConfig::default(),
        }
    }

    pub fn with_auth_config(mut self, auth_config: AuthConfig) -> Self {
        self.auth_config = auth_config;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Store::new())
    }
}
