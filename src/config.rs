// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! # Runtime Configuration
//!
//! Environment variable names and loaders used at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `AUTH_JWKS_URL` | Identity provider JWKS endpoint | Required for production |
//! | `AUTH_ISSUER` | Expected JWT issuer claim | Required for production |
//! | `AUTH_AUDIENCE` | Expected JWT audience claim | Optional |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |
//! | `SEED_DEMO_DATA` | Seed a demo catalog at startup | unset |

use std::env;

use crate::auth::JwksManager;
use crate::state::AuthConfig;

/// Server bind address.
pub const HOST_ENV: &str = "HOST";

/// Server bind port.
pub const PORT_ENV: &str = "PORT";

/// Identity provider JWKS endpoint. When unset, the service runs in
/// development mode and decodes tokens without signature verification.
pub const AUTH_JWKS_URL_ENV: &str = "AUTH_JWKS_URL";

/// Expected JWT issuer claim.
pub const AUTH_ISSUER_ENV: &str = "AUTH_ISSUER";

/// Expected JWT audience claim.
pub const AUTH_AUDIENCE_ENV: &str = "AUTH_AUDIENCE";

/// Logging format selector (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Seed a demo catalog at startup (`true`/`1`).
pub const SEED_DEMO_DATA_ENV: &str = "SEED_DEMO_DATA";

/// Build the authentication configuration from the environment.
pub fn auth_config_from_env() -> AuthConfig {
    let jwks = env::var(AUTH_JWKS_URL_ENV).ok().map(JwksManager::new);
    if jwks.is_none() {
        tracing::warn!(
            "{AUTH_JWKS_URL_ENV} not set; running in development mode without signature verification"
        );
    }

    AuthConfig {
        jwks,
        issuer: env::var(AUTH_ISSUER_ENV).ok(),
        audience: env::var(AUTH_AUDIENCE_ENV).ok(),
    }
}

/// Whether demo seed data was requested.
pub fn seed_demo_data_requested() -> bool {
    matches!(
        env::var(SEED_DEMO_DATA_ENV).as_deref(),
        Ok("1") | Ok("true") | Ok("TRUE")
    )
}
