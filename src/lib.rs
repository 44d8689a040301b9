// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! DentalMall - Multi-Tenant Dental Supply Marketplace API
//!
//! JSON API for a marketplace where vendors list dental products,
//! clinics register for the public directory, and users place orders.
//! Identity is external (bearer JWT); roles and profiles live in the
//! application's own user directory.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Token verification, directory lookup, and role gates
//! - `store` - In-process entity store and ownership enforcement
//! - `guard` - Pure client-side route guard decision

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod state;
pub mod store;
