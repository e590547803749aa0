//! # API Module
//!
//! This module provides the HTTP endpoints served by the local callback
//! server during authorization. It implements the landing page for the
//! Spotify OAuth 2.0 implicit grant and a health check endpoint.
//!
//! ## Overview
//!
//! The API module is the web-facing half of the authorization handshake.
//! Spotify redirects the user's browser to the local server once the user
//! grants (or denies) access, and these handlers convert that redirect into
//! a [`crate::types::CallbackEvent`] delivered to the waiting session:
//!
//! - **Implicit Grant Callback**: Receives the redirect, relays the URL
//!   fragment into query parameters, and resolves the pending authorization
//!   exactly once
//! - **Health Monitoring**: Lets users and tests verify the listener is up
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Handles the OAuth redirect from Spotify's authorization
//!   server. The implicit grant places the access token in the URL
//!   *fragment*, which browsers never transmit; the handler first serves a
//!   small relay page whose script re-requests the same path with the
//!   fragment converted to a query string, then dispatches the token or
//!   error to the session.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status and version information.
//!
//! ## Delivery Semantics
//!
//! The pending authorization is stored as a one-shot sender in a shared
//! slot. The first terminal callback (token or error) takes the sender and
//! resolves the session; any later delivery finds the slot empty and is
//! answered with a static page, leaving the completed session untouched.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use sartdl::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```
//!
//! ## Related Modules
//!
//! - [`crate::server`] - Owns the listener lifecycle
//! - [`crate::spotify`] - Drives the authorization session
//! - [`crate::types`] - Callback event and slot definitions

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
