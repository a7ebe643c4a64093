#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Integration helpers for the Uzbekistan payment gateways Payme, Click, and Octo.
//!
//! This crate builds checkout URLs and verifies webhook signatures for three
//! payment providers. Every operation is a pure function: structured arguments
//! in, a structured result out. The crate performs no network I/O, keeps no
//! state, and never calls a provider itself — a hosting layer (an HTTP server,
//! an AI tool dispatcher, a CLI) owns all of that.
//!
//! # Providers
//!
//! - [`payme`] - JSON-RPC based gateway. Checkout parameters are
//!   base64-embedded in the URL path; webhooks authenticate with Basic Auth.
//! - [`click`] - Two-phase REST gateway. Invoice URLs carry query parameters;
//!   webhooks carry a keyed MD5 signature.
//! - [`octo`] - REST gateway. Payment initiation posts a signed JSON payload;
//!   webhooks carry a keyed SHA-256 signature.
//!
//! # Modules
//!
//! - [`amount`] - Validated payment amounts and minor-unit (tiyin) conversion
//! - [`codec`] - Base64 and lowercase-hex digest primitives
//! - [`environment`] - Sandbox/production environment selection
//! - [`error`] - Input validation errors
//! - [`guide`] - Static integration documentation payloads
//! - [`webhook`] - Shared signature verification result type
//!
//! # Error policy
//!
//! Checkout builders return `Result` and reject malformed input (empty
//! identifiers, non-positive amounts). Webhook verification never fails with
//! an error: malformed headers, undecodable tokens, and signature mismatches
//! are all reported as a result value with `valid == false` and a reason, so
//! a dispatcher can hand the outcome straight to its caller.
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod amount;
pub mod click;
pub mod codec;
pub mod environment;
pub mod error;
pub mod guide;
pub mod octo;
pub mod payme;
pub mod webhook;
