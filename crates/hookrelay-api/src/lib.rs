//! Hookrelay API Library
//!
//! This crate provides the HTTP surface of the relay: the webhook and health
//! handlers, payload extraction, route setup, and server lifecycle.

pub mod constants;
mod error;
mod extract;
mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
