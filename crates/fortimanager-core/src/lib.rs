//! # fortimanager-core
//!
//! Core types and utilities for managing FortiGate configuration objects through
//! FortiManager.
//!
//! This crate provides the pieces every resource crate shares: the error taxonomy,
//! provider configuration, the tagged wire value exchanged with the remote API, the
//! scoping parameter maps, and the [`client::FortiClient`] collaborator trait.
//!
//! ## Modules
//!
//! - [`error`] - Error types, machine codes and diagnostics
//! - [`config`] - Provider configuration and ambient scope defaults
//! - [`value`] - Tagged wire values and remote objects
//! - [`scope`] - Scoping and workspace parameter maps
//! - [`client`] - The external client seam
//! - [`types`] - Small shared enums

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod scope;
pub mod types;
pub mod value;

// Re-export commonly used types
pub use client::FortiClient;
#[cfg(any(test, feature = "mock"))]
pub use client::MockFortiClient;
pub use config::ProviderConfig;
pub use error::{Error, Result};
pub use scope::{ScopeParams, WsParams};
pub use types::Operation;
pub use value::{RemoteObject, WireValue};
