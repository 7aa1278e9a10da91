//! # fortimanager-provider
//!
//! Provider facade for the FortiManager resource adapters.
//!
//! [`Provider`] validates the configuration, owns the [`ResourceRegistry`] built
//! from every category crate and hands out [`ResourceAdapter`]s by Terraform type
//! name. Its [`apply`](Provider::apply), [`refresh`](Provider::refresh) and
//! [`import`](Provider::import) methods drive one object through its lifecycle.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use fortimanager_core::{FortiClient, ProviderConfig};
//! use fortimanager_provider::Provider;
//! use fortimanager_resource::record;
//!
//! # async fn run(client: Arc<dyn FortiClient>) -> fortimanager_core::Result<()> {
//! let config = ProviderConfig::new("fmg.example.com")?
//!     .with_device_name("FGT-01")
//!     .with_device_vdom("root");
//! let provider = Provider::configure(config, client)?;
//!
//! let planned = record! { "status" => "enable", "seq_num" => 1 };
//! let state = provider
//!     .apply("fortimanager_system_sdwan_members", None, Some(planned))
//!     .await?;
//! assert!(state.is_some());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod lifecycle;
pub mod logging;
pub mod provider;
pub mod registry;

pub use fortimanager_resource::ResourceAdapter;
pub use lifecycle::{plan, Action};
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use provider::Provider;
pub use registry::ResourceRegistry;

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = fortimanager_core::Result<T>;
