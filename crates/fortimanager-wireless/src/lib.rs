//! Wireless controller configuration resources.
//!
//! - [`hotspot20`] - Hotspot 2.0 ANQP NAI realms

#![deny(missing_docs)]

pub mod hotspot20;

pub use hotspot20::WIRELESS_CONTROLLER_HOTSPOT20_ANQP_NAI_REALM;

use fortimanager_resource::ResourceDescriptor;

/// Every descriptor declared by this crate.
pub static DESCRIPTORS: &[&ResourceDescriptor] = &[&WIRELESS_CONTROLLER_HOTSPOT20_ANQP_NAI_REALM];

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = fortimanager_core::Result<T>;

/// Check every descriptor declared by this crate.
///
/// # Errors
///
/// Returns the first descriptor validation error.
pub fn validate() -> Result<()> {
    DESCRIPTORS.iter().try_for_each(|d| d.validate())
}
