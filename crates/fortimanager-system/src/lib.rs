//! System configuration resources.
//!
//! - [`sdwan`] - SD-WAN members
//! - [`interface`] - extra IPv6 addresses of an interface

#![deny(missing_docs)]

pub mod interface;
pub mod sdwan;

pub use interface::SYSTEM_INTERFACE_IPV6_IP6_EXTRA_ADDR;
pub use sdwan::SYSTEM_SDWAN_MEMBERS;

use fortimanager_resource::ResourceDescriptor;

/// Every descriptor declared by this crate.
pub static DESCRIPTORS: &[&ResourceDescriptor] =
    &[&SYSTEM_SDWAN_MEMBERS, &SYSTEM_INTERFACE_IPV6_IP6_EXTRA_ADDR];

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
