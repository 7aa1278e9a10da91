//! Router configuration resources.
//!
//! - [`ospf6`] - OSPFv3 area virtual links

#![deny(missing_docs)]

pub mod ospf6;

pub use ospf6::ROUTER_OSPF6_AREA_VIRTUAL_LINK;

use fortimanager_resource::ResourceDescriptor;

/// Every descriptor declared by this crate.
pub static DESCRIPTORS: &[&ResourceDescriptor] = &[&ROUTER_OSPF6_AREA_VIRTUAL_LINK];

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
