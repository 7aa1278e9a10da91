//! Antivirus configuration resources.
//!
//! - [`quarantine`] - `antivirus quarantine` settings

#![deny(missing_docs)]

pub mod quarantine;

pub use quarantine::ANTIVIRUS_QUARANTINE;

use fortimanager_resource::ResourceDescriptor;

/// Every descriptor declared by this crate.
pub static DESCRIPTORS: &[&ResourceDescriptor] = &[&ANTIVIRUS_QUARANTINE];

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
