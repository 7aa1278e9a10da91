//! Log configuration resources.
//!
//! - [`syslogd`] - remote syslog server filters

#![deny(missing_docs)]

pub mod syslogd;

pub use syslogd::{LOG_SYSLOGD2_FILTER, LOG_SYSLOGD_FILTER};

use fortimanager_resource::ResourceDescriptor;

/// Every descriptor declared by this crate.
pub static DESCRIPTORS: &[&ResourceDescriptor] = &[&LOG_SYSLOGD_FILTER, &LOG_SYSLOGD2_FILTER];

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
