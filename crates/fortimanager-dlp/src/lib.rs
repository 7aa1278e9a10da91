//! Data leak prevention configuration resources.
//!
//! - [`fp_doc_source`] - fingerprint document sources
//! - [`exact_data_match`] - exact data match tables and their columns

#![deny(missing_docs)]

pub mod exact_data_match;
pub mod fp_doc_source;

pub use exact_data_match::{DLP_EXACT_DATA_MATCH, DLP_EXACT_DATA_MATCH_COLUMNS};
pub use fp_doc_source::DLP_FP_DOC_SOURCE;

use fortimanager_resource::ResourceDescriptor;

/// Every descriptor declared by this crate.
pub static DESCRIPTORS: &[&ResourceDescriptor] = &[
    &DLP_FP_DOC_SOURCE,
    &DLP_EXACT_DATA_MATCH,
    &DLP_EXACT_DATA_MATCH_COLUMNS,
];

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
