//! Descriptor-driven resource engine for FortiManager configuration objects.
//!
//! Each configuration object type is described once by a static
//! [`ResourceDescriptor`]. [`ResourceAdapter`] turns that description into the
//! create, read, update, delete and import operations, converting between the local
//! (underscored) field names and the remote (hyphenated) wire names and resolving
//! the device, VDOM and parent scoping parameters every call needs.
//!
//! ## Modules
//!
//! - [`schema`] - Field and resource descriptors
//! - [`data`] - Local state and change tracking
//! - [`ambient`] - Scoping parameter resolution
//! - [`expand`] - Local state to remote object
//! - [`flatten`] - Remote object to local state
//! - [`patch`] - Compatibility fallback for mis-shaped remote values
//! - [`identity`] - Identity derivation
//! - [`adapter`] - The operations

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod adapter;
pub mod ambient;
pub mod data;
pub mod expand;
pub mod flatten;
pub mod identity;
pub mod patch;
pub mod schema;

pub use adapter::{ReadOutcome, ResourceAdapter};
pub use ambient::{get_variable, import_option_checking};
pub use data::{LocalValue, Record, ResourceData};
pub use expand::{expand_object, expand_string_list};
pub use flatten::{flatten_object, flatten_string_list};
pub use identity::{get_int_key, get_string_key};
pub use patch::fortiapi_patch;
pub use schema::{
    CreateVerb, FieldDescriptor, FieldKind, IdentityRule, ResourceDescriptor, ScopeParam,
    ScopeRule,
};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = fortimanager_core::Result<T>;
