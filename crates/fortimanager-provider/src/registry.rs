//! Resource registry keyed by Terraform type name.

use std::collections::BTreeMap;

use fortimanager_core::Error;
use fortimanager_resource::ResourceDescriptor;

use crate::Result;

/// Descriptor lookup table.
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    descriptors: BTreeMap<&'static str, &'static ResourceDescriptor>,
}

impl ResourceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every descriptor shipped with the provider.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDescriptor`] if a shipped descriptor is malformed or
    /// two of them share a type name.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for descriptors in [
            fortimanager_antivirus::DESCRIPTORS,
            fortimanager_dlp::DESCRIPTORS,
            fortimanager_log::DESCRIPTORS,
            fortimanager_router::DESCRIPTORS,
            fortimanager_system::DESCRIPTORS,
            fortimanager_wireless::DESCRIPTORS,
        ] {
            registry.register_all(descriptors)?;
        }
        Ok(registry)
    }

    /// Validate and add a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDescriptor`] if the descriptor fails validation or its
    /// type name is already registered.
    pub fn register(&mut self, descriptor: &'static ResourceDescriptor) -> Result<()> {
        descriptor.validate()?;
        if self.descriptors.contains_key(descriptor.type_name) {
            return Err(Error::InvalidDescriptor(format!(
                "duplicate resource type `{}`",
                descriptor.type_name
            )));
        }
        self.descriptors.insert(descriptor.type_name, descriptor);
        Ok(())
    }

    /// Add several descriptors, stopping at the first error.
    ///
    /// # Errors
    ///
    /// See [`register`](Self::register).
    pub fn register_all(&mut self, descriptors: &[&'static ResourceDescriptor]) -> Result<()> {
        descriptors.iter().try_for_each(|d| self.register(d))
    }

    /// Look up a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownResource`] for an unregistered type name.
    pub fn get(&self, type_name: &str) -> Result<&'static ResourceDescriptor> {
        self.descriptors
            .get(type_name)
            .copied()
            .ok_or_else(|| Error::UnknownResource(type_name.to_string()))
    }

    /// Whether a type name is registered.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.descriptors.contains_key(type_name)
    }

    /// Registered type names in lexical order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptors.keys().copied()
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
