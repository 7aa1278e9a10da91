//! Identity derivation.

use fortimanager_core::{Error, Result};

use crate::data::ResourceData;
use crate::schema::IdentityRule;

/// String value of a key field.
#[must_use]
pub fn get_string_key(data: &ResourceData, field: &str) -> Option<String> {
    data.get_str(field).map(str::to_string)
}

/// Integer value of a key field.
#[must_use]
pub fn get_int_key(data: &ResourceData, field: &str) -> Option<i64> {
    data.get_int(field)
}

impl IdentityRule {
    /// Derive the remote primary key from local state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdentityError`] when the key field is unset or blank.
    pub fn derive(&self, resource: &str, data: &ResourceData) -> Result<String> {
        let key = match self {
            Self::Fixed(literal) => Some((*literal).to_string()),
            Self::StringField(field) => get_string_key(data, field).filter(|k| !k.is_empty()),
            Self::IntField(field) => get_int_key(data, field).map(|k| k.to_string()),
        };

        key.ok_or_else(|| Error::IdentityError {
            resource: resource.to_string(),
            field: self.field().unwrap_or_default().to_string(),
        })
    }
}
