//! Small shared enums.

use serde::{Deserialize, Serialize};

/// Operations a resource adapter performs against the remote device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Create a new object (or upsert a singleton)
    Create,
    /// Read the current remote object
    Read,
    /// Update an existing object
    Update,
    /// Delete the object
    Delete,
    /// Adopt an existing object by identity
    Import,
}

impl Operation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Import => "import",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
