//! The external client seam.
//!
//! The JSON-RPC protocol to FortiManager, authentication, session handling and
//! retries all live behind [`FortiClient`]. The resource layer only hands it a
//! remote object, an identity and the scoping maps.

use async_trait::async_trait;

use crate::scope::{ScopeParams, WsParams};
use crate::value::RemoteObject;
use crate::Result;

/// Remote collaborator that performs the actual device calls.
///
/// `resource` is the API name of the configuration object type (for example
/// `AntivirusQuarantine`); implementations map it to their endpoint table.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait FortiClient: Send + Sync {
    /// Create an object.
    ///
    /// # Errors
    ///
    /// Returns any transport or device error.
    async fn create(
        &self,
        resource: &str,
        object: RemoteObject,
        scope: &ScopeParams,
        ws: Option<WsParams>,
    ) -> Result<RemoteObject>;

    /// Read an object by identity. `Ok(None)` means the object does not exist.
    ///
    /// # Errors
    ///
    /// Returns any transport or device error.
    async fn read(
        &self,
        resource: &str,
        identity: &str,
        scope: &ScopeParams,
    ) -> Result<Option<RemoteObject>>;

    /// Update an object by identity.
    ///
    /// # Errors
    ///
    /// Returns any transport or device error.
    async fn update(
        &self,
        resource: &str,
        object: RemoteObject,
        identity: &str,
        scope: &ScopeParams,
        ws: Option<WsParams>,
    ) -> Result<RemoteObject>;

    /// Delete an object by identity.
    ///
    /// # Errors
    ///
    /// Returns any transport or device error.
    async fn delete(
        &self,
        resource: &str,
        identity: &str,
        scope: &ScopeParams,
        ws: Option<WsParams>,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::WireValue;
    use crate::Error;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn mock_client_read_returns_object() {
        let mut client = MockFortiClient::new();
        client
            .expect_read()
            .with(
                eq("AntivirusQuarantine"),
                eq("AntivirusQuarantine"),
                eq(ScopeParams::new().with("device", "fgt1")),
            )
            .times(1)
            .returning(|_, _, _| {
                Ok(Some(RemoteObject::from([(
                    "agelimit".to_string(),
                    WireValue::Int(5),
                )])))
            });

        let scope = ScopeParams::new().with("device", "fgt1");
        let object = client
            .read("AntivirusQuarantine", "AntivirusQuarantine", &scope)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(object["agelimit"], WireValue::Int(5));
    }

    #[tokio::test]
    async fn mock_client_delete_propagates_error() {
        let mut client = MockFortiClient::new();
        client
            .expect_delete()
            .returning(|_, _, _, _| Err(Error::ClientError("locked".to_string())));

        let result = client
            .delete("SystemSdwanMembers", "1", &ScopeParams::new(), None)
            .await;
        assert_eq!(result, Err(Error::ClientError("locked".to_string())));
    }
}
