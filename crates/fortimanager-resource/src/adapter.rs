//! Create, read, update, delete and import for one resource type.
//!
//! [`ResourceAdapter`] binds a [`ResourceDescriptor`] to a client and the provider
//! configuration. Every operation resolves scoping parameters once, converts between
//! local and remote shapes through the descriptor and wraps client failures into
//! [`Error::RemoteCallError`].

use std::sync::Arc;

use fortimanager_core::{Error, FortiClient, Operation, ProviderConfig, Result};
use tracing::{debug, info};

use crate::ambient::{resolve_scope, resolve_ws, Fallback};
use crate::data::ResourceData;
use crate::expand::expand_object;
use crate::flatten::flatten_object;
use crate::schema::{CreateVerb, ResourceDescriptor};

/// Result of a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ReadOutcome {
    /// The object exists and local state was refreshed.
    Present,
    /// The object does not exist; the identity has been cleared.
    Absent,
}

/// Descriptor-driven adapter for one resource type.
#[derive(Clone)]
pub struct ResourceAdapter {
    descriptor: &'static ResourceDescriptor,
    client: Arc<dyn FortiClient>,
    config: Arc<ProviderConfig>,
}

impl std::fmt::Debug for ResourceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceAdapter")
            .field("resource", &self.descriptor.api_name)
            .finish_non_exhaustive()
    }
}

impl ResourceAdapter {
    /// Create a new adapter.
    #[must_use]
    pub fn new(
        descriptor: &'static ResourceDescriptor,
        client: Arc<dyn FortiClient>,
        config: Arc<ProviderConfig>,
    ) -> Self {
        Self {
            descriptor,
            client,
            config,
        }
    }

    /// The descriptor this adapter serves.
    #[must_use]
    pub const fn descriptor(&self) -> &'static ResourceDescriptor {
        self.descriptor
    }

    /// Create the object and record its identity.
    ///
    /// Singleton settings objects provisioned with [`CreateVerb::Update`] are upserted
    /// through the client's update call.
    ///
    /// # Errors
    ///
    /// Fails before any client call on a missing required field, an unresolvable
    /// scope, an invalid local value or an unset identity field. Client failures are
    /// returned as [`Error::RemoteCallError`] and leave the identity unset.
    pub async fn create(&self, data: &mut ResourceData) -> Result<String> {
        let descriptor = self.descriptor;
        descriptor.check_required(data)?;

        let scope = resolve_scope(descriptor, &self.config, data, Fallback::Strict)?;
        let ws = resolve_ws(descriptor, &self.config, data)?;
        let object = expand_object(descriptor, data)?;
        let identity = descriptor.identity.derive(descriptor.api_name, data)?;

        debug!(resource = descriptor.api_name, fields = object.len(), "Creating object");

        let result = match descriptor.create_verb {
            CreateVerb::Create => {
                self.client
                    .create(descriptor.api_name, object, &scope, ws)
                    .await
            }
            CreateVerb::Update => {
                self.client
                    .update(descriptor.api_name, object, &identity, &scope, ws)
                    .await
            }
        };
        result.map_err(|e| self.remote_error(Operation::Create, &e))?;

        data.set_id(identity.clone());
        info!(resource = descriptor.api_name, id = %identity, "Object created");
        Ok(identity)
    }

    /// Refresh local state from the remote object.
    ///
    /// Blank scoping values fall back to the configured import options. A missing
    /// remote object clears the identity and yields [`ReadOutcome::Absent`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameterError`] before any client call if a scoping
    /// value cannot be recovered, [`Error::RemoteCallError`] on client failure and
    /// [`Error::FieldReadError`] on an unrecoverable shape mismatch.
    pub async fn read(&self, data: &mut ResourceData) -> Result<ReadOutcome> {
        let descriptor = self.descriptor;
        let Some(identity) = data.id().map(str::to_string) else {
            return Ok(ReadOutcome::Absent);
        };

        let scope = resolve_scope(descriptor, &self.config, data, Fallback::ImportOptions)?;

        debug!(resource = descriptor.api_name, id = %identity, "Reading object");

        let object = self
            .client
            .read(descriptor.api_name, &identity, &scope)
            .await
            .map_err(|e| self.remote_error(Operation::Read, &e))?;

        let Some(object) = object else {
            info!(
                resource = descriptor.api_name,
                id = %identity,
                "Object no longer exists, removing from state"
            );
            data.clear_id();
            return Ok(ReadOutcome::Absent);
        };

        flatten_object(descriptor, &object, data, self.config.import_tables)?;
        Ok(ReadOutcome::Present)
    }

    /// Push local changes to the existing object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdentityError`] when the object has no identity yet, scope and
    /// expansion errors before any client call, and [`Error::RemoteCallError`] on
    /// client failure.
    pub async fn update(&self, data: &mut ResourceData) -> Result<()> {
        let descriptor = self.descriptor;
        let identity = self.require_id(data)?;

        let scope = resolve_scope(descriptor, &self.config, data, Fallback::Strict)?;
        let ws = resolve_ws(descriptor, &self.config, data)?;
        let object = expand_object(descriptor, data)?;

        debug!(
            resource = descriptor.api_name,
            id = %identity,
            fields = object.len(),
            "Updating object"
        );

        self.client
            .update(descriptor.api_name, object, &identity, &scope, ws)
            .await
            .map_err(|e| self.remote_error(Operation::Update, &e))?;

        info!(resource = descriptor.api_name, id = %identity, "Object updated");
        Ok(())
    }

    /// Delete the object.
    ///
    /// Once the client has been called the identity is cleared whatever the
    /// outcome. An object without identity is already gone.
    ///
    /// # Errors
    ///
    /// Returns scope errors before any client call and [`Error::RemoteCallError`] on
    /// client failure.
    pub async fn delete(&self, data: &mut ResourceData) -> Result<()> {
        let descriptor = self.descriptor;
        let Some(identity) = data.id().map(str::to_string) else {
            return Ok(());
        };

        let scope = resolve_scope(descriptor, &self.config, data, Fallback::Strict)?;
        let ws = resolve_ws(descriptor, &self.config, data)?;

        debug!(resource = descriptor.api_name, id = %identity, "Deleting object");

        let result = self
            .client
            .delete(descriptor.api_name, &identity, &scope, ws)
            .await;
        data.clear_id();
        result.map_err(|e| self.remote_error(Operation::Delete, &e))?;

        info!(resource = descriptor.api_name, id = %identity, "Object deleted");
        Ok(())
    }

    /// Adopt an existing object by identity and read it.
    ///
    /// # Errors
    ///
    /// Same as [`read`](Self::read).
    pub async fn import(&self, identity: &str, data: &mut ResourceData) -> Result<ReadOutcome> {
        data.set_id(identity);
        let outcome = self.read(data).await?;
        if outcome == ReadOutcome::Present {
            info!(resource = self.descriptor.api_name, id = identity, "Object imported");
        }
        Ok(outcome)
    }

    fn require_id(&self, data: &ResourceData) -> Result<String> {
        data.id().map(str::to_string).ok_or_else(|| Error::IdentityError {
            resource: self.descriptor.api_name.to_string(),
            field: self.descriptor.identity.field().unwrap_or("id").to_string(),
        })
    }

    fn remote_error(&self, operation: Operation, err: &Error) -> Error {
        let message = match err {
            Error::ClientError(message) => message.clone(),
            other => other.to_string(),
        };
        Error::RemoteCallError {
            resource: self.descriptor.api_name.to_string(),
            operation,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use crate::schema::{FieldDescriptor, IdentityRule, ScopeParam, ScopeRule};
    use fortimanager_core::config::WorkspaceMode;
    use fortimanager_core::{MockFortiClient, RemoteObject, ScopeParams, WireValue, WsParams};
    use mockall::predicate::{always, eq};

    static QUARANTINE: ResourceDescriptor = ResourceDescriptor {
        type_name: "fortimanager_quarantine",
        api_name: "Quarantine",
        identity: IdentityRule::Fixed("Quarantine"),
        create_verb: CreateVerb::Create,
        scope: ScopeRule::VDOM,
        locks_workspace: true,
        fields: &[
            FieldDescriptor::int("agelimit", "agelimit"),
            FieldDescriptor::string("destination", "destination"),
        ],
    };

    static SETTINGS: ResourceDescriptor = ResourceDescriptor {
        type_name: "fortimanager_settings",
        api_name: "Settings",
        identity: IdentityRule::Fixed("Settings"),
        create_verb: CreateVerb::Update,
        scope: ScopeRule::DEVICE,
        locks_workspace: false,
        fields: &[FieldDescriptor::string("severity", "severity")],
    };

    static AREA: [ScopeParam; 1] = [ScopeParam::new("area")];

    static LINK: ResourceDescriptor = ResourceDescriptor {
        type_name: "fortimanager_link",
        api_name: "Link",
        identity: IdentityRule::StringField("name"),
        create_verb: CreateVerb::Create,
        scope: ScopeRule::vdom_with_parents(&AREA),
        locks_workspace: true,
        fields: &[
            FieldDescriptor::string("name", "name").required(),
            FieldDescriptor::string("peer", "peer"),
        ],
    };

    fn config() -> ProviderConfig {
        ProviderConfig::new("fmg.example.com").unwrap()
    }

    fn adapter(
        descriptor: &'static ResourceDescriptor,
        client: MockFortiClient,
        config: ProviderConfig,
    ) -> ResourceAdapter {
        ResourceAdapter::new(descriptor, Arc::new(client), Arc::new(config))
    }

    fn device_scope() -> ScopeParams {
        ScopeParams::new().with("device", "fgt1").with("vdom", "root")
    }

    #[tokio::test]
    async fn create_sends_set_fields_and_records_identity() {
        let mut client = MockFortiClient::new();
        let expected = RemoteObject::from([("agelimit".to_string(), WireValue::Int(5))]);
        client
            .expect_create()
            .with(eq("Quarantine"), eq(expected), eq(device_scope()), eq(None::<WsParams>))
            .times(1)
            .returning(|_, object, _, _| Ok(object));

        let adapter = adapter(&QUARANTINE, client, config());
        let mut data = ResourceData::new()
            .with("agelimit", 5)
            .with("device_name", "fgt1")
            .with("device_vdom", "root");

        let id = adapter.create(&mut data).await.unwrap();
        assert_eq!(id, "Quarantine");
        assert_eq!(data.id(), Some("Quarantine"));
    }

    #[tokio::test]
    async fn create_uses_configured_device_and_workspace() {
        let mut client = MockFortiClient::new();
        client
            .expect_create()
            .with(
                always(),
                always(),
                eq(device_scope()),
                eq(Some(WsParams::new("root"))),
            )
            .times(1)
            .returning(|_, object, _, _| Ok(object));

        let config = config()
            .with_device_name("fgt1")
            .with_device_vdom("root")
            .with_workspace_mode(WorkspaceMode::Workflow);
        let adapter = adapter(&QUARANTINE, client, config);
        let mut data = ResourceData::new().with("destination", "disk");

        adapter.create(&mut data).await.unwrap();
    }

    #[tokio::test]
    async fn create_without_device_fails_before_client_call() {
        let mut client = MockFortiClient::new();
        client.expect_create().never();

        let adapter = adapter(&QUARANTINE, client, config());
        let mut data = ResourceData::new().with("agelimit", 5);

        let err = adapter.create(&mut data).await.unwrap_err();
        assert_eq!(
            err,
            Error::ScopeResolutionError {
                resource: "Quarantine".to_string(),
                parameter: "device_name".to_string(),
            }
        );
        assert!(data.id().is_none());
    }

    #[tokio::test]
    async fn create_singleton_upserts_through_update() {
        let mut client = MockFortiClient::new();
        client.expect_create().never();
        client
            .expect_update()
            .with(
                eq("Settings"),
                always(),
                eq("Settings"),
                eq(ScopeParams::new().with("device", "fgt1")),
                eq(None::<WsParams>),
            )
            .times(1)
            .returning(|_, object, _, _, _| Ok(object));

        let adapter = adapter(&SETTINGS, client, config().with_device_name("fgt1"));
        let mut data = ResourceData::new().with("severity", "information");

        assert_eq!(adapter.create(&mut data).await.unwrap(), "Settings");
    }

    #[tokio::test]
    async fn create_client_error_is_wrapped() {
        let mut client = MockFortiClient::new();
        client
            .expect_create()
            .returning(|_, _, _, _| Err(Error::ClientError("object already exists".to_string())));

        let config = config().with_device_name("fgt1").with_device_vdom("root");
        let adapter = adapter(&QUARANTINE, client, config);
        let mut data = ResourceData::new().with("agelimit", 5);

        let err = adapter.create(&mut data).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error create Quarantine resource: object already exists"
        );
        assert!(data.id().is_none());
    }

    #[tokio::test]
    async fn create_rejects_missing_required_field() {
        let mut client = MockFortiClient::new();
        client.expect_create().never();

        let config = config().with_device_name("fgt1").with_device_vdom("root");
        let adapter = adapter(&LINK, client, config);
        let mut data = ResourceData::new().with("area", "0.0.0.1");

        let err = adapter.create(&mut data).await.unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[tokio::test]
    async fn create_scopes_under_parent() {
        let mut client = MockFortiClient::new();
        client
            .expect_create()
            .with(
                eq("Link"),
                eq(RemoteObject::from([("name".to_string(), WireValue::from("vl1"))])),
                eq(device_scope().with("area", "0.0.0.1")),
                eq(None::<WsParams>),
            )
            .times(1)
            .returning(|_, object, _, _| Ok(object));

        let config = config().with_device_name("fgt1").with_device_vdom("root");
        let adapter = adapter(&LINK, client, config);
        let mut data = ResourceData::new().with("name", "vl1").with("area", "0.0.0.1");

        assert_eq!(adapter.create(&mut data).await.unwrap(), "vl1");
    }

    #[tokio::test]
    async fn read_refreshes_local_state() {
        let mut client = MockFortiClient::new();
        client
            .expect_read()
            .with(eq("Quarantine"), eq("Quarantine"), eq(device_scope()))
            .times(1)
            .returning(|_, _, _| {
                Ok(Some(RemoteObject::from([
                    ("agelimit".to_string(), WireValue::Int(7)),
                    ("destination".to_string(), WireValue::from("disk")),
                ])))
            });

        let config = config().with_device_name("fgt1").with_device_vdom("root");
        let adapter = adapter(&QUARANTINE, client, config);
        let mut data = ResourceData::new().with_id("Quarantine").with("agelimit", 5);

        assert_eq!(adapter.read(&mut data).await.unwrap(), ReadOutcome::Present);
        assert_eq!(data.get_int("agelimit"), Some(7));
        assert_eq!(data.get_str("destination"), Some("disk"));
    }

    #[tokio::test]
    async fn read_of_deleted_object_clears_identity() {
        let mut client = MockFortiClient::new();
        client.expect_read().times(1).returning(|_, _, _| Ok(None));

        let config = config().with_device_name("fgt1").with_device_vdom("root");
        let adapter = adapter(&QUARANTINE, client, config);
        let mut data = ResourceData::new().with_id("Quarantine").with("agelimit", 5);

        assert_eq!(adapter.read(&mut data).await.unwrap(), ReadOutcome::Absent);
        assert!(data.id().is_none());
    }

    #[tokio::test]
    async fn read_without_identity_is_absent() {
        let mut client = MockFortiClient::new();
        client.expect_read().never();

        let adapter = adapter(&QUARANTINE, client, config());
        let mut data = ResourceData::new();
        assert_eq!(adapter.read(&mut data).await.unwrap(), ReadOutcome::Absent);
    }

    #[tokio::test]
    async fn read_with_missing_device_fails_before_client_call() {
        let mut client = MockFortiClient::new();
        client.expect_read().never();

        let adapter = adapter(&QUARANTINE, client, config());
        let mut data = ResourceData::new().with_id("Quarantine");

        let err = adapter.read(&mut data).await.unwrap_err();
        assert_eq!(
            err,
            Error::MissingParameterError {
                resource: "Quarantine".to_string(),
                parameter: "device_name".to_string(),
            }
        );
        assert_eq!(data.id(), Some("Quarantine"));
    }

    #[tokio::test]
    async fn read_client_error_keeps_identity() {
        let mut client = MockFortiClient::new();
        client
            .expect_read()
            .returning(|_, _, _| Err(Error::ClientError("timeout".to_string())));

        let config = config().with_device_name("fgt1").with_device_vdom("root");
        let adapter = adapter(&QUARANTINE, client, config);
        let mut data = ResourceData::new().with_id("Quarantine");

        let err = adapter.read(&mut data).await.unwrap_err();
        assert!(matches!(
            err,
            Error::RemoteCallError {
                operation: Operation::Read,
                ..
            }
        ));
        assert_eq!(data.id(), Some("Quarantine"));
    }

    #[tokio::test]
    async fn update_sends_changed_fields() {
        let mut client = MockFortiClient::new();
        let expected = RemoteObject::from([
            ("agelimit".to_string(), WireValue::Int(10)),
            ("destination".to_string(), WireValue::from("")),
        ]);
        client
            .expect_update()
            .with(
                eq("Quarantine"),
                eq(expected),
                eq("Quarantine"),
                eq(device_scope()),
                eq(None::<WsParams>),
            )
            .times(1)
            .returning(|_, object, _, _, _| Ok(object));

        let config = config().with_device_name("fgt1").with_device_vdom("root");
        let adapter = adapter(&QUARANTINE, client, config);
        let prior = ResourceData::from_values(record! { "agelimit" => 5, "destination" => "disk" })
            .with_id("Quarantine");
        let mut data = ResourceData::from_plan(Some(&prior), record! { "agelimit" => 10 });

        adapter.update(&mut data).await.unwrap();
    }

    #[tokio::test]
    async fn update_requires_identity() {
        let mut client = MockFortiClient::new();
        client.expect_update().never();

        let adapter = adapter(&LINK, client, config());
        let mut data = ResourceData::new().with("name", "vl1");

        let err = adapter.update(&mut data).await.unwrap_err();
        assert_eq!(
            err,
            Error::IdentityError {
                resource: "Link".to_string(),
                field: "name".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn delete_clears_identity() {
        let mut client = MockFortiClient::new();
        client
            .expect_delete()
            .with(eq("Quarantine"), eq("Quarantine"), eq(device_scope()), eq(None::<WsParams>))
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let config = config().with_device_name("fgt1").with_device_vdom("root");
        let adapter = adapter(&QUARANTINE, client, config);
        let mut data = ResourceData::new().with_id("Quarantine");

        adapter.delete(&mut data).await.unwrap();
        assert!(data.id().is_none());
    }

    #[tokio::test]
    async fn delete_clears_identity_even_on_client_error() {
        let mut client = MockFortiClient::new();
        client
            .expect_delete()
            .returning(|_, _, _, _| Err(Error::ClientError("workspace locked".to_string())));

        let config = config().with_device_name("fgt1").with_device_vdom("root");
        let adapter = adapter(&QUARANTINE, client, config);
        let mut data = ResourceData::new().with_id("Quarantine");

        let err = adapter.delete(&mut data).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error delete Quarantine resource: workspace locked"
        );
        assert!(data.id().is_none());
    }

    #[tokio::test]
    async fn import_recovers_scope_from_import_options() {
        let mut client = MockFortiClient::new();
        client
            .expect_read()
            .with(eq("Link"), eq("vl1"), eq(device_scope().with("area", "0.0.0.1")))
            .times(1)
            .returning(|_, _, _| {
                Ok(Some(RemoteObject::from([
                    ("name".to_string(), WireValue::from("vl1")),
                    ("peer".to_string(), WireValue::from("10.0.0.2")),
                ])))
            });

        let config = config()
            .with_import_option("device_name", "fgt1")
            .with_import_option("device_vdom", "root")
            .with_import_option("area", "0.0.0.1");
        let adapter = adapter(&LINK, client, config);
        let mut data = ResourceData::new();

        assert_eq!(
            adapter.import("vl1", &mut data).await.unwrap(),
            ReadOutcome::Present
        );
        assert_eq!(data.id(), Some("vl1"));
        assert_eq!(data.get_str("peer"), Some("10.0.0.2"));
        assert_eq!(data.get_str("area"), Some("0.0.0.1"));
        assert_eq!(data.get_str("device_name"), Some("fgt1"));
    }
}
