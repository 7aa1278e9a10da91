//! Plan/apply driver.
//!
//! An object is either absent (no identity) or present (identity set).
//! [`Provider::apply`] moves it between the two by comparing the prior state with
//! the planned values. Every create or update is followed by a read so the returned
//! state mirrors the remote object.

use fortimanager_resource::{ReadOutcome, Record, ResourceAdapter, ResourceData};
use tracing::{debug, warn};

use crate::provider::{log_error, Provider};
use crate::Result;

/// Transition selected by [`Provider::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do
    Noop,
    /// Provision a new object
    Create,
    /// Modify the existing object in place
    Update,
    /// Delete the existing object, then create its replacement
    Replace,
    /// Remove the existing object
    Delete,
}

/// Choose the transition from `prior` to `planned` for `adapter`'s resource type.
///
/// A prior state without identity counts as absent.
#[must_use]
pub fn plan(
    adapter: &ResourceAdapter,
    prior: Option<&ResourceData>,
    planned: Option<&Record>,
) -> Action {
    match (present(prior), planned) {
        (None, None) => Action::Noop,
        (None, Some(_)) => Action::Create,
        (Some(_), None) => Action::Delete,
        (Some(prior), Some(planned)) => {
            let data = adapter.descriptor().plan_state(Some(prior), planned.clone());
            if data.changed_paths().next().is_none() {
                Action::Noop
            } else if adapter.descriptor().requires_replacement(&data) {
                Action::Replace
            } else {
                Action::Update
            }
        }
    }
}

impl Provider {
    /// Drive one object from `prior` to `planned`.
    ///
    /// Returns the new state, or `None` once the object is absent.
    ///
    /// # Errors
    ///
    /// Propagates the first failing operation's error. When the create half of a
    /// replacement fails the object is left absent.
    pub async fn apply(
        &self,
        type_name: &str,
        prior: Option<&ResourceData>,
        planned: Option<Record>,
    ) -> Result<Option<ResourceData>> {
        let adapter = self.adapter(type_name).map_err(log_error)?;
        let action = plan(&adapter, prior, planned.as_ref());
        debug!(resource = type_name, ?action, "Applying plan");

        run(&adapter, action, present(prior), planned)
            .await
            .map_err(log_error)
    }

    /// Read the remote object behind `state`.
    ///
    /// Returns `None` when the object no longer exists.
    ///
    /// # Errors
    ///
    /// Same as [`ResourceAdapter::read`].
    pub async fn refresh(
        &self,
        type_name: &str,
        state: ResourceData,
    ) -> Result<Option<ResourceData>> {
        let adapter = self.adapter(type_name).map_err(log_error)?;
        read_into(&adapter, state).await.map_err(log_error)
    }

    /// Adopt an existing object by identity.
    ///
    /// `scope` supplies the scoping fields (device, VDOM, parent keys) the object
    /// lives under; blank ones fall back to the configured import options.
    ///
    /// # Errors
    ///
    /// Same as [`ResourceAdapter::import`].
    pub async fn import(
        &self,
        type_name: &str,
        identity: &str,
        scope: Record,
    ) -> Result<Option<ResourceData>> {
        let adapter = self.adapter(type_name).map_err(log_error)?;
        let mut data = ResourceData::from_values(scope);
        match adapter.import(identity, &mut data).await.map_err(log_error)? {
            ReadOutcome::Present => Ok(Some(data)),
            ReadOutcome::Absent => Ok(None),
        }
    }
}

fn present(prior: Option<&ResourceData>) -> Option<&ResourceData> {
    prior.filter(|p| p.id().is_some())
}

async fn run(
    adapter: &ResourceAdapter,
    action: Action,
    prior: Option<&ResourceData>,
    planned: Option<Record>,
) -> Result<Option<ResourceData>> {
    match (action, prior, planned) {
        (Action::Create, _, Some(planned)) => {
            create_and_refresh(adapter, adapter.descriptor().plan_state(None, planned)).await
        }
        (Action::Update, Some(prior), Some(planned)) => {
            let mut data = adapter.descriptor().plan_state(Some(prior), planned);
            adapter.update(&mut data).await?;
            refresh_after(adapter, data).await
        }
        (Action::Replace, Some(prior), Some(planned)) => {
            adapter.delete(&mut prior.clone()).await?;
            create_and_refresh(adapter, adapter.descriptor().plan_state(None, planned)).await
        }
        (Action::Delete, Some(prior), _) => {
            adapter.delete(&mut prior.clone()).await?;
            Ok(None)
        }
        (_, prior, _) => Ok(prior.cloned()),
    }
}

async fn create_and_refresh(
    adapter: &ResourceAdapter,
    mut data: ResourceData,
) -> Result<Option<ResourceData>> {
    adapter.create(&mut data).await?;
    refresh_after(adapter, data).await
}

async fn refresh_after(
    adapter: &ResourceAdapter,
    data: ResourceData,
) -> Result<Option<ResourceData>> {
    let state = read_into(adapter, data).await?;
    if state.is_none() {
        warn!(
            resource = adapter.descriptor().api_name,
            "Object missing right after apply"
        );
    }
    Ok(state)
}

async fn read_into(
    adapter: &ResourceAdapter,
    mut data: ResourceData,
) -> Result<Option<ResourceData>> {
    match adapter.read(&mut data).await? {
        ReadOutcome::Present => {
            data.clear_changes();
            Ok(Some(data))
        }
        ReadOutcome::Absent => Ok(None),
    }
}
