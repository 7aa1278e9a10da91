//! Scoping parameter resolution.
//!
//! Device, VDOM and parent values come from the local state first and fall back to
//! the provider configuration. On read (which includes import) a blank value may
//! also be recovered from the configured import options.

use fortimanager_core::config::{ScopeType, GLOBAL_ADOM};
use fortimanager_core::scope::{DEVICE_KEY, VDOM_KEY};
use fortimanager_core::{Error, ProviderConfig, Result, ScopeParams, WsParams};
use tracing::debug;

use crate::data::{LocalValue, ResourceData};
use crate::schema::{ResourceDescriptor, ADOM, DEVICE_NAME, DEVICE_VDOM};

/// What to do with a blank scoping value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Fail with [`Error::ScopeResolutionError`].
    Strict,
    /// Consult the import options and fail with [`Error::MissingParameterError`].
    ImportOptions,
}

/// Resolve the value of a scoping field.
///
/// A non-blank local value wins. `device_name` and `device_vdom` then fall back to
/// the provider configuration. `adom` follows the configured scope type. Anything
/// else resolves to the local value or an empty string.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] when the scope type is `adom` and the local state
/// names none.
pub fn get_variable(config: &ProviderConfig, data: &ResourceData, field: &str) -> Result<String> {
    let local = match data.get(field) {
        Some(LocalValue::Str(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(LocalValue::Int(v)) => Some(v.to_string()),
        _ => None,
    };

    let value = match field {
        ADOM => match config.scopetype {
            ScopeType::Inherit => config.inherited_adom().to_string(),
            ScopeType::Global => GLOBAL_ADOM.to_string(),
            ScopeType::Adom => local.ok_or_else(|| {
                Error::ConfigError("scopetype is adom but no adom is set".to_string())
            })?,
        },
        DEVICE_NAME => local
            .or_else(|| config.device_name.clone())
            .unwrap_or_default(),
        DEVICE_VDOM => local
            .or_else(|| config.device_vdom.clone())
            .unwrap_or_default(),
        _ => local.unwrap_or_default(),
    };

    Ok(value)
}

/// Value of `field` among the configured import options, or an empty string.
#[must_use]
pub fn import_option_checking(config: &ProviderConfig, field: &str) -> String {
    config.import_option(field).unwrap_or_default().to_string()
}

/// Build the scope parameter map for one call.
///
/// With [`Fallback::ImportOptions`] a recovered value is written back into `data`
/// so later refreshes do not depend on the import options.
///
/// # Errors
///
/// Returns [`Error::ScopeResolutionError`] or [`Error::MissingParameterError`] for a
/// blank value depending on `fallback`.
pub fn resolve_scope(
    descriptor: &ResourceDescriptor,
    config: &ProviderConfig,
    data: &mut ResourceData,
    fallback: Fallback,
) -> Result<ScopeParams> {
    let mut pairs = vec![(DEVICE_NAME, DEVICE_KEY)];
    if descriptor.scope.vdom {
        pairs.push((DEVICE_VDOM, VDOM_KEY));
    }
    pairs.extend(descriptor.scope.parents.iter().map(|p| (p.local, p.key)));

    let mut scope = ScopeParams::new();
    for (local, key) in pairs {
        let mut value = get_variable(config, data, local)?;

        if value.trim().is_empty() {
            match fallback {
                Fallback::Strict => {
                    return Err(Error::ScopeResolutionError {
                        resource: descriptor.api_name.to_string(),
                        parameter: local.to_string(),
                    });
                }
                Fallback::ImportOptions => {
                    value = import_option_checking(config, local);
                    if value.is_empty() {
                        return Err(Error::MissingParameterError {
                            resource: descriptor.api_name.to_string(),
                            parameter: local.to_string(),
                        });
                    }
                    debug!(
                        resource = descriptor.api_name,
                        parameter = local,
                        "Scope parameter recovered from import options"
                    );
                    data.set(local, value.clone());
                }
            }
        }

        scope.insert(key, value);
    }

    Ok(scope)
}

/// Workspace parameters for a mutating call, if the resource takes part in locking.
///
/// # Errors
///
/// Propagates ADOM resolution errors from [`get_variable`].
pub fn resolve_ws(
    descriptor: &ResourceDescriptor,
    config: &ProviderConfig,
    data: &ResourceData,
) -> Result<Option<WsParams>> {
    if !descriptor.locks_workspace || !config.workspace_mode.is_enabled() {
        return Ok(None);
    }
    get_variable(config, data, ADOM).map(|adom| Some(WsParams::new(adom)))
}
