//! Plan/apply scenarios against the provider facade.

use std::sync::Arc;

use fortimanager_core::{
    Error, MockFortiClient, Operation, ProviderConfig, RemoteObject, ScopeParams, WireValue,
    WsParams,
};
use fortimanager_provider::{plan, Action, Provider};
use fortimanager_resource::{record, ResourceData};
use mockall::predicate::{always, eq};
use mockall::Sequence;

const DOC_SOURCE: &str = "fortimanager_dlp_fpdocsource";

fn config() -> ProviderConfig {
    ProviderConfig::new("fmg.example.com")
        .unwrap()
        .with_device_name("fgt1")
        .with_device_vdom("root")
}

fn vdom_scope() -> ScopeParams {
    ScopeParams::new().with("device", "fgt1").with("vdom", "root")
}

fn doc_source(name: &str, server: &str) -> RemoteObject {
    RemoteObject::from([
        ("name".to_string(), WireValue::from(name)),
        ("server".to_string(), WireValue::from(server)),
        ("tod-hour".to_string(), WireValue::from(2_i64)),
    ])
}

fn provider(client: MockFortiClient) -> Provider {
    Provider::configure(config(), Arc::new(client)).unwrap()
}

#[tokio::test]
async fn create_then_refresh() {
    let mut client = MockFortiClient::new();
    client
        .expect_create()
        .with(eq("DlpFpDocSource"), always(), eq(vdom_scope()), eq(None::<WsParams>))
        .times(1)
        .returning(|_, object, _, _| Ok(object));
    client
        .expect_read()
        .with(eq("DlpFpDocSource"), eq("docs"), eq(vdom_scope()))
        .times(1)
        .returning(|_, _, _| Ok(Some(doc_source("docs", "10.0.0.1"))));

    let planned = record! { "name" => "docs", "server" => "10.0.0.1" };
    let state = provider(client)
        .apply(DOC_SOURCE, None, Some(planned))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(state.id(), Some("docs"));
    assert_eq!(state.get_str("server"), Some("10.0.0.1"));
    assert_eq!(state.get_int("tod_hour"), Some(2));
    assert_eq!(state.changed_paths().count(), 0);
}

#[tokio::test]
async fn reapplying_same_config_keeps_remote_defaults() {
    let mut client = MockFortiClient::new();
    client
        .expect_create()
        .times(1)
        .returning(|_, object, _, _| Ok(object));
    client
        .expect_read()
        .times(1)
        .returning(|_, _, _| Ok(Some(doc_source("docs", "10.0.0.1"))));
    client.expect_update().never();
    client.expect_delete().never();

    let provider = provider(client);
    let planned = record! { "name" => "docs", "server" => "10.0.0.1" };
    let state = provider
        .apply(DOC_SOURCE, None, Some(planned.clone()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(state.get_int("tod_hour"), Some(2));

    let adapter = provider.adapter(DOC_SOURCE).unwrap();
    assert_eq!(plan(&adapter, Some(&state), Some(&planned)), Action::Noop);

    let second = provider
        .apply(DOC_SOURCE, Some(&state), Some(planned))
        .await
        .unwrap();
    assert_eq!(second, Some(state));
}

#[tokio::test]
async fn changed_field_updates_in_place() {
    let mut client = MockFortiClient::new();
    client.expect_create().never();
    client.expect_delete().never();
    client
        .expect_update()
        .with(
            eq("DlpFpDocSource"),
            eq(RemoteObject::from([
                ("name".to_string(), WireValue::from("docs")),
                ("server".to_string(), WireValue::from("10.0.0.2")),
            ])),
            eq("docs"),
            eq(vdom_scope()),
            eq(None::<WsParams>),
        )
        .times(1)
        .returning(|_, object, _, _, _| Ok(object));
    client
        .expect_read()
        .times(1)
        .returning(|_, _, _| Ok(Some(doc_source("docs", "10.0.0.2"))));

    let prior = ResourceData::from_values(record! { "name" => "docs", "server" => "10.0.0.1" })
        .with_id("docs");
    let planned = record! { "name" => "docs", "server" => "10.0.0.2" };

    let state = provider(client)
        .apply(DOC_SOURCE, Some(&prior), Some(planned))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(state.id(), Some("docs"));
    assert_eq!(state.get_str("server"), Some("10.0.0.2"));
}

#[tokio::test]
async fn renamed_object_is_replaced() {
    let mut seq = Sequence::new();
    let mut client = MockFortiClient::new();
    client.expect_update().never();
    client
        .expect_delete()
        .with(eq("DlpFpDocSource"), eq("docs"), eq(vdom_scope()), always())
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _, _| Ok(()));
    client
        .expect_create()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, object, _, _| Ok(object));
    client
        .expect_read()
        .with(eq("DlpFpDocSource"), eq("archive"), always())
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Ok(Some(doc_source("archive", "10.0.0.1"))));

    let prior = ResourceData::from_values(record! { "name" => "docs", "server" => "10.0.0.1" })
        .with_id("docs");
    let planned = record! { "name" => "archive", "server" => "10.0.0.1" };

    let state = provider(client)
        .apply(DOC_SOURCE, Some(&prior), Some(planned))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(state.id(), Some("archive"));
}

#[tokio::test]
async fn destroy_deletes() {
    let mut client = MockFortiClient::new();
    client
        .expect_delete()
        .with(eq("DlpFpDocSource"), eq("docs"), eq(vdom_scope()), eq(None::<WsParams>))
        .times(1)
        .returning(|_, _, _, _| Ok(()));

    let prior = ResourceData::from_values(record! { "name" => "docs" }).with_id("docs");
    let state = provider(client)
        .apply(DOC_SOURCE, Some(&prior), None)
        .await
        .unwrap();

    assert!(state.is_none());
}

#[tokio::test]
async fn unchanged_plan_makes_no_calls() {
    let prior = ResourceData::from_values(record! { "name" => "docs", "server" => "10.0.0.1" })
        .with_id("docs");
    let planned = record! { "name" => "docs", "server" => "10.0.0.1" };

    let state = provider(MockFortiClient::new())
        .apply(DOC_SOURCE, Some(&prior), Some(planned))
        .await
        .unwrap();

    assert_eq!(state, Some(prior));
}

#[tokio::test]
async fn refresh_detects_external_deletion() {
    let mut client = MockFortiClient::new();
    client.expect_read().times(1).returning(|_, _, _| Ok(None));

    let state = ResourceData::from_values(record! { "name" => "docs" }).with_id("docs");
    let refreshed = provider(client).refresh(DOC_SOURCE, state).await.unwrap();

    assert!(refreshed.is_none());
}

#[tokio::test]
async fn import_reads_under_given_scope() {
    let mut client = MockFortiClient::new();
    client
        .expect_read()
        .with(
            eq("LogSyslogdFilter"),
            eq("LogSyslogdFilter"),
            eq(ScopeParams::new().with("device", "fgt2")),
        )
        .times(1)
        .returning(|_, _, _| {
            Ok(Some(RemoteObject::from([(
                "severity".to_string(),
                WireValue::from("notification"),
            )])))
        });

    let state = provider(client)
        .import(
            "fortimanager_log_syslogd_filter",
            "LogSyslogdFilter",
            record! { "device_name" => "fgt2" },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(state.id(), Some("LogSyslogdFilter"));
    assert_eq!(state.get_str("severity"), Some("notification"));
    assert_eq!(state.get_str("device_name"), Some("fgt2"));
}

#[tokio::test]
async fn failed_create_leaves_object_absent() {
    let mut client = MockFortiClient::new();
    client
        .expect_create()
        .times(1)
        .returning(|_, _, _, _| Err(Error::ClientError("object already exists".to_string())));
    client.expect_read().never();

    let planned = record! { "name" => "docs" };
    let err = provider(client)
        .apply(DOC_SOURCE, None, Some(planned))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        Error::RemoteCallError {
            resource: "DlpFpDocSource".to_string(),
            operation: Operation::Create,
            message: "object already exists".to_string(),
        }
    );
}

#[tokio::test]
async fn unknown_type_is_rejected() {
    let err = provider(MockFortiClient::new())
        .apply("fortimanager_firewall_address", None, Some(record! { "name" => "a" }))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        Error::UnknownResource("fortimanager_firewall_address".to_string())
    );
}
