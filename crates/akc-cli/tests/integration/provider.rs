//! Provider command tests.

use akc_client::Method;
use serde_json::json;

use crate::common::Harness;

const PROVIDERS: &str = "/providers/all/";
const FLOWS: &str = "/flows/instances/";

#[tokio::test]
async fn create_oauth2_resolves_flow_slug() {
    let h = Harness::new();
    let flow = h
        .api
        .seed(FLOWS, json!({"name": "Consent", "slug": "default-consent"}));

    let out = h
        .run(&[
            "provider",
            "create-oauth2",
            "grafana",
            "default-consent",
            "--client-type",
            "confidential",
        ])
        .await;

    assert_eq!(out.code, 0);
    assert_eq!(
        out.stdout,
        "OAuth2 provider 'grafana' created successfully.\n"
    );
    let posts = h.api.requests_with(Method::Post);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].path, "/providers/oauth2/");
    assert_eq!(
        posts[0].body,
        Some(json!({
            "name": "grafana",
            "authorization_flow": flow["pk"],
            "client_type": "confidential"
        }))
    );
}

#[tokio::test]
async fn create_proxy_with_unknown_flow_posts_nothing() {
    let h = Harness::new();

    let out = h
        .run(&[
            "provider",
            "create-proxy",
            "wiki",
            "missing",
            "https://wiki.example.com",
        ])
        .await;

    assert_eq!(out.code, 1);
    assert_eq!(out.stdout, "Flow 'missing' not found.\n");
    assert!(h.api.requests_with(Method::Post).is_empty());
}

#[tokio::test]
async fn create_proxy_sends_hosts_and_mode() {
    let h = Harness::new();
    let flow = h
        .api
        .seed(FLOWS, json!({"name": "Consent", "slug": "consent"}));

    let out = h
        .run(&[
            "provider",
            "create-proxy",
            "wiki",
            "consent",
            "https://wiki.example.com",
            "--internal-host",
            "http://wiki:8080",
            "--mode",
            "proxy",
        ])
        .await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "Proxy provider 'wiki' created successfully.\n");
    let posts = h.api.requests_with(Method::Post);
    assert_eq!(posts[0].path, "/providers/proxy/");
    assert_eq!(
        posts[0].body,
        Some(json!({
            "name": "wiki",
            "authorization_flow": flow["pk"],
            "external_host": "https://wiki.example.com",
            "internal_host": "http://wiki:8080",
            "mode": "proxy"
        }))
    );
}

#[tokio::test]
async fn update_resolves_authorization_flow() {
    let h = Harness::new();
    h.api.seed(PROVIDERS, json!({"pk": 5, "name": "grafana"}));
    let flow = h
        .api
        .seed(FLOWS, json!({"name": "Implicit", "slug": "implicit"}));

    let out = h
        .run(&[
            "provider",
            "update",
            "5",
            "--authorization-flow",
            "implicit",
        ])
        .await;

    assert_eq!(out.code, 0);
    assert_eq!(
        out.stdout,
        "Provider 'grafana' (ID: 5) updated successfully.\n"
    );
    let patches = h.api.requests_with(Method::Patch);
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].path, "/providers/all/5/");
    assert_eq!(
        patches[0].body,
        Some(json!({"authorization_flow": flow["pk"]}))
    );
}

#[tokio::test]
async fn update_without_flags_makes_no_request() {
    let h = Harness::new();

    let out = h.run(&["provider", "update", "5"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "No fields to update.\n");
    assert!(h.api.requests().is_empty());
}

#[tokio::test]
async fn list_types_renders_table() {
    let h = Harness::new();
    h.api.respond(
        Method::Get,
        "/providers/all/types/",
        200,
        r#"[{"name": "OAuth2/OpenID Provider", "description": "OAuth2 and OpenID", "component": "ak-provider-oauth2-form", "model_name": "oauth2provider"}]"#,
    );

    let out = h.run(&["provider", "list-types"]).await;

    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("Provider Types"));
    for expected in ["Model Name", "ak-provider-oauth2-form", "oauth2provider"] {
        assert!(out.stdout.contains(expected), "missing {expected}");
    }
}

#[tokio::test]
async fn use_lists_dependent_objects() {
    let h = Harness::new();
    h.api.respond(
        Method::Get,
        "/providers/all/5/used_by/",
        200,
        r#"[{"app": "authentik_core", "model_name": "application", "pk": "a-1", "name": "Grafana", "action": "set_null"}]"#,
    );

    let out = h.run(&["provider", "use", "5"]).await;

    assert_eq!(out.code, 0);
    for expected in ["authentik_core", "application", "Grafana", "set_null"] {
        assert!(out.stdout.contains(expected), "missing {expected}");
    }
}

#[tokio::test]
async fn use_with_nothing_dependent() {
    let h = Harness::new();
    h.api
        .respond(Method::Get, "/providers/all/5/used_by/", 200, "[]");

    let out = h.run(&["provider", "use", "5"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "No results found.\n");
}

#[tokio::test]
async fn get_and_delete_by_id() {
    let h = Harness::new();
    h.api.seed(
        PROVIDERS,
        json!({"pk": 5, "name": "grafana", "component": "ak-provider-oauth2-form"}),
    );

    let shown = h.run(&["provider", "get", "5"]).await;
    let deleted = h.run(&["provider", "delete", "5"]).await;

    assert_eq!(
        shown.stdout,
        "component: ak-provider-oauth2-form\nname: grafana\npk: 5\n"
    );
    assert_eq!(deleted.stdout, "Provider with ID 5 deleted successfully.\n");
    assert!(h.api.records(PROVIDERS).is_empty());
}
