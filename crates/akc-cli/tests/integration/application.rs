//! Application command tests.

use akc_client::Method;
use serde_json::{json, Value};

use crate::common::Harness;

const APPS: &str = "/core/applications/";

#[tokio::test]
async fn create_prints_confirmation() -> anyhow::Result<()> {
    let h = Harness::new();

    let out = h.run(&["application", "create", "app1", "app1"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "Application 'app1' created successfully.\n");
    let posts = h.api.requests_with(Method::Post);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].path, APPS);
    assert_eq!(posts[0].body, Some(json!({"name": "app1", "slug": "app1"})));
    Ok(())
}

#[tokio::test]
async fn create_then_get_round_trips_fields() -> anyhow::Result<()> {
    let h = Harness::new();

    h.run(&[
        "application",
        "create",
        "My App",
        "my-app",
        "--provider",
        "3",
        "--launch-url",
        "https://app.example.com",
    ])
    .await;
    let out = h
        .run(&["application", "get", "my-app", "--output", "json"])
        .await;

    assert_eq!(out.code, 0);
    let record: Value = serde_json::from_str(&out.stdout)?;
    assert_eq!(record["name"], "My App");
    assert_eq!(record["slug"], "my-app");
    assert_eq!(record["provider"], 3);
    assert_eq!(record["meta_launch_url"], "https://app.example.com");
    Ok(())
}

#[tokio::test]
async fn get_prints_field_map() {
    let h = Harness::new();
    h.api.seed(
        APPS,
        json!({"pk": "a-1", "name": "App One", "slug": "app1"}),
    );

    let out = h.run(&["application", "get", "app1"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "name: App One\npk: a-1\nslug: app1\n");
}

#[tokio::test]
async fn get_unknown_slug_is_an_api_error() {
    let h = Harness::new();

    let out = h.run(&["application", "get", "nope"]).await;

    assert_eq!(out.code, 1);
    assert!(out.stdout.starts_with("API error: 404"));
}

#[tokio::test]
async fn list_json_matches_records() -> anyhow::Result<()> {
    let h = Harness::new();
    h.api
        .seed(APPS, json!({"name": "First", "slug": "first", "group": ""}));
    h.api.seed(
        APPS,
        json!({"name": "Second", "slug": "second", "provider": null}),
    );

    let out = h.run(&["application", "list", "-o", "json"]).await;

    assert_eq!(out.code, 0);
    let listed: Vec<Value> = serde_json::from_str(&out.stdout)?;
    let stored: Vec<Value> = h.api.records(APPS).into_iter().map(Value::Object).collect();
    assert_eq!(listed, stored);
    Ok(())
}

#[tokio::test]
async fn list_table_shows_columns() {
    let h = Harness::new();
    h.api.seed(
        APPS,
        json!({"pk": "a-1", "name": "App One", "slug": "app1"}),
    );

    let out = h.run(&["application", "list"]).await;

    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("Applications"));
    for expected in ["ID", "Name", "Slug", "a-1", "App One", "app1"] {
        assert!(out.stdout.contains(expected), "missing {expected}");
    }
}

#[tokio::test]
async fn update_without_flags_makes_no_request() {
    let h = Harness::new();
    h.api.seed(APPS, json!({"name": "App One", "slug": "app1"}));
    h.api.clear_requests();

    let out = h.run(&["application", "update", "app1"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "No fields to update.\n");
    assert!(h.api.requests().is_empty());
}

#[tokio::test]
async fn update_sends_only_supplied_fields() {
    let h = Harness::new();
    h.api.seed(
        APPS,
        json!({"pk": "a-1", "name": "App One", "slug": "app1", "meta_launch_url": "x"}),
    );

    let out = h
        .run(&["application", "update", "app1", "--launch-url", ""])
        .await;

    assert_eq!(out.code, 0);
    assert_eq!(
        out.stdout,
        "Application 'App One' (ID: a-1) updated successfully.\n"
    );
    let patches = h.api.requests_with(Method::Patch);
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].path, "/core/applications/app1/");
    assert_eq!(patches[0].body, Some(json!({"meta_launch_url": ""})));
}

#[tokio::test]
async fn delete_is_keyed_by_identifier() {
    let h = Harness::new();
    h.api.seed(APPS, json!({"name": "App One", "slug": "app1"}));

    let out = h.run(&["application", "delete", "app1"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(
        out.stdout,
        "Application with ID app1 deleted successfully.\n"
    );
    assert!(h.api.records(APPS).is_empty());
}

#[tokio::test]
async fn assign_provider_patches_provider() {
    let h = Harness::new();
    h.api.seed(APPS, json!({"name": "App One", "slug": "app1"}));

    let out = h
        .run(&["application", "assign-provider", "app1", "7"])
        .await;

    assert_eq!(out.code, 0);
    assert_eq!(
        out.stdout,
        "Provider with ID 7 assigned to application 'App One' successfully.\n"
    );
    let patches = h.api.requests_with(Method::Patch);
    assert_eq!(patches[0].body, Some(json!({"provider": 7})));
}

#[tokio::test]
async fn bind_flow_resolves_slug_and_fills_slot() {
    let h = Harness::new();
    h.api.seed(APPS, json!({"name": "App One", "slug": "app1"}));
    let flow = h.api.seed(
        "/flows/instances/",
        json!({"name": "Login", "slug": "my-flow"}),
    );

    let out = h
        .run(&[
            "application",
            "bind-flow",
            "app1",
            "my-flow",
            "-t",
            "authentication",
        ])
        .await;

    assert_eq!(out.code, 0);
    assert_eq!(
        out.stdout,
        "Flow 'my-flow' bound to application 'App One' as authentication flow.\n"
    );
    let lookup = &h.api.requests_with(Method::Get)[0];
    assert_eq!(lookup.path, "/flows/instances/");
    assert_eq!(
        lookup.query,
        vec![("slug".to_string(), "my-flow".to_string())]
    );
    let patches = h.api.requests_with(Method::Patch);
    assert_eq!(patches.len(), 1);
    assert_eq!(
        patches[0].body,
        Some(json!({"authentication_flow": flow["pk"]}))
    );
}

#[tokio::test]
async fn bind_flow_with_unknown_slug_fails_without_patch() {
    let h = Harness::new();
    h.api.seed(APPS, json!({"name": "App One", "slug": "app1"}));

    let out = h
        .run(&["application", "bind-flow", "app1", "nonexistent-slug"])
        .await;

    assert_eq!(out.code, 1);
    assert_eq!(out.stdout, "Flow 'nonexistent-slug' not found.\n");
    assert!(h.api.requests_with(Method::Patch).is_empty());
}

#[tokio::test]
async fn bind_flow_rejects_unknown_type_before_any_request() {
    let h = Harness::new();

    let out = h
        .run(&[
            "application",
            "bind-flow",
            "app1",
            "my-flow",
            "--flow-type",
            "enrollment",
        ])
        .await;

    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("Invalid flow type 'enrollment'"));
    assert!(h.api.requests().is_empty());
}

#[tokio::test]
async fn api_errors_print_status_and_body() {
    let h = Harness::new();
    h.api.respond(
        Method::Post,
        APPS,
        400,
        r#"{"slug":["Application with this slug already exists."]}"#,
    );

    let out = h.run(&["application", "create", "app1", "app1"]).await;

    assert_eq!(out.code, 1);
    assert_eq!(
        out.stdout,
        "API error: 400 - {\"slug\":[\"Application with this slug already exists.\"]}\n"
    );
}
