//! User command tests.

use akc_client::Method;
use serde_json::{json, Value};

use crate::common::Harness;

const USERS: &str = "/core/users/";

#[tokio::test]
async fn create_sends_only_supplied_flags() {
    let h = Harness::new();

    let out = h
        .run(&["user", "create", "jane", "jane@example.com", "--not-active"])
        .await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "User 'jane' created successfully.\n");
    let posts = h.api.requests_with(Method::Post);
    assert_eq!(
        posts[0].body,
        Some(json!({"username": "jane", "email": "jane@example.com", "is_active": false}))
    );
}

#[tokio::test]
async fn create_then_get_by_username_round_trips() -> anyhow::Result<()> {
    let h = Harness::new();

    h.run(&[
        "user",
        "create",
        "jane",
        "jane@example.com",
        "--name",
        "Jane Doe",
        "--is-superuser",
    ])
    .await;
    let out = h.run(&["user", "get", "jane", "-o", "json"]).await;

    assert_eq!(out.code, 0);
    let record: Value = serde_json::from_str(&out.stdout)?;
    assert_eq!(record["username"], "jane");
    assert_eq!(record["email"], "jane@example.com");
    assert_eq!(record["name"], "Jane Doe");
    assert_eq!(record["is_superuser"], true);

    let lookup = h.api.requests_with(Method::Get).pop().unwrap();
    assert_eq!(lookup.path, USERS);
    assert_eq!(
        lookup.query,
        vec![("username".to_string(), "jane".to_string())]
    );
    Ok(())
}

#[tokio::test]
async fn get_by_numeric_id_uses_item_path() {
    let h = Harness::new();
    h.api.seed(USERS, json!({"pk": 4, "username": "jane"}));

    let out = h.run(&["user", "get", "4"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "pk: 4\nusername: jane\n");
    assert_eq!(h.api.requests()[0].path, "/core/users/4/");
}

#[tokio::test]
async fn get_unknown_username_is_a_soft_miss() {
    let h = Harness::new();

    let out = h.run(&["user", "get", "ghost"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "User 'ghost' not found.\n");
}

#[tokio::test]
async fn list_table_renders_flags_and_blanks() {
    let h = Harness::new();
    h.api.seed(
        USERS,
        json!({
            "pk": 1,
            "username": "akadmin",
            "email": null,
            "is_active": true,
            "is_superuser": false
        }),
    );

    let out = h.run(&["user", "list"]).await;

    assert_eq!(out.code, 0);
    for expected in ["Users", "Username", "Superuser", "akadmin", "true", "false"] {
        assert!(out.stdout.contains(expected), "missing {expected}");
    }
    assert!(!out.stdout.contains("null"));
}

#[tokio::test]
async fn update_without_flags_makes_no_request() {
    let h = Harness::new();

    let out = h.run(&["user", "update", "jane"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "No fields to update.\n");
    assert!(h.api.requests().is_empty());
}

#[tokio::test]
async fn update_by_username_patches_resolved_pk() {
    let h = Harness::new();
    h.api.seed(
        USERS,
        json!({"pk": 9, "username": "jane", "is_active": true}),
    );

    let out = h
        .run(&["user", "update", "jane", "--not-active", "--name", ""])
        .await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "User 'jane' (ID: 9) updated successfully.\n");
    let patches = h.api.requests_with(Method::Patch);
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].path, "/core/users/9/");
    assert_eq!(
        patches[0].body,
        Some(json!({"name": "", "is_active": false}))
    );
}

#[tokio::test]
async fn update_of_unknown_username_fails() {
    let h = Harness::new();

    let out = h
        .run(&["user", "update", "ghost", "--email", "g@example.com"])
        .await;

    assert_eq!(out.code, 1);
    assert_eq!(out.stdout, "User 'ghost' not found.\n");
    assert!(h.api.requests_with(Method::Patch).is_empty());
}

#[tokio::test]
async fn delete_by_id() {
    let h = Harness::new();
    h.api.seed(USERS, json!({"pk": 3, "username": "old"}));

    let out = h.run(&["user", "delete", "3"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "User with ID 3 deleted successfully.\n");
    assert!(h.api.records(USERS).is_empty());
}

#[tokio::test]
async fn set_password_posts_to_action() {
    let h = Harness::new();
    h.api
        .respond(Method::Post, "/core/users/3/set_password/", 204, "");

    let out = h.run(&["user", "set-password", "3", "hunter2"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(
        out.stdout,
        "Password for user with ID 3 set successfully.\n"
    );
    let posts = h.api.requests_with(Method::Post);
    assert_eq!(posts[0].body, Some(json!({"password": "hunter2"})));
}

#[tokio::test]
async fn list_roles_uses_nested_endpoint() {
    let h = Harness::new();
    h.api.respond(
        Method::Get,
        "/core/users/3/roles/",
        200,
        r#"{"results": [{"pk": "r-1", "name": "auditors"}]}"#,
    );

    let out = h.run(&["user", "list-roles", "3"]).await;

    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("Roles for user 3"));
    assert!(out.stdout.contains("auditors"));
}

#[tokio::test]
async fn list_groups_json() -> anyhow::Result<()> {
    let h = Harness::new();
    h.api.respond(
        Method::Get,
        "/core/users/3/groups/",
        200,
        r#"{"results": [{"pk": "g-1", "name": "admins"}, {"pk": "g-2", "name": "staff"}]}"#,
    );

    let out = h
        .run(&["user", "list-groups", "3", "--output", "json"])
        .await;

    let groups: Vec<Value> = serde_json::from_str(&out.stdout)?;
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[1]["name"], "staff");
    Ok(())
}
