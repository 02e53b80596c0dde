//! Group and role command tests.

use akc_client::Method;
use serde_json::{json, Value};

use crate::common::Harness;

const GROUPS: &str = "/core/groups/";
const ROLES: &str = "/rbac/roles/";

#[tokio::test]
async fn group_create_sends_superuser_flag() {
    let h = Harness::new();

    let out = h
        .run(&["group", "create", "admins", "--is-superuser"])
        .await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "Group 'admins' created successfully.\n");
    let posts = h.api.requests_with(Method::Post);
    assert_eq!(posts[0].path, GROUPS);
    assert_eq!(
        posts[0].body,
        Some(json!({"name": "admins", "is_superuser": true}))
    );
}

#[tokio::test]
async fn group_create_then_get_round_trips_fields() -> anyhow::Result<()> {
    let h = Harness::new();
    let parent = h.api.seed(GROUPS, json!({"name": "staff"}));
    let pk = parent["pk"].as_str().unwrap().to_string();

    let created = h
        .run(&[
            "group",
            "create",
            "admins",
            "--parent",
            &pk,
            "--is-superuser",
        ])
        .await;
    let out = h.run(&["group", "get", "admins", "-o", "json"]).await;

    assert_eq!(created.code, 0);
    assert_eq!(out.code, 0);
    let record: Value = serde_json::from_str(&out.stdout)?;
    assert_eq!(record["name"], "admins");
    assert_eq!(record["parent"], pk.as_str());
    assert_eq!(record["is_superuser"], true);
    Ok(())
}

#[tokio::test]
async fn group_get_by_name_filters() -> anyhow::Result<()> {
    let h = Harness::new();
    h.api.seed(GROUPS, json!({"name": "admins"}));

    let out = h.run(&["group", "get", "admins", "-o", "json"]).await;

    assert_eq!(out.code, 0);
    let record: Value = serde_json::from_str(&out.stdout)?;
    assert_eq!(record["name"], "admins");
    let lookup = &h.api.requests()[0];
    assert_eq!(lookup.path, GROUPS);
    assert_eq!(
        lookup.query,
        vec![("name".to_string(), "admins".to_string())]
    );
    Ok(())
}

#[tokio::test]
async fn group_get_missing_name_is_a_soft_miss() {
    let h = Harness::new();

    let out = h.run(&["group", "get", "nobody"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "Group 'nobody' not found.\n");
}

#[tokio::test]
async fn group_update_by_name_patches_uuid() {
    let h = Harness::new();
    let group = h.api.seed(GROUPS, json!({"name": "admins"}));
    let pk = group["pk"].as_str().unwrap().to_string();

    let out = h
        .run(&["group", "update", "admins", "--name", "operators"])
        .await;

    assert_eq!(out.code, 0);
    assert_eq!(
        out.stdout,
        format!("Group 'operators' (ID: {pk}) updated successfully.\n")
    );
    let patches = h.api.requests_with(Method::Patch);
    assert_eq!(patches[0].path, format!("/core/groups/{pk}/"));
    assert_eq!(patches[0].body, Some(json!({"name": "operators"})));
}

#[tokio::test]
async fn group_update_without_flags_makes_no_request() {
    let h = Harness::new();

    let out = h.run(&["group", "update", "admins"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "No fields to update.\n");
    assert!(h.api.requests().is_empty());
}

#[tokio::test]
async fn group_update_of_unknown_name_fails() {
    let h = Harness::new();

    let out = h
        .run(&["group", "update", "ghosts", "--not-superuser"])
        .await;

    assert_eq!(out.code, 1);
    assert_eq!(out.stdout, "Group 'ghosts' not found.\n");
    assert!(h.api.requests_with(Method::Patch).is_empty());
}

#[tokio::test]
async fn group_list_users_resolves_name_first() {
    let h = Harness::new();
    let group = h.api.seed(GROUPS, json!({"name": "admins"}));
    let pk = group["pk"].as_str().unwrap().to_string();
    h.api.respond(
        Method::Get,
        &format!("/core/groups/{pk}/users/"),
        200,
        r#"{"results": [{"pk": 1, "username": "akadmin", "email": "root@example.com"}]}"#,
    );

    let out = h.run(&["group", "list-users", "admins"]).await;

    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("Users in group admins"));
    for expected in ["Username", "akadmin", "root@example.com"] {
        assert!(out.stdout.contains(expected), "missing {expected}");
    }
}

#[tokio::test]
async fn group_delete_by_name() {
    let h = Harness::new();
    h.api.seed(GROUPS, json!({"name": "admins"}));

    let out = h.run(&["group", "delete", "admins"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "Group with ID admins deleted successfully.\n");
    assert!(h.api.records(GROUPS).is_empty());
}

#[tokio::test]
async fn role_create_and_list() {
    let h = Harness::new();

    let created = h.run(&["role", "create", "auditor"]).await;
    let listed = h.run(&["role", "list"]).await;

    assert_eq!(created.stdout, "Role 'auditor' created successfully.\n");
    assert!(listed.stdout.contains("Roles"));
    assert!(listed.stdout.contains("auditor"));
}

#[tokio::test]
async fn role_create_then_get_round_trips_fields() -> anyhow::Result<()> {
    let h = Harness::new();

    let created = h.run(&["role", "create", "auditor"]).await;
    let out = h.run(&["role", "get", "auditor", "-o", "json"]).await;

    assert_eq!(created.code, 0);
    assert_eq!(out.code, 0);
    let record: Value = serde_json::from_str(&out.stdout)?;
    assert_eq!(record["name"], "auditor");
    assert_eq!(record, Value::Object(h.api.records(ROLES)[0].clone()));
    Ok(())
}

#[tokio::test]
async fn role_update_without_flags_makes_no_request() {
    let h = Harness::new();

    let out = h.run(&["role", "update", "auditor"]).await;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "No fields to update.\n");
    assert!(h.api.requests().is_empty());
}

#[tokio::test]
async fn role_list_groups_by_uuid_skips_lookup() {
    let h = Harness::new();
    let role = h.api.seed(ROLES, json!({"name": "auditor"}));
    let pk = role["pk"].as_str().unwrap().to_string();
    h.api.respond(
        Method::Get,
        &format!("/rbac/roles/{pk}/groups/"),
        200,
        r#"{"results": [{"pk": "g-1", "name": "security"}]}"#,
    );

    let out = h.run(&["role", "list-groups", pk.as_str()]).await;

    assert_eq!(out.code, 0);
    assert!(out.stdout.contains(&format!("Groups with role {pk}")));
    assert!(out.stdout.contains("security"));
    assert_eq!(h.api.requests().len(), 1);
}

#[tokio::test]
async fn role_list_users_of_unknown_role_fails() {
    let h = Harness::new();

    let out = h.run(&["role", "list-users", "ghost"]).await;

    assert_eq!(out.code, 1);
    assert_eq!(out.stdout, "Role 'ghost' not found.\n");
}
