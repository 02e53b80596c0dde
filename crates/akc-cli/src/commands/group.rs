//! Group management commands.

use akc_client::models::{GroupRequest, PatchedGroupRequest};
use akc_client::{ApiClient, PartialUpdate, RecordExt};

use crate::cli::GroupCommand;
use crate::output::{Console, OutputFormat};
use crate::CliResult;

use super::{list_records, resolve_key, show_record, tri_state, Lookup, MemberRow, NameRow};

/// Runs a group command.
pub async fn run_group(
    cmd: GroupCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        GroupCommand::Create {
            name,
            parent,
            is_superuser,
            not_superuser,
        } => {
            let request = GroupRequest {
                name,
                parent,
                is_superuser: tri_state(is_superuser, not_superuser),
            };
            let created = client.groups().create(&request).await?;
            console.success(&format!("Group '{}' created successfully.", created.text("name")));
            Ok(())
        }
        GroupCommand::List { output } => {
            list_records::<NameRow>(client.groups(), console, "Groups", output).await
        }
        GroupCommand::Get { group, output } => {
            show_record(
                client.groups(),
                Lookup::uuid_or("name", &group),
                "Group",
                &group,
                console,
                output,
            )
            .await
        }
        GroupCommand::Update {
            group,
            name,
            parent,
            is_superuser,
            not_superuser,
        } => {
            let patch = PatchedGroupRequest {
                name: name.into(),
                parent: parent.into(),
                is_superuser: tri_state(is_superuser, not_superuser).into(),
            };
            update_group(client, console, &group, &patch).await
        }
        GroupCommand::Delete { group } => {
            let id = group_id(client, &group).await?;
            client.groups().destroy(&id).await?;
            console.success(&format!("Group with ID {group} deleted successfully."));
            Ok(())
        }
        GroupCommand::ListUsers { group, output } => {
            list_members(client, console, &group, output).await
        }
    }
}

/// Updates a group.
async fn update_group(
    client: &ApiClient,
    console: &mut Console,
    group: &str,
    patch: &PatchedGroupRequest,
) -> CliResult<()> {
    if patch.is_empty() {
        console.warning("No fields to update.");
        return Ok(());
    }

    let id = group_id(client, group).await?;
    let updated = client.groups().partial_update(&id, patch).await?;
    console.success(&format!(
        "Group '{}' (ID: {}) updated successfully.",
        updated.text("name"),
        updated.text("pk")
    ));
    Ok(())
}

/// Lists the members of a group.
async fn list_members(
    client: &ApiClient,
    console: &mut Console,
    group: &str,
    format: OutputFormat,
) -> CliResult<()> {
    let id = group_id(client, group).await?;
    let page = client.groups().nested_list(&id, "users").await?;
    console.list::<MemberRow>(&format!("Users in group {group}"), &page.results, format)
}

/// Resolves a group name or UUID to the group's UUID.
async fn group_id(client: &ApiClient, group: &str) -> CliResult<String> {
    let lookup = Lookup::uuid_or("name", group);
    resolve_key(client.groups(), lookup, "Group", group).await
}
