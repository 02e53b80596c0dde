//! Role management commands.

use akc_client::models::{PatchedRoleRequest, RoleRequest};
use akc_client::{ApiClient, PartialUpdate, RecordExt};

use crate::cli::RoleCommand;
use crate::output::Console;
use crate::CliResult;

use super::{list_records, resolve_key, show_record, Lookup, MemberRow, NameRow};

/// Runs a role command.
pub async fn run_role(
    cmd: RoleCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        RoleCommand::Create { name } => {
            let created = client.roles().create(&RoleRequest { name }).await?;
            console.success(&format!("Role '{}' created successfully.", created.text("name")));
            Ok(())
        }
        RoleCommand::List { output } => {
            list_records::<NameRow>(client.roles(), console, "Roles", output).await
        }
        RoleCommand::Get { role, output } => {
            show_record(
                client.roles(),
                Lookup::uuid_or("name", &role),
                "Role",
                &role,
                console,
                output,
            )
            .await
        }
        RoleCommand::Update { role, name } => {
            let patch = PatchedRoleRequest { name: name.into() };
            if patch.is_empty() {
                console.warning("No fields to update.");
                return Ok(());
            }

            let id = role_id(client, &role).await?;
            let updated = client.roles().partial_update(&id, &patch).await?;
            console.success(&format!(
                "Role '{}' (ID: {}) updated successfully.",
                updated.text("name"),
                updated.text("pk")
            ));
            Ok(())
        }
        RoleCommand::Delete { role } => {
            let id = role_id(client, &role).await?;
            client.roles().destroy(&id).await?;
            console.success(&format!("Role with ID {role} deleted successfully."));
            Ok(())
        }
        RoleCommand::ListUsers { role, output } => {
            let id = role_id(client, &role).await?;
            let page = client.roles().nested_list(&id, "users").await?;
            console.list::<MemberRow>(&format!("Users with role {role}"), &page.results, output)
        }
        RoleCommand::ListGroups { role, output } => {
            let id = role_id(client, &role).await?;
            let page = client.roles().nested_list(&id, "groups").await?;
            console.list::<NameRow>(&format!("Groups with role {role}"), &page.results, output)
        }
    }
}

/// Resolves a role name or UUID to the role's UUID.
async fn role_id(client: &ApiClient, role: &str) -> CliResult<String> {
    let lookup = Lookup::uuid_or("name", role);
    resolve_key(client.roles(), lookup, "Role", role).await
}
