//! User-role assignment commands.

use akc_client::{ApiClient, RecordExt};

use crate::cli::UserRoleCommand;
use crate::output::Console;
use crate::CliResult;

use super::membership::{fetch_patch, fetch_target, insert, remove, RelationField};

/// Runs a user-role command.
pub async fn run_user_role(
    cmd: UserRoleCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        UserRoleCommand::Add { user, role } => {
            let (role, pk) = fetch_target(client, RelationField::Roles, &role).await?;
            let patched = fetch_patch(client, &user, RelationField::Roles, insert(pk)).await?;

            let username = patched.user.text("username");
            let name = role.text("name");
            if patched.written {
                console.success(&format!("Role '{name}' added to user '{username}' successfully."));
            } else {
                console.warning(&format!("User '{username}' already has role '{name}'."));
            }
            Ok(())
        }
        UserRoleCommand::Remove { user, role } => {
            let (role, pk) = fetch_target(client, RelationField::Roles, &role).await?;
            let patched = fetch_patch(client, &user, RelationField::Roles, remove(pk)).await?;

            let username = patched.user.text("username");
            let name = role.text("name");
            if patched.written {
                console.success(&format!(
                    "Role '{name}' removed from user '{username}' successfully."
                ));
            } else {
                console.warning(&format!("User '{username}' does not have role '{name}'."));
            }
            Ok(())
        }
    }
}
