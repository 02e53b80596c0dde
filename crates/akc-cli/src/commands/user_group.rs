//! User-group membership commands.

use akc_client::{ApiClient, RecordExt};

use crate::cli::UserGroupCommand;
use crate::output::Console;
use crate::CliResult;

use super::membership::{fetch_patch, fetch_target, insert, remove, RelationField};

/// Runs a user-group command.
pub async fn run_user_group(
    cmd: UserGroupCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        UserGroupCommand::Add { user, group } => {
            let (group, pk) = fetch_target(client, RelationField::Groups, &group).await?;
            let patched = fetch_patch(client, &user, RelationField::Groups, insert(pk)).await?;

            let username = patched.user.text("username");
            let name = group.text("name");
            if patched.written {
                console.success(&format!(
                    "User '{username}' added to group '{name}' successfully."
                ));
            } else {
                console.warning(&format!("User '{username}' is already in group '{name}'."));
            }
            Ok(())
        }
        UserGroupCommand::Remove { user, group } => {
            let (group, pk) = fetch_target(client, RelationField::Groups, &group).await?;
            let patched = fetch_patch(client, &user, RelationField::Groups, remove(pk)).await?;

            let username = patched.user.text("username");
            let name = group.text("name");
            if patched.written {
                console.success(&format!(
                    "User '{username}' removed from group '{name}' successfully."
                ));
            } else {
                console.warning(&format!("User '{username}' is not in group '{name}'."));
            }
            Ok(())
        }
    }
}
