//! User management commands.

use akc_client::models::{PasswordRequest, PatchedUserRequest, UserRequest};
use akc_client::{ApiClient, PartialUpdate, Record, RecordExt};
use tabled::Tabled;

use crate::cli::UserCommand;
use crate::output::{Console, OutputFormat, Row};
use crate::CliResult;

use super::{list_records, resolve_key, show_record, tri_state, Lookup, NameRow};

/// User representation for display.
#[derive(Debug, Clone, Tabled)]
pub struct UserRow {
    /// User ID.
    #[tabled(rename = "ID")]
    pub id: String,
    /// Username.
    #[tabled(rename = "Username")]
    pub username: String,
    /// Email address.
    #[tabled(rename = "Email")]
    pub email: String,
    /// Whether the account is active.
    #[tabled(rename = "Active")]
    pub active: String,
    /// Whether the account is a superuser.
    #[tabled(rename = "Superuser")]
    pub superuser: String,
}

impl Row for UserRow {
    fn from_record(record: &Record) -> Self {
        Self {
            id: record.text("pk"),
            username: record.text("username"),
            email: record.text("email"),
            active: record.text("is_active"),
            superuser: record.text("is_superuser"),
        }
    }
}

/// Runs a user command.
pub async fn run_user(
    cmd: UserCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        UserCommand::Create {
            username,
            email,
            name,
            is_active,
            not_active,
            is_superuser,
            not_superuser,
        } => {
            let request = UserRequest {
                username,
                email,
                name,
                is_active: tri_state(is_active, not_active),
                is_superuser: tri_state(is_superuser, not_superuser),
            };
            create_user(client, console, &request).await
        }
        UserCommand::List { output } => {
            list_records::<UserRow>(client.users(), console, "Users", output).await
        }
        UserCommand::Get { user, output } => {
            show_record(
                client.users(),
                Lookup::user(&user),
                "User",
                &user,
                console,
                output,
            )
            .await
        }
        UserCommand::Update {
            user,
            username,
            email,
            name,
            is_active,
            not_active,
            is_superuser,
            not_superuser,
        } => {
            let patch = PatchedUserRequest {
                username: username.into(),
                email: email.into(),
                name: name.into(),
                is_active: tri_state(is_active, not_active).into(),
                is_superuser: tri_state(is_superuser, not_superuser).into(),
                ..Default::default()
            };
            update_user(client, console, &user, &patch).await
        }
        UserCommand::Delete { user } => delete_user(client, console, &user).await,
        UserCommand::SetPassword { user, password } => {
            set_password(client, console, &user, password).await
        }
        UserCommand::ListRoles { user, output } => {
            list_related(client, console, &user, "roles", "Roles", output).await
        }
        UserCommand::ListGroups { user, output } => {
            list_related(client, console, &user, "groups", "Groups", output).await
        }
    }
}

/// Creates a new user.
async fn create_user(
    client: &ApiClient,
    console: &mut Console,
    request: &UserRequest,
) -> CliResult<()> {
    let created = client.users().create(request).await?;
    console.success(&format!("User '{}' created successfully.", created.text("username")));
    Ok(())
}

/// Updates a user.
async fn update_user(
    client: &ApiClient,
    console: &mut Console,
    user: &str,
    patch: &PatchedUserRequest,
) -> CliResult<()> {
    if patch.is_empty() {
        console.warning("No fields to update.");
        return Ok(());
    }

    let id = resolve_key(client.users(), Lookup::user(user), "User", user).await?;
    let updated = client.users().partial_update(&id, patch).await?;
    console.success(&format!(
        "User '{}' (ID: {}) updated successfully.",
        updated.text("username"),
        updated.text("pk")
    ));
    Ok(())
}

/// Deletes a user.
async fn delete_user(client: &ApiClient, console: &mut Console, user: &str) -> CliResult<()> {
    let id = resolve_key(client.users(), Lookup::user(user), "User", user).await?;
    client.users().destroy(&id).await?;
    console.success(&format!("User with ID {user} deleted successfully."));
    Ok(())
}

/// Sets a user's password.
async fn set_password(
    client: &ApiClient,
    console: &mut Console,
    user: &str,
    password: String,
) -> CliResult<()> {
    let id = resolve_key(client.users(), Lookup::user(user), "User", user).await?;
    client
        .users()
        .item_action_post(&id, "set_password", &PasswordRequest { password })
        .await?;
    console.success(&format!("Password for user with ID {user} set successfully."));
    Ok(())
}

/// Lists a user's roles or groups.
async fn list_related(
    client: &ApiClient,
    console: &mut Console,
    user: &str,
    action: &str,
    label: &str,
    format: OutputFormat,
) -> CliResult<()> {
    let id = resolve_key(client.users(), Lookup::user(user), "User", user).await?;
    let page = client.users().nested_list(&id, action).await?;
    console.list::<NameRow>(&format!("{label} for user {user}"), &page.results, format)
}
