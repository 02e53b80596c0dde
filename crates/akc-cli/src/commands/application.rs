//! Application management commands.

use std::fmt;
use std::str::FromStr;

use akc_client::models::{ApplicationRequest, PatchedApplicationRequest};
use akc_client::{ApiClient, PartialUpdate, Patch, Record, RecordExt};
use tabled::Tabled;

use crate::cli::ApplicationCommand;
use crate::output::{Console, Row};
use crate::{CliError, CliResult};

use super::{list_records, resolve_flow_pk, show_record, Lookup};

/// Application representation for display.
#[derive(Debug, Clone, Tabled)]
pub struct ApplicationRow {
    /// Application primary key.
    #[tabled(rename = "ID")]
    pub id: String,
    /// Display name.
    #[tabled(rename = "Name")]
    pub name: String,
    /// URL slug.
    #[tabled(rename = "Slug")]
    pub slug: String,
}

impl Row for ApplicationRow {
    fn from_record(record: &Record) -> Self {
        Self {
            id: record.text("pk"),
            name: record.text("name"),
            slug: record.text("slug"),
        }
    }
}

const FLOW_TYPES: &str = "authorization, authentication or invalidation";

/// Which flow slot of an application a flow is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowBinding {
    /// Runs when a user authorizes access to the application.
    Authorization,
    /// Runs when a user authenticates against the application.
    Authentication,
    /// Runs when a session for the application is invalidated.
    Invalidation,
}

impl FlowBinding {
    /// Builds the patch that fills this slot with `flow_pk`.
    pub fn patch(self, flow_pk: String) -> PatchedApplicationRequest {
        let mut patch = PatchedApplicationRequest::default();
        match self {
            Self::Authorization => patch.authorization_flow = Patch::Set(flow_pk),
            Self::Authentication => patch.authentication_flow = Patch::Set(flow_pk),
            Self::Invalidation => patch.invalidation_flow = Patch::Set(flow_pk),
        }
        patch
    }
}

impl fmt::Display for FlowBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Authorization => "authorization",
            Self::Authentication => "authentication",
            Self::Invalidation => "invalidation",
        };
        f.write_str(name)
    }
}

impl FromStr for FlowBinding {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authorization" => Ok(Self::Authorization),
            "authentication" => Ok(Self::Authentication),
            "invalidation" => Ok(Self::Invalidation),
            other => Err(CliError::Validation(format!(
                "Invalid flow type '{other}'. Expected {FLOW_TYPES}."
            ))),
        }
    }
}

/// Runs an application command.
pub async fn run_application(
    cmd: ApplicationCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        ApplicationCommand::Create {
            name,
            slug,
            provider,
            launch_url,
        } => {
            let request = ApplicationRequest {
                name,
                slug,
                provider,
                meta_launch_url: launch_url,
            };
            create_application(client, console, &request).await
        }
        ApplicationCommand::List { output } => {
            list_records::<ApplicationRow>(client.applications(), console, "Applications", output)
                .await
        }
        ApplicationCommand::Get { slug, output } => {
            show_record(
                client.applications(),
                Lookup::Key(&slug),
                "Application",
                &slug,
                console,
                output,
            )
            .await
        }
        ApplicationCommand::Update {
            slug,
            name,
            new_slug,
            provider,
            launch_url,
        } => {
            let patch = PatchedApplicationRequest {
                name: name.into(),
                slug: new_slug.into(),
                provider: provider.into(),
                meta_launch_url: launch_url.into(),
                ..Default::default()
            };
            update_application(client, console, &slug, &patch).await
        }
        ApplicationCommand::Delete { slug } => delete_application(client, console, &slug).await,
        ApplicationCommand::AssignProvider { slug, provider_id } => {
            assign_provider(client, console, &slug, provider_id).await
        }
        ApplicationCommand::BindFlow {
            slug,
            flow_slug,
            flow_type,
        } => bind_flow(client, console, &slug, &flow_slug, &flow_type).await,
    }
}

/// Creates a new application.
async fn create_application(
    client: &ApiClient,
    console: &mut Console,
    request: &ApplicationRequest,
) -> CliResult<()> {
    let created = client.applications().create(request).await?;
    console.success(&format!(
        "Application '{}' created successfully.",
        created.text("name")
    ));
    Ok(())
}

/// Updates an application.
async fn update_application(
    client: &ApiClient,
    console: &mut Console,
    slug: &str,
    patch: &PatchedApplicationRequest,
) -> CliResult<()> {
    if patch.is_empty() {
        console.warning("No fields to update.");
        return Ok(());
    }

    let updated = client.applications().partial_update(slug, patch).await?;
    console.success(&format!(
        "Application '{}' (ID: {}) updated successfully.",
        updated.text("name"),
        updated.text("pk")
    ));
    Ok(())
}

/// Deletes an application.
async fn delete_application(
    client: &ApiClient,
    console: &mut Console,
    slug: &str,
) -> CliResult<()> {
    client.applications().destroy(slug).await?;
    console.success(&format!("Application with ID {slug} deleted successfully."));
    Ok(())
}

/// Points an application at a provider.
async fn assign_provider(
    client: &ApiClient,
    console: &mut Console,
    slug: &str,
    provider_id: i64,
) -> CliResult<()> {
    let patch = PatchedApplicationRequest {
        provider: Patch::Set(provider_id),
        ..Default::default()
    };

    let updated = client.applications().partial_update(slug, &patch).await?;
    console.success(&format!(
        "Provider with ID {provider_id} assigned to application '{}' successfully.",
        updated.text("name")
    ));
    Ok(())
}

/// Binds a flow, looked up by slug, to one of an application's flow slots.
async fn bind_flow(
    client: &ApiClient,
    console: &mut Console,
    slug: &str,
    flow_slug: &str,
    flow_type: &str,
) -> CliResult<()> {
    let binding: FlowBinding = flow_type.parse()?;
    let flow_pk = resolve_flow_pk(client, flow_slug).await?;

    let updated = client
        .applications()
        .partial_update(slug, &binding.patch(flow_pk))
        .await?;
    console.success(&format!(
        "Flow '{flow_slug}' bound to application '{}' as {binding} flow.",
        updated.text("name")
    ));
    Ok(())
}
