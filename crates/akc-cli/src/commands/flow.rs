//! Flow management commands.

use std::path::Path;

use akc_client::models::{FlowRequest, PatchedFlowRequest};
use akc_client::{ApiClient, PartialUpdate, Record, RecordExt};
use serde_json::Value;
use tabled::Tabled;
use tracing::debug;

use crate::cli::FlowCommand;
use crate::output::{Console, Row};
use crate::CliResult;

use super::{list_records, show_record, Lookup};

/// Flow representation for display.
#[derive(Debug, Clone, Tabled)]
pub struct FlowRow {
    /// Flow primary key.
    #[tabled(rename = "PK")]
    pub pk: String,
    /// Flow name.
    #[tabled(rename = "Name")]
    pub name: String,
    /// URL slug.
    #[tabled(rename = "Slug")]
    pub slug: String,
    /// Title shown to users.
    #[tabled(rename = "Title")]
    pub title: String,
}

impl Row for FlowRow {
    fn from_record(record: &Record) -> Self {
        Self {
            pk: record.text("pk"),
            name: record.text("name"),
            slug: record.text("slug"),
            title: record.text("title"),
        }
    }
}

/// Runs a flow command.
pub async fn run_flow(
    cmd: FlowCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        FlowCommand::List { output } => {
            list_records::<FlowRow>(client.flows(), console, "Flows", output).await
        }
        FlowCommand::Get { slug, output } => {
            show_record(
                client.flows(),
                Lookup::Key(&slug),
                "Flow",
                &slug,
                console,
                output,
            )
            .await
        }
        FlowCommand::Create {
            name,
            slug,
            title,
            designation,
        } => {
            let request = FlowRequest {
                name,
                slug,
                title,
                designation,
            };
            let created = client.flows().create(&request).await?;
            console.success(&format!("Flow '{}' created successfully.", created.text("name")));
            Ok(())
        }
        FlowCommand::Update {
            slug,
            name,
            new_slug,
            title,
            designation,
        } => {
            let patch = PatchedFlowRequest {
                name: name.into(),
                slug: new_slug.into(),
                title: title.into(),
                designation: designation.into(),
            };
            if patch.is_empty() {
                console.warning("No fields to update.");
                return Ok(());
            }

            let updated = client.flows().partial_update(&slug, &patch).await?;
            console.success(&format!(
                "Flow '{}' (ID: {}) updated successfully.",
                updated.text("name"),
                updated.text("pk")
            ));
            Ok(())
        }
        FlowCommand::Delete { slug } => {
            client.flows().destroy(&slug).await?;
            console.success(&format!("Flow '{slug}' deleted successfully."));
            Ok(())
        }
        FlowCommand::Export { slug, output_file } => {
            export_flow(client, console, &slug, output_file.as_deref()).await
        }
        FlowCommand::Import { file } => import_flow(client, console, &file).await,
    }
}

/// Exports a flow, to a file or to the console.
async fn export_flow(
    client: &ApiClient,
    console: &mut Console,
    slug: &str,
    output_file: Option<&Path>,
) -> CliResult<()> {
    let exported = client.flows().retrieve_text(slug, "export").await?;

    match output_file {
        Some(path) => {
            std::fs::write(path, &exported)?;
            console.success(&format!("Flow '{slug}' exported to {}.", path.display()));
        }
        None => {
            console.raw(&exported);
            if !exported.ends_with('\n') {
                console.raw("\n");
            }
        }
    }
    Ok(())
}

/// Imports a flow from a local YAML file.
async fn import_flow(client: &ApiClient, console: &mut Console, file: &Path) -> CliResult<()> {
    let content = std::fs::read_to_string(file)?;
    let payload: Value = serde_yaml::from_str(&content)?;
    debug!(file = %file.display(), "importing flow");

    client
        .flows()
        .collection_action_post("import", &payload)
        .await?;
    console.success(&format!("Flow from '{}' imported successfully.", file.display()));
    Ok(())
}
