//! Source management commands.

use akc_client::{ApiClient, Record, RecordExt};
use tabled::Tabled;

use crate::cli::SourceCommand;
use crate::output::{Console, Row};
use crate::CliResult;

use super::{list_records, show_record, Lookup, TypeRow, UsedByRow};

/// Source representation for display.
#[derive(Debug, Clone, Tabled)]
pub struct SourceRow {
    /// Source UUID.
    #[tabled(rename = "UUID")]
    pub uuid: String,
    /// Source name.
    #[tabled(rename = "Name")]
    pub name: String,
    /// URL slug.
    #[tabled(rename = "Slug")]
    pub slug: String,
    /// Whether the source is enabled.
    #[tabled(rename = "Enabled")]
    pub enabled: String,
}

impl Row for SourceRow {
    fn from_record(record: &Record) -> Self {
        Self {
            uuid: record.text("pk"),
            name: record.text("name"),
            slug: record.text("slug"),
            enabled: record.text("enabled"),
        }
    }
}

/// Runs a source command.
pub async fn run_source(
    cmd: SourceCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        SourceCommand::List { output } => {
            list_records::<SourceRow>(client.sources(), console, "Sources", output).await
        }
        SourceCommand::Get { slug, output } => {
            show_record(
                client.sources(),
                Lookup::Key(&slug),
                "Source",
                &slug,
                console,
                output,
            )
            .await
        }
        SourceCommand::Delete { slug } => {
            client.sources().destroy(&slug).await?;
            console.success(&format!("Source '{slug}' deleted successfully."));
            Ok(())
        }
        SourceCommand::ListTypes { output } => {
            let types = client.sources().collection_action_list("types").await?;
            console.list::<TypeRow>("Source Types", &types, output)
        }
        SourceCommand::Use { slug, output } => {
            let used_by = client.sources().item_action_list(&slug, "used_by").await?;
            console.list::<UsedByRow>(&format!("Objects using source {slug}"), &used_by, output)
        }
    }
}
