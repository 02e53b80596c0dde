//! Stage management commands.

use akc_client::{ApiClient, Record, RecordExt};
use tabled::Tabled;

use crate::cli::StageCommand;
use crate::output::{Console, Row};
use crate::CliResult;

use super::{list_records, show_record, Lookup, TypeRow, UsedByRow};

/// Stage representation for display.
#[derive(Debug, Clone, Tabled)]
pub struct StageRow {
    /// Stage UUID.
    #[tabled(rename = "UUID")]
    pub uuid: String,
    /// Stage name.
    #[tabled(rename = "Name")]
    pub name: String,
    /// UI component.
    #[tabled(rename = "Component")]
    pub component: String,
}

impl Row for StageRow {
    fn from_record(record: &Record) -> Self {
        Self {
            uuid: record.text("pk"),
            name: record.text("name"),
            component: record.text("component"),
        }
    }
}

/// Runs a stage command.
pub async fn run_stage(
    cmd: StageCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        StageCommand::List { output } => {
            list_records::<StageRow>(client.stages(), console, "Stages", output).await
        }
        StageCommand::Get { uuid, output } => {
            show_record(
                client.stages(),
                Lookup::Key(&uuid),
                "Stage",
                &uuid,
                console,
                output,
            )
            .await
        }
        StageCommand::Delete { uuid } => {
            client.stages().destroy(&uuid).await?;
            console.success(&format!("Stage '{uuid}' deleted successfully."));
            Ok(())
        }
        StageCommand::ListTypes { output } => {
            let types = client.stages().collection_action_list("types").await?;
            console.list::<TypeRow>("Stage Types", &types, output)
        }
        StageCommand::Use { uuid, output } => {
            let used_by = client.stages().item_action_list(&uuid, "used_by").await?;
            console.list::<UsedByRow>(&format!("Objects using stage {uuid}"), &used_by, output)
        }
    }
}
