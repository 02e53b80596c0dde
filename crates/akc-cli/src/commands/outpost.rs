//! Outpost management commands.

use akc_client::{ApiClient, Record, RecordExt};
use tabled::Tabled;

use crate::cli::OutpostCommand;
use crate::output::{Console, Row};
use crate::CliResult;

use super::{list_records, show_record, Lookup};

/// Outpost representation for display.
#[derive(Debug, Clone, Tabled)]
pub struct OutpostRow {
    /// Outpost UUID.
    #[tabled(rename = "UUID")]
    pub uuid: String,
    /// Outpost name.
    #[tabled(rename = "Name")]
    pub name: String,
    /// Outpost type (proxy, ldap, ...).
    #[tabled(rename = "Type")]
    pub kind: String,
    /// Name of the service connection used for deployment.
    #[tabled(rename = "Service Connection")]
    pub service_connection: String,
}

impl Row for OutpostRow {
    fn from_record(record: &Record) -> Self {
        Self {
            uuid: record.text("pk"),
            name: record.text("name"),
            kind: record.text("type"),
            service_connection: record.text("service_connection_name"),
        }
    }
}

/// Runs an outpost command.
pub async fn run_outpost(
    cmd: OutpostCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        OutpostCommand::List { output } => {
            list_records::<OutpostRow>(client.outposts(), console, "Outposts", output).await
        }
        OutpostCommand::Get { uuid, output } => {
            show_record(
                client.outposts(),
                Lookup::Key(&uuid),
                "Outpost",
                &uuid,
                console,
                output,
            )
            .await
        }
        OutpostCommand::Delete { uuid } => {
            client.outposts().destroy(&uuid).await?;
            console.success(&format!("Outpost '{uuid}' deleted successfully."));
            Ok(())
        }
        OutpostCommand::Health { uuid } => {
            let health = client.outposts().item_action_list(&uuid, "health").await?;
            console.json(&health)
        }
    }
}
