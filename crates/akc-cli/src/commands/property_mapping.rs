//! Property mapping commands.

use akc_client::{ApiClient, Record, RecordExt};
use tabled::Tabled;

use crate::cli::PropertyMappingCommand;
use crate::output::{Console, Row};
use crate::CliResult;

use super::{list_records, show_record, Lookup};

/// Property mapping representation for display.
#[derive(Debug, Clone, Tabled)]
pub struct PropertyMappingRow {
    /// Mapping UUID.
    #[tabled(rename = "UUID")]
    pub uuid: String,
    /// Mapping name.
    #[tabled(rename = "Name")]
    pub name: String,
    /// Managed-by identifier; empty for user-defined mappings.
    #[tabled(rename = "Managed")]
    pub managed: String,
}

impl Row for PropertyMappingRow {
    fn from_record(record: &Record) -> Self {
        Self {
            uuid: record.text("pk"),
            name: record.text("name"),
            managed: record.text("managed"),
        }
    }
}

/// Runs a property mapping command.
pub async fn run_property_mapping(
    cmd: PropertyMappingCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        PropertyMappingCommand::List { output } => {
            list_records::<PropertyMappingRow>(
                client.property_mappings(),
                console,
                "Property Mappings",
                output,
            )
            .await
        }
        PropertyMappingCommand::Get { uuid, output } => {
            show_record(
                client.property_mappings(),
                Lookup::Key(&uuid),
                "Property mapping",
                &uuid,
                console,
                output,
            )
            .await
        }
        PropertyMappingCommand::Delete { uuid } => {
            client.property_mappings().destroy(&uuid).await?;
            console.success(&format!("Property mapping '{uuid}' deleted successfully."));
            Ok(())
        }
    }
}
