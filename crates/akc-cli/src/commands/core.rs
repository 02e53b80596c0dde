//! Server version and tenant commands.

use akc_client::models::{PatchedTenantRequest, TenantRequest};
use akc_client::{ApiClient, PartialUpdate, Record, RecordExt};
use tabled::Tabled;

use crate::cli::CoreCommand;
use crate::output::{Console, OutputFormat, Row};
use crate::CliResult;

use super::{list_records, show_record, Lookup};

/// Tenant representation for display.
#[derive(Debug, Clone, Tabled)]
pub struct TenantRow {
    /// Tenant UUID.
    #[tabled(rename = "Tenant UUID")]
    pub tenant_uuid: String,
    /// Database schema.
    #[tabled(rename = "Schema Name")]
    pub schema_name: String,
    /// Tenant name.
    #[tabled(rename = "Name")]
    pub name: String,
    /// Primary domain.
    #[tabled(rename = "Domain")]
    pub domain: String,
}

impl Row for TenantRow {
    fn from_record(record: &Record) -> Self {
        Self {
            tenant_uuid: record.text("tenant_uuid"),
            schema_name: record.text("schema_name"),
            name: record.text("name"),
            domain: record.text("domain"),
        }
    }
}

/// Runs a core command.
pub async fn run_core(
    cmd: CoreCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        CoreCommand::GetVersion { output } => {
            let version = client.version().await?;
            console.record(&version, output)
        }
        CoreCommand::ListTenants { output } => {
            list_records::<TenantRow>(client.tenants(), console, "Tenants", output).await
        }
        CoreCommand::CreateTenant {
            schema_name,
            name,
            domain,
        } => {
            let request = TenantRequest {
                schema_name,
                name,
                domain,
            };
            let created = client.tenants().create(&request).await?;
            console.success(&format!("Tenant '{}' created successfully.", created.text("name")));
            console.record(&created, OutputFormat::Table)
        }
        CoreCommand::GetTenant { uuid, output } => {
            show_record(
                client.tenants(),
                Lookup::Key(&uuid),
                "Tenant",
                &uuid,
                console,
                output,
            )
            .await
        }
        CoreCommand::UpdateTenant {
            uuid,
            schema_name,
            name,
            domain,
        } => {
            let patch = PatchedTenantRequest {
                schema_name: schema_name.into(),
                name: name.into(),
                domain: domain.into(),
            };
            if patch.is_empty() {
                console.warning("No fields to update.");
                return Ok(());
            }

            let updated = client.tenants().partial_update(&uuid, &patch).await?;
            console.success(&format!(
                "Tenant '{}' (ID: {}) updated successfully.",
                updated.text("name"),
                updated.text("tenant_uuid")
            ));
            console.record(&updated, OutputFormat::Table)
        }
        CoreCommand::DeleteTenant { uuid } => {
            client.tenants().destroy(&uuid).await?;
            console.success(&format!("Tenant with UUID '{uuid}' deleted successfully."));
            Ok(())
        }
    }
}
