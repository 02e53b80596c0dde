//! Provider management commands.

use akc_client::models::{OAuth2ProviderRequest, PatchedProviderRequest, ProxyProviderRequest};
use akc_client::{ApiClient, PartialUpdate, Patch, Record, RecordExt};
use tabled::Tabled;

use crate::cli::ProviderCommand;
use crate::output::{Console, Row};
use crate::CliResult;

use super::{list_records, resolve_flow_pk, show_record, Lookup, TypeRow, UsedByRow};

/// Provider representation for display.
#[derive(Debug, Clone, Tabled)]
pub struct ProviderRow {
    /// Provider ID.
    #[tabled(rename = "ID")]
    pub id: String,
    /// Provider name.
    #[tabled(rename = "Name")]
    pub name: String,
    /// UI component, which identifies the provider type.
    #[tabled(rename = "Component")]
    pub component: String,
}

impl Row for ProviderRow {
    fn from_record(record: &Record) -> Self {
        Self {
            id: record.text("pk"),
            name: record.text("name"),
            component: record.text("component"),
        }
    }
}

/// Runs a provider command.
pub async fn run_provider(
    cmd: ProviderCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        ProviderCommand::List { output } => {
            list_records::<ProviderRow>(client.providers(), console, "Providers", output).await
        }
        ProviderCommand::Get { id, output } => {
            let id = id.to_string();
            show_record(
                client.providers(),
                Lookup::Key(&id),
                "Provider",
                &id,
                console,
                output,
            )
            .await
        }
        ProviderCommand::Update {
            id,
            name,
            authorization_flow,
        } => update_provider(client, console, id, name, authorization_flow).await,
        ProviderCommand::Delete { id } => {
            client.providers().destroy(&id.to_string()).await?;
            console.success(&format!("Provider with ID {id} deleted successfully."));
            Ok(())
        }
        ProviderCommand::ListTypes { output } => {
            let types = client.providers().collection_action_list("types").await?;
            console.list::<TypeRow>("Provider Types", &types, output)
        }
        ProviderCommand::Use { id, output } => {
            let used_by = client
                .providers()
                .item_action_list(&id.to_string(), "used_by")
                .await?;
            console.list::<UsedByRow>(&format!("Objects using provider {id}"), &used_by, output)
        }
        ProviderCommand::CreateOauth2 {
            name,
            flow_slug,
            client_type,
            client_id,
        } => {
            let request = OAuth2ProviderRequest {
                name,
                authorization_flow: resolve_flow_pk(client, &flow_slug).await?,
                client_type,
                client_id,
            };
            let created = client.oauth2_providers().create(&request).await?;
            console.success(&format!(
                "OAuth2 provider '{}' created successfully.",
                created.text("name")
            ));
            Ok(())
        }
        ProviderCommand::CreateProxy {
            name,
            flow_slug,
            external_host,
            internal_host,
            mode,
        } => {
            let request = ProxyProviderRequest {
                name,
                authorization_flow: resolve_flow_pk(client, &flow_slug).await?,
                external_host,
                internal_host,
                mode,
            };
            let created = client.proxy_providers().create(&request).await?;
            console.success(&format!(
                "Proxy provider '{}' created successfully.",
                created.text("name")
            ));
            Ok(())
        }
    }
}

/// Updates a provider; the authorization flow is given by slug.
async fn update_provider(
    client: &ApiClient,
    console: &mut Console,
    id: i64,
    name: Option<String>,
    authorization_flow: Option<String>,
) -> CliResult<()> {
    let mut patch = PatchedProviderRequest {
        name: name.into(),
        ..Default::default()
    };
    if let Some(flow_slug) = authorization_flow {
        patch.authorization_flow = Patch::Set(resolve_flow_pk(client, &flow_slug).await?);
    }

    if patch.is_empty() {
        console.warning("No fields to update.");
        return Ok(());
    }

    let updated = client
        .providers()
        .partial_update(&id.to_string(), &patch)
        .await?;
    console.success(&format!(
        "Provider '{}' (ID: {}) updated successfully.",
        updated.text("name"),
        updated.text("pk")
    ));
    Ok(())
}
