//! Policy management commands.

use akc_client::models::PolicyBindingRequest;
use akc_client::{ApiClient, Record, RecordExt};
use tabled::Tabled;

use crate::cli::PolicyCommand;
use crate::output::{Console, Row};
use crate::CliResult;

use super::{list_records, show_record, Lookup, UsedByRow};

/// Policy representation for display.
#[derive(Debug, Clone, Tabled)]
pub struct PolicyRow {
    /// Policy UUID.
    #[tabled(rename = "UUID")]
    pub uuid: String,
    /// Policy name.
    #[tabled(rename = "Name")]
    pub name: String,
    /// UI component.
    #[tabled(rename = "Component")]
    pub component: String,
    /// Number of bindings.
    #[tabled(rename = "Bound To")]
    pub bound_to: String,
}

impl Row for PolicyRow {
    fn from_record(record: &Record) -> Self {
        Self {
            uuid: record.text("pk"),
            name: record.text("name"),
            component: record.text("component"),
            bound_to: record.text("bound_to"),
        }
    }
}

/// Runs a policy command.
pub async fn run_policy(
    cmd: PolicyCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        PolicyCommand::List { output } => {
            list_records::<PolicyRow>(client.policies(), console, "Policies", output).await
        }
        PolicyCommand::Get { uuid, output } => {
            show_record(
                client.policies(),
                Lookup::Key(&uuid),
                "Policy",
                &uuid,
                console,
                output,
            )
            .await
        }
        PolicyCommand::Delete { uuid } => {
            client.policies().destroy(&uuid).await?;
            console.success(&format!("Policy '{uuid}' deleted successfully."));
            Ok(())
        }
        PolicyCommand::Use { uuid, output } => {
            let used_by = client.policies().item_action_list(&uuid, "used_by").await?;
            console.list::<UsedByRow>(&format!("Objects using policy {uuid}"), &used_by, output)
        }
        PolicyCommand::BindToApp {
            policy,
            application,
            order,
            negate,
            timeout,
        } => {
            let request = PolicyBindingRequest {
                policy: policy.clone(),
                target: application.clone(),
                order,
                negate: negate.then_some(true),
                timeout,
            };
            client.policy_bindings().create(&request).await?;
            console.success(&format!(
                "Policy '{policy}' bound to application '{application}' successfully."
            ));
            Ok(())
        }
    }
}
