//! Event log commands.

use akc_client::{ApiClient, Record, RecordExt};
use tabled::Tabled;

use crate::cli::EventCommand;
use crate::output::{Console, Row};
use crate::CliResult;

use super::{show_record, Lookup};

/// Event representation for display.
#[derive(Debug, Clone, Tabled)]
pub struct EventRow {
    /// Event UUID.
    #[tabled(rename = "UUID")]
    pub uuid: String,
    /// Username of the acting user.
    #[tabled(rename = "User")]
    pub user: String,
    /// Event action.
    #[tabled(rename = "Action")]
    pub action: String,
    /// Emitting app.
    #[tabled(rename = "App")]
    pub app: String,
    /// Creation timestamp.
    #[tabled(rename = "Created")]
    pub created: String,
}

impl Row for EventRow {
    fn from_record(record: &Record) -> Self {
        Self {
            uuid: record.text("pk"),
            user: record.text_at(&["user", "username"]),
            action: record.text("action"),
            app: record.text("app"),
            created: record.text("created"),
        }
    }
}

/// Runs an event command.
pub async fn run_event(
    cmd: EventCommand,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match cmd {
        EventCommand::List {
            action,
            username,
            output,
        } => {
            let mut filters = Vec::new();
            if let Some(action) = action.as_deref() {
                filters.push(("action", action));
            }
            if let Some(username) = username.as_deref() {
                filters.push(("username", username));
            }

            let page = client.events().list_filtered(&filters).await?;
            console.list::<EventRow>("Events", &page.results, output)
        }
        EventCommand::Get { uuid, output } => {
            show_record(
                client.events(),
                Lookup::Key(&uuid),
                "Event",
                &uuid,
                console,
                output,
            )
            .await
        }
    }
}
