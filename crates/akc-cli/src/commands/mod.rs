//! Command implementations.

pub mod application;
pub mod core;
pub mod event;
pub mod flow;
pub mod group;
pub mod init;
pub mod membership;
pub mod outpost;
pub mod policy;
pub mod property_mapping;
pub mod provider;
pub mod role;
pub mod source;
pub mod stage;
pub mod user;
pub mod user_group;
pub mod user_role;

pub use self::core::run_core;
pub use application::run_application;
pub use event::run_event;
pub use flow::run_flow;
pub use group::run_group;
pub use init::run_init;
pub use outpost::run_outpost;
pub use policy::run_policy;
pub use property_mapping::run_property_mapping;
pub use provider::run_provider;
pub use role::run_role;
pub use source::run_source;
pub use stage::run_stage;
pub use user::run_user;
pub use user_group::run_user_group;
pub use user_role::run_user_role;

use akc_client::{ApiClient, Endpoint, Record, RecordExt};
use tabled::Tabled;
use uuid::Uuid;

use crate::cli::{Cli, Command};
use crate::output::{Console, OutputFormat, Row};
use crate::{CliConfig, CliError, CliResult};

/// Runs a parsed command line and returns the process exit code.
///
/// `init` runs without a configuration file; every other command loads the
/// configuration first and fails with the `akc init` guidance when it is
/// missing.
pub async fn run(cli: Cli, console: &mut Console) -> i32 {
    let result = connect_and_dispatch(cli, console).await;
    report(result, console)
}

/// Runs a command against an existing client and returns the exit code.
pub async fn execute(command: Command, client: &ApiClient, console: &mut Console) -> i32 {
    let result = dispatch(command, client, console).await;
    report(result, console)
}

/// Routes a command to its group.
pub async fn dispatch(
    command: Command,
    client: &ApiClient,
    console: &mut Console,
) -> CliResult<()> {
    match command {
        Command::Init(_) => Err(CliError::Validation(
            "init cannot run against an existing connection".to_string(),
        )),
        Command::Application(cmd) => run_application(cmd, client, console).await,
        Command::User(cmd) => run_user(cmd, client, console).await,
        Command::Group(cmd) => run_group(cmd, client, console).await,
        Command::Role(cmd) => run_role(cmd, client, console).await,
        Command::Provider(cmd) => run_provider(cmd, client, console).await,
        Command::Flow(cmd) => run_flow(cmd, client, console).await,
        Command::Policy(cmd) => run_policy(cmd, client, console).await,
        Command::Stage(cmd) => run_stage(cmd, client, console).await,
        Command::Source(cmd) => run_source(cmd, client, console).await,
        Command::Outpost(cmd) => run_outpost(cmd, client, console).await,
        Command::Event(cmd) => run_event(cmd, client, console).await,
        Command::PropertyMapping(cmd) => run_property_mapping(cmd, client, console).await,
        Command::Core(cmd) => run_core(cmd, client, console).await,
        Command::UserGroup(cmd) => run_user_group(cmd, client, console).await,
        Command::UserRole(cmd) => run_user_role(cmd, client, console).await,
    }
}

async fn connect_and_dispatch(cli: Cli, console: &mut Console) -> CliResult<()> {
    let path = match cli.config {
        Some(path) => path,
        None => CliConfig::default_path()?,
    };

    let command = match cli.command {
        Command::Init(args) => return run_init(args, &path, console),
        command => command,
    };

    let config = CliConfig::load(&path)?;
    let client = ApiClient::new(&config.base_url, &config.api_token)?;
    dispatch(command, &client, console).await
}

/// Prints an error as a single line and maps it to an exit code.
fn report(result: CliResult<()>, console: &mut Console) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            console.error(&e.to_string());
            e.exit_code()
        }
    }
}

/// How a command-line identifier addresses a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lookup<'a> {
    /// Used directly as the item path key.
    Key(&'a str),
    /// Matched against a list filter; the first result wins.
    Filter {
        /// Filter field.
        field: &'static str,
        /// Value as given.
        value: &'a str,
    },
}

impl<'a> Lookup<'a> {
    /// Integer primary keys, otherwise usernames.
    pub(crate) fn user(raw: &'a str) -> Self {
        if raw.parse::<i64>().is_ok() {
            Self::Key(raw)
        } else {
            Self::Filter {
                field: "username",
                value: raw,
            }
        }
    }

    /// Hyphenated UUID primary keys, otherwise `field`.
    pub(crate) fn uuid_or(field: &'static str, raw: &'a str) -> Self {
        if raw.len() == 36 && Uuid::try_parse(raw).is_ok() {
            Self::Key(raw)
        } else {
            Self::Filter { field, value: raw }
        }
    }
}

/// Fetches the record a lookup points at.
///
/// A filter with no match yields `None`; a missing key is left to the API
/// to report.
pub(crate) async fn find_record(
    endpoint: Endpoint<'_>,
    lookup: Lookup<'_>,
) -> CliResult<Option<Record>> {
    match lookup {
        Lookup::Key(id) => Ok(Some(endpoint.retrieve(id).await?)),
        Lookup::Filter { field, value } => {
            let page = endpoint.list_filtered(&[(field, value)]).await?;
            Ok(page.into_first())
        }
    }
}

/// Like [`find_record`], but a missing record is an error.
pub(crate) async fn require_record(
    endpoint: Endpoint<'_>,
    lookup: Lookup<'_>,
    resource_type: &'static str,
    raw: &str,
) -> CliResult<Record> {
    find_record(endpoint, lookup)
        .await?
        .ok_or_else(|| CliError::NotFound {
            resource_type,
            id: raw.to_string(),
        })
}

/// Resolves a lookup to the item path key, fetching only for filters.
pub(crate) async fn resolve_key(
    endpoint: Endpoint<'_>,
    lookup: Lookup<'_>,
    resource_type: &'static str,
    raw: &str,
) -> CliResult<String> {
    match lookup {
        Lookup::Key(id) => Ok(id.to_string()),
        Lookup::Filter { .. } => {
            let record = require_record(endpoint, lookup, resource_type, raw).await?;
            Ok(record.text("pk"))
        }
    }
}

/// Fetches a record and prints it, warning when a filter finds nothing.
pub(crate) async fn show_record(
    endpoint: Endpoint<'_>,
    lookup: Lookup<'_>,
    resource_type: &str,
    raw: &str,
    console: &mut Console,
    format: OutputFormat,
) -> CliResult<()> {
    match find_record(endpoint, lookup).await? {
        Some(record) => console.record(&record, format),
        None => {
            console.warning(&format!("{resource_type} '{raw}' not found."));
            Ok(())
        }
    }
}

/// Lists the first page of a collection.
pub(crate) async fn list_records<R: Row>(
    endpoint: Endpoint<'_>,
    console: &mut Console,
    title: &str,
    format: OutputFormat,
) -> CliResult<()> {
    let page = endpoint.list().await?;
    console.list::<R>(title, &page.results, format)
}

/// Resolves a flow slug to the flow's primary key.
pub(crate) async fn resolve_flow_pk(client: &ApiClient, slug: &str) -> CliResult<String> {
    let flow = require_record(
        client.flows(),
        Lookup::Filter {
            field: "slug",
            value: slug,
        },
        "Flow",
        slug,
    )
    .await?;
    Ok(flow.text("pk"))
}

/// Folds an `--is-x` / `--not-x` flag pair into an optional value.
pub(crate) fn tri_state(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Primary key and name.
#[derive(Debug, Clone, Tabled)]
pub struct NameRow {
    /// Primary key.
    #[tabled(rename = "ID")]
    pub id: String,
    /// Name.
    #[tabled(rename = "Name")]
    pub name: String,
}

impl Row for NameRow {
    fn from_record(record: &Record) -> Self {
        Self {
            id: record.text("pk"),
            name: record.text("name"),
        }
    }
}

/// User account summary for membership listings.
#[derive(Debug, Clone, Tabled)]
pub struct MemberRow {
    /// User ID.
    #[tabled(rename = "ID")]
    pub id: String,
    /// Username.
    #[tabled(rename = "Username")]
    pub username: String,
    /// Email address.
    #[tabled(rename = "Email")]
    pub email: String,
}

impl Row for MemberRow {
    fn from_record(record: &Record) -> Self {
        Self {
            id: record.text("pk"),
            username: record.text("username"),
            email: record.text("email"),
        }
    }
}

/// An available object type (`types/` endpoints).
#[derive(Debug, Clone, Tabled)]
pub struct TypeRow {
    /// Type name.
    #[tabled(rename = "Name")]
    pub name: String,
    /// Description.
    #[tabled(rename = "Description")]
    pub description: String,
    /// UI component.
    #[tabled(rename = "Component")]
    pub component: String,
    /// Backing model.
    #[tabled(rename = "Model Name")]
    pub model_name: String,
}

impl Row for TypeRow {
    fn from_record(record: &Record) -> Self {
        Self {
            name: record.text("name"),
            description: record.text("description"),
            component: record.text("component"),
            model_name: record.text("model_name"),
        }
    }
}

/// An object referencing another (`used_by/` endpoints).
#[derive(Debug, Clone, Tabled)]
pub struct UsedByRow {
    /// App label.
    #[tabled(rename = "App")]
    pub app: String,
    /// Model name.
    #[tabled(rename = "Model Name")]
    pub model_name: String,
    /// Primary key.
    #[tabled(rename = "PK")]
    pub pk: String,
    /// Object name.
    #[tabled(rename = "Name")]
    pub name: String,
    /// What happens to it on delete.
    #[tabled(rename = "Action")]
    pub action: String,
}

impl Row for UsedByRow {
    fn from_record(record: &Record) -> Self {
        Self {
            app: record.text("app"),
            model_name: record.text("model_name"),
            pk: record.text("pk"),
            name: record.text("name"),
            action: record.text("action"),
        }
    }
}
