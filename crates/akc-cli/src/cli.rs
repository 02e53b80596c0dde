//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// akc - Administration tool for authentik.
#[derive(Debug, Parser)]
#[command(name = "akc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ~/.akc_config.json).
    #[arg(long, global = true, env = "AKC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize the configuration file.
    Init(InitArgs),

    /// Application management commands.
    #[command(subcommand)]
    Application(ApplicationCommand),

    /// User management commands.
    #[command(subcommand)]
    User(UserCommand),

    /// Group management commands.
    #[command(subcommand)]
    Group(GroupCommand),

    /// Role management commands.
    #[command(subcommand)]
    Role(RoleCommand),

    /// Provider management commands.
    #[command(subcommand)]
    Provider(ProviderCommand),

    /// Flow management commands.
    #[command(subcommand)]
    Flow(FlowCommand),

    /// Policy management commands.
    #[command(subcommand)]
    Policy(PolicyCommand),

    /// Stage management commands.
    #[command(subcommand)]
    Stage(StageCommand),

    /// Source management commands.
    #[command(subcommand)]
    Source(SourceCommand),

    /// Outpost management commands.
    #[command(subcommand)]
    Outpost(OutpostCommand),

    /// Event log commands.
    #[command(subcommand)]
    Event(EventCommand),

    /// Property mapping commands.
    #[command(subcommand)]
    PropertyMapping(PropertyMappingCommand),

    /// Server version and tenant commands.
    #[command(subcommand)]
    Core(CoreCommand),

    /// Manage a user's group memberships.
    #[command(subcommand)]
    UserGroup(UserGroupCommand),

    /// Manage a user's roles.
    #[command(subcommand)]
    UserRole(UserRoleCommand),
}

/// Init arguments.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Server URL (prompted if not provided).
    #[arg(long)]
    pub url: Option<String>,

    /// API token (prompted without echo if not provided).
    #[arg(long)]
    pub token: Option<String>,
}

/// Application commands.
#[derive(Debug, Subcommand)]
pub enum ApplicationCommand {
    /// Create a new application.
    Create {
        /// Application name.
        name: String,

        /// Application slug.
        slug: String,

        /// Provider ID.
        #[arg(long)]
        provider: Option<i64>,

        /// Launch URL.
        #[arg(long)]
        launch_url: Option<String>,
    },

    /// List all applications.
    List {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Get application details.
    Get {
        /// Application slug.
        slug: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Update an application.
    Update {
        /// Application slug.
        slug: String,

        /// New name.
        #[arg(long)]
        name: Option<String>,

        /// New slug.
        #[arg(long = "slug")]
        new_slug: Option<String>,

        /// New provider ID.
        #[arg(long)]
        provider: Option<i64>,

        /// New launch URL.
        #[arg(long)]
        launch_url: Option<String>,
    },

    /// Delete an application.
    Delete {
        /// Application slug.
        slug: String,
    },

    /// Assign a provider to an application.
    AssignProvider {
        /// Application slug.
        slug: String,

        /// Provider ID.
        provider_id: i64,
    },

    /// Bind a flow to an application.
    BindFlow {
        /// Application slug.
        slug: String,

        /// Flow slug.
        flow_slug: String,

        /// Flow type: authorization, authentication or invalidation.
        #[arg(short = 't', long, default_value = "authorization")]
        flow_type: String,
    },
}

/// User commands.
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a new user.
    Create {
        /// Username.
        username: String,

        /// Email address.
        email: String,

        /// Full name.
        #[arg(long)]
        name: Option<String>,

        /// Mark the user active.
        #[arg(long, conflicts_with = "not_active")]
        is_active: bool,

        /// Mark the user inactive.
        #[arg(long)]
        not_active: bool,

        /// Make the user a superuser.
        #[arg(long, conflicts_with = "not_superuser")]
        is_superuser: bool,

        /// Make the user a regular user.
        #[arg(long)]
        not_superuser: bool,
    },

    /// List all users.
    List {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Get user details.
    Get {
        /// User ID or username.
        user: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Update a user.
    Update {
        /// User ID or username.
        user: String,

        /// New username.
        #[arg(long)]
        username: Option<String>,

        /// New email address.
        #[arg(long)]
        email: Option<String>,

        /// New full name.
        #[arg(long)]
        name: Option<String>,

        /// Mark the user active.
        #[arg(long, conflicts_with = "not_active")]
        is_active: bool,

        /// Mark the user inactive.
        #[arg(long)]
        not_active: bool,

        /// Make the user a superuser.
        #[arg(long, conflicts_with = "not_superuser")]
        is_superuser: bool,

        /// Make the user a regular user.
        #[arg(long)]
        not_superuser: bool,
    },

    /// Delete a user.
    Delete {
        /// User ID or username.
        user: String,
    },

    /// Set a user's password.
    SetPassword {
        /// User ID or username.
        user: String,

        /// New password.
        password: String,
    },

    /// List the roles of a user.
    ListRoles {
        /// User ID or username.
        user: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// List the groups of a user.
    ListGroups {
        /// User ID or username.
        user: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
}

/// Group commands.
#[derive(Debug, Subcommand)]
pub enum GroupCommand {
    /// Create a group.
    Create {
        /// Group name.
        name: String,

        /// Parent group UUID.
        #[arg(long)]
        parent: Option<String>,

        /// Grant superuser rights to members.
        #[arg(long, conflicts_with = "not_superuser")]
        is_superuser: bool,

        /// Do not grant superuser rights to members.
        #[arg(long)]
        not_superuser: bool,
    },

    /// List all groups.
    List {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Get group details.
    Get {
        /// Group UUID or name.
        group: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Update a group.
    Update {
        /// Group UUID or name.
        group: String,

        /// New name.
        #[arg(long)]
        name: Option<String>,

        /// New parent group UUID.
        #[arg(long)]
        parent: Option<String>,

        /// Grant superuser rights to members.
        #[arg(long, conflicts_with = "not_superuser")]
        is_superuser: bool,

        /// Do not grant superuser rights to members.
        #[arg(long)]
        not_superuser: bool,
    },

    /// Delete a group.
    Delete {
        /// Group UUID or name.
        group: String,
    },

    /// List group members.
    ListUsers {
        /// Group UUID or name.
        group: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
}

/// Role commands.
#[derive(Debug, Subcommand)]
pub enum RoleCommand {
    /// Create a role.
    Create {
        /// Role name.
        name: String,
    },

    /// List all roles.
    List {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Get role details.
    Get {
        /// Role UUID or name.
        role: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Update a role.
    Update {
        /// Role UUID or name.
        role: String,

        /// New name.
        #[arg(long)]
        name: Option<String>,
    },

    /// Delete a role.
    Delete {
        /// Role UUID or name.
        role: String,
    },

    /// List users holding a role.
    ListUsers {
        /// Role UUID or name.
        role: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// List groups holding a role.
    ListGroups {
        /// Role UUID or name.
        role: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
}

/// Provider commands.
#[derive(Debug, Subcommand)]
pub enum ProviderCommand {
    /// List all providers.
    List {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Get provider details.
    Get {
        /// Provider ID.
        id: i64,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Update a provider.
    Update {
        /// Provider ID.
        id: i64,

        /// New name.
        #[arg(long)]
        name: Option<String>,

        /// Authorization flow slug.
        #[arg(long)]
        authorization_flow: Option<String>,
    },

    /// Delete a provider.
    Delete {
        /// Provider ID.
        id: i64,
    },

    /// List available provider types.
    ListTypes {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Show which objects use a provider.
    Use {
        /// Provider ID.
        id: i64,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Create an OAuth2 provider.
    CreateOauth2 {
        /// Provider name.
        name: String,

        /// Authorization flow slug.
        flow_slug: String,

        /// Client type: confidential or public.
        #[arg(long)]
        client_type: Option<String>,

        /// Client ID.
        #[arg(long)]
        client_id: Option<String>,
    },

    /// Create a proxy provider.
    CreateProxy {
        /// Provider name.
        name: String,

        /// Authorization flow slug.
        flow_slug: String,

        /// External host URL.
        external_host: String,

        /// Internal host URL.
        #[arg(long)]
        internal_host: Option<String>,

        /// Proxy mode.
        #[arg(long)]
        mode: Option<String>,
    },
}

/// Flow commands.
#[derive(Debug, Subcommand)]
pub enum FlowCommand {
    /// List all flows.
    List {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Get flow details.
    Get {
        /// Flow slug.
        slug: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Create a flow.
    Create {
        /// Flow name.
        name: String,

        /// Flow slug.
        slug: String,

        /// Flow title.
        title: String,

        /// Flow designation (e.g. authentication, authorization).
        #[arg(long)]
        designation: Option<String>,
    },

    /// Update a flow.
    Update {
        /// Flow slug.
        slug: String,

        /// New name.
        #[arg(long)]
        name: Option<String>,

        /// New slug.
        #[arg(long = "slug")]
        new_slug: Option<String>,

        /// New title.
        #[arg(long)]
        title: Option<String>,

        /// New designation.
        #[arg(long)]
        designation: Option<String>,
    },

    /// Delete a flow.
    Delete {
        /// Flow slug.
        slug: String,
    },

    /// Export a flow.
    Export {
        /// Flow slug.
        slug: String,

        /// Write the export to this file instead of stdout.
        #[arg(short = 'o', long)]
        output_file: Option<PathBuf>,
    },

    /// Import a flow from a YAML file.
    Import {
        /// Path to the flow file.
        file: PathBuf,
    },
}

/// Policy commands.
#[derive(Debug, Subcommand)]
pub enum PolicyCommand {
    /// List all policies.
    List {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Get policy details.
    Get {
        /// Policy UUID.
        uuid: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Delete a policy.
    Delete {
        /// Policy UUID.
        uuid: String,
    },

    /// Show which objects use a policy.
    Use {
        /// Policy UUID.
        uuid: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Bind a policy to an application.
    BindToApp {
        /// Policy UUID.
        policy: String,

        /// Application UUID.
        application: String,

        /// Evaluation order.
        order: i32,

        /// Negate the policy result.
        #[arg(long)]
        negate: bool,

        /// Evaluation timeout in seconds.
        #[arg(long)]
        timeout: Option<u32>,
    },
}

/// Stage commands.
#[derive(Debug, Subcommand)]
pub enum StageCommand {
    /// List all stages.
    List {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Get stage details.
    Get {
        /// Stage UUID.
        uuid: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Delete a stage.
    Delete {
        /// Stage UUID.
        uuid: String,
    },

    /// List available stage types.
    ListTypes {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Show which objects use a stage.
    Use {
        /// Stage UUID.
        uuid: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
}

/// Source commands.
#[derive(Debug, Subcommand)]
pub enum SourceCommand {
    /// List all sources.
    List {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Get source details.
    Get {
        /// Source slug.
        slug: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Delete a source.
    Delete {
        /// Source slug.
        slug: String,
    },

    /// List available source types.
    ListTypes {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Show which objects use a source.
    Use {
        /// Source slug.
        slug: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
}

/// Outpost commands.
#[derive(Debug, Subcommand)]
pub enum OutpostCommand {
    /// List all outposts.
    List {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Get outpost details.
    Get {
        /// Outpost UUID.
        uuid: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Delete an outpost.
    Delete {
        /// Outpost UUID.
        uuid: String,
    },

    /// Show outpost health.
    Health {
        /// Outpost UUID.
        uuid: String,
    },
}

/// Event commands.
#[derive(Debug, Subcommand)]
pub enum EventCommand {
    /// List events.
    List {
        /// Filter by action.
        #[arg(long)]
        action: Option<String>,

        /// Filter by username.
        #[arg(long)]
        username: Option<String>,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Get event details.
    Get {
        /// Event UUID.
        uuid: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
}

/// Property mapping commands.
#[derive(Debug, Subcommand)]
pub enum PropertyMappingCommand {
    /// List all property mappings.
    List {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Get property mapping details.
    Get {
        /// Property mapping UUID.
        uuid: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Delete a property mapping.
    Delete {
        /// Property mapping UUID.
        uuid: String,
    },
}

/// Core commands.
#[derive(Debug, Subcommand)]
pub enum CoreCommand {
    /// Show the server version.
    GetVersion {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// List all tenants.
    ListTenants {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Create a tenant.
    CreateTenant {
        /// Database schema name.
        schema_name: String,

        /// Tenant name.
        #[arg(long)]
        name: Option<String>,

        /// Tenant domain.
        #[arg(long)]
        domain: Option<String>,
    },

    /// Get tenant details.
    GetTenant {
        /// Tenant UUID.
        uuid: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Update a tenant.
    UpdateTenant {
        /// Tenant UUID.
        uuid: String,

        /// New schema name.
        #[arg(long)]
        schema_name: Option<String>,

        /// New name.
        #[arg(long)]
        name: Option<String>,

        /// New domain.
        #[arg(long)]
        domain: Option<String>,
    },

    /// Delete a tenant.
    DeleteTenant {
        /// Tenant UUID.
        uuid: String,
    },
}

/// User-group membership commands.
#[derive(Debug, Subcommand)]
pub enum UserGroupCommand {
    /// Add a user to a group.
    Add {
        /// User ID or username.
        user: String,

        /// Group UUID or name.
        group: String,
    },

    /// Remove a user from a group.
    Remove {
        /// User ID or username.
        user: String,

        /// Group UUID or name.
        group: String,
    },
}

/// User-role assignment commands.
#[derive(Debug, Subcommand)]
pub enum UserRoleCommand {
    /// Give a user a role.
    Add {
        /// User ID or username.
        user: String,

        /// Role UUID or name.
        role: String,
    },

    /// Take a role away from a user.
    Remove {
        /// User ID or username.
        user: String,

        /// Role UUID or name.
        role: String,
    },
}
