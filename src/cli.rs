use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::models::SourceKind;

#[derive(Parser, Debug)]
#[command(name = "enginectl")]
#[command(about = "Administration client for the GraphQL engine HTTP APIs", long_about = None)]
pub struct Args {
    #[arg(
        long = "endpoint",
        global = true,
        help = "Base URL of the engine (e.g., http://localhost:8080)"
    )]
    pub endpoint: Option<String>,

    #[arg(long = "admin-secret", global = true, help = "Admin secret sent with every request")]
    pub admin_secret: Option<String>,

    #[arg(
        long = "timeout",
        global = true,
        help = "Seconds to wait for the server before giving up (0 disables)"
    )]
    pub timeout: Option<u64>,

    #[arg(long = "config", global = true, help = "Read configuration from this file")]
    pub config: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", global = true, help = "Log every request")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the server version
    Version,

    /// Manage metadata
    Metadata {
        #[command(subcommand)]
        action: MetadataAction,
    },

    /// Run SQL against a source
    RunSql {
        #[arg(long = "kind", default_value = "postgres", help = "Source kind")]
        kind: SourceKind,
        #[arg(long = "source", help = "Source name (server default if omitted)")]
        source: Option<String>,
        #[arg(long = "api", value_enum, default_value_t = QueryApi::V2)]
        api: QueryApi,
        #[arg(long = "cascade", help = "Cascade dependent metadata changes")]
        cascade: bool,
        #[arg(long = "read-only", help = "Run the statement in a read-only transaction")]
        read_only: bool,
        #[arg(help = "SQL statement to run")]
        sql: String,
    },

    /// Track a table
    TrackTable {
        #[command(flatten)]
        table: TableArgs,
    },

    /// Untrack a table
    UntrackTable {
        #[command(flatten)]
        table: TableArgs,
        #[arg(long = "cascade", help = "Also drop dependent metadata")]
        cascade: bool,
    },

    /// Send a JSON array of requests as one atomic bulk request
    Bulk {
        #[arg(long = "api", value_enum, default_value_t = QueryApi::V2)]
        api: QueryApi,
        #[arg(help = "File holding the requests")]
        file: PathBuf,
    },

    /// Read or write the catalog state
    CatalogState {
        #[command(subcommand)]
        action: CatalogStateAction,
    },

    /// Print the GraphQL introspection schema
    Introspect,

    /// Dump a Postgres schema as SQL
    PgDump {
        #[arg(long = "schema", help = "Schema to dump (repeatable)")]
        schemas: Vec<String>,
        #[arg(long = "source", help = "Source name (server default if omitted)")]
        source: Option<String>,
        #[arg(
            long = "opt",
            allow_hyphen_values = true,
            help = "Raw pg_dump option, replaces the schema-only defaults (repeatable)"
        )]
        opts: Vec<String>,
    },

    /// Send a request file as-is to one endpoint
    Send {
        #[arg(long = "to", value_enum)]
        target: SendTarget,
        #[arg(help = "File holding the request body")]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum MetadataAction {
    /// Print the current metadata
    Export {
        #[arg(long = "v2", help = "Include the resource version")]
        v2: bool,
    },
    /// Reset metadata to its empty state
    Clear,
    /// Reload metadata from the database
    Reload,
    /// Drop every inconsistent object
    DropInconsistency,
    /// List inconsistent objects
    Inconsistency,
    /// Replace metadata with the content of a file
    Apply {
        file: PathBuf,
        #[arg(long = "allow-inconsistent", help = "Keep inconsistent objects instead of failing")]
        allow_inconsistent: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CatalogStateAction {
    /// Print the whole catalog state
    Get,
    /// Store the content of a file under a key
    Set { key: String, file: PathBuf },
}

#[derive(clap::Args, Debug, Clone)]
pub struct TableArgs {
    #[arg(long = "kind", default_value = "postgres", help = "Source kind")]
    pub kind: SourceKind,
    #[arg(long = "source", help = "Source name (server default if omitted)")]
    pub source: Option<String>,
    #[arg(long = "api", value_enum, default_value_t = QueryApi::V2)]
    pub api: QueryApi,
    #[arg(
        long = "schema",
        default_value = "public",
        help = "Schema of the table (the dataset for BigQuery)"
    )]
    pub schema: String,
    #[arg(help = "Table name")]
    pub name: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryApi {
    V1,
    V2,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendTarget {
    Metadata,
    V1Query,
    V2Query,
    PgDump,
}
