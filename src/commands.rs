use anyhow::{Context, Result};
use serde_json::value::RawValue;
use std::path::Path;
use tracing::debug;

use crate::cli::{CatalogStateAction, Command, MetadataAction, QueryApi, SendTarget, TableArgs};
use crate::engine::{
    BigQuerySourceOps, BulkSend, CatalogStateOperations, CitusSourceOps, Client,
    CockroachSourceOps, CommonMetadataOperations, GenericSend, MssqlSourceOps, PgSourceOps,
    SourceCapabilities, V2CommonMetadataOperations,
};
use crate::error::EngineError;
use crate::models::{
    BigQueryRunSqlInput, BigQueryTable, BigQueryTrackTableInput, BigQueryUntrackTableInput,
    InconsistentMetadata, IntrospectionSchema, MssqlRunSqlInput, PgDumpRequest, PgRunSqlInput,
    QualifiedTable, RequestBody, SourceKind, TrackTableInput, UntrackTableInput,
    V2ReplaceMetadataArgs, V2ReplaceMetadataResponse, VersionInfo,
};
use crate::transport::{RequestPayload, ResponseBody};

/// What a command produced, before it is rendered.
#[derive(Debug)]
pub enum Output {
    /// A JSON document, pretty-printed when rendered.
    Json(ResponseBody),
    /// Anything else, streamed out untouched.
    Raw(ResponseBody),
    Version(VersionInfo),
    Schema(IntrospectionSchema),
    Consistency(InconsistentMetadata),
}

pub async fn execute(client: &Client, command: &Command) -> Result<Output> {
    let output = match command {
        Command::Version => Output::Version(client.v1_version().get_version().await?),
        Command::Metadata { action } => metadata(client, action).await?,
        Command::RunSql {
            kind,
            source,
            api,
            cascade,
            read_only,
            sql,
        } => {
            let request = SqlRequest {
                sql: sql.clone(),
                source: source.clone(),
                cascade: *cascade,
                read_only: *read_only,
            };
            Output::Json(run_sql(client, *api, *kind, request).await?)
        }
        Command::TrackTable { table } => Output::Json(track_table(client, table).await?),
        Command::UntrackTable { table, cascade } => {
            Output::Json(untrack_table(client, table, *cascade).await?)
        }
        Command::Bulk { api, file } => {
            let requests = read_bulk_file(file).await?;
            debug!(count = requests.len(), "loaded bulk requests");
            let body = match api {
                QueryApi::V1 => client.v1_query().bulk(requests).await?,
                QueryApi::V2 => client.v2_query().bulk(requests).await?,
            };
            Output::Json(body)
        }
        Command::CatalogState { action } => match action {
            CatalogStateAction::Get => Output::Json(client.v1_metadata().get().await?),
            CatalogStateAction::Set { key, file } => {
                let state = read_json_file(file).await?;
                Output::Json(client.v1_metadata().set(key, state).await?)
            }
        },
        Command::Introspect => Output::Schema(client.v1_graphql().get_introspection_schema().await?),
        Command::PgDump {
            schemas,
            source,
            opts,
        } => {
            let mut request = PgDumpRequest::schema_only(schemas);
            if !opts.is_empty() {
                request.opts = opts.clone();
            }
            request.source = source.clone();
            Output::Raw(client.pg_dump().pg_dump(request).await?)
        }
        Command::Send { target, file } => {
            let contents = tokio::fs::read(file)
                .await
                .with_context(|| format!("Failed to read request file: {}", file.display()))?;
            let payload = RequestPayload::from_bytes(contents);
            let (meta, body) = match target {
                SendTarget::Metadata => client.v1_metadata().send(payload).await?,
                SendTarget::V1Query => client.v1_query().send(payload).await?,
                SendTarget::V2Query => client.v2_query().send(payload).await?,
                SendTarget::PgDump => client.pg_dump().send(payload).await?,
            };
            debug!(status = meta.status.as_u16(), "request sent");
            if *target == SendTarget::PgDump {
                Output::Raw(body)
            } else {
                Output::Json(body)
            }
        }
    };
    Ok(output)
}

async fn metadata(client: &Client, action: &MetadataAction) -> Result<Output> {
    let metadata = client.v1_metadata();
    let body = match action {
        MetadataAction::Export { v2: true } => metadata.v2_export_metadata().await?,
        MetadataAction::Export { v2: false } => metadata.export_metadata().await?,
        MetadataAction::Clear => metadata.clear_metadata().await?,
        MetadataAction::Reload => metadata.reload_metadata().await?,
        MetadataAction::DropInconsistency => metadata.drop_inconsistent_metadata().await?,
        MetadataAction::Inconsistency => {
            let report: InconsistentMetadata =
                metadata.get_inconsistent_metadata().await?.json().await?;
            return Ok(Output::Consistency(report));
        }
        MetadataAction::Apply {
            file,
            allow_inconsistent,
        } => {
            let document = read_json_file(file).await?;
            if *allow_inconsistent {
                let response: V2ReplaceMetadataResponse = metadata
                    .v2_replace_metadata(V2ReplaceMetadataArgs {
                        allow_inconsistent_metadata: true,
                        metadata: document,
                    })
                    .await?
                    .json()
                    .await?;
                return Ok(Output::Consistency(response.into()));
            }
            metadata.replace_metadata(document).await?
        }
    };
    Ok(Output::Json(body))
}

/// Kind-independent parts of a `run-sql` invocation.
#[derive(Debug, Clone)]
pub struct SqlRequest {
    pub sql: String,
    pub source: Option<String>,
    pub cascade: bool,
    pub read_only: bool,
}

impl SqlRequest {
    fn pg(self) -> PgRunSqlInput {
        PgRunSqlInput {
            sql: self.sql,
            source: self.source,
            cascade: self.cascade,
            read_only: self.read_only,
            check_metadata_consistency: None,
        }
    }
}

fn require(supported: bool, api: &'static str, kind: SourceKind) -> Result<(), EngineError> {
    if supported {
        Ok(())
    } else {
        Err(EngineError::Unsupported { api, kind })
    }
}

pub async fn run_sql(
    client: &Client,
    api: QueryApi,
    kind: SourceKind,
    request: SqlRequest,
) -> Result<ResponseBody, EngineError> {
    match api {
        QueryApi::V1 => {
            let query = client.v1_query();
            require(query.supports(kind), "v1 query", kind)?;
            query.pg_run_sql(request.pg()).await
        }
        QueryApi::V2 => {
            let query = client.v2_query();
            require(query.supports(kind), "v2 query", kind)?;
            match kind {
                SourceKind::Postgres => query.pg_run_sql(request.pg()).await,
                SourceKind::Citus => query.citus_run_sql(request.pg()).await,
                SourceKind::Cockroach => query.cockroach_run_sql(request.pg()).await,
                SourceKind::Mssql => {
                    query
                        .mssql_run_sql(MssqlRunSqlInput {
                            sql: request.sql,
                            source: request.source,
                            cascade: request.cascade,
                            check_metadata_consistency: None,
                        })
                        .await
                }
                SourceKind::Bigquery => {
                    query
                        .bigquery_run_sql(BigQueryRunSqlInput {
                            sql: request.sql,
                            source: request.source,
                        })
                        .await
                }
                SourceKind::Snowflake => Err(EngineError::Unsupported {
                    api: "v2 query",
                    kind,
                }),
            }
        }
    }
}

pub async fn track_table(client: &Client, table: &TableArgs) -> Result<ResponseBody, EngineError> {
    let kind = table.kind;
    let source = table.source.clone();
    let qualified = QualifiedTable::new(&table.schema, &table.name);
    let input = TrackTableInput {
        source: source.clone(),
        table: qualified,
    };

    match table.api {
        QueryApi::V1 => {
            let query = client.v1_query();
            require(query.supports(kind), "v1 query", kind)?;
            query.pg_track_table(input).await
        }
        QueryApi::V2 => {
            let query = client.v2_query();
            require(query.supports(kind), "v2 query", kind)?;
            match kind {
                SourceKind::Postgres => query.pg_track_table(input).await,
                SourceKind::Mssql => query.mssql_track_table(input).await,
                SourceKind::Citus => query.citus_track_table(input).await,
                SourceKind::Cockroach => query.cockroach_track_table(input).await,
                SourceKind::Bigquery => {
                    query
                        .bigquery_track_table(BigQueryTrackTableInput {
                            source,
                            table: BigQueryTable::new(&table.schema, &table.name),
                        })
                        .await
                }
                SourceKind::Snowflake => Err(EngineError::Unsupported {
                    api: "v2 query",
                    kind,
                }),
            }
        }
    }
}

pub async fn untrack_table(
    client: &Client,
    table: &TableArgs,
    cascade: bool,
) -> Result<ResponseBody, EngineError> {
    let kind = table.kind;
    let source = table.source.clone();
    let input = UntrackTableInput {
        source: source.clone(),
        table: QualifiedTable::new(&table.schema, &table.name),
        cascade,
    };

    match table.api {
        QueryApi::V1 => {
            let query = client.v1_query();
            require(query.supports(kind), "v1 query", kind)?;
            query.pg_untrack_table(input).await
        }
        QueryApi::V2 => {
            let query = client.v2_query();
            require(query.supports(kind), "v2 query", kind)?;
            match kind {
                SourceKind::Postgres => query.pg_untrack_table(input).await,
                SourceKind::Mssql => query.mssql_untrack_table(input).await,
                SourceKind::Citus => query.citus_untrack_table(input).await,
                SourceKind::Cockroach => query.cockroach_untrack_table(input).await,
                SourceKind::Bigquery => {
                    query
                        .bigquery_untrack_table(BigQueryUntrackTableInput {
                            source,
                            table: BigQueryTable::new(&table.schema, &table.name),
                            cascade,
                        })
                        .await
                }
                SourceKind::Snowflake => Err(EngineError::Unsupported {
                    api: "v2 query",
                    kind,
                }),
            }
        }
    }
}

async fn read_json_file(path: &Path) -> Result<Box<RawValue>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    RawValue::from_string(contents.trim().to_string())
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

async fn read_bulk_file(path: &Path) -> Result<Vec<RequestBody>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read bulk file: {}", path.display()))?;
    let requests: Vec<RequestBody> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse bulk file: {}", path.display()))?;
    for (index, request) in requests.iter().enumerate() {
        request
            .validate()
            .with_context(|| format!("Request #{} in {}", index, path.display()))?;
    }
    Ok(requests)
}
