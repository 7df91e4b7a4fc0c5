mod common;

use common::RecordingTransport;
use enginectl::cli::QueryApi;
use enginectl::commands::{self, SqlRequest};
use enginectl::engine::{
    BigQuerySourceOps, BulkSend, CatalogStateOperations, CitusSourceOps, CockroachSourceOps,
    CommonMetadataOperations, MssqlSourceOps, PgDumpClient, PgSourceOps, SourceCapabilities,
    V1MetadataClient, V1QueryClient, V2CommonMetadataOperations, V2QueryClient,
};
use enginectl::models::SourceKind;
use enginectl::{Client, EngineError};
use static_assertions::{assert_impl_all, assert_not_impl_any};

assert_impl_all!(V1QueryClient: CommonMetadataOperations, PgSourceOps, BulkSend);
assert_not_impl_any!(
    V1QueryClient: MssqlSourceOps,
    CitusSourceOps,
    CockroachSourceOps,
    BigQuerySourceOps,
    CatalogStateOperations,
    V2CommonMetadataOperations
);

assert_impl_all!(
    V2QueryClient: PgSourceOps,
    MssqlSourceOps,
    CitusSourceOps,
    CockroachSourceOps,
    BigQuerySourceOps,
    BulkSend
);
assert_not_impl_any!(
    V2QueryClient: CommonMetadataOperations,
    V2CommonMetadataOperations,
    CatalogStateOperations
);

assert_impl_all!(
    V1MetadataClient: CommonMetadataOperations,
    V2CommonMetadataOperations,
    CatalogStateOperations
);
assert_not_impl_any!(V1MetadataClient: BulkSend, PgSourceOps, MssqlSourceOps);
assert_not_impl_any!(PgDumpClient: BulkSend, CommonMetadataOperations, PgSourceOps);

fn expected_run_sql_type(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Postgres => "run_sql",
        SourceKind::Mssql => "mssql_run_sql",
        SourceKind::Citus => "citus_run_sql",
        SourceKind::Cockroach => "cockroach_run_sql",
        SourceKind::Bigquery => "bigquery_run_sql",
        SourceKind::Snowflake => unreachable!("no operation set for snowflake"),
    }
}

fn select_one() -> SqlRequest {
    SqlRequest {
        sql: "select 1".to_string(),
        source: None,
        cascade: false,
        read_only: false,
    }
}

async fn check_generation(api: QueryApi, path: &str) {
    let transport = RecordingTransport::new();
    let client = Client::new(transport.clone());
    let supported = match api {
        QueryApi::V1 => client.v1_query().supported_source_kinds(),
        QueryApi::V2 => client.v2_query().supported_source_kinds(),
    };

    for kind in SourceKind::ALL.iter().copied() {
        let before = transport.calls().len();
        let result = commands::run_sql(&client, api, kind, select_one()).await;
        if supported.contains(&kind) {
            result.unwrap();
            let call = transport.last();
            assert_eq!(call.path, path);
            assert_eq!(call.request_type(), expected_run_sql_type(kind));
        } else {
            assert!(matches!(result, Err(EngineError::Unsupported { .. })));
            assert_eq!(transport.calls().len(), before);
        }
    }
}

#[tokio::test]
async fn test_v1_query_advertises_only_what_it_dispatches() {
    check_generation(QueryApi::V1, "v1/query").await;
}

#[tokio::test]
async fn test_v2_query_advertises_only_what_it_dispatches() {
    check_generation(QueryApi::V2, "v2/query").await;
}
