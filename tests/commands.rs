mod common;

use clap::Parser;
use common::RecordingTransport;
use enginectl::cli::{Args, QueryApi};
use enginectl::commands::{self, Output, SqlRequest};
use enginectl::models::SourceKind;
use enginectl::{Client, EngineError};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn command(argv: &[&str]) -> Args {
    let mut full = vec!["enginectl"];
    full.extend_from_slice(argv);
    Args::try_parse_from(full).unwrap()
}

fn select_one() -> SqlRequest {
    SqlRequest {
        sql: "select 1".to_string(),
        source: Some("default".to_string()),
        cascade: false,
        read_only: false,
    }
}

#[tokio::test]
async fn test_v1_query_refuses_non_postgres_sources_without_sending() {
    let transport = RecordingTransport::new();
    let client = Client::new(transport.clone());

    let err = commands::run_sql(&client, QueryApi::V1, SourceKind::Mssql, select_one())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        EngineError::Unsupported {
            kind: SourceKind::Mssql,
            ..
        }
    ));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_snowflake_is_refused_by_both_generations() {
    let transport = RecordingTransport::new();
    let client = Client::new(transport.clone());

    for api in [QueryApi::V1, QueryApi::V2] {
        let err = commands::run_sql(&client, api, SourceKind::Snowflake, select_one())
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Unsupported { .. }));
    }
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_v2_run_sql_dispatches_on_source_kind() {
    let transport = RecordingTransport::new();
    let client = Client::new(transport.clone());

    commands::run_sql(&client, QueryApi::V2, SourceKind::Mssql, select_one())
        .await
        .unwrap();
    let sent = transport.last().json();
    assert_eq!(sent["type"], "mssql_run_sql");
    assert_eq!(
        sent["args"],
        json!({"sql": "select 1", "source": "default", "cascade": false})
    );

    commands::run_sql(&client, QueryApi::V2, SourceKind::Bigquery, select_one())
        .await
        .unwrap();
    let sent = transport.last().json();
    assert_eq!(sent["type"], "bigquery_run_sql");
    assert_eq!(sent["args"], json!({"sql": "select 1", "source": "default"}));
}

#[tokio::test]
async fn test_track_table_for_bigquery_uses_dataset() {
    let transport = RecordingTransport::new();
    let client = Client::new(transport.clone());

    let args = command(&[
        "track-table",
        "--kind",
        "bigquery",
        "--source",
        "bq",
        "--schema",
        "analytics",
        "events",
    ]);
    commands::execute(&client, &args.command).await.unwrap();

    let call = transport.last();
    assert_eq!(call.path, "v2/query");
    assert_eq!(
        call.json(),
        json!({
            "type": "bigquery_track_table",
            "args": {"source": "bq", "table": {"dataset": "analytics", "name": "events"}}
        })
    );
}

#[tokio::test]
async fn test_untrack_table_on_v1_uses_postgres_verb() {
    let transport = RecordingTransport::new();
    let client = Client::new(transport.clone());

    let args = command(&["untrack-table", "--api", "v1", "--cascade", "users"]);
    commands::execute(&client, &args.command).await.unwrap();

    let call = transport.last();
    assert_eq!(call.path, "v1/query");
    assert_eq!(
        call.json(),
        json!({
            "type": "pg_untrack_table",
            "args": {"table": {"schema": "public", "name": "users"}, "cascade": true}
        })
    );
}

#[tokio::test]
async fn test_bulk_file_is_sent_as_one_request() {
    let transport = RecordingTransport::new();
    let client = Client::new(transport.clone());

    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"type": "run_sql", "args": {{"sql": "create table t (id int)"}}}},
            {{"type": "pg_track_table", "args": {{"table": {{"schema": "public", "name": "t"}}}}}}
        ]"#
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let args = command(&["bulk", "--api", "v1", path]);
    let output = commands::execute(&client, &args.command).await.unwrap();
    assert!(matches!(output, Output::Json(_)));

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    let sent = calls[0].json();
    assert_eq!(calls[0].path, "v1/query");
    assert_eq!(sent["type"], "bulk");
    assert_eq!(sent["args"][0]["args"]["sql"], "create table t (id int)");
    assert_eq!(sent["args"][1]["type"], "pg_track_table");
}

#[tokio::test]
async fn test_bulk_file_with_blank_type_is_rejected_locally() {
    let transport = RecordingTransport::new();
    let client = Client::new(transport.clone());

    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"[{{"type": " ", "args": {{}}}}]"#).unwrap();

    let path = file.path().to_str().unwrap();
    let args = command(&["bulk", path]);
    let err = commands::execute(&client, &args.command).await.unwrap_err();

    assert!(format!("{:#}", err).contains("request type must not be empty"));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_metadata_apply_forwards_document_verbatim() {
    let transport = RecordingTransport::new();
    let client = Client::new(transport.clone());

    let document = r#"{"version":3,"sources":[{"name":"default","kind":"postgres","tables":[]}]}"#;
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", document).unwrap();

    let path = file.path().to_str().unwrap();
    let args = command(&["metadata", "apply", path]);
    commands::execute(&client, &args.command).await.unwrap();

    let raw = String::from_utf8(transport.last().raw.unwrap()).unwrap();
    assert_eq!(
        raw,
        format!(r#"{{"type":"replace_metadata","args":{}}}"#, document)
    );
}

#[tokio::test]
async fn test_pg_dump_output_is_raw() {
    let transport = RecordingTransport::with_responder(|_| Ok(b"SET check_function_bodies = false;\n".to_vec()));
    let client = Client::new(transport.clone());

    let args = command(&["pg-dump", "--schema", "public", "--source", "default"]);
    let output = commands::execute(&client, &args.command).await.unwrap();

    match output {
        Output::Raw(body) => assert_eq!(
            body.text().await.unwrap(),
            "SET check_function_bodies = false;\n"
        ),
        other => panic!("expected raw output, got {:?}", other),
    }
    assert_eq!(
        transport.last().json(),
        json!({
            "opts": ["-O", "-x", "--schema-only", "--schema", "public"],
            "clean_output": true,
            "source": "default"
        })
    );
}

#[tokio::test]
async fn test_metadata_inconsistency_is_decoded_into_a_report() {
    let transport = RecordingTransport::with_responder(|_| {
        Ok(br#"{"is_consistent":false,"inconsistent_objects":[{"type":"table","reason":"no such table","definition":{"schema":"public","name":"gone"}}]}"#.to_vec())
    });
    let client = Client::new(transport.clone());

    let args = command(&["metadata", "inconsistency"]);
    let output = commands::execute(&client, &args.command).await.unwrap();

    match output {
        Output::Consistency(report) => {
            assert!(!report.is_consistent);
            assert_eq!(report.inconsistent_objects.len(), 1);
            assert_eq!(report.inconsistent_objects[0].object_type, "table");
            assert_eq!(
                report.inconsistent_objects[0].definition,
                json!({"schema": "public", "name": "gone"})
            );
        }
        other => panic!("expected a consistency report, got {:?}", other),
    }
    assert_eq!(transport.last().request_type(), "get_inconsistent_metadata");
}

#[tokio::test]
async fn test_metadata_apply_allowing_inconsistency_reports_objects() {
    let transport = RecordingTransport::with_responder(|_| {
        Ok(br#"{"is_consistent":false,"inconsistent_objects":[{"type":"remote_schema","reason":"connection refused","definition":"countries"}]}"#.to_vec())
    });
    let client = Client::new(transport.clone());

    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"version":3,"sources":[]}}"#).unwrap();

    let path = file.path().to_str().unwrap();
    let args = command(&["metadata", "apply", "--allow-inconsistent", path]);
    let output = commands::execute(&client, &args.command).await.unwrap();

    match output {
        Output::Consistency(report) => {
            assert!(!report.is_consistent);
            assert_eq!(report.inconsistent_objects[0].object_type, "remote_schema");
            assert_eq!(
                report.inconsistent_objects[0].reason.as_deref(),
                Some("connection refused")
            );
        }
        other => panic!("expected a consistency report, got {:?}", other),
    }

    let sent = transport.last().json();
    assert_eq!(sent["version"], 2);
    assert_eq!(sent["args"]["allow_inconsistent_metadata"], true);
}
