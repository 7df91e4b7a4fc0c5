//! Per-source-kind operation sets served by the query endpoints.
//!
//! The Postgres-flavoured sets look alike on purpose but stay separate
//! traits: a kind gaining its own verbs must not leak them into another.

use async_trait::async_trait;

use super::capabilities::{dispatch, GenericSend};
use crate::error::Result;
use crate::models::{
    BigQueryRunSqlInput, BigQueryTrackTableInput, BigQueryUntrackTableInput, MssqlRunSqlInput,
    PgRunSqlInput, RequestBody, TrackTableInput, UntrackTableInput,
};
use crate::transport::ResponseBody;

#[async_trait]
pub trait PgSourceOps: GenericSend {
    async fn pg_run_sql(&self, input: PgRunSqlInput) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("run_sql", input)?).await
    }

    async fn pg_track_table(&self, input: TrackTableInput) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("pg_track_table", input)?).await
    }

    async fn pg_untrack_table(&self, input: UntrackTableInput) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("pg_untrack_table", input)?).await
    }
}

#[async_trait]
pub trait MssqlSourceOps: GenericSend {
    async fn mssql_run_sql(&self, input: MssqlRunSqlInput) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("mssql_run_sql", input)?).await
    }

    async fn mssql_track_table(&self, input: TrackTableInput) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("mssql_track_table", input)?).await
    }

    async fn mssql_untrack_table(&self, input: UntrackTableInput) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("mssql_untrack_table", input)?).await
    }
}

#[async_trait]
pub trait CitusSourceOps: GenericSend {
    async fn citus_run_sql(&self, input: PgRunSqlInput) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("citus_run_sql", input)?).await
    }

    async fn citus_track_table(&self, input: TrackTableInput) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("citus_track_table", input)?).await
    }

    async fn citus_untrack_table(&self, input: UntrackTableInput) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("citus_untrack_table", input)?).await
    }
}

#[async_trait]
pub trait CockroachSourceOps: GenericSend {
    async fn cockroach_run_sql(&self, input: PgRunSqlInput) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("cockroach_run_sql", input)?).await
    }

    async fn cockroach_track_table(&self, input: TrackTableInput) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("cockroach_track_table", input)?).await
    }

    async fn cockroach_untrack_table(&self, input: UntrackTableInput) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("cockroach_untrack_table", input)?).await
    }
}

#[async_trait]
pub trait BigQuerySourceOps: GenericSend {
    async fn bigquery_run_sql(&self, input: BigQueryRunSqlInput) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("bigquery_run_sql", input)?).await
    }

    async fn bigquery_track_table(&self, input: BigQueryTrackTableInput) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("bigquery_track_table", input)?).await
    }

    async fn bigquery_untrack_table(
        &self,
        input: BigQueryUntrackTableInput,
    ) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("bigquery_untrack_table", input)?).await
    }
}
