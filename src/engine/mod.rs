//! Versioned client for the engine's HTTP APIs.
//!
//! [`Client`] holds one handle per API generation. Each handle is a trait
//! object whose trait is the union of the operation sets that generation
//! serves:
//!
//! | Handle | Operation sets |
//! |--------|----------------|
//! | [`V1Metadata`] | common metadata, v2 metadata, catalog state, send |
//! | [`V1Query`] | common metadata, Postgres source ops, send, bulk |
//! | [`V2Query`] | Postgres, MSSQL, Citus, Cockroach and BigQuery source ops, send, bulk |
//! | [`PgDump`] | pg_dump, send |
//! | [`V1Graphql`] | introspection |
//! | [`V1Version`] | version |
//!
//! Typed operations return the response body undecoded; callers decode it
//! into whatever shape the request type answers with.

pub mod capabilities;
mod pg_dump;
pub mod sources;
mod v1_graphql;
mod v1_metadata;
mod v1_query;
mod v1_version;
mod v2_query;

pub use capabilities::{
    dispatch, BulkSend, CatalogStateOperations, CommonMetadataOperations, GenericSend,
    SourceCapabilities, V2CommonMetadataOperations,
};
pub use pg_dump::{PgDump, PgDumpClient, PG_DUMP_PATH};
pub use sources::{
    BigQuerySourceOps, CitusSourceOps, CockroachSourceOps, MssqlSourceOps, PgSourceOps,
};
pub use v1_graphql::{V1Graphql, V1GraphqlClient, V1_GRAPHQL_PATH};
pub use v1_metadata::{V1Metadata, V1MetadataClient, V1_METADATA_PATH};
pub use v1_query::{V1Query, V1QueryClient, V1_QUERY_PATH};
pub use v1_version::{V1Version, V1VersionClient, V1_VERSION_PATH};
pub use v2_query::{V2Query, V2QueryClient, V2_QUERY_PATH};

use std::fmt;
use std::sync::Arc;

use reqwest::Method;

use crate::error::Result;
use crate::transport::{
    HttpTransport, RequestPayload, ResponseBody, ResponseMeta, Transport, TransportSettings,
};

/// A transport bound to one endpoint path.
#[derive(Clone)]
pub(crate) struct Endpoint {
    transport: Arc<dyn Transport>,
    path: &'static str,
}

impl Endpoint {
    pub(crate) fn new(transport: Arc<dyn Transport>, path: &'static str) -> Self {
        Self { transport, path }
    }

    pub(crate) async fn post(&self, payload: RequestPayload) -> Result<(ResponseMeta, ResponseBody)> {
        self.transport
            .execute(Method::POST, self.path, Some(payload))
            .await
    }

    pub(crate) async fn get(&self) -> Result<(ResponseMeta, ResponseBody)> {
        self.transport.execute(Method::GET, self.path, None).await
    }
}

/// Entry point to every API generation. Holds no state besides the
/// transport its handles share.
pub struct Client {
    v1_metadata: Box<dyn V1Metadata>,
    v1_query: Box<dyn V1Query>,
    v2_query: Box<dyn V2Query>,
    pg_dump: Box<dyn PgDump>,
    v1_graphql: Box<dyn V1Graphql>,
    v1_version: Box<dyn V1Version>,
}

impl Client {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            v1_metadata: Box::new(V1MetadataClient::new(transport.clone())),
            v1_query: Box::new(V1QueryClient::new(transport.clone())),
            v2_query: Box::new(V2QueryClient::new(transport.clone())),
            pg_dump: Box::new(PgDumpClient::new(transport.clone())),
            v1_graphql: Box::new(V1GraphqlClient::new(transport.clone())),
            v1_version: Box::new(V1VersionClient::new(transport)),
        }
    }

    /// Client over the bundled `reqwest` transport.
    pub fn connect(settings: TransportSettings) -> Result<Self> {
        let transport = HttpTransport::new(settings)?;
        Ok(Self::new(Arc::new(transport)))
    }

    pub fn v1_metadata(&self) -> &dyn V1Metadata {
        self.v1_metadata.as_ref()
    }

    pub fn v1_query(&self) -> &dyn V1Query {
        self.v1_query.as_ref()
    }

    pub fn v2_query(&self) -> &dyn V2Query {
        self.v2_query.as_ref()
    }

    pub fn pg_dump(&self) -> &dyn PgDump {
        self.pg_dump.as_ref()
    }

    pub fn v1_graphql(&self) -> &dyn V1Graphql {
        self.v1_graphql.as_ref()
    }

    pub fn v1_version(&self) -> &dyn V1Version {
        self.v1_version.as_ref()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
