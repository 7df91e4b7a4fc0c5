mod catalog;
mod introspection;
mod metadata;
mod pg_dump;
mod request;
mod source;
mod sql;
mod table;
mod version;

pub use catalog::SetCatalogStateArgs;
pub use introspection::{GraphqlRequest, IntrospectionSchema, INTROSPECTION_QUERY};
pub use metadata::{
    InconsistentMetadata, InconsistentObject, V2ReplaceMetadataArgs, V2ReplaceMetadataResponse,
};
pub use pg_dump::PgDumpRequest;
pub use request::{Args, EmptyArgs, RequestBody, BULK_REQUEST_TYPE};
pub use source::SourceKind;
pub use sql::{BigQueryRunSqlInput, MssqlRunSqlInput, PgRunSqlInput, RunSqlOutput};
pub use table::{
    BigQueryTable, BigQueryTrackTableInput, BigQueryUntrackTableInput, QualifiedTable,
    TrackTableInput, UntrackTableInput,
};
pub use version::VersionInfo;
