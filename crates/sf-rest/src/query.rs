//! SOQL query envelope.

use serde::{Deserialize, Serialize};

/// Result envelope of a SOQL query.
///
/// Every field is defaulted so an empty body (`{}`) decodes to an empty
/// result instead of failing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryResult<T> {
    /// Total number of records matching the query.
    #[serde(rename = "totalSize", default)]
    pub total_size: u64,

    /// Whether all records are returned (no more pages).
    #[serde(default)]
    pub done: bool,

    /// URL to fetch the next batch of results. Pagination past the first
    /// page is left to the caller.
    #[serde(rename = "nextRecordsUrl", default)]
    pub next_records_url: Option<String>,

    /// The records.
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
}
