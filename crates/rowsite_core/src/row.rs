use serde::Deserialize;
use serde_json::Value;

/// One dataset record as served by the rows API.
///
/// Every field is optional: the upstream envelope is untrusted and a missing
/// key must not abort the build. Rendering applies the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    /// Timestamp-like scalar; the API serves both numbers and strings.
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub full_text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// One `{"row": {...}}` element of the envelope's `rows` array. Extra keys
/// (`row_idx`, `truncated_cells`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RowRecord {
    #[serde(default)]
    pub row: Row,
}

/// Response body of the rows API: `{"rows": [{"row": {...}}, ...]}`.
///
/// A missing `rows` key decodes as an empty list, which is the normal
/// end-of-data signal for pagination.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RowsEnvelope {
    #[serde(default)]
    pub rows: Vec<RowRecord>,
}

impl RowsEnvelope {
    /// Unwraps the envelope into the bare rows, in input order.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows.into_iter().map(|record| record.row).collect()
    }
}
