//! Rowsite core: pure build state machine and shared value types.
mod date;
mod escape;
mod manifest;
mod row;
mod state;

pub use date::timestamp_to_date;
pub use escape::escape_html;
pub use manifest::{page_filename, PageEntry};
pub use row::{Row, RowRecord, RowsEnvelope};
pub use state::{update, BuildEffect, BuildMsg, BuildPhase, BuildState};
