//! Free-text record filter.
//!
//! A record matches when any of its string-valued fields contains the
//! query, compared case-insensitively. Order is preserved.

use crate::model::Record;

/// Return the records matching `query`, in collection order.
///
/// An empty query matches every record.
pub fn filter<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|record| record_matches(record, &query_lower))
        .collect()
}

/// Test one record against an already lowercased query.
pub fn record_matches(record: &Record, query_lower: &str) -> bool {
    record
        .text_values()
        .any(|value| value.to_lowercase().contains(query_lower))
}
