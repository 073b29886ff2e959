//! Header-less, pipe-delimited update lines (bgpdump machine format).

use crate::error::Result;
use std::io::Read;

/// Read at most `limit` raw rows as field lists. Rows may have any width.
/// Invalid UTF-8 is replaced per field, so a bad byte only affects the field it sits in.
pub fn read_rows<R: Read>(input: R, limit: Option<usize>) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        if limit.is_some_and(|n| rows.len() >= n) {
            break;
        }
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }
    Ok(rows)
}
