// src/catalog/parse.rs

use csv::{ReaderBuilder, StringRecord, Terminator, Trim};
use tracing::{debug, trace};

use super::record::{FieldValue, Record};

/// Parse catalog text into records.
///
/// - line 1 is the header, split on bare commas;
/// - every later non-blank line becomes one record, fields assigned by position;
/// - rows are accepted leniently: extra cells are dropped, missing trailing
///   cells come back empty (`false` for `isNew`).
///
/// Never fails. Broken quoting yields whatever cells the tokenizer recovers.
pub fn parse_records(text: &str) -> Vec<Record> {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let headers: Vec<String> = lines[0].split(',').map(|h| h.trim().to_string()).collect();

    let mut records = Vec::with_capacity(lines.len() - 1);
    let mut blank = 0usize;
    for (idx, raw) in lines.iter().enumerate().skip(1) {
        let line = raw.trim();
        if line.is_empty() {
            blank += 1;
            continue;
        }

        let cells = tokenize_line(line);
        if cells.is_empty() {
            trace!(line = idx + 1, "no cells recovered, row dropped");
            continue;
        }
        records.push(build_record(&headers, &cells));
    }

    debug!(
        columns = headers.len(),
        records = records.len(),
        blank,
        "parsed catalog text"
    );
    records
}

/// Split one trimmed line into trimmed, unescaped cells.
fn tokenize_line(line: &str) -> Vec<String> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(line.as_bytes());

    let mut row = StringRecord::new();
    match rdr.read_record(&mut row) {
        Ok(true) => row.iter().map(str::to_string).collect(),
        Ok(false) => Vec::new(),
        Err(e) => {
            // input is already valid UTF-8, but stay total regardless
            trace!(error = %e, "tokenizer fell back to bare comma split");
            line.split(',').map(|c| c.trim().to_string()).collect()
        }
    }
}

fn build_record(headers: &[String], cells: &[String]) -> Record {
    let mut record = Record::new();
    for (pos, name) in headers.iter().enumerate() {
        let value = match cells.get(pos) {
            Some(cell) => FieldValue::for_field(name, cell),
            None => FieldValue::empty_for(name),
        };
        record.insert(name.as_str(), value);
    }
    record
}
