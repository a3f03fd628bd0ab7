//! CSV people loader.
//!
//! # CSV format
//!
//! ```csv
//! SSN,LAST,FIRST,YEAR
//! RSSMRA60A01L219X,Rossi,Mario,1960
//! BNCLRA85C41L219Y,Bianchi,Laura,1985
//! ```
//!
//! The header must be exactly `SSN,LAST,FIRST,YEAR`; anything else aborts the
//! load with [`LoadError::Header`] after the listener has been told about
//! line 1.  Each following line must have exactly four fields and a numeric
//! year, and must not repeat an already registered SSN.  Lines that break
//! these rules are skipped and reported to the [`LoadListener`]; the rest of
//! the file is still loaded.
//!
//! Fields are split on bare commas; quotes have no special meaning.  Line
//! numbers are 1-based and include the header.  Every line counts, blank
//! ones included: a blank line is a one-field line and is rejected like any
//! other short line.  A line that is not valid UTF-8 is rejected and reported
//! with a lossy copy of its text.

use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, Terminator};
use tracing::{info, warn};

use crate::{LoadError, LoadListener, LoadResult, Registry};

/// The only accepted header line.
pub const PEOPLE_HEADER: &str = "SSN,LAST,FIRST,YEAR";

const FIELD_COUNT: usize = 4;

/// Outcome of a successful load.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Lines read, header included.
    pub lines_read: u64,
    /// People newly registered.
    pub people_added: u64,
    /// Lines skipped and reported to the listener.
    pub rejected: u64,
}

/// Why a person line was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Rejection {
    FieldCount(usize),
    Encoding,
    BadYear(String),
    Duplicate(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::FieldCount(n) => write!(f, "expected {FIELD_COUNT} fields, found {n}"),
            Rejection::Encoding      => f.write_str("line is not valid UTF-8"),
            Rejection::BadYear(y)    => write!(f, "birth year {y:?} is not a number"),
            Rejection::Duplicate(id) => write!(f, "SSN {id} already registered"),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load people from a CSV file into `registry`.
pub fn load_people_csv<L: LoadListener>(
    registry: &mut Registry,
    path:     &Path,
    listener: &mut L,
) -> LoadResult<LoadSummary> {
    let file = std::fs::File::open(path).map_err(LoadError::Io)?;
    load_people_reader(registry, file, listener)
}

/// Like [`load_people_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_people_reader<R: Read, L: LoadListener>(
    registry: &mut Registry,
    reader:   R,
    listener: &mut L,
) -> LoadResult<LoadSummary> {
    // Lines are framed here rather than by the CSV reader, which skips blank
    // lines and would shift the numbers reported to the listener.
    let mut lines = BufReader::new(reader).split(b'\n');
    let mut fields = ReaderBuilder::new();
    fields
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'));

    // ── Header ────────────────────────────────────────────────────────────
    let header = match lines.next() {
        Some(line) => lossy(&trim_cr(line?)),
        None => String::new(),
    };
    if header != PEOPLE_HEADER {
        listener.on_rejected_line(1, &header);
        warn!(header = %header, "people CSV header mismatch");
        return Err(LoadError::Header(header));
    }

    // ── Person lines ──────────────────────────────────────────────────────
    let mut summary = LoadSummary { lines_read: 1, ..LoadSummary::default() };

    for line in lines {
        let line = trim_cr(line?);
        summary.lines_read += 1;
        let number = summary.lines_read;

        let record = split_fields(&fields, &line)?;
        match add_record(registry, &record) {
            Ok(()) => summary.people_added += 1,
            Err(reason) => {
                let raw = lossy(&line);
                warn!(line = number, raw = %raw, %reason, "skipping people CSV line");
                listener.on_rejected_line(number, &raw);
                summary.rejected += 1;
            }
        }
    }

    info!(
        lines = summary.lines_read,
        added = summary.people_added,
        rejected = summary.rejected,
        "people CSV loaded"
    );
    Ok(summary)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Split one line into its comma-separated fields.  A blank line yields a
/// single empty field.
fn split_fields(builder: &ReaderBuilder, line: &[u8]) -> LoadResult<ByteRecord> {
    let mut record = ByteRecord::new();
    if !builder.from_reader(line).read_byte_record(&mut record)? {
        record.push_field(b"");
    }
    Ok(record)
}

fn add_record(registry: &mut Registry, record: &ByteRecord) -> Result<(), Rejection> {
    if record.len() != FIELD_COUNT {
        return Err(Rejection::FieldCount(record.len()));
    }
    let field = |i: usize| std::str::from_utf8(&record[i]).map_err(|_| Rejection::Encoding);
    let (ssn, last, first, year) = (field(0)?, field(1)?, field(2)?, field(3)?);

    let birth_year = year
        .trim()
        .parse::<i32>()
        .map_err(|_| Rejection::BadYear(year.to_owned()))?;

    if registry.add_person(first, last, ssn, birth_year) {
        Ok(())
    } else {
        Err(Rejection::Duplicate(ssn.to_owned()))
    }
}

/// Drop the `\r` of a CRLF line ending.
fn trim_cr(mut line: Vec<u8>) -> Vec<u8> {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    line
}

/// The line as text, with invalid UTF-8 replaced.
fn lossy(line: &[u8]) -> String {
    String::from_utf8_lossy(line).into_owned()
}
