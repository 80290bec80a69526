//! Document source and record sink for the fanout matrix expander.
//!
//! One JSON document comes in from a file; an expansion result goes out as
//! newline-delimited JSON, one compact record per document, in exactly the
//! order the expander produced.

pub mod error;

pub use error::{IoError, Result};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fanout_core::Value;

/// Read and parse a single JSON document from a file.
///
/// Fails with [`IoError::Io`] if the file cannot be read and with
/// [`IoError::Json`] if its contents are not one well-formed JSON document.
pub fn read_document(path: impl AsRef<Path>) -> Result<Value> {
    let text = std::fs::read_to_string(path)?;
    Ok(text.parse()?)
}

/// Write documents as newline-delimited JSON records.
///
/// Records are separated by `\n` with no trailing newline, and are written
/// in input order.
pub fn write_records<W: Write>(mut writer: W, docs: &[Value]) -> Result<()> {
    for (index, doc) in docs.iter().enumerate() {
        if index > 0 {
            writer.write_all(b"\n")?;
        }
        serde_json::to_writer(&mut writer, doc)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write documents as newline-delimited JSON to a file, creating or
/// truncating it.
pub fn write_records_file(path: impl AsRef<Path>, docs: &[Value]) -> Result<()> {
    let file = File::create(path)?;
    write_records(BufWriter::new(file), docs)
}
