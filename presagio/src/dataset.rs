use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::encode::encode_series;
use crate::types::{PresagioError, TimeSeries};

/// Io-error label for sinks that have no path.
const ANON_SINK: &str = "<sink>";

fn write_records<W: Write>(
    series_list: &[TimeSeries],
    sink: &mut W,
    label: &str,
) -> Result<u64, PresagioError> {
    let mut written = 0u64;
    for series in series_list {
        let record = encode_series(series)?;
        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');
        sink.write_all(&line)
            .map_err(|e| PresagioError::io(label, e))?;
        written += line.len() as u64;
    }
    Ok(written)
}

/// Write series to `sink` as a line-delimited JSON dataset: one
/// `{"start", "target"}` object per series, in input order, UTF-8 encoded
/// and terminated by `\n`.
///
/// Records are encoded and written one at a time; the dataset is never
/// materialized in memory as a whole.
///
/// # Errors
/// - `PresagioError::InvalidInput` when any series in the list is empty.
/// - `PresagioError::Io` when the sink refuses a write.
pub fn write_jsonl<W: Write>(
    series_list: &[TimeSeries],
    mut sink: W,
) -> Result<(), PresagioError> {
    write_records(series_list, &mut sink, ANON_SINK).map(|_| ())
}

/// Write the dataset to a file at `path`, creating or truncating it.
///
/// The file handle lives only for the duration of the call and is released
/// on every exit path, error or not. Returns the number of bytes written.
///
/// # Errors
/// - `PresagioError::InvalidInput` when any series in the list is empty.
/// - `PresagioError::Io` when the file cannot be created, written, or
///   flushed; the error carries the offending path.
pub fn write_jsonl_file(
    series_list: &[TimeSeries],
    path: impl AsRef<Path>,
) -> Result<u64, PresagioError> {
    let path = path.as_ref();
    let label = path.display().to_string();

    let file = File::create(path).map_err(|e| PresagioError::io(label.clone(), e))?;
    let mut sink = BufWriter::new(file);
    let written = write_records(series_list, &mut sink, &label)?;
    sink.flush().map_err(|e| PresagioError::io(label.clone(), e))?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        path = %label,
        series = series_list.len(),
        bytes = written,
        "dataset saved"
    );

    Ok(written)
}
