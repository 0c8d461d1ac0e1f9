//! File access for logs and traces.
//!
//! Paths with a `.zst` extension are zstd-compressed on write and
//! decompressed on read.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use rvdv_isa::Disassembler;
use tracing::debug;

use crate::{
    CanonicalizeSummary, Comparator, NormalizedRecord, Result, SourceColumns, TraceComparison,
    canonicalize,
};

const ZSTD_LEVEL: i32 = 3;

fn is_zstd(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "zst")
}

/// Open a log or trace for reading.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or the zstd frame
/// header is invalid.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    if is_zstd(path) {
        Ok(Box::new(zstd::stream::Decoder::new(file)?))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Output file for a normalized trace.
///
/// Must be closed with [`TraceSink::finish`] so the zstd frame is completed
/// and write errors are reported.
pub enum TraceSink {
    Plain(BufWriter<File>),
    Zstd(zstd::stream::Encoder<'static, BufWriter<File>>),
}

impl TraceSink {
    /// Create (or truncate) `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created.
    pub fn create(path: &Path) -> Result<Self> {
        let writer = BufWriter::new(File::create(path)?);
        if is_zstd(path) {
            Ok(Self::Zstd(zstd::stream::Encoder::new(writer, ZSTD_LEVEL)?))
        } else {
            Ok(Self::Plain(writer))
        }
    }

    /// Flush all buffered data and finish the compressed stream.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the final write fails.
    pub fn finish(self) -> Result<()> {
        match self {
            Self::Plain(mut writer) => writer.flush()?,
            Self::Zstd(encoder) => encoder.finish()?.flush()?,
        }
        Ok(())
    }
}

impl Write for TraceSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(writer) => writer.write(buf),
            Self::Zstd(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(writer) => writer.flush(),
            Self::Zstd(encoder) => encoder.flush(),
        }
    }
}

/// Stream the records of a normalized trace file.
///
/// Records are deserialized by column name; `instr`, `instr_str`,
/// `operand` and `pad` may be absent and default to empty.
///
/// # Errors
///
/// Returns an error if the file cannot be opened. Row errors are yielded by
/// the iterator.
pub fn read_trace(path: &Path) -> Result<impl Iterator<Item = Result<NormalizedRecord>> + use<>> {
    let reader = csv::Reader::from_reader(open_input(path)?);
    Ok(reader
        .into_deserialize::<NormalizedRecord>()
        .map(|record| record.map_err(Into::into)))
}

/// Canonicalize the log at `log` into a normalized trace at `out`.
///
/// # Errors
///
/// See [`canonicalize`]. A partially written output is left in place on error.
pub fn canonicalize_file<D>(
    log: &Path,
    out: &Path,
    decoder: &D,
    columns: &SourceColumns,
) -> Result<CanonicalizeSummary>
where
    D: Disassembler + ?Sized,
{
    let input = open_input(log)?;
    let mut sink = TraceSink::create(out)?;
    let summary = canonicalize(input, &mut sink, decoder, columns)?;
    sink.finish()?;
    debug!(log = %log.display(), out = %out.display(), "wrote normalized trace");
    Ok(summary)
}

/// Compare two normalized trace files.
///
/// # Errors
///
/// Returns the first open, read or parse error from either file.
pub fn compare_files(
    reference: &Path,
    candidate: &Path,
    comparator: &Comparator,
) -> Result<TraceComparison> {
    comparator.compare(read_trace(reference)?, read_trace(candidate)?)
}
