//! Functional-coverage totals from annotated source listings.
//!
//! Annotation files mark each coverpoint line with its hit count: a line
//! starting `%000000` was never hit, a line starting with a space and six
//! digits was.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::Result;

static MISSED_PATTERN: OnceLock<Regex> = OnceLock::new();
static HIT_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Hit and total coverpoint counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverageSummary {
    pub hit: usize,
    pub total: usize,
}

impl CoverageSummary {
    /// Classify one annotated line.
    pub fn record_line(&mut self, line: &str) {
        let missed = MISSED_PATTERN.get_or_init(|| Regex::new(r"^%000000").unwrap());
        let hit = HIT_PATTERN.get_or_init(|| Regex::new(r"^ [0-9]{6}").unwrap());
        if missed.is_match(line) {
            self.total += 1;
        } else if hit.is_match(line) {
            self.hit += 1;
            self.total += 1;
        }
    }

    pub const fn merge(&mut self, other: Self) {
        self.hit += other.hit;
        self.total += other.total;
    }

    /// Fraction of coverpoints hit, or `None` when there are none.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> Option<f64> {
        (self.total > 0).then(|| self.hit as f64 / self.total as f64)
    }
}

impl fmt::Display for CoverageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ratio() {
            None => write!(f, "No coverpoints found"),
            Some(ratio) => write!(f, "{}/{} ({:.0}%)", self.hit, self.total, ratio * 100.0),
        }
    }
}

/// Count coverpoints in one annotation stream.
///
/// # Errors
///
/// Returns any read error.
pub fn count_annotations<R: BufRead>(reader: R) -> io::Result<CoverageSummary> {
    let mut summary = CoverageSummary::default();
    for line in reader.lines() {
        summary.record_line(&line?);
    }
    Ok(summary)
}

/// Sum coverage over the annotation files for `files` in `annotation_dir`.
///
/// A source file with no annotation file contributes nothing.
///
/// # Errors
///
/// Returns I/O errors other than a missing file.
pub fn collect_coverage<P: AsRef<Path>>(
    annotation_dir: &Path,
    files: &[P],
) -> Result<CoverageSummary> {
    let mut summary = CoverageSummary::default();
    for file in files {
        let path = annotation_dir.join(file);
        let reader = match File::open(&path) {
            Ok(handle) => BufReader::new(handle),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no annotation file");
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        let counts = count_annotations(reader)?;
        debug!(path = %path.display(), hit = counts.hit, total = counts.total, "annotation file");
        summary.merge(counts);
    }
    Ok(summary)
}
