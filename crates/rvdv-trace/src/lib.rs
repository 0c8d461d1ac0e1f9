//! Trace tooling for riscv-dv co-simulation.
//!
//! A candidate core's log is canonicalized into the nine-column normalized
//! schema, then walked in lockstep against a Spike reference trace in the
//! same schema. Known reporting differences between the two simulators are
//! accepted through a [`TolerancePolicy`].
//!
//! ```no_run
//! use std::path::Path;
//!
//! use rvdv_isa::CompositeDecoder;
//! use rvdv_trace::{Comparator, SourceColumns, TolerancePolicy, canonicalize_file, compare_files};
//!
//! # fn main() -> rvdv_trace::Result<()> {
//! let decoder = CompositeDecoder::standard();
//! canonicalize_file(
//!     Path::new("core.log.csv"),
//!     Path::new("core.csv"),
//!     &decoder,
//!     &SourceColumns::default(),
//! )?;
//!
//! let comparator = Comparator::new(TolerancePolicy::riscv_dv());
//! let result = compare_files(Path::new("spike.csv"), Path::new("core.csv"), &comparator)?;
//! if let Some(divergence) = result.divergence() {
//!     println!("{divergence}");
//! }
//! # Ok(())
//! # }
//! ```

mod canonicalize;
mod compare;
mod coverage;
mod error;
mod io;
mod policy;
mod record;

pub use canonicalize::{
    CanonicalizeSummary, DecodedText, SourceColumns, UNKNOWN, canonicalize, decode_instruction,
    translate_register_field, translate_row,
};
pub use compare::{Comparator, CompareEnd, DivergencePoint, TraceComparison, compare_traces};
pub use coverage::{CoverageSummary, collect_coverage, count_annotations};
pub use error::{Error, Result};
pub use io::{TraceSink, canonicalize_file, compare_files, open_input, read_trace};
pub use policy::{Condition, DEFAULT_TERMINAL_INSTR, ToleranceRule, TolerancePolicy};
pub use record::{Field, NormalizedRecord, SourceRow};
