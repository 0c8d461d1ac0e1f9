//! Lockstep comparison of two normalized traces.
//!
//! Records are paired by position. The walk stops at the first record pair
//! with a mismatch no [`TolerancePolicy`] rule accepts, when either stream
//! runs out, or when the reference reaches the terminal instruction.

use std::borrow::Borrow;
use std::fmt;

use tracing::{debug, trace};

use crate::{Field, NormalizedRecord, TolerancePolicy};

/// Where and how two traces first disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivergencePoint {
    /// 0-based record index.
    pub line: usize,
    pub field: Field,
    /// Reference value of `field`.
    pub expected: String,
    /// Candidate value of `field`.
    pub actual: String,
    /// Reference `pc`.
    pub pc: String,
    /// Reference disassembly.
    pub instr_str: String,
}

impl fmt::Display for DivergencePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Divergence on line {}: expected {} {} but got {}",
            self.line, self.field, self.expected, self.actual
        )?;
        write!(f, "Instruction is {} {}", self.pc, self.instr_str)
    }
}

/// How the lockstep walk ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareEnd {
    /// One or both streams ran out. A longer stream's tail is not compared.
    Exhausted {
        reference_remaining: bool,
        candidate_remaining: bool,
    },
    /// The reference reached the terminal instruction at `line`.
    TerminalInstruction { line: usize },
    /// An untolerated mismatch.
    Diverged(DivergencePoint),
}

/// Result of comparing two traces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceComparison {
    /// Record pairs that passed every field check.
    pub compared: usize,
    /// Field mismatches accepted by a tolerance rule.
    pub tolerated: usize,
    pub end: CompareEnd,
}

impl TraceComparison {
    #[must_use]
    pub const fn is_match(&self) -> bool {
        !matches!(self.end, CompareEnd::Diverged(_))
    }

    #[must_use]
    pub const fn divergence(&self) -> Option<&DivergencePoint> {
        match &self.end {
            CompareEnd::Diverged(point) => Some(point),
            _ => None,
        }
    }
}

/// Walks reference and candidate traces under a [`TolerancePolicy`].
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    policy: TolerancePolicy,
}

impl Comparator {
    #[must_use]
    pub const fn new(policy: TolerancePolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> &TolerancePolicy {
        &self.policy
    }

    /// Compare two streams of records, stopping at the first divergence.
    ///
    /// Records are only pulled while the walk continues, so nothing after the
    /// divergence or terminal instruction is read.
    ///
    /// # Errors
    ///
    /// Returns the first error yielded by either stream while both still have
    /// records to pair.
    pub fn compare<T, E, R, C>(&self, reference: R, candidate: C) -> Result<TraceComparison, E>
    where
        T: Borrow<NormalizedRecord>,
        R: IntoIterator<Item = Result<T, E>>,
        C: IntoIterator<Item = Result<T, E>>,
    {
        let mut reference = reference.into_iter();
        let mut candidate = candidate.into_iter();
        let mut line = 0;
        let mut tolerated = 0;

        let end = loop {
            // The candidate is only pulled once the reference has a record. Past
            // the end of the reference, a candidate row that fails to parse
            // still counts as remaining.
            let Some(expected) = reference.next() else {
                break CompareEnd::Exhausted {
                    reference_remaining: false,
                    candidate_remaining: candidate.next().is_some(),
                };
            };
            let expected = expected?;
            let Some(actual) = candidate.next() else {
                break CompareEnd::Exhausted {
                    reference_remaining: true,
                    candidate_remaining: false,
                };
            };
            let actual = actual?;
            let (expected, actual) = (expected.borrow(), actual.borrow());

            if self.policy.is_terminal(&expected.instr) {
                break CompareEnd::TerminalInstruction { line };
            }
            if let Some(point) = self.check_record(line, expected, actual, &mut tolerated) {
                break CompareEnd::Diverged(point);
            }
            line += 1;
        };

        debug!(compared = line, tolerated, end = ?end, "compared traces");
        Ok(TraceComparison {
            compared: line,
            tolerated,
            end,
        })
    }

    /// Compare two in-memory traces.
    #[must_use]
    pub fn compare_records(
        &self,
        reference: &[NormalizedRecord],
        candidate: &[NormalizedRecord],
    ) -> TraceComparison {
        let Ok(comparison) = self.compare::<_, std::convert::Infallible, _, _>(
            reference.iter().map(Ok),
            candidate.iter().map(Ok),
        );
        comparison
    }

    fn check_record(
        &self,
        line: usize,
        expected: &NormalizedRecord,
        actual: &NormalizedRecord,
        tolerated: &mut usize,
    ) -> Option<DivergencePoint> {
        for field in Field::COMPARED {
            let (want, got) = (expected.field(field), actual.field(field));
            if want == got {
                continue;
            }
            if let Some(rule) = self.policy.tolerating_rule(field, want, got) {
                trace!(line, %field, expected = want, actual = got, %rule, "tolerated mismatch");
                *tolerated += 1;
                continue;
            }
            return Some(DivergencePoint {
                line,
                field,
                expected: want.to_string(),
                actual: got.to_string(),
                pc: expected.pc.clone(),
                instr_str: expected.instr_str.clone(),
            });
        }
        None
    }
}

/// Compare two in-memory traces under `policy`.
#[must_use]
pub fn compare_traces(
    reference: &[NormalizedRecord],
    candidate: &[NormalizedRecord],
    policy: &TolerancePolicy,
) -> TraceComparison {
    Comparator::new(policy.clone()).compare_records(reference, candidate)
}
