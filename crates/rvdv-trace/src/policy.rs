//! Tolerance rules for known cross-simulator discrepancies.

use std::fmt;

use crate::Field;

/// Predicate under which a mismatch on one field is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The reference did not report the field.
    ReferenceEmpty,
    /// The candidate value is a substring of the reference value.
    CandidateWithinReference,
}

impl Condition {
    #[must_use]
    pub fn holds(self, reference: &str, candidate: &str) -> bool {
        match self {
            Self::ReferenceEmpty => reference.is_empty(),
            Self::CandidateWithinReference => reference.contains(candidate),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReferenceEmpty => write!(f, "reference empty"),
            Self::CandidateWithinReference => write!(f, "candidate within reference"),
        }
    }
}

/// A named exception scoped to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToleranceRule {
    pub field: Field,
    pub condition: Condition,
}

impl ToleranceRule {
    #[must_use]
    pub const fn new(field: Field, condition: Condition) -> Self {
        Self { field, condition }
    }

    /// Whether this rule accepts `candidate` in place of `reference` on `field`.
    #[must_use]
    pub fn permits(&self, field: Field, reference: &str, candidate: &str) -> bool {
        self.field == field && self.condition.holds(reference, candidate)
    }
}

impl fmt::Display for ToleranceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.condition)
    }
}

/// Mnemonic after which a Spike reference trace stops tracking state.
pub const DEFAULT_TERMINAL_INSTR: &str = "ecall";

/// Rules applied by the comparator, plus the optional terminal shortcut.
///
/// When the reference record's `instr` equals the terminal mnemonic the
/// comparison ends successfully before that record's fields are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TolerancePolicy {
    rules: Vec<ToleranceRule>,
    terminal_instr: Option<String>,
}

impl TolerancePolicy {
    /// Rules for comparing a core against Spike traces from riscv-dv.
    #[must_use]
    pub fn riscv_dv() -> Self {
        Self {
            rules: vec![
                ToleranceRule::new(Field::Gpr, Condition::ReferenceEmpty),
                ToleranceRule::new(Field::Csr, Condition::ReferenceEmpty),
                ToleranceRule::new(Field::Mode, Condition::ReferenceEmpty),
                ToleranceRule::new(Field::Binary, Condition::CandidateWithinReference),
            ],
            terminal_instr: Some(DEFAULT_TERMINAL_INSTR.to_string()),
        }
    }

    /// Exact comparison: no rules, no terminal shortcut.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            rules: Vec::new(),
            terminal_instr: None,
        }
    }

    #[must_use]
    pub fn with_rule(mut self, rule: ToleranceRule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn with_terminal_instr(mut self, mnemonic: impl Into<String>) -> Self {
        self.terminal_instr = Some(mnemonic.into());
        self
    }

    #[must_use]
    pub fn without_terminal_instr(mut self) -> Self {
        self.terminal_instr = None;
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[ToleranceRule] {
        &self.rules
    }

    #[must_use]
    pub fn terminal_instr(&self) -> Option<&str> {
        self.terminal_instr.as_deref()
    }

    #[must_use]
    pub fn is_terminal(&self, instr: &str) -> bool {
        self.terminal_instr.as_deref() == Some(instr)
    }

    /// First rule that accepts the mismatch, if any.
    #[must_use]
    pub fn tolerating_rule(
        &self,
        field: Field,
        reference: &str,
        candidate: &str,
    ) -> Option<&ToleranceRule> {
        self.rules
            .iter()
            .find(|rule| rule.permits(field, reference, candidate))
    }
}

impl Default for TolerancePolicy {
    fn default() -> Self {
        Self::riscv_dv()
    }
}
