//! Coverage Prover.
//!
//! Decides whether a set of classified arms covers every value a closed
//! union can hold, `null` included when the subject is nullable.
//!
//! # Algorithm
//!
//! Start with every variant unresolved and `null` unhandled, then apply each
//! unguarded arm:
//!
//! | Pattern                | Effect                                     |
//! |------------------------|--------------------------------------------|
//! | `Wildcard`             | `null` handled, every variant resolved     |
//! | `NullLiteral`          | `null` handled                             |
//! | `VariantTest(v)`       | `v` resolved                               |
//! | `Positional(v, subs)`  | `v` resolved iff every sub is total        |
//! | `Or(alts)`             | every alternative applied                  |
//! | anything else          | nothing                                    |
//!
//! State only ever shrinks (unresolved set) or turns true (`null` flag), so
//! arm order is irrelevant and adding arms can never lose coverage.
//!
//! The verdict checks `null` first: a nullable subject with `null` unhandled
//! is never exhaustive, however many variants are covered.

use rustc_hash::FxHashSet;
use union_ir::{StringInterner, VariantId};

use crate::pattern::{Arm, MatchConstruct, Pattern};
use crate::stack::ensure_sufficient_stack;
use crate::variants::UnionType;

/// Outcome of a proof.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Exhaustive,
    NotExhaustive,
}

/// Full result of a proof: the verdict and what was left uncovered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coverage {
    pub verdict: Verdict,
    /// Some unguarded arm provably handles `null`.
    pub null_handled: bool,
    pub subject_is_nullable: bool,
    /// Variants no arm proved, in declaration order.
    pub unresolved: Vec<VariantId>,
}

impl Coverage {
    pub fn is_exhaustive(&self) -> bool {
        self.verdict == Verdict::Exhaustive
    }

    /// The subject can be `null` and nothing proved that case handled.
    pub fn missing_null(&self) -> bool {
        self.subject_is_nullable && !self.null_handled
    }

    /// Describe the gaps as pattern text, e.g. `["Triangle", "null"]`.
    ///
    /// Sorted and deduplicated for stable diagnostics.
    pub fn missing_patterns(&self, union: &UnionType, interner: &StringInterner) -> Vec<String> {
        let mut missing: Vec<String> = self
            .unresolved
            .iter()
            .filter_map(|&v| union.variant_name(v))
            .map(|name| interner.lookup(name).to_string())
            .collect();
        if self.missing_null() {
            missing.push("null".to_string());
        }
        missing.sort();
        missing.dedup();
        missing
    }
}

/// Proof state for one match construct.
#[derive(Clone, Debug)]
pub struct Prover<'u> {
    union: &'u UnionType,
    unresolved: FxHashSet<VariantId>,
    null_handled: bool,
}

impl<'u> Prover<'u> {
    /// Fresh state: every variant unresolved, `null` unhandled.
    pub fn new(union: &'u UnionType) -> Self {
        Prover {
            union,
            unresolved: union.variant_ids().collect(),
            null_handled: false,
        }
    }

    /// Apply one arm's contribution. Guarded arms contribute nothing.
    pub fn apply_arm(&mut self, arm: &Arm) {
        if arm.has_guard {
            tracing::trace!(index = arm.index, span = ?arm.span, "guarded arm skipped");
            return;
        }
        self.apply(&arm.pattern);
    }

    /// Apply one pattern's contribution.
    pub fn apply(&mut self, pattern: &Pattern) {
        ensure_sufficient_stack(|| match pattern {
            Pattern::Wildcard => {
                self.null_handled = true;
                self.unresolved.clear();
            }
            Pattern::NullLiteral => self.null_handled = true,
            Pattern::VariantTest(variant) => {
                self.unresolved.remove(variant);
            }
            Pattern::Positional {
                variant,
                subpatterns,
            } => {
                if subpatterns.iter().all(Pattern::is_total) {
                    self.unresolved.remove(variant);
                }
            }
            Pattern::Or(alternatives) => {
                for alt in alternatives {
                    self.apply(alt);
                }
            }
            Pattern::PropertyTest { .. } | Pattern::Refinement | Pattern::Unprovable => {}
        });
    }

    /// Combine with a state built from a disjoint slice of the same arms.
    ///
    /// The result is what a single prover over both slices would reach.
    pub fn merge(&mut self, other: &Prover<'_>) {
        debug_assert_eq!(self.union.ty(), other.union.ty());
        self.null_handled |= other.null_handled;
        self.unresolved.retain(|v| other.unresolved.contains(v));
    }

    pub fn null_handled(&self) -> bool {
        self.null_handled
    }

    /// Number of variants still unresolved.
    pub fn remaining(&self) -> usize {
        self.unresolved.len()
    }

    /// Produce the verdict.
    pub fn finish(self, subject_is_nullable: bool) -> Coverage {
        let verdict = if subject_is_nullable && !self.null_handled {
            Verdict::NotExhaustive
        } else if self.unresolved.is_empty() {
            Verdict::Exhaustive
        } else {
            Verdict::NotExhaustive
        };

        let unresolved = self
            .union
            .variant_ids()
            .filter(|v| self.unresolved.contains(v))
            .collect();

        Coverage {
            verdict,
            null_handled: self.null_handled,
            subject_is_nullable,
            unresolved,
        }
    }
}

/// Prove whether `construct` covers every value of `union`.
///
/// Never fails: shapes the classifier could not decide carry no weight.
#[tracing::instrument(level = "debug", skip_all, fields(
    union = %union.ty(),
    arms = construct.arms.len(),
    nullable = construct.subject_is_nullable,
))]
pub fn prove(union: &UnionType, construct: &MatchConstruct) -> Coverage {
    let mut prover = Prover::new(union);
    for arm in &construct.arms {
        prover.apply_arm(arm);
    }
    let coverage = prover.finish(construct.subject_is_nullable);
    tracing::debug!(
        verdict = ?coverage.verdict,
        null_handled = coverage.null_handled,
        unresolved = coverage.unresolved.len(),
        "coverage proof complete"
    );
    coverage
}
