//! Normalized pattern shapes understood by the prover.
//!
//! The host's open-ended grammar (`union_ir::HostPattern`) is reduced to this
//! closed set by `classify`. Every shape outside the structurally decidable
//! grammar ends up as `Refinement` or `Unprovable`, both of which prove
//! nothing.

use union_ir::{Name, Span, VariantId};

/// A classified pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Binds or discards without restriction; matches every value including `null`.
    Wildcard,
    /// Matches only `null`.
    NullLiteral,
    /// Matches any instance of the variant.
    VariantTest(VariantId),
    /// Matches instances of `variant` whose deconstructed fields satisfy
    /// `subpatterns` pairwise. Only built when the variant offers a
    /// deconstruction of exactly `subpatterns.len()` fields.
    Positional {
        variant: VariantId,
        subpatterns: Vec<Pattern>,
    },
    /// Named-field constraints on a variant. Never proves coverage.
    PropertyTest {
        variant: VariantId,
        properties: Vec<(Name, Pattern)>,
    },
    /// Restricts a value to a strict subset of its type (constant, relational).
    Refinement,
    /// Matches if any alternative matches.
    Or(Vec<Pattern>),
    /// Outside the decidable grammar. Never proves coverage.
    Unprovable,
}

impl Pattern {
    /// Check if this pattern, used as a positional sub-pattern, matches every
    /// value of the field it was classified against.
    ///
    /// Field classification already maps an exact-type declaration to
    /// `Wildcard`, so only `Wildcard` (possibly inside a disjunction) is total.
    pub fn is_total(&self) -> bool {
        match self {
            Pattern::Wildcard => true,
            Pattern::Or(alternatives) => alternatives.iter().any(Pattern::is_total),
            _ => false,
        }
    }

    /// Check if this pattern can never contribute to a proof.
    pub fn is_inert(&self) -> bool {
        match self {
            Pattern::PropertyTest { .. } | Pattern::Refinement | Pattern::Unprovable => true,
            Pattern::Positional { subpatterns, .. } => !subpatterns.iter().all(Pattern::is_total),
            Pattern::Or(alternatives) => alternatives.iter().all(Pattern::is_inert),
            Pattern::Wildcard | Pattern::NullLiteral | Pattern::VariantTest(_) => false,
        }
    }
}

/// A classified match arm.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Arm {
    pub pattern: Pattern,
    /// A guarded arm contributes nothing to the proof.
    pub has_guard: bool,
    /// Position of the arm in its match construct.
    pub index: usize,
    pub span: Span,
}

impl Arm {
    /// An unguarded first arm without source location.
    pub fn new(pattern: Pattern) -> Self {
        Arm {
            pattern,
            has_guard: false,
            index: 0,
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn guarded(mut self) -> Self {
        self.has_guard = true;
        self
    }

    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }
}

/// One match construct under analysis.
///
/// Arm order is kept for reporting only; the proof treats the arms as an
/// unordered collection of contributions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct MatchConstruct {
    pub subject_is_nullable: bool,
    pub arms: Vec<Arm>,
}

impl MatchConstruct {
    pub fn new(subject_is_nullable: bool, arms: Vec<Arm>) -> Self {
        MatchConstruct {
            subject_is_nullable,
            arms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use union_ir::TypeId;

    fn variant(raw: u32) -> VariantId {
        VariantId::new(TypeId::from_raw(TypeId::FIRST_USER + raw))
    }

    #[test]
    fn totality() {
        assert!(Pattern::Wildcard.is_total());
        assert!(Pattern::Or(vec![Pattern::Refinement, Pattern::Wildcard]).is_total());
        assert!(!Pattern::Or(vec![Pattern::Refinement, Pattern::NullLiteral]).is_total());
        assert!(!Pattern::Refinement.is_total());
        assert!(!Pattern::VariantTest(variant(1)).is_total());
    }

    #[test]
    fn arm_builders() {
        let arm = Arm::new(Pattern::Wildcard).guarded().with_index(3);
        assert!(arm.has_guard);
        assert_eq!(arm.index, 3);
        assert_eq!(Arm::new(Pattern::Wildcard).index, 0);
    }

    #[test]
    fn inert_shapes() {
        assert!(Pattern::Unprovable.is_inert());
        assert!(Pattern::Refinement.is_inert());
        assert!(Pattern::PropertyTest {
            variant: variant(1),
            properties: vec![],
        }
        .is_inert());
        assert!(Pattern::Positional {
            variant: variant(1),
            subpatterns: vec![Pattern::Refinement, Pattern::Wildcard],
        }
        .is_inert());
        assert!(!Pattern::Positional {
            variant: variant(1),
            subpatterns: vec![Pattern::Wildcard, Pattern::Wildcard],
        }
        .is_inert());
        assert!(!Pattern::Or(vec![Pattern::Unprovable, Pattern::NullLiteral]).is_inert());
    }
}
