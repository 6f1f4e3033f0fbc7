//! Pattern Classifier: host pattern trees to normalized [`Pattern`]s.
//!
//! Rules, in priority order:
//!
//! 1. Unconstrained binding or discard → `Wildcard`
//! 2. The `null` constant → `NullLiteral`
//! 3. A type naming exactly one variant, no further structure → `VariantTest`
//! 4. Variant + positional list → `Positional` if the variant offers a
//!    deconstruction of that arity, `Unprovable` otherwise
//! 5. Variant + named-field list → `PropertyTest`
//! 6. Positional and named-field lists on the same pattern → `Unprovable`
//! 7. Disjunction → `Or` over the classified alternatives
//! 8. Anything else → `Unprovable` (constants and relational tests → `Refinement`)
//!
//! Property lists are never credited: they would need per-field totality
//! plus knowledge that the variant has no other observable fields.
//!
//! Positional sub-patterns are classified against the field's declared type.
//! Only a binding, a discard, or a declaration of *exactly* the field's type
//! counts as total; narrower types get no credit.

use union_ir::{HostArm, HostPattern, RecursivePattern};

use crate::pattern::{Arm, MatchConstruct, Pattern};
use crate::stack::ensure_sufficient_stack;
use crate::variants::{FieldSignature, ProofContext};

/// Classify every arm of a host match construct.
pub fn classify_construct(
    ctx: &mut ProofContext<'_>,
    subject_is_nullable: bool,
    arms: &[HostArm],
) -> MatchConstruct {
    MatchConstruct {
        subject_is_nullable,
        arms: arms
            .iter()
            .enumerate()
            .map(|(index, arm)| classify_arm(ctx, index, arm))
            .collect(),
    }
}

/// Classify the arm at position `index`. Guarded arms are classified too,
/// so they can be reported, but the prover ignores them.
pub fn classify_arm(ctx: &mut ProofContext<'_>, index: usize, arm: &HostArm) -> Arm {
    let pattern = classify(ctx, &arm.pattern);
    tracing::trace!(
        index,
        span = ?arm.span,
        guarded = arm.has_guard,
        inert = pattern.is_inert(),
        ?pattern,
        "classified arm"
    );
    Arm {
        pattern,
        has_guard: arm.has_guard,
        index,
        span: arm.span,
    }
}

/// Classify a top-level pattern against the union under analysis.
pub fn classify(ctx: &mut ProofContext<'_>, pattern: &HostPattern) -> Pattern {
    ensure_sufficient_stack(|| match pattern {
        HostPattern::Discard | HostPattern::Binding(_) => Pattern::Wildcard,
        HostPattern::Constant(value) if value.is_null() => Pattern::NullLiteral,
        HostPattern::Constant(_) | HostPattern::Relational { .. } => Pattern::Refinement,
        HostPattern::Type(ty) | HostPattern::Declaration { ty, .. } => ctx
            .variant_of(*ty)
            .map_or(Pattern::Unprovable, Pattern::VariantTest),
        HostPattern::Recursive(recursive) => classify_recursive(ctx, recursive),
        HostPattern::Or(alternatives) => Pattern::Or(
            alternatives
                .iter()
                .map(|alt| classify(ctx, alt))
                .collect(),
        ),
        HostPattern::And(_) | HostPattern::Not(_) | HostPattern::List(_) | HostPattern::Other => {
            Pattern::Unprovable
        }
    })
}

fn classify_recursive(ctx: &mut ProofContext<'_>, recursive: &RecursivePattern) -> Pattern {
    let Some(variant) = recursive.ty.and_then(|ty| ctx.variant_of(ty)) else {
        return Pattern::Unprovable;
    };

    match (&recursive.positional, &recursive.properties) {
        // `Circle c` spelled as a recursive pattern with only a designation.
        (None, None) => Pattern::VariantTest(variant),
        (Some(_), Some(_)) => Pattern::Unprovable,
        (Some(subpatterns), None) => {
            let Some(fields) = ctx.deconstruction(variant, subpatterns.len()) else {
                return Pattern::Unprovable;
            };
            Pattern::Positional {
                variant,
                subpatterns: subpatterns
                    .iter()
                    .zip(fields)
                    .map(|(sub, field)| classify_field(sub, *field))
                    .collect(),
            }
        }
        (None, Some(properties)) => Pattern::PropertyTest {
            variant,
            properties: properties
                .iter()
                .map(|p| (p.field, classify_unanchored(&p.pattern)))
                .collect(),
        },
    }
}

/// Classify a positional sub-pattern against its field's declared type.
pub fn classify_field(pattern: &HostPattern, field: FieldSignature) -> Pattern {
    ensure_sufficient_stack(|| match pattern {
        HostPattern::Discard | HostPattern::Binding(_) => Pattern::Wildcard,
        HostPattern::Type(ty) | HostPattern::Declaration { ty, .. }
            if *ty == field.declared_type =>
        {
            Pattern::Wildcard
        }
        HostPattern::Constant(_) | HostPattern::Relational { .. } => Pattern::Refinement,
        HostPattern::Or(alternatives) => Pattern::Or(
            alternatives
                .iter()
                .map(|alt| classify_field(alt, field))
                .collect(),
        ),
        _ => Pattern::Unprovable,
    })
}

/// Classify a sub-pattern with no field type to compare against.
///
/// Used for property lists, whose contents never prove anything but are kept
/// for tracing.
fn classify_unanchored(pattern: &HostPattern) -> Pattern {
    ensure_sufficient_stack(|| match pattern {
        HostPattern::Discard | HostPattern::Binding(_) => Pattern::Wildcard,
        HostPattern::Constant(_) | HostPattern::Relational { .. } => Pattern::Refinement,
        HostPattern::Or(alternatives) => {
            Pattern::Or(alternatives.iter().map(classify_unanchored).collect())
        }
        _ => Pattern::Unprovable,
    })
}

#[cfg(test)]
mod tests;
