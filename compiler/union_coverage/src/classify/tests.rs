use super::*;
use crate::prover::Prover;
use crate::test_helpers::{user_type, Shapes};
use pretty_assertions::assert_eq;
use union_ir::{ConstValue, PropertyPattern, RelationalOp, Span, TypeId};

fn classify_one(shapes: &Shapes, pattern: &HostPattern) -> Pattern {
    let union = shapes.union();
    let mut ctx = ProofContext::new(&shapes.registry, &union);
    classify(&mut ctx, pattern)
}

// -- Top-level shapes --

#[test]
fn discard_and_binding_are_wildcards() {
    let shapes = Shapes::new();
    assert_eq!(classify_one(&shapes, &HostPattern::Discard), Pattern::Wildcard);
    assert_eq!(classify_one(&shapes, &shapes.binding("shape")), Pattern::Wildcard);
}

#[test]
fn null_constant_is_null_literal() {
    let shapes = Shapes::new();
    assert_eq!(classify_one(&shapes, &HostPattern::NULL), Pattern::NullLiteral);
}

#[test]
fn other_constants_are_refinements() {
    let shapes = Shapes::new();
    assert_eq!(
        classify_one(&shapes, &HostPattern::constant(ConstValue::Int(5))),
        Pattern::Refinement
    );
    assert_eq!(
        classify_one(
            &shapes,
            &HostPattern::Relational {
                op: RelationalOp::Gt,
                value: ConstValue::Int(0)
            }
        ),
        Pattern::Refinement
    );
}

#[test]
fn type_and_declaration_of_variant_are_variant_tests() {
    let shapes = Shapes::new();
    let circle = shapes.variant(shapes.circle);

    assert_eq!(
        classify_one(&shapes, &HostPattern::Type(shapes.circle)),
        Pattern::VariantTest(circle)
    );
    assert_eq!(
        classify_one(
            &shapes,
            &HostPattern::Declaration {
                ty: shapes.circle,
                name: shapes.interner.intern("c"),
            }
        ),
        Pattern::VariantTest(circle)
    );
}

#[test]
fn type_outside_union_is_unprovable() {
    let shapes = Shapes::new();
    assert_eq!(
        classify_one(&shapes, &HostPattern::Type(user_type(42))),
        Pattern::Unprovable
    );
    // The union's own type is not a variant.
    assert_eq!(
        classify_one(&shapes, &HostPattern::Type(shapes.shape)),
        Pattern::Unprovable
    );
}

#[test]
fn combinators_and_other_are_unprovable() {
    let shapes = Shapes::new();
    let circle = HostPattern::Type(shapes.circle);

    for pattern in [
        HostPattern::And(vec![circle.clone(), HostPattern::Discard]),
        HostPattern::Not(Box::new(HostPattern::NULL)),
        HostPattern::List(vec![HostPattern::Discard]),
        HostPattern::Other,
    ] {
        assert_eq!(classify_one(&shapes, &pattern), Pattern::Unprovable, "{pattern:?}");
    }
}

#[test]
fn disjunction_classifies_each_alternative() {
    let shapes = Shapes::new();
    let pattern = HostPattern::Or(vec![
        HostPattern::Type(shapes.circle),
        HostPattern::NULL,
        HostPattern::Other,
    ]);

    assert_eq!(
        classify_one(&shapes, &pattern),
        Pattern::Or(vec![
            Pattern::VariantTest(shapes.variant(shapes.circle)),
            Pattern::NullLiteral,
            Pattern::Unprovable,
        ])
    );
}

// -- Recursive patterns --

#[test]
fn positional_with_matching_arity() {
    let shapes = Shapes::new();
    let pattern = HostPattern::positional(
        shapes.rectangle,
        vec![HostPattern::Discard, shapes.binding("h")],
    );

    assert_eq!(
        classify_one(&shapes, &pattern),
        Pattern::Positional {
            variant: shapes.variant(shapes.rectangle),
            subpatterns: vec![Pattern::Wildcard, Pattern::Wildcard],
        }
    );
}

#[test]
fn positional_without_matching_arity_is_unprovable() {
    let shapes = Shapes::new();
    let pattern = HostPattern::positional(shapes.rectangle, vec![HostPattern::Discard]);
    assert_eq!(classify_one(&shapes, &pattern), Pattern::Unprovable);
}

#[test]
fn positional_on_non_variant_is_unprovable() {
    let shapes = Shapes::new();
    let pattern = HostPattern::positional(shapes.shape, vec![HostPattern::Discard]);
    assert_eq!(classify_one(&shapes, &pattern), Pattern::Unprovable);

    let untyped = HostPattern::Recursive(RecursivePattern {
        ty: None,
        positional: Some(vec![HostPattern::Discard]),
        properties: None,
        designation: None,
    });
    assert_eq!(classify_one(&shapes, &untyped), Pattern::Unprovable);
}

#[test]
fn property_pattern_is_property_test() {
    let shapes = Shapes::new();
    let width = shapes.interner.intern("Width");
    let pattern = HostPattern::property(shapes.rectangle, vec![(width, HostPattern::Discard)]);

    assert_eq!(
        classify_one(&shapes, &pattern),
        Pattern::PropertyTest {
            variant: shapes.variant(shapes.rectangle),
            properties: vec![(width, Pattern::Wildcard)],
        }
    );
}

#[test]
fn positional_and_property_together_are_unprovable() {
    let shapes = Shapes::new();
    let pattern = HostPattern::Recursive(RecursivePattern {
        ty: Some(shapes.circle),
        positional: Some(vec![HostPattern::Discard]),
        properties: Some(vec![PropertyPattern {
            field: shapes.interner.intern("Radius"),
            pattern: HostPattern::Discard,
        }]),
        designation: None,
    });
    assert_eq!(classify_one(&shapes, &pattern), Pattern::Unprovable);
}

#[test]
fn recursive_with_designation_only_is_variant_test() {
    let shapes = Shapes::new();
    let pattern = HostPattern::Recursive(RecursivePattern {
        ty: Some(shapes.triangle),
        positional: None,
        properties: None,
        designation: Some(shapes.interner.intern("t")),
    });
    assert_eq!(
        classify_one(&shapes, &pattern),
        Pattern::VariantTest(shapes.variant(shapes.triangle))
    );
}

// -- Field classification --

#[test]
fn field_declaration_of_exact_type_is_total() {
    let field = FieldSignature::new(0, TypeId::FLOAT);
    let pattern = HostPattern::Declaration {
        ty: TypeId::FLOAT,
        name: union_ir::Name::EMPTY,
    };
    assert_eq!(classify_field(&pattern, field), Pattern::Wildcard);
    assert_eq!(classify_field(&HostPattern::Type(TypeId::FLOAT), field), Pattern::Wildcard);
}

#[test]
fn field_declaration_of_other_type_gets_no_credit() {
    let field = FieldSignature::new(0, TypeId::OBJECT);
    let narrower = HostPattern::Declaration {
        ty: TypeId::STR,
        name: union_ir::Name::EMPTY,
    };
    assert_eq!(classify_field(&narrower, field), Pattern::Unprovable);
}

#[test]
fn field_constants_are_refinements() {
    let field = FieldSignature::new(1, TypeId::INT);
    assert_eq!(
        classify_field(&HostPattern::constant(ConstValue::Int(5)), field),
        Pattern::Refinement
    );
    assert_eq!(classify_field(&HostPattern::NULL, field), Pattern::Refinement);
    assert_eq!(
        classify_field(
            &HostPattern::Relational {
                op: RelationalOp::LtEq,
                value: ConstValue::float(0.0)
            },
            field
        ),
        Pattern::Refinement
    );
}

#[test]
fn nested_recursive_field_is_unprovable() {
    let shapes = Shapes::new();
    let field = FieldSignature::new(0, shapes.shape);
    let nested = HostPattern::positional(shapes.circle, vec![HostPattern::Discard]);
    assert_eq!(classify_field(&nested, field), Pattern::Unprovable);
}

#[test]
fn positional_keeps_refined_fields() {
    let shapes = Shapes::new();
    let pattern = HostPattern::positional(
        shapes.rectangle,
        vec![HostPattern::constant(ConstValue::float(5.0)), HostPattern::Discard],
    );

    let classified = classify_one(&shapes, &pattern);
    assert_eq!(
        classified,
        Pattern::Positional {
            variant: shapes.variant(shapes.rectangle),
            subpatterns: vec![Pattern::Refinement, Pattern::Wildcard],
        }
    );
    assert!(classified.is_inert());
}

#[test]
fn positional_fields_use_their_own_declared_types() {
    let shapes = Shapes::new();
    // Triangle(float Base, float Height, str Label)
    let typed = |ty| HostPattern::Declaration {
        ty,
        name: union_ir::Name::EMPTY,
    };
    let exact = HostPattern::positional(
        shapes.triangle,
        vec![typed(TypeId::FLOAT), typed(TypeId::FLOAT), typed(TypeId::STR)],
    );
    let swapped = HostPattern::positional(
        shapes.triangle,
        vec![typed(TypeId::FLOAT), typed(TypeId::STR), typed(TypeId::FLOAT)],
    );

    assert!(!classify_one(&shapes, &exact).is_inert());
    assert_eq!(
        classify_one(&shapes, &swapped),
        Pattern::Positional {
            variant: shapes.variant(shapes.triangle),
            subpatterns: vec![Pattern::Wildcard, Pattern::Unprovable, Pattern::Unprovable],
        }
    );
}

#[test]
fn field_disjunction_with_total_alternative_resolves_variant() {
    // Circle(5.0 or _)
    let shapes = Shapes::new();
    let pattern = HostPattern::positional(
        shapes.circle,
        vec![HostPattern::Or(vec![
            HostPattern::constant(ConstValue::float(5.0)),
            HostPattern::Discard,
        ])],
    );

    let classified = classify_one(&shapes, &pattern);
    assert_eq!(
        classified,
        Pattern::Positional {
            variant: shapes.variant(shapes.circle),
            subpatterns: vec![Pattern::Or(vec![Pattern::Refinement, Pattern::Wildcard])],
        }
    );

    let union = shapes.union();
    let mut prover = Prover::new(&union);
    prover.apply(&classified);
    assert_eq!(prover.remaining(), 2);
}

#[test]
fn field_disjunction_of_refinements_does_not_resolve() {
    // Circle(5.0 or > 0)
    let shapes = Shapes::new();
    let pattern = HostPattern::positional(
        shapes.circle,
        vec![HostPattern::Or(vec![
            HostPattern::constant(ConstValue::float(5.0)),
            HostPattern::Relational {
                op: RelationalOp::Gt,
                value: ConstValue::float(0.0),
            },
        ])],
    );

    let classified = classify_one(&shapes, &pattern);
    assert!(classified.is_inert());

    let union = shapes.union();
    let mut prover = Prover::new(&union);
    prover.apply(&classified);
    assert_eq!(prover.remaining(), 3);
}

// -- Arms --

#[test]
fn construct_keeps_guard_span_and_index() {
    let shapes = Shapes::new();
    let union = shapes.union();
    let mut ctx = ProofContext::new(&shapes.registry, &union);
    let arms = vec![
        HostArm::new(HostPattern::Type(shapes.circle))
            .guarded()
            .with_span(Span::new(10, 20)),
        HostArm::new(HostPattern::Discard).with_span(Span::new(21, 30)),
    ];

    let construct = classify_construct(&mut ctx, true, &arms);
    assert!(construct.subject_is_nullable);
    assert_eq!(construct.arms.len(), 2);
    assert!(construct.arms[0].has_guard);
    assert_eq!(construct.arms[0].span, Span::new(10, 20));
    assert_eq!(construct.arms[1].pattern, Pattern::Wildcard);
    assert!(!construct.arms[1].has_guard);
    assert_eq!(
        construct.arms.iter().map(|arm| arm.index).collect::<Vec<_>>(),
        vec![0, 1]
    );
}

#[test]
fn deeply_nested_disjunction() {
    let shapes = Shapes::new();
    let mut pattern = HostPattern::Type(shapes.circle);
    for _ in 0..2_000 {
        pattern = HostPattern::Or(vec![HostPattern::Other, pattern]);
    }

    let mut classified = &classify_one(&shapes, &pattern);
    let mut depth = 0;
    while let Pattern::Or(alternatives) = classified {
        classified = &alternatives[1];
        depth += 1;
    }
    assert_eq!(depth, 2_000);
    assert_eq!(classified, &Pattern::VariantTest(shapes.variant(shapes.circle)));
}
