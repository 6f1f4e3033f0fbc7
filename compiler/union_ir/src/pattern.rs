//! The host's raw pattern grammar.
//!
//! Host adapters translate their own syntax trees into `HostPattern` before
//! handing a match arm to the coverage engine. The grammar mirrors what a
//! C#-style pattern language can express: type tests, declarations, discards,
//! constants, relational tests, recursive (positional / property) patterns,
//! combinators, and an `Other` bucket for anything the adapter does not map.
//!
//! Nothing here carries meaning on its own; classification happens in
//! `union_coverage::classify`.

use crate::{Name, Span, TypeId};

/// A constant appearing in a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstValue {
    Null,
    Bool(bool),
    Int(i64),
    /// Stored as bits for `Eq`/`Hash`.
    Float(u64),
    Char(char),
    Str(Name),
}

impl ConstValue {
    #[inline]
    pub fn float(value: f64) -> Self {
        ConstValue::Float(value.to_bits())
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        matches!(self, ConstValue::Null)
    }
}

/// Operator of a relational pattern (`< 5`, `>= 0`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelationalOp {
    Lt,
    LtEq,
    Gt,
    GtEq,
}

/// One `name: pattern` entry of a property sub-pattern list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyPattern {
    pub field: Name,
    pub pattern: HostPattern,
}

/// A recursive pattern: optional type, optional positional list, optional
/// property list, optional designation.
///
/// `Rectangle(var w, 5)` has a type and a positional list;
/// `Rectangle { Width: 5 }` has a type and a property list;
/// `Rectangle(var w, _) { Height: > 0 } r` has all four.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecursivePattern {
    pub ty: Option<TypeId>,
    pub positional: Option<Vec<HostPattern>>,
    pub properties: Option<Vec<PropertyPattern>>,
    pub designation: Option<Name>,
}

/// A raw pattern tree in the host's grammar.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostPattern {
    /// `_`
    Discard,
    /// A bare identifier or `var x`: binds without any constraint.
    Binding(Name),
    /// A bare type pattern: `Circle`.
    Type(TypeId),
    /// A declaration pattern: `Circle c`.
    Declaration { ty: TypeId, name: Name },
    /// A constant pattern, including `null`.
    Constant(ConstValue),
    /// A relational pattern: `> 0`.
    Relational { op: RelationalOp, value: ConstValue },
    /// Positional and/or property deconstruction.
    Recursive(RecursivePattern),
    /// `a or b or ...`
    Or(Vec<HostPattern>),
    /// `a and b and ...`
    And(Vec<HostPattern>),
    /// `not a`
    Not(Box<HostPattern>),
    /// `[a, b, ..]`
    List(Vec<HostPattern>),
    /// Anything the host adapter does not translate (casts, slices, ...).
    Other,
}

impl HostPattern {
    /// `null`
    pub const NULL: HostPattern = HostPattern::Constant(ConstValue::Null);

    /// `Ty(p0, p1, ...)`
    pub fn positional(ty: TypeId, subpatterns: Vec<HostPattern>) -> Self {
        HostPattern::Recursive(RecursivePattern {
            ty: Some(ty),
            positional: Some(subpatterns),
            properties: None,
            designation: None,
        })
    }

    /// `Ty { f0: p0, f1: p1, ... }`
    pub fn property(ty: TypeId, properties: Vec<(Name, HostPattern)>) -> Self {
        HostPattern::Recursive(RecursivePattern {
            ty: Some(ty),
            positional: None,
            properties: Some(
                properties
                    .into_iter()
                    .map(|(field, pattern)| PropertyPattern { field, pattern })
                    .collect(),
            ),
            designation: None,
        })
    }

    /// A literal constant.
    pub fn constant(value: ConstValue) -> Self {
        HostPattern::Constant(value)
    }
}

/// One arm of a match construct as the host reports it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostArm {
    pub pattern: HostPattern,
    /// The arm carries a `when`/`if` guard.
    pub has_guard: bool,
    pub span: Span,
}

impl HostArm {
    /// An unguarded arm with no source location.
    pub fn new(pattern: HostPattern) -> Self {
        HostArm {
            pattern,
            has_guard: false,
            span: Span::DUMMY,
        }
    }

    /// Mark this arm as guarded.
    #[must_use]
    pub fn guarded(mut self) -> Self {
        self.has_guard = true;
        self
    }

    /// Attach a source span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}
