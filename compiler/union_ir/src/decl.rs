//! Union declarations.
//!
//! What a generator front end collects from an annotated union declaration:
//! the union's own type, and per variant its fields and the positional
//! deconstructions it offers. The coverage engine only ever sees this data
//! through `union_coverage::TypeMetadata`.

use crate::{Name, TypeId};

/// A named field of a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldDecl {
    pub name: Name,
    pub ty: TypeId,
}

impl FieldDecl {
    pub const fn new(name: Name, ty: TypeId) -> Self {
        FieldDecl { name, ty }
    }
}

/// One variant of a union declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VariantDecl {
    pub name: Name,
    pub ty: TypeId,
    /// Named fields in declaration order. Carried for hosts that render or
    /// adapt property patterns; coverage reads `deconstructors` only.
    pub fields: Vec<FieldDecl>,
    /// Positional deconstruction overloads, each an ordered list of declared
    /// field types. At most one overload per arity is meaningful.
    pub deconstructors: Vec<Vec<TypeId>>,
}

impl VariantDecl {
    /// A variant without fields or deconstruction.
    pub fn unit(name: Name, ty: TypeId) -> Self {
        VariantDecl {
            name,
            ty,
            fields: Vec::new(),
            deconstructors: Vec::new(),
        }
    }

    /// A record-style variant: its primary fields double as its single
    /// positional deconstruction.
    pub fn record(name: Name, ty: TypeId, fields: Vec<FieldDecl>) -> Self {
        let deconstructors = if fields.is_empty() {
            Vec::new()
        } else {
            vec![fields.iter().map(|f| f.ty).collect()]
        };
        VariantDecl {
            name,
            ty,
            fields,
            deconstructors,
        }
    }

    /// Add another deconstruction overload.
    #[must_use]
    pub fn with_deconstructor(mut self, types: Vec<TypeId>) -> Self {
        self.deconstructors.push(types);
        self
    }

    /// The overload of the given arity, if declared.
    pub fn deconstructor(&self, arity: usize) -> Option<&[TypeId]> {
        self.deconstructors
            .iter()
            .find(|d| d.len() == arity)
            .map(Vec::as_slice)
    }
}

/// A closed union declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnionDecl {
    pub name: Name,
    pub ty: TypeId,
    pub variants: Vec<VariantDecl>,
}

impl UnionDecl {
    pub fn new(name: Name, ty: TypeId) -> Self {
        UnionDecl {
            name,
            ty,
            variants: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_variant(mut self, variant: VariantDecl) -> Self {
        self.variants.push(variant);
        self
    }
}
