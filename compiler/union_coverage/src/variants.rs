//! Variant Set Model.
//!
//! [`UnionType`] is the immutable description of one closed union: which
//! variants exist, in declaration order. Per-variant deconstruction
//! signatures are looked up lazily through a [`ProofContext`], which lives
//! for exactly one proof and caches what it has already asked the host.

use rustc_hash::{FxHashMap, FxHashSet};
use union_ir::{Name, TypeId, VariantId};

use crate::host::TypeMetadata;

/// One positional field of a deconstruction: its position and declared type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSignature {
    pub position: u32,
    pub declared_type: TypeId,
}

impl FieldSignature {
    pub const fn new(position: u32, declared_type: TypeId) -> Self {
        FieldSignature {
            position,
            declared_type,
        }
    }

    /// Signatures for a deconstruction with the given declared types, in order.
    pub fn list(types: &[TypeId]) -> Vec<FieldSignature> {
        (0u32..)
            .zip(types)
            .map(|(position, &ty)| FieldSignature::new(position, ty))
            .collect()
    }
}

/// A variant together with its display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnionVariant {
    pub id: VariantId,
    pub name: Name,
}

impl UnionVariant {
    pub const fn new(id: VariantId, name: Name) -> Self {
        UnionVariant { id, name }
    }
}

/// A closed sum type and its variants.
///
/// # Invariant
///
/// Variant ids are unique. Declaration order is preserved for reporting
/// but carries no meaning for the proof.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnionType {
    ty: TypeId,
    name: Name,
    variants: Vec<UnionVariant>,
}

impl UnionType {
    /// Build a union; a repeated variant id keeps its first occurrence.
    pub fn new(ty: TypeId, name: Name, variants: impl IntoIterator<Item = UnionVariant>) -> Self {
        let mut seen = FxHashSet::default();
        let variants = variants
            .into_iter()
            .filter(|v| seen.insert(v.id))
            .collect();
        UnionType { ty, name, variants }
    }

    /// The union's own declared type.
    pub fn ty(&self) -> TypeId {
        self.ty
    }

    pub fn name(&self) -> Name {
        self.name
    }

    /// Variants in declaration order.
    pub fn variants(&self) -> &[UnionVariant] {
        &self.variants
    }

    pub fn variant_ids(&self) -> impl Iterator<Item = VariantId> + '_ {
        self.variants.iter().map(|v| v.id)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn contains(&self, variant: VariantId) -> bool {
        self.variants.iter().any(|v| v.id == variant)
    }

    pub fn variant_name(&self, variant: VariantId) -> Option<Name> {
        self.variants
            .iter()
            .find(|v| v.id == variant)
            .map(|v| v.name)
    }
}

/// Per-invocation lookup context.
///
/// Created for one proof, dropped when the proof completes. Nothing it
/// caches outlives the invocation, so concurrent proofs share no state.
pub struct ProofContext<'a> {
    metadata: &'a dyn TypeMetadata,
    union: &'a UnionType,
    deconstructions: FxHashMap<(VariantId, usize), Option<Vec<FieldSignature>>>,
}

impl<'a> ProofContext<'a> {
    pub fn new(metadata: &'a dyn TypeMetadata, union: &'a UnionType) -> Self {
        ProofContext {
            metadata,
            union,
            deconstructions: FxHashMap::default(),
        }
    }

    pub fn union(&self) -> &'a UnionType {
        self.union
    }

    /// The variant of this union whose declared type is `ty`, if any.
    ///
    /// The union's own type is not a variant of itself.
    pub fn variant_of(&self, ty: TypeId) -> Option<VariantId> {
        let variant = VariantId::new(ty);
        self.union.contains(variant).then_some(variant)
    }

    /// Positional fields of `variant` for a deconstruction of `arity`.
    ///
    /// Host answers are cached per `(variant, arity)`. An answer whose length
    /// disagrees with `arity` is treated as no deconstruction at all.
    pub fn deconstruction(
        &mut self,
        variant: VariantId,
        arity: usize,
    ) -> Option<&[FieldSignature]> {
        let metadata = self.metadata;
        self.deconstructions
            .entry((variant, arity))
            .or_insert_with(|| {
                metadata
                    .deconstruction(variant, arity)
                    .filter(|fields| fields.len() == arity)
            })
            .as_deref()
    }
}
