//! In-memory type metadata built from union declarations.
//!
//! `UnionRegistry` is the reference [`TypeMetadata`] implementation: hosts
//! that already collect `UnionDecl`s (a generator front end does) can hand
//! them over instead of writing their own adapter.

use rustc_hash::FxHashMap;
use union_ir::{TypeId, UnionDecl, VariantId};

use crate::host::{MetadataError, TypeMetadata};
use crate::variants::{FieldSignature, UnionType, UnionVariant};

/// Why a declaration was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RegistryError {
    #[error("union {0} is already registered")]
    DuplicateUnion(TypeId),
    #[error("variant {variant} is declared twice in union {union}")]
    DuplicateVariant { union: TypeId, variant: TypeId },
    #[error("variant {variant} already belongs to union {owner}")]
    VariantOwned { variant: TypeId, owner: TypeId },
    #[error("union {0} lists itself as a variant")]
    SelfVariant(TypeId),
}

/// Registered unions and the deconstructions their variants offer.
#[derive(Clone, Debug, Default)]
pub struct UnionRegistry {
    unions: FxHashMap<TypeId, UnionType>,
    owners: FxHashMap<VariantId, TypeId>,
    deconstructors: FxHashMap<VariantId, Vec<Vec<FieldSignature>>>,
}

impl UnionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from declarations, stopping at the first invalid one.
    pub fn from_decls<'d>(
        decls: impl IntoIterator<Item = &'d UnionDecl>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for decl in decls {
            registry.register(decl)?;
        }
        Ok(registry)
    }

    /// Register one union. Nothing is recorded if the declaration is invalid.
    pub fn register(&mut self, decl: &UnionDecl) -> Result<(), RegistryError> {
        self.validate(decl)?;

        for variant in &decl.variants {
            let id = VariantId::new(variant.ty);
            self.owners.insert(id, decl.ty);
            self.deconstructors.insert(
                id,
                variant
                    .deconstructors
                    .iter()
                    .map(|types| FieldSignature::list(types))
                    .collect(),
            );
        }

        let union = UnionType::new(
            decl.ty,
            decl.name,
            decl.variants
                .iter()
                .map(|v| UnionVariant::new(VariantId::new(v.ty), v.name)),
        );
        tracing::debug!(union = %decl.ty, variants = union.len(), "registered union");
        self.unions.insert(decl.ty, union);
        Ok(())
    }

    fn validate(&self, decl: &UnionDecl) -> Result<(), RegistryError> {
        if self.unions.contains_key(&decl.ty) {
            return Err(RegistryError::DuplicateUnion(decl.ty));
        }

        let mut seen = rustc_hash::FxHashSet::default();
        for variant in &decl.variants {
            if variant.ty == decl.ty {
                return Err(RegistryError::SelfVariant(decl.ty));
            }
            if !seen.insert(variant.ty) {
                return Err(RegistryError::DuplicateVariant {
                    union: decl.ty,
                    variant: variant.ty,
                });
            }
            if let Some(&owner) = self.owners.get(&VariantId::new(variant.ty)) {
                return Err(RegistryError::VariantOwned {
                    variant: variant.ty,
                    owner,
                });
            }
        }
        Ok(())
    }

    /// Number of registered unions.
    pub fn len(&self) -> usize {
        self.unions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unions.is_empty()
    }

    pub fn contains_union(&self, ty: TypeId) -> bool {
        self.unions.contains_key(&ty)
    }

    /// The union `variant` belongs to, if registered.
    pub fn owner_of(&self, variant: VariantId) -> Option<TypeId> {
        self.owners.get(&variant).copied()
    }
}

impl TypeMetadata for UnionRegistry {
    fn resolve_union(&self, ty: TypeId) -> Result<UnionType, MetadataError> {
        match self.unions.get(&ty) {
            Some(union) if union.is_empty() => Err(MetadataError::NoVariants(ty)),
            Some(union) => Ok(union.clone()),
            None if self.owners.contains_key(&VariantId::new(ty)) => {
                Err(MetadataError::NotAUnion(ty))
            }
            None => Err(MetadataError::UnknownType(ty)),
        }
    }

    fn deconstruction(&self, variant: VariantId, arity: usize) -> Option<Vec<FieldSignature>> {
        self.deconstructors
            .get(&variant)?
            .iter()
            .find(|fields| fields.len() == arity)
            .cloned()
    }
}
