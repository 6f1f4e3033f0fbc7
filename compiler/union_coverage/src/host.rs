//! Interfaces the host compiler provides to the engine.
//!
//! The engine never touches the host's symbols or syntax trees directly.
//! Everything it needs arrives through two read-only query traits, and its
//! only output goes to a `DiagnosticSink`. Both traits are `Sync` so one
//! host instance can serve gates running in parallel.

use union_diagnostic::Diagnostic;
use union_ir::{HostArm, TypeId, VariantId};

use crate::variants::{FieldSignature, UnionType};

/// Why the host could not describe a type as a closed union.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum MetadataError {
    #[error("type {0} is not known to the host")]
    UnknownType(TypeId),
    #[error("type {0} is not a closed union")]
    NotAUnion(TypeId),
    #[error("union {0} exposes no variants")]
    NoVariants(TypeId),
}

/// Type metadata query.
pub trait TypeMetadata: Sync {
    /// Describe `ty` as a closed union.
    fn resolve_union(&self, ty: TypeId) -> Result<UnionType, MetadataError>;

    /// Field signatures of the positional deconstruction of `variant` with
    /// exactly `arity` fields, if the variant offers one.
    fn deconstruction(&self, variant: VariantId, arity: usize) -> Option<Vec<FieldSignature>>;
}

/// A match construct as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MatchSite {
    /// Declared type of the subject expression.
    pub subject_type: TypeId,
    /// The subject may evaluate to `null`.
    pub subject_is_nullable: bool,
    /// Arms in source order.
    pub arms: Vec<HostArm>,
}

impl MatchSite {
    pub fn new(subject_type: TypeId, subject_is_nullable: bool, arms: Vec<HostArm>) -> Self {
        MatchSite {
            subject_type,
            subject_is_nullable,
            arms,
        }
    }
}

/// Pattern AST supplier: finds the match construct a diagnostic points at.
pub trait MatchSource: Sync {
    fn match_site(&self, diagnostic: &Diagnostic) -> Option<MatchSite>;
}
