//! Shared fixtures for unit tests.
//!
//! `Shapes` registers the union used throughout the tests:
//!
//! ```text
//! union Shape {
//!     Circle(Radius: float)
//!     Rectangle(Width: float, Height: float)
//!     Triangle(Base: float, Height: float, Label: str)
//! }
//! ```

use rustc_hash::FxHashMap;
use union_diagnostic::Diagnostic;
use union_ir::{
    FieldDecl, HostArm, HostPattern, Span, StringInterner, TypeId, UnionDecl, VariantDecl,
    VariantId,
};

use crate::host::{MatchSite, MatchSource, TypeMetadata};
use crate::registry::UnionRegistry;
use crate::variants::UnionType;

pub(crate) fn user_type(raw: u32) -> TypeId {
    TypeId::from_raw(TypeId::FIRST_USER + raw)
}

pub(crate) struct Shapes {
    pub interner: StringInterner,
    pub registry: UnionRegistry,
    pub shape: TypeId,
    pub circle: TypeId,
    pub rectangle: TypeId,
    pub triangle: TypeId,
}

impl Shapes {
    pub fn new() -> Self {
        let interner = StringInterner::new();
        let shape = user_type(0);
        let circle = user_type(1);
        let rectangle = user_type(2);
        let triangle = user_type(3);

        let field = |name: &str, ty| FieldDecl::new(interner.intern(name), ty);
        let decl = UnionDecl::new(interner.intern("Shape"), shape)
            .with_variant(VariantDecl::record(
                interner.intern("Circle"),
                circle,
                vec![field("Radius", TypeId::FLOAT)],
            ))
            .with_variant(VariantDecl::record(
                interner.intern("Rectangle"),
                rectangle,
                vec![field("Width", TypeId::FLOAT), field("Height", TypeId::FLOAT)],
            ))
            .with_variant(VariantDecl::record(
                interner.intern("Triangle"),
                triangle,
                vec![
                    field("Base", TypeId::FLOAT),
                    field("Height", TypeId::FLOAT),
                    field("Label", TypeId::STR),
                ],
            ));

        let registry = UnionRegistry::from_decls([&decl])
            .unwrap_or_else(|e| panic!("fixture must register: {e}"));

        Shapes {
            interner,
            registry,
            shape,
            circle,
            rectangle,
            triangle,
        }
    }

    pub fn union(&self) -> UnionType {
        self.registry
            .resolve_union(self.shape)
            .unwrap_or_else(|e| panic!("fixture union must resolve: {e}"))
    }

    pub fn variant(&self, ty: TypeId) -> VariantId {
        VariantId::new(ty)
    }

    pub fn binding(&self, name: &str) -> HostPattern {
        HostPattern::Binding(self.interner.intern(name))
    }
}

/// A `MatchSource` keyed by the diagnostic's primary span.
#[derive(Default)]
pub(crate) struct SiteTable {
    sites: FxHashMap<Span, MatchSite>,
}

impl SiteTable {
    pub fn insert(
        &mut self,
        span: Span,
        subject_type: TypeId,
        nullable: bool,
        arms: Vec<HostPattern>,
    ) {
        self.sites.insert(
            span,
            MatchSite::new(subject_type, nullable, arms.into_iter().map(HostArm::new).collect()),
        );
    }

    pub fn insert_site(&mut self, span: Span, site: MatchSite) {
        self.sites.insert(span, site);
    }
}

impl MatchSource for SiteTable {
    fn match_site(&self, diagnostic: &Diagnostic) -> Option<MatchSite> {
        self.sites.get(&diagnostic.primary_span()?).cloned()
    }
}
