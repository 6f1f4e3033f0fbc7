//! Suppression descriptors and the sink that receives suppressions.
//!
//! A suppression silences one specific reported occurrence. It never edits
//! the diagnostic; the host decides how a suppressed occurrence is rendered
//! (usually not at all).

use union_ir::Span;

use crate::{Diagnostic, ErrorCode};

/// Describes one kind of suppression: which code it silences and why.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SuppressionDescriptor {
    /// Identifier of the suppression itself, e.g. `S3001`.
    pub id: String,
    /// The diagnostic code this descriptor may silence.
    pub suppressed: ErrorCode,
    /// Human-readable justification shown by hosts that list suppressions.
    pub justification: String,
}

impl SuppressionDescriptor {
    pub fn new(
        id: impl Into<String>,
        suppressed: ErrorCode,
        justification: impl Into<String>,
    ) -> Self {
        SuppressionDescriptor {
            id: id.into(),
            suppressed,
            justification: justification.into(),
        }
    }

    /// Silences `W3001` once every union variant is proven handled.
    pub fn all_variants_handled() -> Self {
        Self::new(
            "S3001",
            ErrorCode::W3001,
            "every variant of the closed union is handled by the match arms",
        )
    }

    /// Silences `W3002` once `null` and every variant are proven handled.
    pub fn null_and_variants_handled() -> Self {
        Self::new(
            "S3002",
            ErrorCode::W3002,
            "`null` and every variant of the closed union are handled by the match arms",
        )
    }
}

/// A recorded suppression of one occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Suppression {
    pub descriptor_id: String,
    pub code: ErrorCode,
    /// Primary span of the suppressed occurrence.
    pub span: Option<Span>,
}

/// Receiver of suppression requests.
///
/// Invoked at most once per reported occurrence, and only when the match
/// was proven exhaustive.
pub trait DiagnosticSink {
    fn suppress(&mut self, diagnostic: &Diagnostic, descriptor: &SuppressionDescriptor);
}

/// In-memory sink recording every suppression in arrival order.
#[derive(Clone, Debug, Default)]
pub struct SuppressionLog {
    entries: Vec<Suppression>,
}

impl SuppressionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Suppression> {
        self.entries.iter()
    }

    /// Check if the occurrence at `span` was suppressed.
    pub fn is_suppressed(&self, span: Span) -> bool {
        self.entries.iter().any(|s| s.span == Some(span))
    }

    /// Take the recorded suppressions, leaving the log empty.
    pub fn take(&mut self) -> Vec<Suppression> {
        std::mem::take(&mut self.entries)
    }
}

impl DiagnosticSink for SuppressionLog {
    fn suppress(&mut self, diagnostic: &Diagnostic, descriptor: &SuppressionDescriptor) {
        self.entries.push(Suppression {
            descriptor_id: descriptor.id.clone(),
            code: diagnostic.code,
            span: diagnostic.primary_span(),
        });
    }
}
