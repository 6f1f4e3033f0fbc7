//! Diagnostic Gate.
//!
//! Per reported "possibly non-exhaustive match" occurrence:
//!
//! ```text
//! Diagnostic ──► MatchSource ──► MatchSite ──► TypeMetadata ──► UnionType
//!                                    │                              │
//!                                    └──► classify ──► prove ◄──────┘
//!                                                        │
//!                                           Exhaustive ──┴──► DiagnosticSink::suppress
//! ```
//!
//! The gate holds no decision logic of its own beyond declining when the
//! occurrence is out of its remit. Declining is never an error; the host's
//! diagnostic simply stands.

use rayon::prelude::*;
use union_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode, SuppressionDescriptor};

use crate::classify::classify_construct;
use crate::host::{MatchSource, MetadataError, TypeMetadata};
use crate::prover::{prove, Coverage};
use crate::variants::ProofContext;

/// Gate configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GateConfig {
    /// One descriptor per suppressible code. Codes without a descriptor are
    /// left alone.
    pub descriptors: Vec<SuppressionDescriptor>,
}

impl Default for GateConfig {
    fn default() -> Self {
        GateConfig {
            descriptors: vec![
                SuppressionDescriptor::all_variants_handled(),
                SuppressionDescriptor::null_and_variants_handled(),
            ],
        }
    }
}

impl GateConfig {
    /// The default descriptors, restricted to `codes`.
    pub fn with_codes(codes: &[ErrorCode]) -> Self {
        let mut config = Self::default();
        config.descriptors.retain(|d| codes.contains(&d.suppressed));
        config
    }

    /// Add or replace the descriptor for its code.
    #[must_use]
    pub fn with_descriptor(mut self, descriptor: SuppressionDescriptor) -> Self {
        self.descriptors
            .retain(|d| d.suppressed != descriptor.suppressed);
        self.descriptors.push(descriptor);
        self
    }

    /// The descriptor to use for `code`, if the gate may suppress it.
    ///
    /// Only completeness codes are ever suppressible: a proof of coverage
    /// says nothing about, say, unreachable arms.
    pub fn descriptor_for(&self, code: ErrorCode) -> Option<&SuppressionDescriptor> {
        if !code.is_completeness() {
            return None;
        }
        self.descriptors.iter().find(|d| d.suppressed == code)
    }
}

/// Why the gate did not run the prover.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclineReason {
    /// The code is not configured as suppressible.
    NotSuppressible(ErrorCode),
    /// The host could not find a match construct for the occurrence.
    NoMatchSite,
    /// The subject's type is not a usable closed union.
    Metadata(MetadataError),
}

/// The gate's answer for one occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Proven exhaustive: the occurrence should be suppressed.
    Suppress,
    /// Not proven: the diagnostic stands.
    Keep(Coverage),
    /// Out of the gate's remit: the diagnostic stands.
    Decline(DeclineReason),
}

impl Decision {
    pub fn is_suppress(&self) -> bool {
        matches!(self, Decision::Suppress)
    }
}

/// Maps reported occurrences to suppress / keep decisions.
pub struct Gate<'h> {
    metadata: &'h dyn TypeMetadata,
    source: &'h dyn MatchSource,
    config: GateConfig,
}

impl<'h> Gate<'h> {
    /// A gate with the default configuration.
    pub fn new(metadata: &'h dyn TypeMetadata, source: &'h dyn MatchSource) -> Self {
        Self::with_config(metadata, source, GateConfig::default())
    }

    pub fn with_config(
        metadata: &'h dyn TypeMetadata,
        source: &'h dyn MatchSource,
        config: GateConfig,
    ) -> Self {
        Gate {
            metadata,
            source,
            config,
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Decide one occurrence without touching any sink.
    #[tracing::instrument(level = "debug", skip_all, fields(
        code = %diagnostic.code,
        span = ?diagnostic.primary_span(),
    ))]
    pub fn decide(&self, diagnostic: &Diagnostic) -> Decision {
        if self.config.descriptor_for(diagnostic.code).is_none() {
            return Decision::Decline(DeclineReason::NotSuppressible(diagnostic.code));
        }

        let Some(site) = self.source.match_site(diagnostic) else {
            tracing::debug!("no match construct at reported location");
            return Decision::Decline(DeclineReason::NoMatchSite);
        };

        let union = match self.metadata.resolve_union(site.subject_type) {
            Ok(union) if union.is_empty() => {
                let err = MetadataError::NoVariants(site.subject_type);
                tracing::debug!(%err, "declining");
                return Decision::Decline(DeclineReason::Metadata(err));
            }
            Ok(union) => union,
            Err(err) => {
                tracing::debug!(%err, "declining");
                return Decision::Decline(DeclineReason::Metadata(err));
            }
        };

        let mut ctx = ProofContext::new(self.metadata, &union);
        let construct = classify_construct(&mut ctx, site.subject_is_nullable, &site.arms);
        let coverage = prove(&union, &construct);

        if coverage.is_exhaustive() {
            Decision::Suppress
        } else {
            Decision::Keep(coverage)
        }
    }

    /// Decide one occurrence and forward a suppression to `sink` if proven.
    pub fn run(&self, diagnostic: &Diagnostic, sink: &mut dyn DiagnosticSink) -> Decision {
        let decision = self.decide(diagnostic);
        self.forward(diagnostic, &decision, sink);
        decision
    }

    /// Decide many occurrences in parallel.
    ///
    /// Proofs run concurrently; suppressions reach `sink` afterwards, one
    /// per proven occurrence, in input order.
    pub fn run_batch(
        &self,
        diagnostics: &[Diagnostic],
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<Decision> {
        let decisions: Vec<Decision> = diagnostics.par_iter().map(|d| self.decide(d)).collect();
        for (diagnostic, decision) in diagnostics.iter().zip(&decisions) {
            self.forward(diagnostic, decision, sink);
        }
        tracing::debug!(
            total = diagnostics.len(),
            suppressed = decisions.iter().filter(|d| d.is_suppress()).count(),
            "batch gated"
        );
        decisions
    }

    fn forward(&self, diagnostic: &Diagnostic, decision: &Decision, sink: &mut dyn DiagnosticSink) {
        if !decision.is_suppress() {
            return;
        }
        if let Some(descriptor) = self.config.descriptor_for(diagnostic.code) {
            tracing::debug!(descriptor = %descriptor.id, "suppressing");
            sink.suppress(diagnostic, descriptor);
        }
    }
}
