//! Exhaustiveness proofs for matches over closed unions.
//!
//! A host compiler with a weaker completeness check reports "match does not
//! handle all possible values" even when every variant of a closed union is
//! handled. This crate proves, structurally, when such a report is
//! unnecessary so the host can suppress it.
//!
//! # Pipeline
//!
//! ```text
//! HostPattern ──► classify ──► Pattern ──► prove ──► Coverage ──► Gate ──► suppress?
//!                     ▲                      ▲
//!                     └──── ProofContext ────┘ (UnionType + TypeMetadata)
//! ```
//!
//! 1. **Variant Set Model** (`variants`): `UnionType`, `FieldSignature`, and
//!    the per-proof `ProofContext`
//! 2. **Pattern Classifier** (`classify`): host pattern trees → `Pattern`
//! 3. **Coverage Prover** (`prover`): monotonic set-shrinking proof
//! 4. **Diagnostic Gate** (`gate`): one decision per reported occurrence
//!
//! # Soundness
//!
//! The only way to be wrong is a false "exhaustive". Every shape the
//! classifier cannot decide becomes `Unprovable`, which contributes nothing,
//! so uncertainty only ever leaves a diagnostic in place.
//!
//! # Concurrency
//!
//! Proofs are pure functions of their inputs. Host query traits are `Sync`;
//! [`Gate::run_batch`] decides occurrences in parallel with rayon.

mod classify;
mod gate;
mod host;
mod pattern;
mod prover;
mod registry;
mod stack;
mod variants;

#[cfg(test)]
mod test_helpers;

pub use classify::{classify, classify_arm, classify_construct, classify_field};
pub use gate::{Decision, DeclineReason, Gate, GateConfig};
pub use host::{MatchSite, MatchSource, MetadataError, TypeMetadata};
pub use pattern::{Arm, MatchConstruct, Pattern};
pub use prover::{prove, Coverage, Prover, Verdict};
pub use registry::{RegistryError, UnionRegistry};
pub use variants::{FieldSignature, ProofContext, UnionType, UnionVariant};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=union_coverage=debug`
/// (or `=trace` for per-arm classification). Set `UNION_LOG_TREE` to get
/// indented span trees instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let installed = if std::env::var("UNION_LOG_TREE").is_ok() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
        };

        // Another subscriber (e.g. the host's) already owns the global slot.
        if installed.is_err() {
            tracing::debug!("global subscriber already installed");
        }
    });
}
