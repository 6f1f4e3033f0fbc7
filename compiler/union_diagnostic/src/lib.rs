//! Diagnostic vocabulary shared between the host and the coverage gate.
//!
//! The host reports diagnostics; the gate reads them, decides, and asks a
//! [`DiagnosticSink`] to suppress the ones it can prove unnecessary:
//! - Error codes for searchability
//! - A primary span identifying each reported occurrence
//! - Suppression descriptors explaining *why* something was silenced

mod diagnostic;
mod error_code;
mod suppression;

pub use diagnostic::{non_exhaustive_match, unhandled_null, Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use suppression::{DiagnosticSink, Suppression, SuppressionDescriptor, SuppressionLog};
