//! Diagnostic codes relevant to closed-union matching.
//!
//! Each code is a unique identifier with a phase prefix. Only the `W3xxx`
//! range is produced by match analysis; `S3xxx` identifies suppressions.

use std::fmt;

/// Codes for match-completeness diagnostics.
///
/// Format: `W3xxx` for pattern warnings reported by the host's own
/// completeness check.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    /// Match does not handle all possible values of its subject type
    W3001,
    /// Match does not handle `null` subjects
    W3002,
    /// Match arm is unreachable
    W3003,
}

impl ErrorCode {
    /// Every known code.
    pub const ALL: &'static [ErrorCode] = &[ErrorCode::W3001, ErrorCode::W3002, ErrorCode::W3003];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::W3001 => "W3001",
            ErrorCode::W3002 => "W3002",
            ErrorCode::W3003 => "W3003",
        }
    }

    /// One-line description, used in `--explain` style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::W3001 => "match does not handle all possible values",
            ErrorCode::W3002 => "match does not handle `null`",
            ErrorCode::W3003 => "unreachable match arm",
        }
    }

    /// Check if this code reports a possibly non-exhaustive match.
    pub fn is_completeness(&self) -> bool {
        matches!(self, ErrorCode::W3001 | ErrorCode::W3002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"W3001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
