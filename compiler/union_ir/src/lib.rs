//! Union IR - shared vocabulary for closed-union coverage analysis.
//!
//! This crate contains the data every other crate in the workspace speaks:
//! - Spans for source locations
//! - Names for interned identifiers
//! - `TypeId` / `VariantId` for declared types
//! - The host's raw pattern grammar (`HostPattern`, `HostArm`)
//! - Union declarations as collected by a generator front end
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32), Types → TypeId(u32)
//! - **Host Neutral**: nothing here depends on a particular compiler platform;
//!   adapters translate the host's syntax trees into `HostPattern`.
//!
//! Types that contain floats store them as u64 bits for Hash compatibility.

mod decl;
mod interner;
mod name;
mod pattern;
mod span;
mod type_id;

pub use decl::{FieldDecl, UnionDecl, VariantDecl};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use pattern::{
    ConstValue, HostArm, HostPattern, PropertyPattern, RecursivePattern, RelationalOp,
};
pub use span::{Span, SpanError};
pub use type_id::{TypeId, VariantId};
