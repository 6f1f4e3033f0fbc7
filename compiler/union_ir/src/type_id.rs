//! Declared type identifiers.
//!
//! Type identity is exact: two `TypeId`s are equal iff they name the same
//! declared type. No subtyping relation is modelled here, and none is needed:
//! field coverage only ever credits an exact type match.

use std::fmt;

/// Identifier of a declared type in the host.
///
/// Primitive types are pre-assigned in the low range; hosts allocate their
/// own ids from [`TypeId::FIRST_USER`] upwards.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    pub const INT: TypeId = TypeId(0);
    pub const FLOAT: TypeId = TypeId(1);
    pub const BOOL: TypeId = TypeId(2);
    pub const STR: TypeId = TypeId(3);
    pub const CHAR: TypeId = TypeId(4);
    /// The host's top type (`object`).
    pub const OBJECT: TypeId = TypeId(5);

    /// First id available for host-declared types.
    pub const FIRST_USER: u32 = 16;

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is one of the pre-assigned primitive ids.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::FIRST_USER
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TypeId::INT => write!(f, "TypeId(int)"),
            TypeId::FLOAT => write!(f, "TypeId(float)"),
            TypeId::BOOL => write!(f, "TypeId(bool)"),
            TypeId::STR => write!(f, "TypeId(str)"),
            TypeId::CHAR => write!(f, "TypeId(char)"),
            TypeId::OBJECT => write!(f, "TypeId(object)"),
            TypeId(raw) => write!(f, "TypeId({raw})"),
        }
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of one variant of a closed union.
///
/// A variant is a declared type in its own right, so its identity is the
/// `TypeId` of that declaration.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct VariantId(TypeId);

impl VariantId {
    #[inline]
    pub const fn new(ty: TypeId) -> Self {
        VariantId(ty)
    }

    /// The declared type this variant denotes.
    #[inline]
    pub const fn ty(self) -> TypeId {
        self.0
    }
}

impl From<TypeId> for VariantId {
    fn from(ty: TypeId) -> Self {
        VariantId(ty)
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "variant {}", self.0)
    }
}
