// Wed Feb 18 2026 - Alex

use std::fmt;

use crate::model::{ComplexType, VTable};

/// Record tag kind. The discriminant values are part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Class = 0,
    Struct = 1,
    Union = 2,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => write!(f, "class"),
            Self::Struct => write!(f, "struct"),
            Self::Union => write!(f, "union"),
        }
    }
}

/// A data member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberVariable {
    /// 0 if this is not a bitfield.
    pub bitfield_width: u32,
    pub ty: ComplexType,
    pub type_name: String,
    pub name: String,
}

/// A base-class subobject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseClass {
    pub is_primary: bool,
    pub is_virtual: bool,
    pub type_name: String,
}

/// Payload of a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldData {
    Member(MemberVariable),
    Base(BaseClass),
    VTablePointer,
}

/// One slot of a record: a member variable, a base subobject or the vtable
/// pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Byte offset from the beginning of the record.
    pub offset: u64,
    pub data: FieldData,
}

impl Field {
    pub fn is_member(&self) -> bool {
        matches!(self.data, FieldData::Member(_))
    }

    pub fn is_base(&self) -> bool {
        matches!(self.data, FieldData::Base(_))
    }

    pub fn is_vtable_pointer(&self) -> bool {
        matches!(self.data, FieldData::VTablePointer)
    }
}

/// A record (class, struct or union) with its ABI-assigned layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Whether this is an anonymous record.
    pub is_anonymous: bool,
    pub kind: RecordKind,
    /// Fully qualified name.
    pub name: String,
    /// sizeof() in bytes.
    pub size: u64,
    /// Size in bytes without tail padding.
    pub data_size: u64,
    /// Alignment in bytes.
    pub alignment: u64,
    /// Fields sorted by offset. Base classes are fields too.
    pub fields: Vec<Field>,
    /// The associated vtable, absent for non-dynamic classes.
    pub vtable: Option<VTable>,
}
