// Thu Feb 19 2026 - Alex

use serde::{Deserialize, Serialize};

use crate::ast::decls::RecordId;

/// Index into the translation unit's type arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(pub u32);

/// A canonical type together with its local const/volatile qualifiers.
/// The front end resolves all typedef sugar before handing types over, so
/// the engine never sees non-canonical forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualType {
    pub ty: TypeId,
    pub is_const: bool,
    pub is_volatile: bool,
}

impl QualType {
    pub fn unqualified(ty: TypeId) -> Self {
        Self {
            ty,
            is_const: false,
            is_volatile: false,
        }
    }

    pub fn with_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn with_volatile(mut self) -> Self {
        self.is_volatile = true;
        self
    }

    /// The same type with local qualifiers removed.
    pub fn strip_qualifiers(self) -> Self {
        Self::unqualified(self.ty)
    }

    pub fn is_qualified(&self) -> bool {
        self.is_const || self.is_volatile
    }
}

/// One node of the canonical type graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    /// A builtin, enum or otherwise opaque type, stored as its canonical
    /// spelling (e.g. `int`, `ns::Color`).
    Named { name: String },
    /// A class, struct or union type.
    Record { record: RecordId },
    Pointer { pointee: QualType },
    LValueReference { referent: QualType },
    RValueReference { referent: QualType },
    ConstantArray { element: QualType, size: u64 },
    FunctionProto {
        params: Vec<QualType>,
        return_type: QualType,
    },
    /// A pointer-to-member; `class_type` is the enclosing class type.
    MemberPointer {
        class_type: QualType,
        pointee: QualType,
    },
    Atomic { value: QualType },
}
