// Wed Feb 18 2026 - Alex

use crate::model::ComplexType;

/// Payload shared by function, complete-destructor and deleting-destructor
/// vtable slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionPointer {
    /// Whether this entry is a thunk.
    pub is_thunk: bool,
    /// Whether this is a const member function.
    pub is_const: bool,
    /// [Thunks] [Itanium ABI] Return adjustment.
    pub return_adjustment: i64,
    /// [Thunks] [Itanium ABI] Return adjustment vbase offset offset.
    pub return_adjustment_vbase_offset_offset: i64,
    /// [Thunks] [Itanium ABI] This pointer adjustment.
    pub this_adjustment: i64,
    /// [Thunks] [Itanium ABI] This pointer adjustment vcall offset offset.
    pub this_adjustment_vcall_offset_offset: i64,
    /// A human-readable description, e.g. `bool Foo::f() const`.
    pub repr: String,
    /// e.g. `f`. Empty for destructors.
    pub function_name: String,
    /// Always of `ComplexType::Function` kind.
    pub ty: ComplexType,
}

impl Default for FunctionPointer {
    fn default() -> Self {
        Self {
            is_thunk: false,
            is_const: false,
            return_adjustment: 0,
            return_adjustment_vbase_offset_offset: 0,
            this_adjustment: 0,
            this_adjustment_vcall_offset_offset: 0,
            repr: String::new(),
            function_name: String::new(),
            ty: ComplexType::name(""),
        }
    }
}

/// One entry of an Itanium vtable, in layout order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VTableComponent {
    VCallOffset { offset: i64 },
    VBaseOffset { offset: i64 },
    OffsetToTop { offset: i64 },
    Rtti { class_name: String },
    FunctionPointer(FunctionPointer),
    CompleteDtorPointer(FunctionPointer),
    DeletingDtorPointer(FunctionPointer),
}

impl VTableComponent {
    /// The function payload, if this is a function-like slot.
    pub fn function(&self) -> Option<&FunctionPointer> {
        match self {
            Self::FunctionPointer(f) | Self::CompleteDtorPointer(f) | Self::DeletingDtorPointer(f) => {
                Some(f)
            }
            _ => None,
        }
    }
}

/// An ordered sequence of vtable components, exactly as the ABI laid them
/// out. No reordering, no deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VTable {
    pub components: Vec<VTableComponent>,
}
