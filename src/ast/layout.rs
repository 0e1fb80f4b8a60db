// Thu Feb 19 2026 - Alex

use serde::{Deserialize, Serialize};

use crate::ast::decls::{MethodId, RecordId};

/// The ABI-assigned layout of a record, as reported by the front end.
/// All byte quantities; field offsets are in bits (bitfields).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordLayout {
    /// sizeof() in bytes.
    pub size: u64,
    /// Size in bytes without tail padding.
    pub data_size: u64,
    /// Alignment in bytes.
    pub alignment: u64,
    /// Bit offset of each declared field, indexed in declaration order.
    /// Unnamed bitfields do not get an entry.
    pub field_offsets_bits: Vec<u64>,
    /// Byte offset of each non-virtual direct base subobject.
    pub base_offsets: Vec<(RecordId, u64)>,
    /// Byte offset of each direct virtual base subobject.
    pub vbase_offsets: Vec<(RecordId, u64)>,
    /// The non-virtual direct base sharing its vtable pointer with this
    /// record, if the ABI selected one.
    pub primary_base: Option<RecordId>,
}

impl RecordLayout {
    pub fn field_offset_bits(&self, index: usize) -> u64 {
        self.field_offsets_bits.get(index).copied().unwrap_or(0)
    }

    pub fn base_class_offset(&self, base: RecordId) -> u64 {
        self.base_offsets
            .iter()
            .find(|(id, _)| *id == base)
            .map(|(_, offset)| *offset)
            .unwrap_or(0)
    }

    pub fn vbase_class_offset(&self, base: RecordId) -> u64 {
        self.vbase_offsets
            .iter()
            .find(|(id, _)| *id == base)
            .map(|(_, offset)| *offset)
            .unwrap_or(0)
    }
}

/// A this/return adjustment of a thunk. `virtual_offset` is the
/// vcall-offset-offset (this adjustments) or vbase-offset-offset (return
/// adjustments) in the Itanium ABI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub non_virtual: i64,
    pub virtual_offset: i64,
}

impl Adjustment {
    pub fn is_empty(&self) -> bool {
        self.non_virtual == 0 && self.virtual_offset == 0
    }
}

/// Thunk metadata for one vtable slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThunkInfo {
    pub return_adjustment: Adjustment,
    pub this_adjustment: Adjustment,
}

impl ThunkInfo {
    pub fn is_empty(&self) -> bool {
        self.return_adjustment.is_empty() && self.this_adjustment.is_empty()
    }
}

/// One raw slot of an Itanium vtable layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VTableSlot {
    VCallOffset { offset: i64 },
    VBaseOffset { offset: i64 },
    OffsetToTop { offset: i64 },
    Rtti { record: RecordId },
    FunctionPointer { method: MethodId },
    CompleteDtorPointer { method: MethodId },
    DeletingDtorPointer { method: MethodId },
    UnusedFunctionPointer { method: MethodId },
}

/// The Itanium vtable layout of a dynamic class: an ordered slot sequence
/// plus thunk records sorted by slot index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VTableLayout {
    pub components: Vec<VTableSlot>,
    /// (slot index, thunk) pairs, ascending by slot index.
    pub thunks: Vec<(u64, ThunkInfo)>,
}
