// Sat Feb 21 2026 - Alex

use itertools::Itertools;

use crate::ast::{
    MethodDecl, MethodId, MethodKind, RecordDecl, ThunkInfo, TranslationUnit, TypeKind,
    TypePrinter, VTableLayout, VTableSlot,
};
use crate::model::{FunctionPointer, VTable, VTableComponent};
use crate::parse::normalize::normalize_with;
use crate::parse::operators::c_style_operator_name;

/// Walks the ABI-assigned vtable layout of a dynamic class into the output
/// component stream. Components come out in the exact order the layout
/// provides them.
pub fn walk_vtable(unit: &TranslationUnit, decl: &RecordDecl) -> Option<VTable> {
    if !decl.is_dynamic {
        return None;
    }

    let layout = decl.vtable.as_ref()?;
    let printer = unit.printer();

    let mut vtable = VTable {
        components: Vec::with_capacity(layout.components.len()),
    };

    for (idx, slot) in layout.components.iter().enumerate() {
        let component = match *slot {
            VTableSlot::VCallOffset { offset } => VTableComponent::VCallOffset { offset },
            VTableSlot::VBaseOffset { offset } => VTableComponent::VBaseOffset { offset },
            VTableSlot::OffsetToTop { offset } => VTableComponent::OffsetToTop { offset },
            VTableSlot::Rtti { record } => VTableComponent::Rtti {
                class_name: unit.record(record).name.clone(),
            },
            VTableSlot::FunctionPointer { method } | VTableSlot::UnusedFunctionPointer { method } => {
                VTableComponent::FunctionPointer(function_entry(
                    unit, &printer, layout, idx as u64, method, DtorKind::None,
                ))
            }
            VTableSlot::CompleteDtorPointer { method } => {
                VTableComponent::CompleteDtorPointer(function_entry(
                    unit,
                    &printer,
                    layout,
                    idx as u64,
                    method,
                    DtorKind::Complete,
                ))
            }
            VTableSlot::DeletingDtorPointer { method } => {
                VTableComponent::DeletingDtorPointer(function_entry(
                    unit,
                    &printer,
                    layout,
                    idx as u64,
                    method,
                    DtorKind::Deleting,
                ))
            }
        };
        vtable.components.push(component);
    }

    Some(vtable)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum DtorKind {
    None,
    Complete,
    Deleting,
}

fn function_entry(
    unit: &TranslationUnit,
    printer: &TypePrinter<'_>,
    layout: &VTableLayout,
    idx: u64,
    method_id: MethodId,
    dtor: DtorKind,
) -> FunctionPointer {
    let method = unit.method(method_id);

    let function_name = match method.kind {
        MethodKind::Ordinary => method.ident.clone(),
        MethodKind::Destructor => String::new(),
        MethodKind::Operator(op) => c_style_operator_name(op).to_string(),
    };

    let mut repr = pretty_signature(unit, printer, method);

    if dtor == DtorKind::Complete {
        repr.push_str(" [complete]");
    }
    if dtor == DtorKind::Deleting {
        repr.push_str(" [deleting]");
    }
    if method.is_pure {
        repr.push_str(" [pure]");
    }

    let thunk = thunk_at(layout, idx).filter(|t| !t.is_empty());

    if let Some(thunk) = thunk {
        if !thunk.return_adjustment.is_empty() {
            repr.push_str(&format!(
                " [return adjustment: {}",
                signed_hex(thunk.return_adjustment.non_virtual)
            ));
            if thunk.return_adjustment.virtual_offset != 0 {
                repr.push_str(&format!(
                    ", vbase offset offset: {}",
                    signed_hex(thunk.return_adjustment.virtual_offset)
                ));
            }
            repr.push(']');
        }

        if !thunk.this_adjustment.is_empty() {
            repr.push_str(&format!(
                " [this adjustment: {}",
                signed_hex(thunk.this_adjustment.non_virtual)
            ));
            if thunk.this_adjustment.virtual_offset != 0 {
                repr.push_str(&format!(
                    ", vcall offset offset: {}",
                    signed_hex(thunk.this_adjustment.virtual_offset)
                ));
            }
            repr.push(']');
        }
    }

    let mut entry = FunctionPointer {
        is_const: method.is_const,
        repr,
        function_name,
        ty: normalize_with(unit, printer, method.ty),
        ..FunctionPointer::default()
    };

    if let Some(thunk) = thunk {
        entry.is_thunk = true;

        if !thunk.return_adjustment.is_empty() {
            entry.return_adjustment = thunk.return_adjustment.non_virtual;
            entry.return_adjustment_vbase_offset_offset = thunk.return_adjustment.virtual_offset;
        }

        if !thunk.this_adjustment.is_empty() {
            entry.this_adjustment = thunk.this_adjustment.non_virtual;
            entry.this_adjustment_vcall_offset_offset = thunk.this_adjustment.virtual_offset;
        }
    }

    entry
}

/// Thunks are sorted by vtable slot index, so the lookup is a binary search.
fn thunk_at(layout: &VTableLayout, idx: u64) -> Option<&ThunkInfo> {
    let pos = layout
        .thunks
        .binary_search_by_key(&idx, |(slot, _)| *slot)
        .ok()?;
    Some(&layout.thunks[pos].1)
}

/// An Itanium-style signature without the `virtual` qualifier, e.g.
/// `int P::f() const` or `P::~P()`.
fn pretty_signature(
    unit: &TranslationUnit,
    printer: &TypePrinter<'_>,
    method: &MethodDecl,
) -> String {
    let TypeKind::FunctionProto {
        params,
        return_type,
    } = unit.type_kind(method.ty.ty)
    else {
        return method.qualified_name.clone();
    };

    let params = params.iter().map(|p| printer.print(*p)).join(", ");
    let const_suffix = if method.is_const { " const" } else { "" };

    match method.kind {
        // Destructors have no spelled return type.
        MethodKind::Destructor => format!("{}({})", method.qualified_name, params),
        _ => format!(
            "{} {}({}){}",
            printer.print(*return_type),
            method.qualified_name,
            params,
            const_suffix
        ),
    }
}

/// Lowercase `0x` hex without zero padding; negative values keep their sign
/// instead of wrapping to two's complement.
fn signed_hex(value: i64) -> String {
    if value < 0 {
        format!("-0x{:x}", value.unsigned_abs())
    } else {
        format!("0x{:x}", value)
    }
}
