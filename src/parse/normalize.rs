// Fri Feb 20 2026 - Alex

use crate::ast::{QualType, TranslationUnit, TypeKind, TypePrinter};
use crate::model::ComplexType;

/// Translates a canonical C++ type into its C-ified [`ComplexType`] tree.
///
/// Dispatch order matters and mirrors the layering of canonical types:
/// constant arrays, then member pointers, then ordinary pointers, then
/// references (folded into pointers), then function prototypes, then
/// atomics; everything else becomes an opaque name leaf with its local
/// const/volatile qualifiers stripped into flags.
///
/// Total for every canonical type the front end produces; never fails.
pub fn normalize(unit: &TranslationUnit, ty: QualType) -> ComplexType {
    let printer = unit.printer();
    normalize_with(unit, &printer, ty)
}

pub(crate) fn normalize_with(
    unit: &TranslationUnit,
    printer: &TypePrinter<'_>,
    ty: QualType,
) -> ComplexType {
    match unit.type_kind(ty.ty) {
        TypeKind::ConstantArray { element, size } => ComplexType::Array {
            element_type: Box::new(normalize_with(unit, printer, *element)),
            size: *size,
        },

        TypeKind::MemberPointer {
            class_type,
            pointee,
        } => ComplexType::MemberPointer {
            class_type: Box::new(normalize_with(
                unit,
                printer,
                class_type.strip_qualifiers(),
            )),
            pointee_type: Box::new(normalize_with(unit, printer, *pointee)),
            repr: printer.print(ty),
        },

        TypeKind::Pointer { pointee } => ComplexType::Pointer {
            pointee_type: Box::new(normalize_with(unit, printer, *pointee)),
        },

        // References and pointers are indistinguishable in the output.
        TypeKind::LValueReference { referent } | TypeKind::RValueReference { referent } => {
            ComplexType::Pointer {
                pointee_type: Box::new(normalize_with(unit, printer, *referent)),
            }
        }

        TypeKind::FunctionProto {
            params,
            return_type,
        } => ComplexType::Function {
            param_types: params
                .iter()
                .map(|param| normalize_with(unit, printer, *param))
                .collect(),
            return_type: Box::new(normalize_with(unit, printer, *return_type)),
        },

        TypeKind::Atomic { value } => ComplexType::Atomic {
            value_type: Box::new(normalize_with(unit, printer, *value)),
        },

        TypeKind::Named { .. } | TypeKind::Record { .. } => ComplexType::Name {
            name: printer.print_unqualified(ty.ty),
            is_const: ty.is_const,
            is_volatile: ty.is_volatile,
        },
    }
}
