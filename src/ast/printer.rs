// Thu Feb 19 2026 - Alex

use itertools::Itertools;

use crate::ast::decls::TranslationUnit;
use crate::ast::types::{QualType, TypeId, TypeKind};

/// Prints canonical type spellings in the clang style: `int *`, `char **`,
/// `const int`, `int *const`, `int[3]`, `void (int, char)`, `int Foo::*`,
/// `_Atomic(int)`.
pub struct TypePrinter<'a> {
    unit: &'a TranslationUnit,
}

impl<'a> TypePrinter<'a> {
    pub fn new(unit: &'a TranslationUnit) -> Self {
        Self { unit }
    }

    /// The canonical spelling including local qualifiers.
    pub fn print(&self, ty: QualType) -> String {
        let base = self.print_unqualified(ty.ty);
        if !ty.is_qualified() {
            return base;
        }

        let mut quals = String::new();
        if ty.is_const {
            quals.push_str("const");
        }
        if ty.is_volatile {
            if !quals.is_empty() {
                quals.push(' ');
            }
            quals.push_str("volatile");
        }

        // Qualifiers on pointers and references bind to the right of the
        // declarator, everything else takes them as a prefix.
        match self.unit.type_kind(ty.ty) {
            TypeKind::Pointer { .. }
            | TypeKind::LValueReference { .. }
            | TypeKind::RValueReference { .. }
            | TypeKind::MemberPointer { .. } => {
                if base.ends_with('*') || base.ends_with('&') {
                    format!("{}{}", base, quals)
                } else {
                    format!("{} {}", base, quals)
                }
            }
            _ => format!("{} {}", quals, base),
        }
    }

    /// The canonical spelling with local qualifiers dropped.
    pub fn print_unqualified(&self, id: TypeId) -> String {
        match self.unit.type_kind(id) {
            TypeKind::Named { name } => name.clone(),
            TypeKind::Record { record } => self.unit.record(*record).name.clone(),
            TypeKind::Pointer { pointee } => self.append_declarator(*pointee, '*'),
            TypeKind::LValueReference { referent } => self.append_declarator(*referent, '&'),
            TypeKind::RValueReference { referent } => {
                let mut s = self.append_declarator(*referent, '&');
                s.push('&');
                s
            }
            TypeKind::ConstantArray { element, size } => {
                format!("{}[{}]", self.print(*element), size)
            }
            TypeKind::FunctionProto {
                params,
                return_type,
            } => {
                let params = params.iter().map(|p| self.print(*p)).join(", ");
                format!("{} ({})", self.print(*return_type), params)
            }
            TypeKind::MemberPointer {
                class_type,
                pointee,
            } => {
                let class = self.print_unqualified(class_type.ty);
                match self.unit.type_kind(pointee.ty) {
                    TypeKind::FunctionProto {
                        params,
                        return_type,
                    } => {
                        let params = params.iter().map(|p| self.print(*p)).join(", ");
                        format!("{} ({}::*)({})", self.print(*return_type), class, params)
                    }
                    _ => format!("{} {}::*", self.print(*pointee), class),
                }
            }
            TypeKind::Atomic { value } => format!("_Atomic({})", self.print(*value)),
        }
    }

    // `int` -> `int *`, `int *` -> `int **`, `const int` -> `const int *`.
    fn append_declarator(&self, inner: QualType, declarator: char) -> String {
        let mut s = self.print(inner);
        if !s.ends_with('*') && !s.ends_with('&') {
            s.push(' ');
        }
        s.push(declarator);
        s
    }
}

impl TranslationUnit {
    pub fn printer(&self) -> TypePrinter<'_> {
        TypePrinter::new(self)
    }
}
