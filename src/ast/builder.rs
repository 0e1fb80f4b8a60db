// Fri Feb 20 2026 - Alex

use std::collections::HashMap;

use crate::ast::decls::{
    BaseSpecifier, Decl, EnumDecl, EnumId, EnumeratorDecl, FieldDecl, MethodDecl, MethodId,
    MethodKind, OverloadedOperator, RecordDecl, RecordId, TagKind, TargetAbi, TranslationUnit,
};
use crate::ast::layout::{RecordLayout, VTableLayout};
use crate::ast::types::{QualType, TypeId, TypeKind};

impl MethodDecl {
    pub fn new(
        ident: impl Into<String>,
        qualified_name: impl Into<String>,
        ty: QualType,
    ) -> Self {
        Self {
            ident: ident.into(),
            qualified_name: qualified_name.into(),
            kind: MethodKind::Ordinary,
            is_const: false,
            is_pure: false,
            ty,
        }
    }

    pub fn destructor(qualified_name: impl Into<String>, ty: QualType) -> Self {
        Self {
            ident: String::new(),
            qualified_name: qualified_name.into(),
            kind: MethodKind::Destructor,
            is_const: false,
            is_pure: false,
            ty,
        }
    }

    pub fn operator(
        op: OverloadedOperator,
        qualified_name: impl Into<String>,
        ty: QualType,
    ) -> Self {
        Self {
            ident: String::new(),
            qualified_name: qualified_name.into(),
            kind: MethodKind::Operator(op),
            is_const: false,
            is_pure: false,
            ty,
        }
    }

    pub fn const_method(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn pure_virtual(mut self) -> Self {
        self.is_pure = true;
        self
    }
}

/// Assembles a record declaration together with its ABI-assigned layout.
/// Offsets are caller-supplied, never computed: layout belongs to the ABI.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    name: String,
    tag: TagKind,
    is_anonymous: bool,
    is_invalid: bool,
    is_template_pattern: bool,
    declares_virtual: bool,
    bases: Vec<BaseSpecifier>,
    fields: Vec<FieldDecl>,
    layout: RecordLayout,
    vtable: Option<VTableLayout>,
}

impl RecordBuilder {
    pub fn new(name: impl Into<String>, tag: TagKind) -> Self {
        Self {
            name: name.into(),
            tag,
            is_anonymous: false,
            is_invalid: false,
            is_template_pattern: false,
            declares_virtual: false,
            bases: Vec::new(),
            fields: Vec::new(),
            layout: RecordLayout::default(),
            vtable: None,
        }
    }

    pub fn size(mut self, size: u64) -> Self {
        self.layout.size = size;
        self
    }

    pub fn data_size(mut self, data_size: u64) -> Self {
        self.layout.data_size = data_size;
        self
    }

    pub fn alignment(mut self, alignment: u64) -> Self {
        self.layout.alignment = alignment;
        self
    }

    /// Adds a non-virtual direct base at the given byte offset.
    pub fn base(mut self, record: RecordId, offset: u64) -> Self {
        self.bases.push(BaseSpecifier {
            record,
            is_virtual: false,
        });
        self.layout.base_offsets.push((record, offset));
        self
    }

    /// Adds a direct virtual base at the given byte offset.
    pub fn virtual_base(mut self, record: RecordId, offset: u64) -> Self {
        self.bases.push(BaseSpecifier {
            record,
            is_virtual: true,
        });
        self.layout.vbase_offsets.push((record, offset));
        self
    }

    pub fn primary_base(mut self, record: RecordId) -> Self {
        self.layout.primary_base = Some(record);
        self
    }

    /// Adds a data member at the given bit offset.
    pub fn field(mut self, name: impl Into<String>, ty: QualType, offset_bits: u64) -> Self {
        self.fields.push(FieldDecl {
            name: name.into(),
            ty,
            bitfield_width: None,
        });
        self.layout.field_offsets_bits.push(offset_bits);
        self
    }

    pub fn bitfield(
        mut self,
        name: impl Into<String>,
        ty: QualType,
        offset_bits: u64,
        width: u32,
    ) -> Self {
        self.fields.push(FieldDecl {
            name: name.into(),
            ty,
            bitfield_width: Some(width),
        });
        self.layout.field_offsets_bits.push(offset_bits);
        self
    }

    /// Unnamed bitfields pad the layout but are not members; they get no
    /// offset entry.
    pub fn unnamed_bitfield(mut self, ty: QualType, width: u32) -> Self {
        self.fields.push(FieldDecl {
            name: String::new(),
            ty,
            bitfield_width: Some(width),
        });
        self
    }

    /// Marks the record as declaring at least one virtual function.
    pub fn polymorphic(mut self) -> Self {
        self.declares_virtual = true;
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.is_anonymous = true;
        self
    }

    pub fn template_pattern(mut self) -> Self {
        self.is_template_pattern = true;
        self
    }

    pub fn invalid(mut self) -> Self {
        self.is_invalid = true;
        self
    }

    pub fn vtable(mut self, layout: VTableLayout) -> Self {
        self.vtable = Some(layout);
        self
    }
}

/// Assembles an enum declaration.
#[derive(Debug, Clone)]
pub struct EnumBuilder {
    name: String,
    ident: String,
    is_scoped: bool,
    is_complete: bool,
    is_invalid: bool,
    is_template_pattern: bool,
    underlying: Option<(QualType, u64)>,
    enumerators: Vec<EnumeratorDecl>,
}

impl EnumBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            ident: name.clone(),
            name,
            is_scoped: false,
            is_complete: true,
            is_invalid: false,
            is_template_pattern: false,
            underlying: None,
            enumerators: Vec::new(),
        }
    }

    pub fn scoped(mut self) -> Self {
        self.is_scoped = true;
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.ident.clear();
        self
    }

    pub fn forward_declared(mut self) -> Self {
        self.is_complete = false;
        self
    }

    pub fn invalid(mut self) -> Self {
        self.is_invalid = true;
        self
    }

    pub fn template_pattern(mut self) -> Self {
        self.is_template_pattern = true;
        self
    }

    pub fn underlying(mut self, ty: QualType, size_bytes: u64) -> Self {
        self.underlying = Some((ty, size_bytes));
        self
    }

    pub fn enumerator(mut self, identifier: impl Into<String>, value: i128) -> Self {
        self.enumerators.push(EnumeratorDecl {
            identifier: identifier.into(),
            value,
        });
        self
    }
}

/// Builds translation-unit snapshots. Used by front-end exporters and by
/// test fixtures; the engine itself only ever reads the finished unit.
#[derive(Debug)]
pub struct AstBuilder {
    unit: TranslationUnit,
    named_types: HashMap<String, TypeId>,
}

impl Default for AstBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::with_abi(TargetAbi::Itanium)
    }

    pub fn with_abi(abi: TargetAbi) -> Self {
        Self {
            unit: TranslationUnit {
                abi,
                types: Vec::new(),
                records: Vec::new(),
                enums: Vec::new(),
                methods: Vec::new(),
                decls: Vec::new(),
            },
            named_types: HashMap::new(),
        }
    }

    fn push_type(&mut self, kind: TypeKind) -> TypeId {
        let id = TypeId(self.unit.types.len() as u32);
        self.unit.types.push(kind);
        id
    }

    /// Interns an opaque named type (builtin, enum, canonical spelling).
    pub fn named_type(&mut self, name: &str) -> TypeId {
        if let Some(id) = self.named_types.get(name) {
            return *id;
        }
        let id = self.push_type(TypeKind::Named {
            name: name.to_string(),
        });
        self.named_types.insert(name.to_string(), id);
        id
    }

    pub fn record_type(&mut self, record: RecordId) -> TypeId {
        self.push_type(TypeKind::Record { record })
    }

    pub fn pointer_to(&mut self, pointee: QualType) -> TypeId {
        self.push_type(TypeKind::Pointer { pointee })
    }

    pub fn lvalue_reference_to(&mut self, referent: QualType) -> TypeId {
        self.push_type(TypeKind::LValueReference { referent })
    }

    pub fn rvalue_reference_to(&mut self, referent: QualType) -> TypeId {
        self.push_type(TypeKind::RValueReference { referent })
    }

    pub fn array_of(&mut self, element: QualType, size: u64) -> TypeId {
        self.push_type(TypeKind::ConstantArray { element, size })
    }

    pub fn function_type(&mut self, params: Vec<QualType>, return_type: QualType) -> TypeId {
        self.push_type(TypeKind::FunctionProto {
            params,
            return_type,
        })
    }

    pub fn member_pointer(&mut self, class_type: QualType, pointee: QualType) -> TypeId {
        self.push_type(TypeKind::MemberPointer {
            class_type,
            pointee,
        })
    }

    pub fn atomic(&mut self, value: QualType) -> TypeId {
        self.push_type(TypeKind::Atomic { value })
    }

    /// Declares a record without defining it, so types may refer to it
    /// before (or without) a definition. Mirrors a forward declaration.
    pub fn declare_record(&mut self, name: &str, tag: TagKind) -> RecordId {
        let id = RecordId(self.unit.records.len() as u32);
        self.unit.records.push(RecordDecl {
            name: name.to_string(),
            tag,
            is_anonymous: false,
            is_complete: false,
            is_invalid: false,
            is_template_pattern: false,
            is_dynamic: false,
            bases: Vec::new(),
            fields: Vec::new(),
            layout: None,
            vtable: None,
        });
        self.unit.decls.push(Decl::Record(id));
        id
    }

    /// Completes a previously declared record.
    pub fn define_record(&mut self, id: RecordId, def: RecordBuilder) {
        // A class is dynamic if it declares a virtual function, inherits
        // from a dynamic base, or has virtual bases.
        let is_dynamic = def.declares_virtual
            || def
                .bases
                .iter()
                .any(|b| b.is_virtual || self.unit.records[b.record.0 as usize].is_dynamic);

        let decl = &mut self.unit.records[id.0 as usize];
        decl.name = def.name;
        decl.tag = def.tag;
        decl.is_anonymous = def.is_anonymous;
        decl.is_complete = true;
        decl.is_invalid = def.is_invalid;
        decl.is_template_pattern = def.is_template_pattern;
        decl.is_dynamic = is_dynamic;
        decl.bases = def.bases;
        decl.fields = def.fields;
        decl.layout = Some(def.layout);
        decl.vtable = def.vtable;
    }

    pub fn add_record(&mut self, def: RecordBuilder) -> RecordId {
        let id = self.declare_record(&def.name.clone(), def.tag);
        self.define_record(id, def);
        id
    }

    pub fn add_enum(&mut self, def: EnumBuilder) -> EnumId {
        let (underlying_type, underlying_type_size) = match def.underlying {
            Some(u) => u,
            None => {
                let int_ty = self.named_type("int");
                (QualType::unqualified(int_ty), 4)
            }
        };

        let id = EnumId(self.unit.enums.len() as u32);
        self.unit.enums.push(EnumDecl {
            name: def.name,
            ident: def.ident,
            is_scoped: def.is_scoped,
            is_complete: def.is_complete,
            is_invalid: def.is_invalid,
            is_template_pattern: def.is_template_pattern,
            underlying_type,
            underlying_type_size,
            enumerators: def.enumerators,
        });
        self.unit.decls.push(Decl::Enum(id));
        id
    }

    pub fn add_method(&mut self, method: MethodDecl) -> MethodId {
        let id = MethodId(self.unit.methods.len() as u32);
        self.unit.methods.push(method);
        id
    }

    pub fn finish(self) -> TranslationUnit {
        self.unit
    }
}
