// Thu Feb 19 2026 - Alex

use serde::{Deserialize, Serialize};

use crate::ast::layout::{RecordLayout, VTableLayout};
use crate::ast::types::{QualType, TypeId, TypeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodId(pub u32);

/// The C++ ABI the translation unit was compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetAbi {
    Itanium,
    Arm,
    AppleArm64,
    Fuchsia,
    WebAssembly,
    Microsoft,
}

impl TargetAbi {
    /// All ABIs here except the Microsoft one are Itanium derivatives.
    pub fn is_itanium_family(&self) -> bool {
        !matches!(self, Self::Microsoft)
    }
}

/// Tag kind as written in source. `Interface` is MSVC's `__interface`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagKind {
    Struct,
    Class,
    Interface,
    Union,
}

/// A direct base class, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSpecifier {
    pub record: RecordId,
    pub is_virtual: bool,
}

/// A declared data member. An unnamed bitfield has an empty name and a
/// width, and does not take part in layout offset indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub ty: QualType,
    pub bitfield_width: Option<u32>,
}

impl FieldDecl {
    pub fn is_unnamed_bitfield(&self) -> bool {
        self.name.is_empty() && self.bitfield_width.is_some()
    }
}

/// What kind of member function sits in a vtable slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodKind {
    Ordinary,
    Destructor,
    Operator(OverloadedOperator),
}

/// Every overloadable C++ operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverloadedOperator {
    New,
    Delete,
    ArrayNew,
    ArrayDelete,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Amp,
    Pipe,
    Tilde,
    Exclaim,
    Equal,
    Less,
    Greater,
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    PercentEqual,
    CaretEqual,
    AmpEqual,
    PipeEqual,
    LessLess,
    GreaterGreater,
    LessLessEqual,
    GreaterGreaterEqual,
    EqualEqual,
    ExclaimEqual,
    LessEqual,
    GreaterEqual,
    Spaceship,
    AmpAmp,
    PipePipe,
    PlusPlus,
    MinusMinus,
    Comma,
    ArrowStar,
    Arrow,
    Call,
    Subscript,
    Conditional,
    Coawait,
}

/// A member function referenced by a vtable slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    /// The plain identifier, e.g. `f`. Empty for destructors and operators.
    pub ident: String,
    /// The qualified name used in signatures, e.g. `ns::Foo::f`,
    /// `ns::Foo::~Foo`, `ns::Foo::operator+`.
    pub qualified_name: String,
    pub kind: MethodKind,
    pub is_const: bool,
    pub is_pure: bool,
    /// Always of `TypeKind::FunctionProto` kind.
    pub ty: QualType,
}

/// A record declaration. Incomplete records carry no layout; the parse
/// context skips them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDecl {
    /// Canonical printed name, template arguments fully written.
    pub name: String,
    pub tag: TagKind,
    pub is_anonymous: bool,
    pub is_complete: bool,
    pub is_invalid: bool,
    /// True for a primary template pattern; instantiations and explicit
    /// specializations are not patterns and get processed.
    pub is_template_pattern: bool,
    /// Whether this class has or inherits a vtable pointer.
    pub is_dynamic: bool,
    /// Direct bases (virtual and non-virtual) in declaration order.
    pub bases: Vec<BaseSpecifier>,
    /// Declared data members in declaration order.
    pub fields: Vec<FieldDecl>,
    pub layout: Option<RecordLayout>,
    /// Itanium vtable layout, present for dynamic classes.
    pub vtable: Option<VTableLayout>,
}

impl RecordDecl {
    pub fn is_union(&self) -> bool {
        self.tag == TagKind::Union
    }

    pub fn direct_bases(&self) -> impl Iterator<Item = &BaseSpecifier> {
        self.bases.iter().filter(|b| !b.is_virtual)
    }

    pub fn direct_virtual_bases(&self) -> impl Iterator<Item = &BaseSpecifier> {
        self.bases.iter().filter(|b| b.is_virtual)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumeratorDecl {
    pub identifier: String,
    /// Wide enough for any underlying integer type.
    pub value: i128,
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDecl {
    /// Canonical printed name.
    pub name: String,
    /// The declared identifier; empty for anonymous enums.
    pub ident: String,
    pub is_scoped: bool,
    pub is_complete: bool,
    pub is_invalid: bool,
    pub is_template_pattern: bool,
    pub underlying_type: QualType,
    /// Size of the underlying type in bytes.
    pub underlying_type_size: u64,
    pub enumerators: Vec<EnumeratorDecl>,
}

/// A top-level tag declaration in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decl {
    Enum(EnumId),
    Record(RecordId),
}

/// One parsed translation unit: the declaration stream in traversal order
/// plus the arenas it references. This is the whole surface the engine
/// consumes from the compilation front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationUnit {
    pub abi: TargetAbi,
    pub types: Vec<TypeKind>,
    pub records: Vec<RecordDecl>,
    pub enums: Vec<EnumDecl>,
    pub methods: Vec<MethodDecl>,
    pub decls: Vec<Decl>,
}

impl TranslationUnit {
    pub fn type_kind(&self, id: TypeId) -> &TypeKind {
        &self.types[id.0 as usize]
    }

    pub fn record(&self, id: RecordId) -> &RecordDecl {
        &self.records[id.0 as usize]
    }

    pub fn enum_decl(&self, id: EnumId) -> &EnumDecl {
        &self.enums[id.0 as usize]
    }

    pub fn method(&self, id: MethodId) -> &MethodDecl {
        &self.methods[id.0 as usize]
    }
}
