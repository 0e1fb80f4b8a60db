// Thu Feb 19 2026 - Alex

pub mod builder;
pub mod decls;
pub mod layout;
pub mod printer;
pub mod types;

pub use builder::{AstBuilder, EnumBuilder, RecordBuilder};
pub use decls::{
    BaseSpecifier, Decl, EnumDecl, EnumId, EnumeratorDecl, FieldDecl, MethodDecl, MethodId,
    MethodKind, OverloadedOperator, RecordDecl, RecordId, TagKind, TargetAbi, TranslationUnit,
};
pub use layout::{Adjustment, RecordLayout, ThunkInfo, VTableLayout, VTableSlot};
pub use printer::TypePrinter;
pub use types::{QualType, TypeId, TypeKind};
