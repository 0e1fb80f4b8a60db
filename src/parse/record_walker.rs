// Sat Feb 21 2026 - Alex

use crate::ast::{RecordDecl, RecordId, RecordLayout, TranslationUnit, TypeKind};
use crate::config::ParseConfig;
use crate::model::{BaseClass, Field, FieldData, MemberVariable, Record};
use crate::parse::normalize::normalize_with;

/// Reconstructs the field list of a record from its ABI-assigned layout:
/// vtable pointer, non-virtual bases, data members, then virtual bases,
/// each at its absolute byte offset. Base subobjects are not recursed into;
/// the ABI layout already expresses that composition via offsets.
pub struct RecordWalker<'a> {
    unit: &'a TranslationUnit,
    config: &'a ParseConfig,
}

impl<'a> RecordWalker<'a> {
    pub fn new(unit: &'a TranslationUnit, config: &'a ParseConfig) -> Self {
        Self { unit, config }
    }

    pub fn add_fields(
        &self,
        record: &mut Record,
        base_offset: u64,
        decl: &RecordDecl,
        layout: &RecordLayout,
    ) {
        self.add_bases(record, base_offset, decl, layout);
        self.add_data_members(record, base_offset, decl, layout);
        self.add_virtual_bases(record, base_offset, decl, layout);
    }

    fn add_bases(
        &self,
        record: &mut Record,
        base_offset: u64,
        decl: &RecordDecl,
        layout: &RecordLayout,
    ) {
        let primary = layout.primary_base;

        // The vtable pointer is only an explicit field when no primary base
        // subobject contributes it.
        if decl.is_dynamic && primary.is_none() {
            record.fields.push(Field {
                offset: base_offset,
                data: FieldData::VTablePointer,
            });
        }

        let mut bases: Vec<RecordId> = decl.direct_bases().map(|b| b.record).collect();
        // Stable: declaration order breaks ties between empty bases sharing
        // an offset.
        bases.sort_by_key(|base| layout.base_class_offset(*base));

        for base in bases {
            let offset = base_offset + layout.base_class_offset(base);
            let base_decl = self.unit.record(base);

            if self.should_inline_empty_record(base_decl) {
                continue;
            }

            record.fields.push(Field {
                offset,
                data: FieldData::Base(BaseClass {
                    is_primary: primary == Some(base),
                    is_virtual: false,
                    type_name: base_decl.name.clone(),
                }),
            });
        }
    }

    fn add_data_members(
        &self,
        record: &mut Record,
        base_offset: u64,
        decl: &RecordDecl,
        layout: &RecordLayout,
    ) {
        let printer = self.unit.printer();

        let mut field_idx = 0;
        for field_decl in &decl.fields {
            // Unnamed bitfields are not members.
            if field_decl.is_unnamed_bitfield() {
                continue;
            }

            let rel_offset_in_bits = layout.field_offset_bits(field_idx);
            field_idx += 1;
            let offset = base_offset + rel_offset_in_bits / 8;

            // Is this a record?
            if let TypeKind::Record { record: member } = self.unit.type_kind(field_decl.ty.ty) {
                let member_decl = self.unit.record(*member);
                // Empty records in unions still occupy the discriminant
                // slot and are always emitted.
                if decl.is_union() || !self.should_inline_empty_record(member_decl) {
                    let member_ty = field_decl.ty.strip_qualifiers();
                    record.fields.push(Field {
                        offset,
                        data: FieldData::Member(MemberVariable {
                            bitfield_width: 0,
                            ty: normalize_with(self.unit, &printer, member_ty),
                            type_name: member_decl.name.clone(),
                            name: field_decl.name.clone(),
                        }),
                    });
                }
                continue;
            }

            record.fields.push(Field {
                offset,
                data: FieldData::Member(MemberVariable {
                    bitfield_width: field_decl.bitfield_width.unwrap_or(0),
                    ty: normalize_with(self.unit, &printer, field_decl.ty),
                    type_name: printer.print(field_decl.ty),
                    name: field_decl.name.clone(),
                }),
            });
        }
    }

    fn add_virtual_bases(
        &self,
        record: &mut Record,
        base_offset: u64,
        decl: &RecordDecl,
        layout: &RecordLayout,
    ) {
        let primary = layout.primary_base;

        let mut vbases: Vec<RecordId> = decl.direct_virtual_bases().map(|b| b.record).collect();
        vbases.sort_by_key(|base| layout.vbase_class_offset(*base));

        for base in vbases {
            let offset = base_offset + layout.vbase_class_offset(base);
            let base_decl = self.unit.record(base);

            if self.should_inline_empty_record(base_decl) {
                continue;
            }

            record.fields.push(Field {
                offset,
                data: FieldData::Base(BaseClass {
                    is_primary: primary == Some(base),
                    is_virtual: true,
                    type_name: base_decl.name.clone(),
                }),
            });
        }
    }

    /// Whether `decl` is an empty record that should be folded away.
    ///
    /// A trivial empty class (e.g. `struct Foo {};`) can still have a data
    /// size of one, so a zero data size is not the only signal: a record
    /// with no vtable, no bases, no virtual bases and no fields is empty
    /// too.
    pub fn should_inline_empty_record(&self, decl: &RecordDecl) -> bool {
        if !self.config.inline_empty_structs {
            return false;
        }

        if let Some(layout) = &decl.layout {
            if layout.data_size == 0 {
                return true;
            }
        }

        !decl.is_dynamic && decl.bases.is_empty() && decl.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AstBuilder, QualType, RecordBuilder, TagKind};
    use crate::model::RecordKind;

    fn empty_record(kind: RecordKind) -> Record {
        Record {
            is_anonymous: false,
            kind,
            name: String::new(),
            size: 0,
            data_size: 0,
            alignment: 0,
            fields: Vec::new(),
            vtable: None,
        }
    }

    fn walk(unit: &TranslationUnit, config: &ParseConfig, id: RecordId) -> Record {
        let decl = unit.record(id);
        let layout = decl.layout.as_ref().expect("complete record has a layout");
        let mut record = empty_record(RecordKind::Struct);
        RecordWalker::new(unit, config).add_fields(&mut record, 0, decl, layout);
        record
    }

    #[test]
    fn test_plain_struct_member_offsets() {
        let mut b = AstBuilder::new();
        let char_ty = b.named_type("char");
        let int_ty = b.named_type("int");
        let s = b.add_record(
            RecordBuilder::new("S", TagKind::Struct)
                .size(8)
                .data_size(8)
                .alignment(4)
                .field("a", QualType::unqualified(char_ty), 0)
                .field("b", QualType::unqualified(int_ty), 32),
        );
        let unit = b.finish();

        let record = walk(&unit, &ParseConfig::default(), s);
        assert_eq!(record.fields.len(), 2);
        assert_eq!(record.fields[0].offset, 0);
        assert_eq!(record.fields[1].offset, 4);
        let FieldData::Member(member) = &record.fields[1].data else {
            panic!("expected a member");
        };
        assert_eq!(member.name, "b");
        assert_eq!(member.type_name, "int");
        assert_eq!(member.bitfield_width, 0);
    }

    #[test]
    fn test_bitfields_share_storage_unit_offset() {
        let mut b = AstBuilder::new();
        let uint_ty = b.named_type("unsigned int");
        let bits = b.add_record(
            RecordBuilder::new("Bits", TagKind::Struct)
                .size(8)
                .data_size(8)
                .alignment(4)
                .bitfield("x", QualType::unqualified(uint_ty), 0, 3)
                .bitfield("y", QualType::unqualified(uint_ty), 3, 5)
                .field("z", QualType::unqualified(uint_ty), 32),
        );
        let unit = b.finish();

        let record = walk(&unit, &ParseConfig::default(), bits);
        assert_eq!(record.fields.len(), 3);
        assert_eq!(record.fields[0].offset, 0);
        assert_eq!(record.fields[1].offset, 0);
        assert_eq!(record.fields[2].offset, 4);

        let widths: Vec<u32> = record
            .fields
            .iter()
            .filter_map(|f| match &f.data {
                FieldData::Member(m) => Some(m.bitfield_width),
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![3, 5, 0]);
    }

    #[test]
    fn test_unnamed_bitfield_does_not_consume_offset_index() {
        let mut b = AstBuilder::new();
        let uint_ty = b.named_type("unsigned int");
        let s = b.add_record(
            RecordBuilder::new("Padded", TagKind::Struct)
                .size(8)
                .data_size(8)
                .alignment(4)
                .bitfield("x", QualType::unqualified(uint_ty), 0, 3)
                .unnamed_bitfield(QualType::unqualified(uint_ty), 5)
                .field("y", QualType::unqualified(uint_ty), 32),
        );
        let unit = b.finish();

        let record = walk(&unit, &ParseConfig::default(), s);
        assert_eq!(record.fields.len(), 2);
        assert_eq!(record.fields[1].offset, 4);
    }

    #[test]
    fn test_primary_base_suppresses_vtable_pointer() {
        let mut b = AstBuilder::new();
        let a = b.add_record(
            RecordBuilder::new("A", TagKind::Struct)
                .size(8)
                .data_size(8)
                .alignment(8)
                .polymorphic(),
        );
        let bb = b.add_record(
            RecordBuilder::new("B", TagKind::Struct)
                .size(8)
                .data_size(8)
                .alignment(8)
                .base(a, 0)
                .primary_base(a),
        );
        let unit = b.finish();

        let record = walk(&unit, &ParseConfig::default(), bb);
        assert_eq!(record.fields.len(), 1);
        assert_eq!(record.fields[0].offset, 0);
        let FieldData::Base(base) = &record.fields[0].data else {
            panic!("expected a base field");
        };
        assert!(base.is_primary);
        assert!(!base.is_virtual);
        assert_eq!(base.type_name, "A");
    }

    #[test]
    fn test_dynamic_class_without_primary_base_gets_vtable_pointer() {
        let mut b = AstBuilder::new();
        let int_ty = b.named_type("int");
        let p = b.add_record(
            RecordBuilder::new("P", TagKind::Class)
                .size(16)
                .data_size(12)
                .alignment(8)
                .polymorphic()
                .field("x", QualType::unqualified(int_ty), 64),
        );
        let unit = b.finish();

        let record = walk(&unit, &ParseConfig::default(), p);
        assert_eq!(record.fields.len(), 2);
        assert!(record.fields[0].is_vtable_pointer());
        assert_eq!(record.fields[0].offset, 0);
        assert_eq!(record.fields[1].offset, 8);
    }

    #[test]
    fn test_empty_bases_tie_break_by_declaration_order() {
        let mut b = AstBuilder::new();
        let e1 = b.add_record(
            RecordBuilder::new("E1", TagKind::Struct).size(1).data_size(1).alignment(1),
        );
        let e2 = b.add_record(
            RecordBuilder::new("E2", TagKind::Struct).size(1).data_size(1).alignment(1),
        );
        let d = b.add_record(
            RecordBuilder::new("D", TagKind::Struct)
                .size(4)
                .data_size(4)
                .alignment(4)
                .base(e2, 0)
                .base(e1, 0),
        );
        let unit = b.finish();

        let record = walk(&unit, &ParseConfig::default(), d);
        let names: Vec<&str> = record
            .fields
            .iter()
            .filter_map(|f| match &f.data {
                FieldData::Base(base) => Some(base.type_name.as_str()),
                _ => None,
            })
            .collect();
        // Both bases sit at offset 0; declaration order wins.
        assert_eq!(names, vec!["E2", "E1"]);
    }

    #[test]
    fn test_virtual_base_comes_after_members() {
        let mut b = AstBuilder::new();
        let int_ty = b.named_type("int");
        let v = b.add_record(
            RecordBuilder::new("V", TagKind::Struct).size(1).data_size(1).alignment(1),
        );
        let d = b.add_record(
            RecordBuilder::new("D", TagKind::Struct)
                .size(16)
                .data_size(16)
                .alignment(8)
                .virtual_base(v, 12)
                .field("x", QualType::unqualified(int_ty), 64),
        );
        let unit = b.finish();

        let record = walk(&unit, &ParseConfig::default(), d);
        // vtable pointer (virtual bases make D dynamic), member, vbase.
        assert_eq!(record.fields.len(), 3);
        assert!(record.fields[0].is_vtable_pointer());
        assert!(record.fields[1].is_member());
        let FieldData::Base(base) = &record.fields[2].data else {
            panic!("expected a virtual base");
        };
        assert!(base.is_virtual);
        assert_eq!(base.type_name, "V");
        assert_eq!(record.fields[2].offset, 12);
    }

    #[test]
    fn test_inline_empty_drops_bases_and_members_but_not_union_members() {
        let mut b = AstBuilder::new();
        let empty = b.add_record(
            RecordBuilder::new("Empty", TagKind::Struct).size(1).data_size(1).alignment(1),
        );
        let empty_ty = b.record_type(empty);
        let int_ty = b.named_type("int");

        let d = b.add_record(
            RecordBuilder::new("D", TagKind::Struct)
                .size(4)
                .data_size(4)
                .alignment(4)
                .base(empty, 0)
                .field("tag", QualType::unqualified(empty_ty), 0)
                .field("x", QualType::unqualified(int_ty), 0),
        );
        let u = b.add_record(
            RecordBuilder::new("U", TagKind::Union)
                .size(4)
                .data_size(4)
                .alignment(4)
                .field("tag", QualType::unqualified(empty_ty), 0)
                .field("x", QualType::unqualified(int_ty), 0),
        );
        let unit = b.finish();

        let config = ParseConfig::default().with_inline_empty_structs(true);

        let record = walk(&unit, &config, d);
        let names: Vec<&str> = record
            .fields
            .iter()
            .filter_map(|f| match &f.data {
                FieldData::Member(m) => Some(m.name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["x"]);
        assert!(record.fields.iter().all(|f| !f.is_base()));

        let record = walk(&unit, &config, u);
        assert_eq!(record.fields.len(), 2);
    }

    #[test]
    fn test_embedded_record_member() {
        let mut b = AstBuilder::new();
        let inner = b.add_record(
            RecordBuilder::new("Inner", TagKind::Struct).size(4).data_size(4).alignment(4),
        );
        let inner_ty = b.record_type(inner);
        let outer = b.add_record(
            RecordBuilder::new("Outer", TagKind::Struct)
                .size(4)
                .data_size(4)
                .alignment(4)
                .field("in", QualType::unqualified(inner_ty).with_const(), 0),
        );
        let unit = b.finish();

        let record = walk(&unit, &ParseConfig::default(), outer);
        let FieldData::Member(member) = &record.fields[0].data else {
            panic!("expected a member");
        };
        // The record member's type drops the field qualifiers.
        assert_eq!(member.type_name, "Inner");
        assert_eq!(
            member.ty,
            crate::model::ComplexType::name("Inner"),
        );
    }
}
