// Sun Feb 22 2026 - Alex

use serde_json::{json, Map, Value};

use crate::model::{
    ComplexType, Enum, Field, FieldData, FunctionPointer, ParseResult, Record, VTableComponent,
};

/// Serializes a [`ParseResult`] into the output JSON document: one object
/// with an `enums` array and a `records` array. The core error is not part
/// of the document; callers report it separately.
pub struct JsonSerializer {
    pretty_print: bool,
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self { pretty_print: true }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn serialize(&self, result: &ParseResult) -> String {
        let value = self.to_value(result);
        if self.pretty_print {
            serde_json::to_string_pretty(&value).unwrap_or_default()
        } else {
            serde_json::to_string(&value).unwrap_or_default()
        }
    }

    pub fn to_value(&self, result: &ParseResult) -> Value {
        json!({
            "enums": result.enums.iter().map(enum_value).collect::<Vec<_>>(),
            "records": result.records.iter().map(record_value).collect::<Vec<_>>(),
        })
    }
}

fn enum_value(enum_def: &Enum) -> Value {
    json!({
        "is_scoped": enum_def.is_scoped,
        "is_anonymous": enum_def.is_anonymous,
        "name": enum_def.name,
        "underlying_type_name": enum_def.underlying_type_name,
        "underlying_type_size": enum_def.underlying_type_size,
        "enumerators": enum_def.enumerators.iter().map(|e| json!({
            "identifier": e.identifier,
            "value": e.value,
        })).collect::<Vec<_>>(),
    })
}

fn record_value(record: &Record) -> Value {
    json!({
        "is_anonymous": record.is_anonymous,
        "kind": record.kind as i64,
        "name": record.name,
        "size": record.size,
        "data_size": record.data_size,
        "alignment": record.alignment,
        "fields": record.fields.iter().map(field_value).collect::<Vec<_>>(),
        "vtable": match &record.vtable {
            Some(vtable) => Value::Array(
                vtable.components.iter().map(component_value).collect(),
            ),
            None => Value::Null,
        },
    })
}

fn field_value(field: &Field) -> Value {
    let mut object = Map::new();
    object.insert("offset".into(), json!(field.offset));

    match &field.data {
        FieldData::Member(member) => {
            object.insert("kind".into(), json!("member"));
            if member.bitfield_width != 0 {
                object.insert("bitfield_width".into(), json!(member.bitfield_width));
            }
            object.insert("type".into(), complex_type_value(&member.ty));
            object.insert("type_name".into(), json!(member.type_name));
            object.insert("name".into(), json!(member.name));
        }
        FieldData::Base(base) => {
            object.insert("kind".into(), json!("base"));
            object.insert("is_primary".into(), json!(base.is_primary));
            object.insert("is_virtual".into(), json!(base.is_virtual));
            object.insert("type_name".into(), json!(base.type_name));
        }
        FieldData::VTablePointer => {
            object.insert("kind".into(), json!("vtable_ptr"));
        }
    }

    Value::Object(object)
}

fn component_value(component: &VTableComponent) -> Value {
    match component {
        VTableComponent::VCallOffset { offset } => json!({
            "kind": "vcall_offset",
            "offset": offset,
        }),
        VTableComponent::VBaseOffset { offset } => json!({
            "kind": "vbase_offset",
            "offset": offset,
        }),
        VTableComponent::OffsetToTop { offset } => json!({
            "kind": "offset_to_top",
            "offset": offset,
        }),
        VTableComponent::Rtti { class_name } => json!({
            "kind": "rtti",
            "class_name": class_name,
        }),
        VTableComponent::FunctionPointer(func) => function_value("func", func),
        VTableComponent::CompleteDtorPointer(func) => function_value("complete_dtor", func),
        VTableComponent::DeletingDtorPointer(func) => function_value("deleting_dtor", func),
    }
}

fn function_value(kind: &str, func: &FunctionPointer) -> Value {
    let mut object = Map::new();
    object.insert("kind".into(), json!(kind));
    object.insert("is_thunk".into(), json!(func.is_thunk));
    object.insert("is_const".into(), json!(func.is_const));

    if func.is_thunk {
        object.insert("return_adjustment".into(), json!(func.return_adjustment));
        object.insert(
            "return_adjustment_vbase_offset_offset".into(),
            json!(func.return_adjustment_vbase_offset_offset),
        );
        object.insert("this_adjustment".into(), json!(func.this_adjustment));
        object.insert(
            "this_adjustment_vcall_offset_offset".into(),
            json!(func.this_adjustment_vcall_offset_offset),
        );
    }

    object.insert("repr".into(), json!(func.repr));
    object.insert("function_name".into(), json!(func.function_name));
    object.insert("type".into(), complex_type_value(&func.ty));

    Value::Object(object)
}

fn complex_type_value(ty: &ComplexType) -> Value {
    match ty {
        ComplexType::Name {
            name,
            is_const,
            is_volatile,
        } => json!({
            "kind": "type_name",
            "name": name,
            "is_const": is_const,
            "is_volatile": is_volatile,
        }),
        ComplexType::Pointer { pointee_type } => json!({
            "kind": "pointer",
            "pointee_type": complex_type_value(pointee_type),
        }),
        ComplexType::Array { element_type, size } => json!({
            "kind": "array",
            "element_type": complex_type_value(element_type),
            "size": size,
        }),
        ComplexType::Function {
            param_types,
            return_type,
        } => json!({
            "kind": "function",
            "param_types": param_types.iter().map(complex_type_value).collect::<Vec<_>>(),
            "return_type": complex_type_value(return_type),
        }),
        ComplexType::MemberPointer {
            class_type,
            pointee_type,
            repr,
        } => json!({
            "kind": "member_pointer",
            "class_type": complex_type_value(class_type),
            "pointee_type": complex_type_value(pointee_type),
            "repr": repr,
        }),
        ComplexType::Atomic { value_type } => json!({
            "kind": "atomic",
            "value_type": complex_type_value(value_type),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BaseClass, MemberVariable, RecordKind, VTable};

    fn sample_record() -> Record {
        Record {
            is_anonymous: false,
            kind: RecordKind::Struct,
            name: "S".into(),
            size: 8,
            data_size: 8,
            alignment: 4,
            fields: vec![
                Field {
                    offset: 0,
                    data: FieldData::Member(MemberVariable {
                        bitfield_width: 0,
                        ty: ComplexType::name("char"),
                        type_name: "char".into(),
                        name: "a".into(),
                    }),
                },
                Field {
                    offset: 4,
                    data: FieldData::Member(MemberVariable {
                        bitfield_width: 3,
                        ty: ComplexType::name("unsigned int"),
                        type_name: "unsigned int".into(),
                        name: "b".into(),
                    }),
                },
            ],
            vtable: None,
        }
    }

    #[test]
    fn test_record_schema() {
        let result = ParseResult {
            error: String::new(),
            enums: Vec::new(),
            records: vec![sample_record()],
        };

        let value = JsonSerializer::new().to_value(&result);
        let record = &value["records"][0];

        assert_eq!(record["kind"], 1);
        assert_eq!(record["vtable"], Value::Null);

        let fields = record["fields"].as_array().unwrap();
        // bitfield_width is only emitted when non-zero.
        assert!(fields[0].get("bitfield_width").is_none());
        assert_eq!(fields[1]["bitfield_width"], 3);
        assert_eq!(fields[0]["kind"], "member");
        assert_eq!(fields[0]["type"]["kind"], "type_name");
    }

    #[test]
    fn test_base_and_vtable_schema() {
        let mut record = sample_record();
        record.fields = vec![Field {
            offset: 0,
            data: FieldData::Base(BaseClass {
                is_primary: true,
                is_virtual: false,
                type_name: "A".into(),
            }),
        }];
        record.vtable = Some(VTable {
            components: vec![
                VTableComponent::OffsetToTop { offset: 0 },
                VTableComponent::Rtti {
                    class_name: "S".into(),
                },
            ],
        });

        let result = ParseResult {
            error: String::new(),
            enums: Vec::new(),
            records: vec![record],
        };
        let value = JsonSerializer::new().with_pretty_print(false).to_value(&result);
        let record = &value["records"][0];

        assert_eq!(record["fields"][0]["kind"], "base");
        assert_eq!(record["fields"][0]["is_primary"], true);
        assert_eq!(record["vtable"][0]["kind"], "offset_to_top");
        assert_eq!(record["vtable"][1]["kind"], "rtti");
        assert_eq!(record["vtable"][1]["class_name"], "S");
    }

    #[test]
    fn test_thunk_fields_only_for_thunks() {
        let plain = FunctionPointer {
            repr: "void S::f()".into(),
            function_name: "f".into(),
            ty: ComplexType::Function {
                param_types: Vec::new(),
                return_type: Box::new(ComplexType::name("void")),
            },
            ..FunctionPointer::default()
        };
        let value = function_value("func", &plain);
        assert!(value.get("this_adjustment").is_none());

        let thunk = FunctionPointer {
            is_thunk: true,
            this_adjustment: -16,
            ..plain
        };
        let value = function_value("func", &thunk);
        assert_eq!(value["this_adjustment"], -16);
    }
}
