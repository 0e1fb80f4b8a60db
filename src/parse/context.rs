// Sat Feb 21 2026 - Alex

use indexmap::IndexSet;

use crate::ast::{Decl, EnumId, RecordId, TagKind, TranslationUnit};
use crate::config::ParseConfig;
use crate::model::{Enum, Enumerator, ParseResult, Record, RecordKind};
use crate::parse::record_walker::RecordWalker;
use crate::parse::vtable_walker::walk_vtable;

/// Drives the declaration traversal for an engine run: filters eligible
/// declarations, deduplicates them by canonical name and accumulates the
/// result. One context may process several translation units; the
/// deduplication set spans the whole run.
pub struct ParseContext {
    result: ParseResult,
    config: ParseConfig,
    processed: IndexSet<String>,
}

impl ParseContext {
    pub fn new(config: &ParseConfig) -> Self {
        Self {
            result: ParseResult::default(),
            config: config.clone(),
            processed: IndexSet::new(),
        }
    }

    pub fn process_unit(&mut self, unit: &TranslationUnit) {
        if !unit.abi.is_itanium_family() {
            log::warn!("refusing to process a {:?} ABI translation unit", unit.abi);
            self.result.error = "only the Itanium C++ ABI is supported".to_string();
            return;
        }

        for decl in &unit.decls {
            match *decl {
                Decl::Enum(id) => self.handle_enum_decl(unit, id),
                Decl::Record(id) => self.handle_record_decl(unit, id),
            }
        }
    }

    pub fn result(&self) -> &ParseResult {
        &self.result
    }

    pub fn result_mut(&mut self) -> &mut ParseResult {
        &mut self.result
    }

    pub fn into_result(self) -> ParseResult {
        self.result
    }

    /// The eligibility filter: definitions only, valid, no primary template
    /// patterns (instantiations are fine), each canonical name once.
    fn can_process(
        &mut self,
        name: &str,
        is_complete: bool,
        is_invalid: bool,
        is_template_pattern: bool,
    ) -> bool {
        if is_invalid || !is_complete {
            return false;
        }

        // For templated declarations we only care about instantiations;
        // a primary template has no concrete layout.
        if is_template_pattern {
            return false;
        }

        if self.processed.contains(name) {
            log::debug!("skipping duplicate declaration {}", name);
            return false;
        }

        self.processed.insert(name.to_string());
        true
    }

    fn handle_enum_decl(&mut self, unit: &TranslationUnit, id: EnumId) {
        let decl = unit.enum_decl(id);
        if !self.can_process(
            &decl.name,
            decl.is_complete,
            decl.is_invalid,
            decl.is_template_pattern,
        ) {
            return;
        }

        let printer = unit.printer();

        self.result.enums.push(Enum {
            is_scoped: decl.is_scoped,
            is_anonymous: decl.ident.is_empty(),
            name: decl.name.clone(),
            underlying_type_name: printer.print(decl.underlying_type),
            underlying_type_size: decl.underlying_type_size,
            enumerators: decl
                .enumerators
                .iter()
                .map(|e| Enumerator {
                    identifier: e.identifier.clone(),
                    value: e.value.to_string(),
                })
                .collect(),
        });
    }

    fn handle_record_decl(&mut self, unit: &TranslationUnit, id: RecordId) {
        let decl = unit.record(id);
        if !self.can_process(
            &decl.name,
            decl.is_complete,
            decl.is_invalid,
            decl.is_template_pattern,
        ) {
            return;
        }

        let Some(layout) = decl.layout.as_ref() else {
            // A complete record always carries a layout; treat a missing one
            // like an invalid declaration.
            log::debug!("skipping {}: no layout", decl.name);
            return;
        };

        let walker = RecordWalker::new(unit, &self.config);

        // Inlineable empty records disappear from the top level as well.
        if walker.should_inline_empty_record(decl) {
            return;
        }

        let mut record = Record {
            is_anonymous: decl.is_anonymous,
            kind: match decl.tag {
                TagKind::Struct => RecordKind::Struct,
                TagKind::Interface | TagKind::Class => RecordKind::Class,
                TagKind::Union => RecordKind::Union,
            },
            name: decl.name.clone(),
            size: layout.size,
            data_size: layout.data_size,
            alignment: layout.alignment,
            fields: Vec::new(),
            vtable: None,
        };

        walker.add_fields(&mut record, 0, decl, layout);
        record.vtable = walk_vtable(unit, decl);

        self.result.records.push(record);
    }
}
