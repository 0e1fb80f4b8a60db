// Wed Feb 18 2026 - Alex

//! Extracts the physical memory layout of C++ records and their Itanium ABI
//! vtable layouts from compiled translation units, as a serializable data
//! model. Useful for reproducing exact field offsets, base ordering and
//! vtable slots in another codebase.

pub mod ast;
pub mod config;
pub mod driver;
pub mod model;
pub mod output;
pub mod parse;

pub use config::ParseConfig;
pub use driver::{parse_records, parse_records_in_directory, SnapshotLoader, TuProvider};
pub use model::{
    ComplexType, Enum, Field, FieldData, ParseResult, Record, RecordKind, VTable, VTableComponent,
};
pub use output::JsonSerializer;
pub use parse::ParseContext;
