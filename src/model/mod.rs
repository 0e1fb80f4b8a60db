// Wed Feb 18 2026 - Alex

pub mod complex_type;
pub mod enums;
pub mod record;
pub mod result;
pub mod vtable;

pub use complex_type::ComplexType;
pub use enums::{Enum, Enumerator};
pub use record::{BaseClass, Field, FieldData, MemberVariable, Record, RecordKind};
pub use result::ParseResult;
pub use vtable::{FunctionPointer, VTable, VTableComponent};
