// Fri Feb 20 2026 - Alex

pub mod context;
pub mod normalize;
pub mod operators;
pub mod record_walker;
pub mod vtable_walker;

pub use context::ParseContext;
pub use normalize::normalize;
pub use operators::c_style_operator_name;
pub use record_walker::RecordWalker;
pub use vtable_walker::walk_vtable;
