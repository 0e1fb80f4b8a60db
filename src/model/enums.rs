// Wed Feb 18 2026 - Alex

/// A single enumerator, with its value pre-formatted as a signed decimal
/// string so 64-bit unsigned enumerators survive JSON round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerator {
    pub identifier: String,
    pub value: String,
}

/// An enum definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enum {
    pub is_scoped: bool,
    pub is_anonymous: bool,
    /// Size of the underlying integer type in bytes.
    pub underlying_type_size: u64,
    /// Fully qualified name.
    pub name: String,
    pub underlying_type_name: String,
    pub enumerators: Vec<Enumerator>,
}
