// Wed Feb 18 2026 - Alex

use std::fmt;

/// A slightly C-ified view of a C++ type.
///
/// For instance, `sead::SafeStringBase<char>* [3]` is decomposed as
/// `Array[ Pointer[ Name[sead::SafeStringBase<char>] ], 3 ]`
/// (note how `sead::SafeStringBase<char>` is not further decomposed).
///
/// References are folded into pointers. Local const/volatile qualifiers are
/// stripped from each name leaf and recorded as flags; qualifiers nested
/// inside template arguments stay embedded in the leaf text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplexType {
    Name {
        name: String,
        is_const: bool,
        is_volatile: bool,
    },
    Pointer {
        pointee_type: Box<ComplexType>,
    },
    Array {
        element_type: Box<ComplexType>,
        size: u64,
    },
    Function {
        param_types: Vec<ComplexType>,
        return_type: Box<ComplexType>,
    },
    /// A pointer-to-member (data or function). Note that a pointer-to-member
    /// is *not* actually a pointer and the in-memory representation usually
    /// differs.
    MemberPointer {
        class_type: Box<ComplexType>,
        pointee_type: Box<ComplexType>,
        repr: String,
    },
    Atomic {
        value_type: Box<ComplexType>,
    },
}

impl ComplexType {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name {
            name: name.into(),
            is_const: false,
            is_volatile: false,
        }
    }

    pub fn pointer_to(pointee: ComplexType) -> Self {
        Self::Pointer {
            pointee_type: Box::new(pointee),
        }
    }

    pub fn is_name(&self) -> bool {
        matches!(self, Self::Name { .. })
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer { .. })
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array { .. })
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function { .. })
    }
}

impl fmt::Display for ComplexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name {
                name,
                is_const,
                is_volatile,
            } => {
                if *is_const {
                    write!(f, "const ")?;
                }
                if *is_volatile {
                    write!(f, "volatile ")?;
                }
                write!(f, "{}", name)
            }
            Self::Pointer { pointee_type } => write!(f, "{}*", pointee_type),
            Self::Array { element_type, size } => write!(f, "{}[{}]", element_type, size),
            Self::Function {
                param_types,
                return_type,
            } => {
                write!(f, "{} (", return_type)?;
                for (i, param) in param_types.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, ")")
            }
            Self::MemberPointer { repr, .. } => write!(f, "{}", repr),
            Self::Atomic { value_type } => write!(f, "_Atomic({})", value_type),
        }
    }
}
