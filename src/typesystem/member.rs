//! Declared members of a type: fields, methods, the zero-argument constructor and
//! enumeration constants.

use std::{any::Any, fmt, sync::Arc};

use bitflags::bitflags;

use crate::{typesystem::TypeDescriptor, BoxError};

bitflags! {
    /// Modifiers of a declared member
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MemberFlags: u32 {
        /// Accessible from outside the declaring type
        const PUBLIC = 0x0001;
        /// Belongs to the type rather than to instances
        const STATIC = 0x0010;
    }
}

/// Value produced by a constructor
pub type BoxedValue = Box<dyn Any + Send + Sync>;

/// A zero-argument constructor
pub type ConstructorFn = Arc<dyn Fn() -> Result<BoxedValue, BoxError> + Send + Sync>;

/// A field declared directly on a type
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field name, as declared
    pub name: String,
    /// Declared type of the field
    pub field_type: TypeDescriptor,
    /// Modifiers
    pub flags: MemberFlags,
}

/// A method declared directly on a type
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    /// Method name, as declared
    pub name: String,
    /// Declared return type (`void` for none)
    pub return_type: TypeDescriptor,
    /// Modifiers
    pub flags: MemberFlags,
}

/// The zero-argument constructor of a type
#[derive(Clone)]
pub struct ConstructorDescriptor {
    /// Modifiers; only `PUBLIC` constructors are usable for blind instantiation
    pub flags: MemberFlags,
    /// Produces a fresh value on every call
    pub invoke: ConstructorFn,
}

impl ConstructorDescriptor {
    /// `true` if the constructor is public
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.flags.contains(MemberFlags::PUBLIC)
    }
}

impl fmt::Debug for ConstructorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorDescriptor")
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// A named constant of an enumeration
#[derive(Clone)]
pub struct EnumConstant {
    /// Constant name, matched case-sensitively
    pub name: String,
    /// Position in declaration order
    pub ordinal: u32,
    /// The value this constant stands for
    pub value: Arc<dyn Any + Send + Sync>,
}

impl fmt::Debug for EnumConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumConstant")
            .field("name", &self.name)
            .field("ordinal", &self.ordinal)
            .finish_non_exhaustive()
    }
}

/// A resolved enumeration constant, together with the enumeration it belongs to
#[derive(Debug, Clone)]
pub struct EnumValue {
    /// Full name of the enumeration
    pub type_name: String,
    /// The constant
    pub constant: EnumConstant,
}

impl EnumValue {
    /// Constant name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.constant.name
    }

    /// Position of the constant in declaration order
    #[must_use]
    pub fn ordinal(&self) -> u32 {
        self.constant.ordinal
    }

    /// Borrow the constant's value as `T`, if it has that type
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.constant.value.downcast_ref::<T>()
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.constant.ordinal == other.constant.ordinal
    }
}

impl Eq for EnumValue {}
