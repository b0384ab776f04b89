//! Registry-backed type system.
//!
//! This module provides an explicit replacement for runtime reflection: types are described
//! once, registered by their full name, and afterwards resolved, constructed and inspected
//! purely by name.
//!
//! # Key Components
//!
//! - [`TypeHandle`]: A registered type with its declared members
//! - [`TypeDescriptor`]: A reference to a type, possibly with bound type arguments
//! - [`TypeRegistry`]: Process-wide storage of all registered types
//! - [`TypeResolver`]: Name based resolution, construction and member lookup
//! - [`TypeBuilder`]: Fluent API for describing and registering types
//! - [`PrimitiveKind`]: Built-in primitive types (`i32`, `string`, `void`, ...)
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use typescope::typesystem::{TypeBuilder, TypeDescriptor, TypeRegistry, TypeResolver};
//!
//! #[derive(Default)]
//! struct User {
//!     id: i64,
//! }
//!
//! let registry = Arc::new(TypeRegistry::new());
//! TypeBuilder::class("app.User")
//!     .field("id", TypeDescriptor::named("i64"))
//!     .default_constructor::<User>()
//!     .register(&registry)?;
//!
//! let resolver = TypeResolver::new(registry);
//! let user = resolver.construct(Some(&TypeDescriptor::class("app.User")))?.unwrap();
//! assert_eq!(user.downcast_ref::<User>().unwrap().id, 0);
//! # Ok::<(), typescope::Error>(())
//! ```

mod builder;
mod descriptor;
mod instance;
mod member;
mod primitives;
mod registry;
mod resolver;
mod token;

use std::sync::Arc;

use bitflags::bitflags;

pub use builder::TypeBuilder;
pub use descriptor::{TypeDescriptor, CLASS_PREFIX, INTERFACE_PREFIX};
pub use instance::Instance;
pub use member::{
    BoxedValue, ConstructorDescriptor, ConstructorFn, EnumConstant, EnumValue, FieldDescriptor,
    MemberFlags, MethodDescriptor,
};
pub use primitives::PrimitiveKind;
pub use registry::TypeRegistry;
pub use resolver::TypeResolver;
pub use token::Token;

/// Reference to a `TypeHandle`
pub type TypeHandleRc = Arc<TypeHandle>;

bitflags! {
    /// Modifiers of a type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        /// Visible outside of its namespace
        const PUBLIC = 0x0001;
        /// Cannot be instantiated directly
        const ABSTRACT = 0x0080;
        /// Cannot be extended
        const FINAL = 0x0100;
    }
}

/// The kind of a registered type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFlavor {
    /// A built-in primitive
    Primitive(PrimitiveKind),
    /// A class
    Class,
    /// An interface
    Interface,
    /// An enumeration with named constants
    Enum,
}

/// A registered type, with everything that was declared directly on it
///
/// Members are *declared* members only; nothing is inherited from the parent type.
pub struct TypeHandle {
    /// Token, assigned when the type is inserted into a registry (null before that)
    pub token: Token,
    /// The kind of type
    pub flavor: TypeFlavor,
    /// Namespace, everything before the last `.` of the full name (can be empty)
    pub namespace: String,
    /// Simple name
    pub name: String,
    /// Modifiers
    pub flags: TypeFlags,
    /// The declared parent aka 'extends', possibly parameterized
    base: Option<TypeDescriptor>,
    /// Declared fields, in declaration order
    pub fields: boxcar::Vec<FieldDescriptor>,
    /// Declared methods, in declaration order
    pub methods: boxcar::Vec<MethodDescriptor>,
    /// The zero-argument constructor, if one is declared
    pub constructor: Option<ConstructorDescriptor>,
    /// Enumeration constants, in declaration order
    pub constants: boxcar::Vec<EnumConstant>,
}

impl TypeHandle {
    /// Create a new type without members
    ///
    /// ## Arguments
    /// * 'flavor'   - The kind of type
    /// * 'fullname' - Full name, `namespace.Name`
    /// * 'flags'    - Type modifiers
    /// * 'base'     - The declared parent, if any
    pub fn new(
        flavor: TypeFlavor,
        fullname: &str,
        flags: TypeFlags,
        base: Option<TypeDescriptor>,
    ) -> Self {
        let (namespace, name) = match fullname.rfind('.') {
            Some(split) => (&fullname[..split], &fullname[split + 1..]),
            None => ("", fullname),
        };

        TypeHandle {
            token: Token::new(0),
            flavor,
            namespace: namespace.to_string(),
            name: name.to_string(),
            flags,
            base,
            fields: boxcar::Vec::new(),
            methods: boxcar::Vec::new(),
            constructor: None,
            constants: boxcar::Vec::new(),
        }
    }

    /// Create the handle of a built-in primitive
    pub fn primitive(kind: PrimitiveKind) -> Self {
        let mut handle = TypeHandle::new(
            TypeFlavor::Primitive(kind),
            kind.name(),
            TypeFlags::PUBLIC | TypeFlags::FINAL,
            None,
        );
        handle.token = kind.token();
        handle
    }

    /// Returns the full name (Namespace.Name) of the type
    pub fn fullname(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{0}.{1}", self.namespace, self.name)
        }
    }

    /// The declared parent of this type, if it has one
    pub fn base(&self) -> Option<&TypeDescriptor> {
        self.base.as_ref()
    }

    /// A descriptor referring to this type
    ///
    /// Interfaces produce [`TypeDescriptor::Interface`], primitives
    /// [`TypeDescriptor::Named`] and everything else [`TypeDescriptor::Class`].
    pub fn descriptor(&self) -> TypeDescriptor {
        match self.flavor {
            TypeFlavor::Interface => TypeDescriptor::Interface(self.fullname()),
            TypeFlavor::Primitive(kind) => kind.descriptor(),
            TypeFlavor::Class | TypeFlavor::Enum => TypeDescriptor::Class(self.fullname()),
        }
    }

    /// `true` if this type is an enumeration
    pub fn is_enum(&self) -> bool {
        self.flavor == TypeFlavor::Enum
    }

    /// `true` if this type is an interface
    pub fn is_interface(&self) -> bool {
        self.flavor == TypeFlavor::Interface
    }

    /// `true` if this type is a built-in primitive
    pub fn is_primitive(&self) -> bool {
        matches!(self.flavor, TypeFlavor::Primitive(_))
    }

    /// `true` if this type is marked abstract
    pub fn is_abstract(&self) -> bool {
        self.flags.contains(TypeFlags::ABSTRACT)
    }

    /// `true` if instances of this type may be created through its constructor
    pub fn is_instantiable(&self) -> bool {
        self.flavor == TypeFlavor::Class && !self.is_abstract()
    }
}

impl std::fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeHandle")
            .field("token", &self.token)
            .field("flavor", &self.flavor)
            .field("fullname", &self.fullname())
            .field("flags", &self.flags)
            .field("base", &self.base)
            .field("fields", &self.fields.count())
            .field("methods", &self.methods.count())
            .finish_non_exhaustive()
    }
}
