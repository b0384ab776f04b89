//! Builder for type registrations.
//!
//! This module provides the [`TypeBuilder`] struct, which offers a fluent API for describing a
//! class, interface or enumeration together with its declared members, and for inserting the
//! result into a [`TypeRegistry`].
//!
//! # Example
//!
//! ```rust
//! use typescope::typesystem::{TypeBuilder, TypeDescriptor, TypeRegistry};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Color {
//!     Red,
//!     Green,
//! }
//!
//! let registry = TypeRegistry::new();
//! let color = TypeBuilder::enumeration("app.Color")
//!     .constant("RED", Color::Red)
//!     .constant("GREEN", Color::Green)
//!     .register(&registry)?;
//!
//! assert!(color.is_enum());
//! assert_eq!(color.constants.count(), 2);
//! # Ok::<(), typescope::Error>(())
//! ```

use std::{any::Any, collections::HashSet, sync::Arc};

use crate::{
    typesystem::{
        BoxedValue, ConstructorDescriptor, EnumConstant, FieldDescriptor, MemberFlags,
        MethodDescriptor, TypeDescriptor, TypeFlags, TypeFlavor, TypeHandle, TypeHandleRc,
        TypeRegistry,
    },
    BoxError, Result,
};

/// Provides a fluent API for describing and registering a type
pub struct TypeBuilder {
    /// The kind of type being built
    flavor: TypeFlavor,
    /// Full name of the type
    fullname: String,
    /// Type modifiers
    flags: TypeFlags,
    /// Declared parent
    base: Option<TypeDescriptor>,
    /// Declared fields
    fields: Vec<FieldDescriptor>,
    /// Declared methods
    methods: Vec<MethodDescriptor>,
    /// Zero-argument constructor
    constructor: Option<ConstructorDescriptor>,
    /// Enumeration constants as (name, value)
    constants: Vec<(String, Arc<dyn Any + Send + Sync>)>,
}

impl TypeBuilder {
    fn new(flavor: TypeFlavor, fullname: String, flags: TypeFlags) -> Self {
        TypeBuilder {
            flavor,
            fullname,
            flags,
            base: None,
            fields: Vec::new(),
            methods: Vec::new(),
            constructor: None,
            constants: Vec::new(),
        }
    }

    /// Start building a public class
    ///
    /// ## Arguments
    /// * 'fullname' - Full name of the class, `namespace.Name`
    pub fn class(fullname: impl Into<String>) -> Self {
        Self::new(TypeFlavor::Class, fullname.into(), TypeFlags::PUBLIC)
    }

    /// Start building a public interface
    ///
    /// ## Arguments
    /// * 'fullname' - Full name of the interface, `namespace.Name`
    pub fn interface(fullname: impl Into<String>) -> Self {
        Self::new(
            TypeFlavor::Interface,
            fullname.into(),
            TypeFlags::PUBLIC | TypeFlags::ABSTRACT,
        )
    }

    /// Start building a public enumeration
    ///
    /// ## Arguments
    /// * 'fullname' - Full name of the enumeration, `namespace.Name`
    pub fn enumeration(fullname: impl Into<String>) -> Self {
        Self::new(
            TypeFlavor::Enum,
            fullname.into(),
            TypeFlags::PUBLIC | TypeFlags::FINAL,
        )
    }

    /// Replace the type modifiers
    #[must_use]
    pub fn flags(mut self, flags: TypeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Mark the type as abstract
    #[must_use]
    pub fn abstract_class(mut self) -> Self {
        self.flags |= TypeFlags::ABSTRACT;
        self
    }

    /// Set the declared parent
    ///
    /// Pass a [`TypeDescriptor::Parameterized`] to bind type arguments to the parent's type
    /// parameters at this declaration.
    #[must_use]
    pub fn extends(mut self, base: TypeDescriptor) -> Self {
        self.base = Some(base);
        self
    }

    /// Declare a private instance field
    #[must_use]
    pub fn field(self, name: impl Into<String>, field_type: TypeDescriptor) -> Self {
        self.field_with_flags(name, field_type, MemberFlags::empty())
    }

    /// Declare a field with explicit modifiers
    #[must_use]
    pub fn field_with_flags(
        mut self,
        name: impl Into<String>,
        field_type: TypeDescriptor,
        flags: MemberFlags,
    ) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            field_type,
            flags,
        });
        self
    }

    /// Declare a public instance method
    #[must_use]
    pub fn method(self, name: impl Into<String>, return_type: TypeDescriptor) -> Self {
        self.method_with_flags(name, return_type, MemberFlags::PUBLIC)
    }

    /// Declare a method with explicit modifiers
    #[must_use]
    pub fn method_with_flags(
        mut self,
        name: impl Into<String>,
        return_type: TypeDescriptor,
        flags: MemberFlags,
    ) -> Self {
        self.methods.push(MethodDescriptor {
            name: name.into(),
            return_type,
            flags,
        });
        self
    }

    /// Declare a public zero-argument constructor producing `T::default()`
    #[must_use]
    pub fn default_constructor<T>(self) -> Self
    where
        T: Default + Any + Send + Sync,
    {
        self.constructor(|| Ok(Box::new(T::default()) as BoxedValue))
    }

    /// Declare a public zero-argument constructor
    ///
    /// The function runs on every construction; a returned error is reported to the caller
    /// as [`crate::Error::Construction`].
    #[must_use]
    pub fn constructor<F>(self, invoke: F) -> Self
    where
        F: Fn() -> std::result::Result<BoxedValue, BoxError> + Send + Sync + 'static,
    {
        self.constructor_with_flags(invoke, MemberFlags::PUBLIC)
    }

    /// Declare a zero-argument constructor that is not accessible for blind instantiation
    #[must_use]
    pub fn private_constructor<F>(self, invoke: F) -> Self
    where
        F: Fn() -> std::result::Result<BoxedValue, BoxError> + Send + Sync + 'static,
    {
        self.constructor_with_flags(invoke, MemberFlags::empty())
    }

    fn constructor_with_flags<F>(mut self, invoke: F, flags: MemberFlags) -> Self
    where
        F: Fn() -> std::result::Result<BoxedValue, BoxError> + Send + Sync + 'static,
    {
        self.constructor = Some(ConstructorDescriptor {
            flags,
            invoke: Arc::new(invoke),
        });
        self
    }

    /// Declare an enumeration constant; ordinals follow declaration order
    #[must_use]
    pub fn constant<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        let value: Arc<dyn Any + Send + Sync> = Arc::new(value);
        self.constants.push((name.into(), value));
        self
    }

    /// Finish the description
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if:
    /// - the full name is empty or contains whitespace, `<`, `>` or `,`
    /// - constants are declared on something other than an enumeration
    /// - a constant name is declared twice
    /// - a constructor is declared on an interface or enumeration
    pub fn build(self) -> Result<TypeHandle> {
        if !is_valid_fullname(&self.fullname) {
            return Err(malformed_error!("Invalid type name '{}'", self.fullname));
        }

        if !self.constants.is_empty() && self.flavor != TypeFlavor::Enum {
            return Err(malformed_error!(
                "Type '{}' declares constants but is not an enum",
                self.fullname
            ));
        }

        if self.constructor.is_some()
            && matches!(self.flavor, TypeFlavor::Interface | TypeFlavor::Enum)
        {
            return Err(malformed_error!(
                "Type '{}' can not declare a constructor",
                self.fullname
            ));
        }

        let mut seen = HashSet::new();
        for (name, _) in &self.constants {
            if !seen.insert(name.as_str()) {
                return Err(malformed_error!(
                    "Duplicate enum constant '{}' in '{}'",
                    name,
                    self.fullname
                ));
            }
        }

        let mut handle = TypeHandle::new(self.flavor, &self.fullname, self.flags, self.base);
        handle.constructor = self.constructor;
        for field in self.fields {
            handle.fields.push(field);
        }
        for method in self.methods {
            handle.methods.push(method);
        }
        for (ordinal, (name, value)) in self.constants.into_iter().enumerate() {
            handle.constants.push(EnumConstant {
                name,
                ordinal: ordinal as u32,
                value,
            });
        }

        Ok(handle)
    }

    /// Finish the description and insert it into `registry`
    ///
    /// # Errors
    /// Returns an error if [`TypeBuilder::build`] fails or the registry refuses the type.
    pub fn register(self, registry: &TypeRegistry) -> Result<TypeHandleRc> {
        registry.insert(self.build()?)
    }
}

fn is_valid_fullname(fullname: &str) -> bool {
    !fullname.is_empty()
        && !fullname.starts_with('.')
        && !fullname.ends_with('.')
        && !fullname
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | ','))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_build_class_members() {
        let handle = TypeBuilder::class("app.User")
            .extends(TypeDescriptor::class("app.Entity"))
            .field("id", TypeDescriptor::named("i64"))
            .field_with_flags(
                "COUNT",
                TypeDescriptor::named("u32"),
                MemberFlags::PUBLIC | MemberFlags::STATIC,
            )
            .method("getname", TypeDescriptor::named("string"))
            .default_constructor::<String>()
            .build()
            .unwrap();

        assert_eq!(handle.fullname(), "app.User");
        assert_eq!(handle.flavor, TypeFlavor::Class);
        assert_eq!(handle.base(), Some(&TypeDescriptor::class("app.Entity")));
        assert_eq!(handle.fields.count(), 2);
        assert_eq!(handle.fields[0].name, "id");
        assert!(handle.fields[0].flags.is_empty());
        assert!(handle.fields[1].flags.contains(MemberFlags::STATIC));
        assert_eq!(handle.methods[0].return_type, TypeDescriptor::named("string"));
        assert!(handle.methods[0].flags.contains(MemberFlags::PUBLIC));
        assert!(handle.constructor.as_ref().unwrap().is_public());
    }

    #[test]
    fn test_build_enum_ordinals() {
        let handle = TypeBuilder::enumeration("app.Level")
            .constant("LOW", 1u8)
            .constant("HIGH", 9u8)
            .build()
            .unwrap();

        assert!(handle.is_enum());
        assert!(handle.flags.contains(TypeFlags::FINAL));
        assert_eq!(handle.constants[0].ordinal, 0);
        assert_eq!(handle.constants[1].name, "HIGH");
        assert_eq!(handle.constants[1].ordinal, 1);
    }

    #[test]
    fn test_interface_and_abstract_flags() {
        let shape = TypeBuilder::interface("app.Shape").build().unwrap();
        assert!(shape.is_interface());
        assert!(shape.is_abstract());

        let base = TypeBuilder::class("app.Base").abstract_class().build().unwrap();
        assert!(base.flags.contains(TypeFlags::PUBLIC | TypeFlags::ABSTRACT));

        let internal = TypeBuilder::class("app.Internal")
            .flags(TypeFlags::empty())
            .build()
            .unwrap();
        assert!(internal.flags.is_empty());
    }

    #[test]
    fn test_private_constructor() {
        let handle = TypeBuilder::class("app.Singleton")
            .private_constructor(|| Ok(Box::new(()) as BoxedValue))
            .build()
            .unwrap();
        assert!(!handle.constructor.unwrap().is_public());
    }

    #[test]
    fn test_build_rejects_invalid() {
        let invalid = [
            TypeBuilder::class(""),
            TypeBuilder::class("app.Box<i32>"),
            TypeBuilder::class("app Foo"),
            TypeBuilder::class(".app.Foo"),
            TypeBuilder::class("app.Foo").constant("A", 1),
            TypeBuilder::interface("app.Shape").default_constructor::<u8>(),
            TypeBuilder::enumeration("app.Color").default_constructor::<u8>(),
            TypeBuilder::enumeration("app.Color")
                .constant("RED", 0)
                .constant("RED", 1),
        ];

        for builder in invalid {
            assert!(matches!(builder.build(), Err(Error::Malformed { .. })));
        }
    }

    #[test]
    fn test_register() {
        let registry = TypeRegistry::new();
        let handle = TypeBuilder::class("app.User").register(&registry).unwrap();

        assert!(!handle.token.is_null());
        assert!(registry.get_by_fullname("app.User").is_some());
    }
}
