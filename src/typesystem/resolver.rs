//! Name based type resolution.
//!
//! [`TypeResolver`] answers two kinds of questions against a [`TypeRegistry`]:
//!
//! - **"Give me X"** - [`TypeResolver::resolve_type`], [`TypeResolver::construct`] and
//!   [`TypeResolver::resolve_enum_constant`] report a missing type or constant as an error.
//! - **"Does X exist"** - [`TypeResolver::has_default_constructor`],
//!   [`TypeResolver::field_type`], [`TypeResolver::method_return_type`] and
//!   [`TypeResolver::generic_arguments`] never fail and answer `false` / `None` instead.
//!
//! An absent descriptor, type or an empty member name is never an error: it simply means
//! "nothing configured" and yields `None`.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use typescope::typesystem::{Instance, TypeBuilder, TypeDescriptor, TypeRegistry, TypeResolver};
//!
//! let registry = Arc::new(TypeRegistry::new());
//! TypeBuilder::class("app.Repository")
//!     .default_constructor::<Vec<String>>()
//!     .register(&registry)?;
//! TypeBuilder::class("app.UserRepository")
//!     .extends(TypeDescriptor::parameterized(
//!         "app.Repository",
//!         [TypeDescriptor::class("app.User")],
//!     ))
//!     .default_constructor::<Vec<String>>()
//!     .register(&registry)?;
//!
//! let resolver = TypeResolver::new(registry);
//! let repository = resolver
//!     .construct(Some(&TypeDescriptor::class("app.UserRepository")))?
//!     .unwrap();
//!
//! assert_eq!(
//!     TypeResolver::generic_arguments(&repository),
//!     Some(vec![TypeDescriptor::class("app.User")])
//! );
//! # Ok::<(), typescope::Error>(())
//! ```

use std::sync::Arc;

use log::{debug, trace};

use crate::{
    config::{MethodMatching, ResolverConfig},
    typesystem::{
        ConstructorDescriptor, EnumValue, Instance, TypeDescriptor, TypeHandle, TypeHandleRc,
        TypeRegistry, CLASS_PREFIX, INTERFACE_PREFIX,
    },
    Error::{Construction, EnumConstantNotFound, NoDefaultConstructor, NotAnEnum, TypeNotFound},
    Result,
};

/// Resolves, constructs and inspects types by name
///
/// The resolver holds no state besides a shared reference to its registry, so it is cheap to
/// clone and can be used from any number of threads.
#[derive(Clone, Debug)]
pub struct TypeResolver {
    /// Reference to the type registry
    registry: Arc<TypeRegistry>,
    /// Lookup behaviour
    config: ResolverConfig,
}

impl TypeResolver {
    /// Create a new resolver with the given registry
    ///
    /// ## Arguments
    /// * 'registry' - The type registry to use
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        TypeResolver {
            registry,
            config: ResolverConfig::default(),
        }
    }

    /// Create a resolver over the process-wide registry
    pub fn global() -> Self {
        Self::new(TypeRegistry::global())
    }

    /// Set the lookup configuration
    ///
    /// ## Arguments
    /// * 'config' - The configuration to use
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// The registry this resolver queries
    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Canonical name of a descriptor, used as the registry key
    ///
    /// Takes the default textual form and strips one leading `"class "` or `"interface "`.
    /// Everything else is returned unchanged: no trimming, and type arguments stay part of
    /// the name. An absent descriptor yields the empty string.
    ///
    /// ```rust
    /// use typescope::typesystem::{TypeDescriptor, TypeResolver};
    ///
    /// let foo = TypeDescriptor::class("com.example.Foo");
    /// assert_eq!(TypeResolver::canonical_name(Some(&foo)), "com.example.Foo");
    /// assert_eq!(TypeResolver::canonical_name(None), "");
    /// ```
    pub fn canonical_name(descriptor: Option<&TypeDescriptor>) -> String {
        let Some(descriptor) = descriptor else {
            return String::new();
        };

        strip_classifier(&descriptor.to_string()).to_string()
    }

    /// Resolve a descriptor to its registered type
    ///
    /// Returns `Ok(None)` if the canonical name is empty, which stands for "no type
    /// configured" rather than an error.
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeNotFound`] if no type is registered under the canonical name.
    pub fn resolve_type(
        &self,
        descriptor: Option<&TypeDescriptor>,
    ) -> Result<Option<TypeHandleRc>> {
        let name = Self::canonical_name(descriptor);
        if name.is_empty() {
            return Ok(None);
        }

        match self.registry.get_by_fullname(&name) {
            Some(handle) => Ok(Some(handle)),
            None => {
                debug!("Type {name} is not registered");
                Err(TypeNotFound(name))
            }
        }
    }

    /// Resolve a string-encoded type name
    ///
    /// The text is parsed as a [`TypeDescriptor`] first, so `"class a.Foo"`, `"a.Foo"` and
    /// `"interface a.Bar"` are all accepted. Text whose canonical name is empty, such as
    /// `""` or `"class "`, yields `Ok(None)` like [`TypeResolver::resolve_type`] does.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for unparsable text, otherwise the same errors as
    /// [`TypeResolver::resolve_type`].
    pub fn resolve_type_name(&self, text: &str) -> Result<Option<TypeHandleRc>> {
        if strip_classifier(text).is_empty() {
            return Ok(None);
        }

        let descriptor: TypeDescriptor = text.parse()?;
        self.resolve_type(Some(&descriptor))
    }

    /// Resolve a descriptor and create a new instance through its zero-argument constructor
    ///
    /// Returns `Ok(None)` if the canonical name is empty. Every call creates a new value.
    ///
    /// # Errors
    /// - [`crate::Error::TypeNotFound`] if the type is not registered
    /// - [`crate::Error::NoDefaultConstructor`] if the type has no public zero-argument
    ///   constructor or cannot be instantiated at all
    /// - [`crate::Error::Construction`] if the constructor itself fails
    pub fn construct(&self, descriptor: Option<&TypeDescriptor>) -> Result<Option<Instance>> {
        match self.resolve_type(descriptor)? {
            Some(handle) => Self::instantiate(&handle).map(Some),
            None => Ok(None),
        }
    }

    /// Create a new instance of an already resolved type
    ///
    /// # Errors
    /// Same construction errors as [`TypeResolver::construct`].
    pub fn instantiate(handle: &TypeHandleRc) -> Result<Instance> {
        let constructor = match &handle.constructor {
            Some(constructor) if constructor.is_public() && handle.is_instantiable() => constructor,
            _ => {
                debug!("Type {} can not be instantiated blindly", handle.fullname());
                return Err(NoDefaultConstructor(handle.fullname()));
            }
        };

        let value = (constructor.invoke)().map_err(|source| Construction {
            type_name: handle.fullname(),
            source,
        })?;

        Ok(Instance::new(handle.clone(), value))
    }

    /// Type arguments bound to the parent of the instance's runtime type
    ///
    /// Returns the arguments in declaration order if the runtime type declares its parent as
    /// a parameterized type, e.g. `IntBox` extending `Box<Integer>` yields `[Integer]`.
    /// Returns `None` if the parent is not parameterized or there is no parent.
    pub fn generic_arguments(instance: &Instance) -> Option<Vec<TypeDescriptor>> {
        match instance.runtime_type().base() {
            Some(TypeDescriptor::Parameterized { args, .. }) => Some(args.clone()),
            _ => None,
        }
    }

    /// `true` if the type declares a public zero-argument constructor
    ///
    /// This only reports the declaration; an abstract type with such a constructor still
    /// answers `true` even though [`TypeResolver::construct`] refuses it.
    pub fn has_default_constructor(ty: &TypeHandle) -> bool {
        ty.constructor
            .as_ref()
            .is_some_and(ConstructorDescriptor::is_public)
    }

    /// Declared type of the field called `name`, ignoring case
    ///
    /// Only fields declared directly on `ty` are searched, in declaration order; the first
    /// match wins. The field type is resolved through the registry with type arguments
    /// erased, so a `Box<i32>` field resolves to `Box`.
    ///
    /// Returns `None` for an absent type, an empty name, no matching field, or a field type
    /// that is not registered.
    pub fn field_type(&self, ty: Option<&TypeHandle>, name: &str) -> Option<TypeHandleRc> {
        let ty = ty?;
        if name.is_empty() {
            return None;
        }

        let Some((_, field)) = ty
            .fields
            .iter()
            .find(|(_, field)| eq_ignore_case(&field.name, name))
        else {
            trace!("{} declares no field '{name}'", ty.fullname());
            return None;
        };

        self.resolve_member_type(&field.field_type)
    }

    /// Declared return type of the method called `name`
    ///
    /// With the default [`MethodMatching::LowercaseExact`], `name` is lowercased and compared
    /// case-sensitively, so only methods declared with an all-lowercase name can match:
    /// looking up `"GetName"` finds `getname` but never `getName`. This differs from
    /// [`TypeResolver::field_type`] on purpose; configure [`MethodMatching::IgnoreCase`]
    /// to match like fields do.
    ///
    /// Only methods declared directly on `ty` are searched; the first match wins.
    pub fn method_return_type(
        &self,
        ty: Option<&TypeHandle>,
        name: &str,
    ) -> Option<TypeHandleRc> {
        let ty = ty?;
        if name.is_empty() {
            return None;
        }

        let found = match self.config.method_matching {
            MethodMatching::LowercaseExact => {
                let query = name.to_lowercase();
                ty.methods.iter().find(|(_, method)| method.name == query)
            }
            MethodMatching::IgnoreCase => ty
                .methods
                .iter()
                .find(|(_, method)| eq_ignore_case(&method.name, name)),
        };

        let Some((_, method)) = found else {
            trace!("{} declares no method '{name}'", ty.fullname());
            return None;
        };

        self.resolve_member_type(&method.return_type)
    }

    /// Resolve the enumeration constant called `name`, matching case exactly
    ///
    /// Returns `Ok(None)` for an absent type or an empty name.
    ///
    /// # Errors
    /// - [`crate::Error::NotAnEnum`] if `ty` is not an enumeration
    /// - [`crate::Error::EnumConstantNotFound`] if no constant has that name
    pub fn resolve_enum_constant(
        ty: Option<&TypeHandle>,
        name: &str,
    ) -> Result<Option<EnumValue>> {
        let Some(ty) = ty else {
            return Ok(None);
        };
        if name.is_empty() {
            return Ok(None);
        }

        if !ty.is_enum() {
            return Err(NotAnEnum(ty.fullname()));
        }

        match ty.constants.iter().find(|(_, constant)| constant.name == name) {
            Some((_, constant)) => Ok(Some(EnumValue {
                type_name: ty.fullname(),
                constant: constant.clone(),
            })),
            None => {
                debug!("{} has no constant {name}", ty.fullname());
                Err(EnumConstantNotFound {
                    type_name: ty.fullname(),
                    constant: name.to_string(),
                })
            }
        }
    }

    /// Look up the registered type of a member, ignoring type arguments
    fn resolve_member_type(&self, descriptor: &TypeDescriptor) -> Option<TypeHandleRc> {
        let handle = self.registry.get_by_fullname(descriptor.raw_name());
        if handle.is_none() {
            trace!("Member type {descriptor} is not registered");
        }
        handle
    }
}

/// Strip one leading `"class "` or `"interface "`
fn strip_classifier(text: &str) -> &str {
    text.strip_prefix(CLASS_PREFIX)
        .or_else(|| text.strip_prefix(INTERFACE_PREFIX))
        .unwrap_or(text)
}

/// Compare two names ignoring case
///
/// Both sides are compared by their full Unicode lowercase mapping, so a character may
/// lowercase to several: `'İ'` becomes `"i\u{307}"` and therefore does not equal a plain
/// `'i'`. Simple case mappings of one character each would accept that pair.
fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}
