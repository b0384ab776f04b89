//! Configuration for the type registry and the resolver
//!
//! Both structures are plain `Copy` values with a handful of presets. The defaults
//! reproduce the reference lookup semantics; anything else is an explicit opt-in.

/// Configuration for a [`crate::TypeRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Register the built-in primitive types (`void`, `bool`, `i32`, `string`, ...) on creation.
    /// Member lookups resolve field and return types through the registry, so disabling this
    /// means primitive-typed members resolve to nothing unless registered by hand.
    pub register_primitives: bool,

    /// Allow a registration to replace an existing type of the same full name.
    /// When disabled, a duplicate registration fails with [`crate::Error::TypeInsert`].
    pub allow_redefinition: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            register_primitives: true,
            allow_redefinition: false,
        }
    }
}

impl RegistryConfig {
    /// Creates an empty registry configuration, without primitive types
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            register_primitives: false,
            allow_redefinition: false,
        }
    }

    /// Creates a configuration that lets later registrations replace earlier ones
    ///
    /// Useful for hot-reload style setups where the same type is described again.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            register_primitives: true,
            allow_redefinition: true,
        }
    }
}

/// How [`crate::TypeResolver::method_return_type`] compares method names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodMatching {
    /// Lowercase the query, then compare case-sensitively against the declared name.
    /// Only methods whose declared name is entirely lowercase can match.
    #[default]
    LowercaseExact,
    /// Compare ignoring case, the same way field lookups do.
    IgnoreCase,
}

/// Configuration for a [`crate::TypeResolver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolverConfig {
    /// Method name comparison used by return type lookups
    pub method_matching: MethodMatching,
}

impl ResolverConfig {
    /// Creates a configuration where field and method lookups both ignore case
    ///
    /// This deliberately deviates from the default method lookup, which only matches
    /// lowercase method names.
    #[must_use]
    pub fn uniform() -> Self {
        Self {
            method_matching: MethodMatching::IgnoreCase,
        }
    }
}
