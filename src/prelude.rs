//! # typescope Prelude
//!
//! The most commonly used types and traits of typescope, for glob import.
//!
//! ```rust
//! use typescope::prelude::*;
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all typescope operations
pub use crate::Error;

/// The result type used throughout typescope
pub use crate::Result;

/// Error reported by a registered constructor
pub use crate::BoxError;

// ================================================================================================
// Configuration
// ================================================================================================

pub use crate::config::{MethodMatching, RegistryConfig, ResolverConfig};

// ================================================================================================
// Type System
// ================================================================================================

/// Name based resolution, construction and member lookup
pub use crate::typesystem::TypeResolver;

/// Storage of all registered types
pub use crate::typesystem::TypeRegistry;

/// Fluent API to describe and register types
pub use crate::typesystem::TypeBuilder;

pub use crate::typesystem::{
    BoxedValue, EnumValue, Instance, PrimitiveKind, Token, TypeDescriptor, TypeFlags, TypeFlavor,
    TypeHandle, TypeHandleRc,
};
