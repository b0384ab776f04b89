// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # typescope
//!
//! Name based type resolution without runtime reflection.
//!
//! Types are described once through [`crate::TypeBuilder`] and stored in a
//! [`crate::TypeRegistry`]. A [`crate::TypeResolver`] then answers the questions a
//! configuration driven application asks about types it only knows by name:
//!
//! - What is the canonical name of this type reference?
//! - Which registered type does a name refer to?
//! - Create a fresh instance through its public zero-argument constructor
//! - Which type arguments does the runtime type bind on its parent?
//! - What is the declared type of a field, or the return type of a method?
//! - Which enumeration constant does a name refer to?
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use typescope::prelude::*;
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Level {
//!     Low,
//!     High,
//! }
//!
//! let registry = Arc::new(TypeRegistry::new());
//! TypeBuilder::enumeration("app.Level")
//!     .constant("LOW", Level::Low)
//!     .constant("HIGH", Level::High)
//!     .register(&registry)?;
//!
//! let resolver = TypeResolver::new(registry);
//! let level = resolver.resolve_type_name("app.Level")?;
//! let high = TypeResolver::resolve_enum_constant(level.as_deref(), "HIGH")?.unwrap();
//! assert_eq!(high.downcast_ref::<Level>(), Some(&Level::High));
//! # Ok::<(), typescope::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`crate::Result`]. Lookups that find "nothing
//! configured" (an absent descriptor, an empty name) are not errors and yield `None`;
//! a name that refers to nothing registered is reported as [`crate::Error::TypeNotFound`].
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: failed lookups at `debug`, member misses at
//! `trace`, registrations at `debug`. Install any `log` compatible logger to see them.
//!
//! ## Development and Testing
//!
//! Unit tests live next to the code they cover and share fixtures from an internal test
//! module; integration tests in `tests/` only use the public API.

#[macro_use]
pub(crate) mod error;

#[cfg(test)]
pub(crate) mod test;

/// Registry and resolver configuration.
///
/// [`RegistryConfig`] controls what a new registry contains and whether names may be
/// registered twice. [`ResolverConfig`] selects how method names are matched.
pub mod config;

/// Convenient re-exports of the most commonly used types.
///
/// ```rust
/// use typescope::prelude::*;
///
/// let resolver = TypeResolver::new(std::sync::Arc::new(TypeRegistry::new()));
/// assert!(resolver.resolve_type(None)?.is_none());
/// # Ok::<(), typescope::Error>(())
/// ```
pub mod prelude;

/// Type descriptors, the registry and the resolver.
pub mod typesystem;

/// `typescope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `typescope` Error type
///
/// The main error type for all operations in this crate. See [`crate::Error`] for the
/// individual categories.
pub use error::{BoxError, Error};

pub use config::{MethodMatching, RegistryConfig, ResolverConfig};
pub use typesystem::{
    EnumValue, Instance, PrimitiveKind, Token, TypeBuilder, TypeDescriptor, TypeHandle,
    TypeHandleRc, TypeRegistry, TypeResolver,
};
