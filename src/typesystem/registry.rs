//! Central type registry.
//!
//! This module provides the `TypeRegistry`, a thread-safe registry holding every type that
//! can be resolved by name. It replaces ambient runtime reflection with explicit
//! registration: whatever a consumer wants to resolve, construct or inspect must be
//! registered first, typically at startup through [`crate::TypeBuilder`].
//!
//! # Registry Architecture
//!
//! - **Token-based storage**: Primary storage keyed by [`Token`], which also gives a stable
//!   registration order
//! - **Name-based lookup**: Secondary indices for full names, simple names and namespaces
//!
//! # Thread Safety
//!
//! - Lock-free primary storage (`SkipMap`)
//! - Concurrent hash maps for indices (`DashMap`)
//! - Atomic token generation
//!
//! Registration and lookup may run concurrently without external locking. Registered types
//! are immutable; redefinition (if enabled) swaps in a new handle and leaves existing
//! references to the old one untouched.
//!
//! # Process-wide Registry
//!
//! [`TypeRegistry::global`] returns a registry shared by the whole process. Call
//! [`TypeRegistry::init_global`] before first use to pick a non-default configuration.
//!
//! # Examples
//!
//! ```rust
//! use typescope::typesystem::{PrimitiveKind, TypeBuilder, TypeRegistry};
//!
//! let registry = TypeRegistry::new();
//! TypeBuilder::class("app.Order").register(&registry)?;
//! TypeBuilder::class("app.Invoice").register(&registry)?;
//!
//! assert!(registry.get_by_fullname("app.Order").is_some());
//! assert_eq!(registry.get_by_namespace("app").len(), 2);
//! assert_eq!(registry.get_primitive(PrimitiveKind::I32)?.name, "i32");
//! # Ok::<(), typescope::Error>(())
//! ```

use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc, OnceLock,
};

use crossbeam_skiplist::SkipMap;
use dashmap::{mapref::entry::Entry, DashMap};
use log::{debug, warn};
use strum::IntoEnumIterator;

use crate::{
    config::RegistryConfig,
    typesystem::{PrimitiveKind, Token, TypeHandle, TypeHandleRc},
    Error::{AlreadyInitialized, TypeInsert, TypeNotFound},
    Result,
};

/// The process-wide registry, see [`TypeRegistry::global`]
static GLOBAL_REGISTRY: OnceLock<Arc<TypeRegistry>> = OnceLock::new();

/// Central registry managing all resolvable types
///
/// # Performance Characteristics
///
/// - **Token lookup**: O(log n) using skip list
/// - **Name lookup**: O(1) average using hash indices
/// - **Registration**: O(log n) + O(1) for indexing
pub struct TypeRegistry {
    /// Primary type storage indexed by tokens
    types: SkipMap<Token, TypeHandleRc>,
    /// Next row for user registered types
    next_row: AtomicU32,
    /// Secondary index: full name (namespace.name) to token, unique
    types_by_fullname: DashMap<String, Token>,
    /// Secondary index: simple name (may have duplicates across namespaces)
    types_by_name: DashMap<String, Vec<Token>>,
    /// Secondary index: types grouped by namespace
    types_by_namespace: DashMap<String, Vec<Token>>,
    /// Registration behaviour
    config: RegistryConfig,
}

impl TypeRegistry {
    /// Create a new type registry with the default configuration.
    ///
    /// All [`PrimitiveKind`] types are registered and ready for use.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a new type registry with an explicit configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        let registry = TypeRegistry {
            types: SkipMap::new(),
            next_row: AtomicU32::new(1),
            types_by_fullname: DashMap::new(),
            types_by_name: DashMap::new(),
            types_by_namespace: DashMap::new(),
            config,
        };

        if config.register_primitives {
            for kind in PrimitiveKind::iter() {
                registry.store(Arc::new(TypeHandle::primitive(kind)));
            }
        }

        registry
    }

    /// The process-wide registry.
    ///
    /// Created with [`RegistryConfig::default`] on first access unless
    /// [`TypeRegistry::init_global`] ran before.
    pub fn global() -> Arc<TypeRegistry> {
        GLOBAL_REGISTRY
            .get_or_init(|| Arc::new(TypeRegistry::new()))
            .clone()
    }

    /// Initialize the process-wide registry with `config`.
    ///
    /// # Errors
    /// Returns [`crate::Error::AlreadyInitialized`] if the global registry already exists, either
    /// from an earlier call or because [`TypeRegistry::global`] was used first.
    pub fn init_global(config: RegistryConfig) -> Result<Arc<TypeRegistry>> {
        let mut created = false;
        let registry = GLOBAL_REGISTRY.get_or_init(|| {
            created = true;
            Arc::new(TypeRegistry::with_config(config))
        });

        if created {
            Ok(registry.clone())
        } else {
            warn!("Global type registry was already initialized, ignoring {config:?}");
            Err(AlreadyInitialized)
        }
    }

    /// The configuration this registry was created with
    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Register a new type.
    ///
    /// A fresh token is assigned to every accepted non-primitive type. Rejected duplicates
    /// do not consume a row.
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeInsert`] if a type with the same full name is already registered
    /// and [`RegistryConfig::allow_redefinition`] is not set, or if all rows of the token
    /// space have been handed out.
    pub fn insert(&self, mut new_type: TypeHandle) -> Result<TypeHandleRc> {
        let fullname = new_type.fullname();

        match self.types_by_fullname.entry(fullname.clone()) {
            Entry::Occupied(mut entry) => {
                if !self.config.allow_redefinition {
                    debug!("Rejected duplicate registration of {fullname}");
                    return Err(TypeInsert(fullname));
                }

                self.assign_token(&mut new_type, &fullname)?;
                let new_type = Arc::new(new_type);

                let replaced = *entry.get();
                if replaced == new_type.token {
                    // primitives keep their fixed token, the indices already point at it
                    self.types.insert(new_type.token, new_type.clone());
                } else {
                    self.index(&new_type);
                    self.types.insert(new_type.token, new_type.clone());
                    entry.insert(new_type.token);
                    if let Some(old) = self.types.remove(&replaced) {
                        self.unindex(old.value());
                    }
                }
                debug!(
                    "Redefined {fullname}: {} replaces {}",
                    new_type.token, replaced
                );
                Ok(new_type)
            }
            Entry::Vacant(entry) => {
                self.assign_token(&mut new_type, &fullname)?;
                let new_type = Arc::new(new_type);

                self.index(&new_type);
                self.types.insert(new_type.token, new_type.clone());
                entry.insert(new_type.token);
                debug!("Registered {fullname} as {}", new_type.token);
                Ok(new_type)
            }
        }
    }

    /// Hand out the next row to a non-primitive type, refusing once the rows run out.
    fn assign_token(&self, handle: &mut TypeHandle, fullname: &str) -> Result<()> {
        if handle.is_primitive() {
            return Ok(());
        }

        let row = self
            .next_row
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |row| {
                (row <= Token::MAX_ROW).then_some(row + 1)
            })
            .map_err(|_| {
                debug!("No rows left to register {fullname}");
                TypeInsert(format!("{fullname} - registry rows exhausted"))
            })?;

        handle.token = Token::from_parts(Token::DEFINED, row);
        Ok(())
    }

    /// Store a handle without duplicate checks, used for primitives.
    fn store(&self, handle: TypeHandleRc) {
        self.types_by_fullname.insert(handle.fullname(), handle.token);
        self.index(&handle);
        self.types.insert(handle.token, handle);
    }

    fn index(&self, handle: &TypeHandle) {
        self.types_by_name
            .entry(handle.name.clone())
            .or_default()
            .push(handle.token);
        self.types_by_namespace
            .entry(handle.namespace.clone())
            .or_default()
            .push(handle.token);
    }

    fn unindex(&self, handle: &TypeHandle) {
        if let Some(mut tokens) = self.types_by_name.get_mut(&handle.name) {
            tokens.retain(|token| *token != handle.token);
        }
        if let Some(mut tokens) = self.types_by_namespace.get_mut(&handle.namespace) {
            tokens.retain(|token| *token != handle.token);
        }
    }

    /// Look up a type by token
    pub fn get(&self, token: &Token) -> Option<TypeHandleRc> {
        self.types.get(token).map(|entry| entry.value().clone())
    }

    /// Look up a type by its exact full name (`namespace.Name`).
    ///
    /// No normalization is applied; the name must match the registered name byte for byte.
    pub fn get_by_fullname(&self, fullname: &str) -> Option<TypeHandleRc> {
        let token = *self.types_by_fullname.get(fullname)?;
        self.get(&token)
    }

    /// Get all types with the given simple name, across namespaces
    pub fn get_by_name(&self, name: &str) -> Vec<TypeHandleRc> {
        self.collect(self.types_by_name.get(name).map(|tokens| tokens.clone()))
    }

    /// Get all types in the given namespace
    pub fn get_by_namespace(&self, namespace: &str) -> Vec<TypeHandleRc> {
        self.collect(
            self.types_by_namespace
                .get(namespace)
                .map(|tokens| tokens.clone()),
        )
    }

    fn collect(&self, tokens: Option<Vec<Token>>) -> Vec<TypeHandleRc> {
        tokens
            .unwrap_or_default()
            .iter()
            .filter_map(|token| self.get(token))
            .collect()
    }

    /// Get a built-in primitive type
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeNotFound`] if the registry was created without primitives.
    pub fn get_primitive(&self, primitive: PrimitiveKind) -> Result<TypeHandleRc> {
        self.get(&primitive.token())
            .ok_or_else(|| TypeNotFound(primitive.name().to_string()))
    }

    /// `true` if a type with this exact full name is registered
    pub fn contains(&self, fullname: &str) -> bool {
        self.types_by_fullname.contains_key(fullname)
    }

    /// Number of registered types, primitives included
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// `true` if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over all types in token order
    pub fn iter(&self) -> crossbeam_skiplist::map::Iter<'_, Token, TypeHandleRc> {
        self.types.iter()
    }

    /// All types in token order; user types in registration order, then primitives
    pub fn all_types(&self) -> Vec<TypeHandleRc> {
        self.types
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a TypeRegistry {
    type Item = crossbeam_skiplist::map::Entry<'a, Token, TypeHandleRc>;
    type IntoIter = crossbeam_skiplist::map::Iter<'a, Token, TypeHandleRc>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.types.len())
            .field("config", &self.config)
            .finish()
    }
}
