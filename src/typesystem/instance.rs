//! Instances created through the registry.

use std::{any::Any, fmt};

use crate::typesystem::{BoxedValue, TypeHandleRc};

/// A value together with the registered type it was created as
///
/// The runtime type is what [`crate::TypeResolver::generic_arguments`] inspects, so a
/// value wrapped here behaves like an instance of that registered type regardless of its
/// Rust type.
pub struct Instance {
    runtime_type: TypeHandleRc,
    value: BoxedValue,
}

impl Instance {
    /// Wrap an existing value as an instance of `runtime_type`
    pub fn new(runtime_type: TypeHandleRc, value: BoxedValue) -> Self {
        Instance {
            runtime_type,
            value,
        }
    }

    /// The registered type of this instance
    #[must_use]
    pub fn runtime_type(&self) -> &TypeHandleRc {
        &self.runtime_type
    }

    /// Borrow the value as `T`
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Mutably borrow the value as `T`
    #[must_use]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut::<T>()
    }

    /// Take the value out as `T`, giving the instance back if it holds something else
    ///
    /// # Errors
    /// Returns `self` unchanged when the value is not a `T`.
    pub fn downcast<T: Any>(self) -> std::result::Result<Box<T>, Instance> {
        let Instance {
            runtime_type,
            value,
        } = self;
        value.downcast::<T>().map_err(|value| Instance {
            runtime_type,
            value,
        })
    }

    /// Unwrap into the raw boxed value
    #[must_use]
    pub fn into_inner(self) -> BoxedValue {
        self.value
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("runtime_type", &self.runtime_type.fullname())
            .finish_non_exhaustive()
    }
}
