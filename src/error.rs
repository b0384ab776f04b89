use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// Boxed error produced by a registered constructor.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Lookup Errors
/// - [`Error::TypeNotFound`] - No type is registered under the requested name
/// - [`Error::NotAnEnum`] - A constant was requested from a type that is not an enumeration
/// - [`Error::EnumConstantNotFound`] - The enumeration has no constant of that name
///
/// ## Construction Errors
/// - [`Error::NoDefaultConstructor`] - The type cannot be instantiated without arguments
/// - [`Error::Construction`] - The constructor ran and reported a failure
///
/// ## Registration Errors
/// - [`Error::TypeInsert`] - A type with the same name is already registered
/// - [`Error::Malformed`] - Invalid descriptor text or an inconsistent type definition
/// - [`Error::AlreadyInitialized`] - The global registry was initialized twice
///
/// Use [`Error::is_lookup`] and [`Error::is_construction`] to branch on the category
/// rather than on individual variants.
///
/// # Examples
///
/// ```rust
/// use typescope::{prelude::*, Error};
///
/// let resolver = TypeResolver::new(std::sync::Arc::new(TypeRegistry::new()));
/// match resolver.resolve_type(Some(&TypeDescriptor::class("com.example.Missing"))) {
///     Err(Error::TypeNotFound(name)) => assert_eq!(name, "com.example.Missing"),
///     other => panic!("unexpected: {:?}", other.map(|t| t.map(|t| t.fullname()))),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// No type is registered under the given canonical name.
    ///
    /// Returned by resolution queries that require the type to exist.
    #[error("Failed to find type in TypeRegistry - {0}")]
    TypeNotFound(String),

    /// The type is not an enumeration, so it has no named constants.
    #[error("{0} is not an enum type")]
    NotAnEnum(String),

    /// The enumeration does not declare a constant with the requested name.
    ///
    /// Constant names are matched exactly, including case.
    #[error("No enum constant {type_name}.{constant}")]
    EnumConstantNotFound {
        /// Full name of the enumeration that was searched
        type_name: String,
        /// The constant name that was requested
        constant: String,
    },

    /// The type has no accessible zero-argument constructor.
    ///
    /// Also reported for types that can never be instantiated directly, such as
    /// interfaces, abstract classes, enumerations and primitives.
    #[error("Type {0} has no accessible zero-argument constructor")]
    NoDefaultConstructor(String),

    /// The zero-argument constructor was invoked and failed.
    ///
    /// The underlying failure is kept as the error source.
    #[error("Failed to construct {type_name} - {source}")]
    Construction {
        /// Full name of the type that was being constructed
        type_name: String,
        /// The error reported by the constructor
        #[source]
        source: BoxError,
    },

    /// Failed to insert a new type into the `TypeRegistry`.
    ///
    /// Occurs when a type with the same full name already exists and the registry
    /// was not configured to allow redefinition.
    #[error("Failed to insert new type into TypeRegistry - {0}")]
    TypeInsert(String),

    /// Descriptor text could not be parsed, or a type definition is inconsistent.
    ///
    /// The error includes the source location where the problem was detected.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The process-wide registry has already been initialized.
    #[error("The global TypeRegistry has already been initialized")]
    AlreadyInitialized,
}

impl Error {
    /// Returns `true` for failures caused by a missing type or enumeration constant.
    #[must_use]
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Error::TypeNotFound(_) | Error::NotAnEnum(_) | Error::EnumConstantNotFound { .. }
        )
    }

    /// Returns `true` for failures raised while instantiating a type.
    #[must_use]
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Error::NoDefaultConstructor(_) | Error::Construction { .. }
        )
    }
}
