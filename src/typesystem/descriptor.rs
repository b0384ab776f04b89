//! Type descriptors and their textual form.
//!
//! A [`TypeDescriptor`] is how consumers refer to a type before it has been resolved: the
//! declared parent of a type, the declared type of a field, or a type name received as a
//! string. Its [`Display`](std::fmt::Display) output is the *default textual form*, which
//! carries a classifier prefix for classes and interfaces:
//!
//! | Descriptor | Text |
//! |---|---|
//! | `Class("com.example.Foo")` | `class com.example.Foo` |
//! | `Interface("com.example.Bar")` | `interface com.example.Bar` |
//! | `Named("i32")` | `i32` |
//! | `Parameterized { raw: "com.example.Box", args: [Class("java.lang.Integer")] }` | `com.example.Box<java.lang.Integer>` |
//!
//! The same grammar is accepted by [`str::parse`], so string-encoded type names can be turned
//! back into descriptors.
//!
//! # Examples
//!
//! ```rust
//! use typescope::typesystem::TypeDescriptor;
//!
//! let descriptor: TypeDescriptor = "com.example.Pair<java.lang.String, com.example.Box<i32>>".parse()?;
//! assert_eq!(descriptor.raw_name(), "com.example.Pair");
//! assert_eq!(descriptor.arguments().len(), 2);
//! assert_eq!(
//!     descriptor.to_string(),
//!     "com.example.Pair<java.lang.String, com.example.Box<i32>>"
//! );
//! # Ok::<(), typescope::Error>(())
//! ```

use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// Classifier prefix of class descriptors in their textual form
pub const CLASS_PREFIX: &str = "class ";
/// Classifier prefix of interface descriptors in their textual form
pub const INTERFACE_PREFIX: &str = "interface ";

/// A reference to a type, possibly with bound type arguments
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A class, rendered as `class <name>`
    Class(String),
    /// An interface, rendered as `interface <name>`
    Interface(String),
    /// Anything without a classifier: primitives, type variables, plain names
    Named(String),
    /// A generic type with concrete arguments, rendered as `raw<arg, ...>`
    Parameterized {
        /// Full name of the generic type
        raw: String,
        /// Bound type arguments, in declaration order
        args: Vec<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    /// Descriptor of a class
    pub fn class(name: impl Into<String>) -> Self {
        TypeDescriptor::Class(name.into())
    }

    /// Descriptor of an interface
    pub fn interface(name: impl Into<String>) -> Self {
        TypeDescriptor::Interface(name.into())
    }

    /// Descriptor without a classifier
    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor::Named(name.into())
    }

    /// Descriptor of a generic type bound to `args`
    pub fn parameterized(
        raw: impl Into<String>,
        args: impl IntoIterator<Item = TypeDescriptor>,
    ) -> Self {
        TypeDescriptor::Parameterized {
            raw: raw.into(),
            args: args.into_iter().collect(),
        }
    }

    /// The textual form without classifier prefix
    ///
    /// For parameterized descriptors this includes the argument list.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            TypeDescriptor::Class(name)
            | TypeDescriptor::Interface(name)
            | TypeDescriptor::Named(name) => name.clone(),
            TypeDescriptor::Parameterized { .. } => self.to_string(),
        }
    }

    /// Name of the underlying type, with any type arguments erased
    #[must_use]
    pub fn raw_name(&self) -> &str {
        match self {
            TypeDescriptor::Class(name)
            | TypeDescriptor::Interface(name)
            | TypeDescriptor::Named(name) => name,
            TypeDescriptor::Parameterized { raw, .. } => raw,
        }
    }

    /// Bound type arguments; empty unless the descriptor is parameterized
    #[must_use]
    pub fn arguments(&self) -> &[TypeDescriptor] {
        match self {
            TypeDescriptor::Parameterized { args, .. } => args,
            _ => &[],
        }
    }

    /// `true` for [`TypeDescriptor::Parameterized`]
    #[must_use]
    pub fn is_parameterized(&self) -> bool {
        matches!(self, TypeDescriptor::Parameterized { .. })
    }
}

/// Renders the default textual form.
///
/// Type arguments are written without their classifier, matching what a canonical name
/// looks like. Parsing the text of a parameterized descriptor back therefore yields
/// [`TypeDescriptor::Named`] arguments: the text survives the trip, the classifiers of the
/// arguments do not.
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Class(name) => write!(f, "{CLASS_PREFIX}{name}"),
            TypeDescriptor::Interface(name) => write!(f, "{INTERFACE_PREFIX}{name}"),
            TypeDescriptor::Named(name) => f.write_str(name),
            TypeDescriptor::Parameterized { raw, args } => {
                write!(f, "{raw}<")?;
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&arg.type_name())?;
                }
                f.write_str(">")
            }
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(malformed_error!("Empty type descriptor"));
        }

        for (prefix, is_interface) in [(CLASS_PREFIX, false), (INTERFACE_PREFIX, true)] {
            if let Some(name) = text.strip_prefix(prefix) {
                if name.is_empty() || name.contains(['<', '>', ',']) {
                    return Err(malformed_error!("Invalid type name in '{}'", text));
                }
                return Ok(if is_interface {
                    TypeDescriptor::Interface(name.to_string())
                } else {
                    TypeDescriptor::Class(name.to_string())
                });
            }
        }

        let Some(open) = text.find('<') else {
            if text.contains(['>', ',']) {
                return Err(malformed_error!("Unbalanced type arguments in '{}'", text));
            }
            return Ok(TypeDescriptor::Named(text.to_string()));
        };

        let raw = &text[..open];
        let Some(inner) = text[open + 1..].strip_suffix('>') else {
            return Err(malformed_error!("Unbalanced type arguments in '{}'", text));
        };
        if raw.is_empty() {
            return Err(malformed_error!("Missing generic type name in '{}'", text));
        }

        let args = split_arguments(inner)
            .ok_or_else(|| malformed_error!("Unbalanced type arguments in '{}'", text))?
            .into_iter()
            .map(|arg| {
                if arg.is_empty() {
                    Err(malformed_error!("Empty type argument in '{}'", text))
                } else {
                    arg.parse()
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TypeDescriptor::Parameterized {
            raw: raw.to_string(),
            args,
        })
    }
}

/// Split an argument list at the commas that are not nested inside `<...>`.
///
/// Returns `None` if the brackets do not balance.
fn split_arguments(inner: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                parts.push(inner[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }
    parts.push(inner[start..].trim());
    Some(parts)
}
