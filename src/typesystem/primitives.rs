//! Built-in primitive types.
//!
//! Primitive types are registered automatically by [`crate::TypeRegistry::new`] so member
//! lookups can resolve `i32` fields or `void` return types without any setup. They live
//! in the root namespace and use the lowercase names below as their full name.

use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use crate::typesystem::{Token, TypeDescriptor};

/// The primitive types known to every registry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString, AsRefStr, Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum PrimitiveKind {
    /// No value, used as a method return type
    Void,
    /// `true` / `false`
    Bool,
    /// A Unicode scalar value
    Char,
    /// signed 8-bit integer
    I8,
    /// signed 16-bit integer
    I16,
    /// signed 32-bit integer
    I32,
    /// signed 64-bit integer
    I64,
    /// unsigned 8-bit integer
    U8,
    /// unsigned 16-bit integer
    U16,
    /// unsigned 32-bit integer
    U32,
    /// unsigned 64-bit integer
    U64,
    /// 32-bit floating point
    F32,
    /// 64-bit floating point
    F64,
    /// UTF-8 string
    String,
}

impl PrimitiveKind {
    /// The registered name of this primitive
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Void => "void",
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Char => "char",
            PrimitiveKind::I8 => "i8",
            PrimitiveKind::I16 => "i16",
            PrimitiveKind::I32 => "i32",
            PrimitiveKind::I64 => "i64",
            PrimitiveKind::U8 => "u8",
            PrimitiveKind::U16 => "u16",
            PrimitiveKind::U32 => "u32",
            PrimitiveKind::U64 => "u64",
            PrimitiveKind::F32 => "f32",
            PrimitiveKind::F64 => "f64",
            PrimitiveKind::String => "string",
        }
    }

    /// Fixed token of this primitive, in the primitive table
    #[must_use]
    pub fn token(&self) -> Token {
        Token::from_parts(Token::PRIMITIVE, *self as u32 + 1)
    }

    /// Descriptor referring to this primitive
    #[must_use]
    pub fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::named(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_names_match_strum() {
        for kind in PrimitiveKind::iter() {
            assert_eq!(kind.name(), kind.as_ref());
            assert_eq!(kind.to_string(), kind.name());
            assert_eq!(PrimitiveKind::from_str(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn test_tokens_unique() {
        let mut tokens: Vec<Token> = PrimitiveKind::iter().map(|k| k.token()).collect();
        tokens.sort();
        tokens.dedup();
        assert_eq!(tokens.len(), PrimitiveKind::COUNT);
        assert!(tokens.iter().all(Token::is_primitive));
        assert_eq!(PrimitiveKind::Void.token(), Token(0xF000_0001));
    }

    #[test]
    fn test_descriptor() {
        assert_eq!(
            PrimitiveKind::I32.descriptor(),
            TypeDescriptor::named("i32")
        );
        assert_eq!(PrimitiveKind::Void.descriptor().to_string(), "void");
    }
}
