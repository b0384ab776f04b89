//! Registry tokens.
//!
//! Every type inserted into a [`crate::TypeRegistry`] receives a [`Token`]. The upper byte
//! names the kind of entry, the lower 24 bits are a running row number, so sorting tokens
//! of one kind gives registration order.

use std::fmt;

/// A registry token
///
/// ```rust
/// use typescope::typesystem::Token;
///
/// let token = Token::new(0x0200_0003);
/// assert_eq!(token.table(), 0x02);
/// assert_eq!(token.row(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(pub u32);

impl Token {
    /// Table byte used for built-in primitive types
    pub const PRIMITIVE: u8 = 0xF0;
    /// Table byte used for user registered types
    pub const DEFINED: u8 = 0x02;
    /// Largest row number that fits below the table byte
    pub const MAX_ROW: u32 = 0x00FF_FFFF;

    /// Create a new token from a raw value
    #[must_use]
    pub fn new(value: u32) -> Self {
        Token(value)
    }

    /// Build a token from a table byte and a row number
    #[must_use]
    pub fn from_parts(table: u8, row: u32) -> Self {
        Token((u32::from(table) << 24) | (row & Self::MAX_ROW))
    }

    /// Raw value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The table byte
    #[must_use]
    pub fn table(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The row number
    #[must_use]
    pub fn row(&self) -> u32 {
        self.0 & Self::MAX_ROW
    }

    /// `true` for the zero token
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// `true` if this token belongs to a built-in primitive
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        self.table() == Self::PRIMITIVE
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl From<Token> for u32 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(0x{:08x}, table: 0x{:02x}, row: {})",
            self.0,
            self.table(),
            self.row()
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}
