//! Single-letter pixel colours

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A pixel colour: one uppercase ASCII letter `A`..=`Z`.
///
/// Values can only be built through the validating constructors, so a
/// `Colour` held by a bitmap is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour(u8);

impl Colour {
    /// Background colour of a fresh or cleared bitmap
    pub const BACKGROUND: Colour = Colour(b'O');

    /// Parse a colour from text, which must be exactly one letter `A`..=`Z`.
    pub fn parse(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Colour::try_from(c).map_err(|_| Error::InvalidColour(s.to_string())),
            _ => Err(Error::InvalidColour(s.to_string())),
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::BACKGROUND
    }
}

impl TryFrom<char> for Colour {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        if c.is_ascii_uppercase() {
            Ok(Colour(c as u8))
        } else {
            Err(Error::InvalidColour(c.to_string()))
        }
    }
}

impl TryFrom<&str> for Colour {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Colour::parse(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Colour::parse(&s)
    }
}

impl FromStr for Colour {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Colour::parse(s)
    }
}

impl From<Colour> for char {
    fn from(c: Colour) -> char {
        c.as_char()
    }
}

impl From<Colour> for String {
    fn from(c: Colour) -> String {
        c.as_char().to_string()
    }
}

impl PartialEq<char> for Colour {
    fn eq(&self, other: &char) -> bool {
        self.as_char() == *other
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
