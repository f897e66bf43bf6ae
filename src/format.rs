//! Which literal shapes a parse accepts.

use bitflags::bitflags;
use core::fmt::{self, Display};
use core::str::FromStr;
use serde_core::de::{self, Deserialize, Deserializer, Visitor};
use serde_core::ser::{Serialize, Serializer};

bitflags! {
    /// Set of notations a literal may be written in.
    ///
    /// The flags combine: [`CharsFormat::GENERAL`] is `FIXED | SCIENTIFIC` and
    /// is the default. Whether an exponent is forbidden, optional or required
    /// follows from the combination, see [`CharsFormat::exponent_policy`].
    ///
    /// The textual form used by `Display`, `FromStr` and serde is the
    /// lowercase flag names joined by `|`, with `general` standing for
    /// `fixed|scientific`.
    ///
    /// ```
    /// use from_chars::CharsFormat;
    ///
    /// let format: CharsFormat = "fixed | hex".parse().unwrap();
    /// assert_eq!(format, CharsFormat::FIXED | CharsFormat::HEX);
    /// assert_eq!(format.to_string(), "fixed|hex");
    /// assert_eq!(CharsFormat::default().to_string(), "general");
    /// ```
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CharsFormat: u8 {
        /// Decimal literal with a mandatory `e` exponent.
        const SCIENTIFIC = 1;
        /// Decimal literal without an exponent.
        const FIXED = 2;
        /// Hexadecimal literal with a binary `p` exponent, optional unless
        /// narrowed by `FIXED` or `SCIENTIFIC`.
        const HEX = 4;
        /// Decimal literal with an optional exponent.
        const GENERAL = Self::FIXED.bits() | Self::SCIENTIFIC.bits();
    }
}

/// Whether an exponent suffix may or must follow the mantissa.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExponentPolicy {
    /// An exponent marker is not part of the literal and is left unconsumed.
    Forbidden,
    /// A well-formed exponent is consumed; a malformed one is left
    /// unconsumed and the literal ends before the marker.
    Optional,
    /// The literal is invalid without a well-formed exponent.
    Required,
}

impl CharsFormat {
    /// Exponent policy for this combination of flags.
    ///
    /// | fixed | scientific | policy      |
    /// |-------|------------|-------------|
    /// | yes   | no         | `Forbidden` |
    /// | no    | yes        | `Required`  |
    /// | yes   | yes        | `Optional`  |
    /// | no    | no         | `Optional`  |
    ///
    /// The hex bit only changes the marker to `p`, so plain `HEX` and the
    /// empty set both have an optional exponent.
    pub fn exponent_policy(self) -> ExponentPolicy {
        let fixed = self.contains(CharsFormat::FIXED);
        let scientific = self.contains(CharsFormat::SCIENTIFIC);
        match (fixed, scientific) {
            (true, false) => ExponentPolicy::Forbidden,
            (false, true) => ExponentPolicy::Required,
            _ => ExponentPolicy::Optional,
        }
    }

    /// Returns true if literals are read as hexadecimal floats.
    pub fn is_hex(self) -> bool {
        self.contains(CharsFormat::HEX)
    }
}

impl Default for CharsFormat {
    fn default() -> Self {
        CharsFormat::GENERAL
    }
}

const NAMES: [(&str, CharsFormat); 4] = [
    ("general", CharsFormat::GENERAL),
    ("fixed", CharsFormat::FIXED),
    ("scientific", CharsFormat::SCIENTIFIC),
    ("hex", CharsFormat::HEX),
];

impl Display for CharsFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut remaining = *self;
        let mut first = true;
        for (name, flag) in NAMES {
            if remaining.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                remaining.remove(flag);
                first = false;
            }
        }
        Ok(())
    }
}

/// Error returned when a [`CharsFormat`] cannot be parsed from text.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ParseFormatError(());

impl Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("expected `fixed`, `scientific`, `hex` or `general`, joined by `|`")
    }
}

impl serde_core::de::StdError for ParseFormatError {}

impl FromStr for CharsFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut format = CharsFormat::empty();
        for part in s.split('|') {
            let part = part.trim_matches(|c: char| c.is_ascii_whitespace());
            match NAMES.iter().find(|(name, _)| *name == part) {
                Some((_, flag)) => format |= *flag,
                None => return Err(ParseFormatError(())),
            }
        }
        Ok(format)
    }
}

impl Serialize for CharsFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CharsFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FormatVisitor;

        impl<'de> Visitor<'de> for FormatVisitor {
            type Value = CharsFormat;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a float format such as `general` or `fixed|hex`")
            }

            fn visit_str<E>(self, value: &str) -> Result<CharsFormat, E>
            where
                E: de::Error,
            {
                value
                    .parse()
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(FormatVisitor)
    }
}
