// ABOUTME: Validated SMS originator/destination address with derived TON and NPI
// ABOUTME: Classifies input as numeric or alphanumeric and enforces the TS 23.040 length limits

use crate::datatypes::{NumericPlanIndicator, TypeOfNumber};
use std::fmt;

/// A validated short message address.
///
/// Numeric addresses are stored without their leading `+`; the `+` is carried
/// by the international type of number instead.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address {
    value: String,
    ton: TypeOfNumber,
    npi: NumericPlanIndicator,
}

impl Address {
    /// Longest alphanumeric address, in characters
    pub const MAX_ALPHANUMERIC_LEN: usize = 11;
    /// Longest numeric address, in digits (excluding a leading `+`)
    pub const MAX_NUMERIC_LEN: usize = 20;

    /// Creates an address, deriving TON and NPI from its content.
    ///
    /// Input made only of `0-9 + * # a b` is numeric (international, ISDN);
    /// anything else is alphanumeric.
    pub fn new(value: &str) -> Result<Self, AddressError> {
        if is_numeric(value) {
            Self::with_type(
                value,
                TypeOfNumber::International,
                NumericPlanIndicator::IsdnTelephone,
            )
        } else {
            Self::with_type(value, TypeOfNumber::Alphanumeric, NumericPlanIndicator::Unknown)
        }
    }

    /// Creates an address with an explicit TON and NPI, validating the value
    /// against them.
    pub fn with_type(
        value: &str,
        ton: TypeOfNumber,
        npi: NumericPlanIndicator,
    ) -> Result<Self, AddressError> {
        if value.trim().is_empty() {
            return Err(AddressError::Empty);
        }

        match ton {
            TypeOfNumber::Alphanumeric => {
                if npi != NumericPlanIndicator::Unknown {
                    return Err(AddressError::InvalidNumberingPlan { ton, npi });
                }
                let len = value.chars().count();
                if len > Self::MAX_ALPHANUMERIC_LEN {
                    return Err(AddressError::TooLong {
                        max_len: Self::MAX_ALPHANUMERIC_LEN,
                        actual_len: len,
                    });
                }
                Ok(Self {
                    value: value.to_string(),
                    ton,
                    npi,
                })
            }
            _ => {
                let digits = value.strip_prefix('+').unwrap_or(value);
                if digits.is_empty() {
                    return Err(AddressError::Empty);
                }
                if let Some((position, ch)) = digits
                    .chars()
                    .enumerate()
                    .find(|(_, c)| !is_numeric_char(*c))
                {
                    return Err(AddressError::InvalidCharacter { ch, position });
                }
                if digits.len() > Self::MAX_NUMERIC_LEN {
                    return Err(AddressError::TooLong {
                        max_len: Self::MAX_NUMERIC_LEN,
                        actual_len: digits.len(),
                    });
                }
                Ok(Self {
                    value: digits.to_string(),
                    ton,
                    npi,
                })
            }
        }
    }

    /// Returns the address value (numeric addresses without a leading `+`)
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the type of number
    pub fn ton(&self) -> TypeOfNumber {
        self.ton
    }

    /// Returns the numbering plan indicator
    pub fn npi(&self) -> NumericPlanIndicator {
        self.npi
    }

    /// Returns true for alphanumeric (sender-id style) addresses
    pub fn is_alphanumeric(&self) -> bool {
        self.ton == TypeOfNumber::Alphanumeric
    }

    /// Returns the type-of-address octet: `1 TTT NNNN`
    pub fn type_octet(&self) -> u8 {
        0x80 | ((self.ton as u8) << 4) | self.npi as u8
    }
}

fn is_numeric_char(c: char) -> bool {
    matches!(c, '0'..='9' | '*' | '#' | 'a' | 'b')
}

fn is_numeric(value: &str) -> bool {
    value.chars().all(|c| c == '+' || is_numeric_char(c))
}

/// Errors that can occur when creating an address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The address is empty or whitespace only
    Empty,
    /// The address exceeds the limit for its type
    TooLong { max_len: usize, actual_len: usize },
    /// A numeric address contains a character outside `0-9 * # a b`
    InvalidCharacter { ch: char, position: usize },
    /// Alphanumeric addresses must use the unknown numbering plan
    InvalidNumberingPlan {
        ton: TypeOfNumber,
        npi: NumericPlanIndicator,
    },
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::Empty => write!(f, "Address is empty"),
            AddressError::TooLong {
                max_len,
                actual_len,
            } => {
                write!(f, "Address too long: {actual_len} characters (max {max_len})")
            }
            AddressError::InvalidCharacter { ch, position } => {
                write!(f, "Invalid character {ch:?} at position {position} in numeric address")
            }
            AddressError::InvalidNumberingPlan { ton, npi } => {
                write!(f, "Numbering plan {npi:?} is not valid for {ton:?} addresses")
            }
        }
    }
}

impl std::error::Error for AddressError {}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ton == TypeOfNumber::International {
            write!(f, "+{}", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Address(\"{}\", {:?}, {:?})",
            self.value, self.ton, self.npi
        )
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
