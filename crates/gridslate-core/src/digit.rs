//! Digit representation for board cells.

use std::fmt::{self, Display};

/// A cell digit in the range 1-9.
///
/// This enum provides type-safe representation of digits, preventing invalid
/// values at compile time. Each variant corresponds to exactly one digit
/// value, so a toggle transition or a candidate mark can never carry an
/// out-of-range digit.
///
/// # Examples
///
/// ```
/// use gridslate_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Fallible conversion from untrusted input (e.g. persisted state)
/// let digit = Digit::try_from_value(7).unwrap();
/// assert_eq!(digit, Digit::D7);
/// assert!(Digit::try_from_value(0).is_err());
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     assert!((1..=9).contains(&digit.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

/// Error returned when a raw value does not name a digit 1-9.
///
/// Produced by [`Digit::try_from_value`] when decoding untrusted input such
/// as persisted board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("digit value out of range 1-9: {value}")]
pub struct DigitOutOfRange {
    /// The rejected raw value.
    pub value: u8,
}

impl Digit {
    /// Array containing all digits from 1 to 9, in order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a raw value, rejecting anything outside 1-9.
    ///
    /// # Errors
    ///
    /// Returns [`DigitOutOfRange`] if `value` is not in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridslate_core::Digit;
    ///
    /// assert_eq!(Digit::try_from_value(1), Ok(Digit::D1));
    /// assert_eq!(Digit::try_from_value(9), Ok(Digit::D9));
    /// assert!(Digit::try_from_value(10).is_err());
    /// ```
    pub const fn try_from_value(value: u8) -> Result<Self, DigitOutOfRange> {
        match value {
            1 => Ok(Self::D1),
            2 => Ok(Self::D2),
            3 => Ok(Self::D3),
            4 => Ok(Self::D4),
            5 => Ok(Self::D5),
            6 => Ok(Self::D6),
            7 => Ok(Self::D7),
            8 => Ok(Self::D8),
            9 => Ok(Self::D9),
            value => Err(DigitOutOfRange { value }),
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the digit as a static string, for UI labels.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridslate_core::Digit;
    ///
    /// assert_eq!(Digit::D4.as_str(), "4");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1",
            Self::D2 => "2",
            Self::D3 => "3",
            Self::D4 => "4",
            Self::D5 => "5",
            Self::D6 => "6",
            Self::D7 => "7",
            Self::D8 => "8",
            Self::D9 => "9",
        }
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
