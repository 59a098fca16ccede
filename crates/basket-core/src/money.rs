//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Fixed-Point Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A half-price-second-widget discount of -16.475 cannot even be          │
//! │  represented in cents, let alone in a binary float.                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Ten-Thousandths                                  │
//! │    1 currency unit = 10 000 units (scale 4)                             │
//! │    32.95  → 329 500 units                                               │
//! │    -16.475 → -164 750 units                                             │
//! │    Four fractional digits of working precision, zero rounding error     │
//! │    for ordinary currency math.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Money;
//!
//! // Parse from a decimal literal (preferred for configuration)
//! let price: Money = "32.95".parse().unwrap();
//!
//! // Arithmetic operations
//! let line_total = price * 2i64;                   // 65.90
//! let discounted = line_total + "-16.475".parse::<Money>().unwrap();
//! assert_eq!(discounted.to_string(), "49.425");
//!
//! // NEVER do this:
//! // let bad = Money::from_float(32.95); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ParseMoneyError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in ten-thousandths of a currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for discounts and surcharges
/// - **Scale 4**: The working precision of the pricing engine; explicit in
///   [`Money::SCALE`] rather than hidden in process-wide state
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derived `Ord`**: Integer ordering on the units IS the three-way
///   decimal compare
///
/// ## Where Money Flows
/// ```text
/// CatalogProduct.price ──► line subtotal (price × qty)
///                               │
///            FixedAdjustment ───┤ (offer applied)
///                               ▼
///                        basket subtotal ──► delivery band test
///                               │
///                               ▼
///                          grand total
///
/// EVERY monetary value in the engine flows through this type
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Number of fractional decimal digits of working precision.
    pub const SCALE: u32 = 4;

    /// Units per whole currency unit (10^SCALE).
    pub const UNITS_PER_MAJOR: i64 = 10_000;

    /// Creates a Money value from raw units (ten-thousandths).
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price = Money::from_units(329_500); // 32.95
    /// assert_eq!(price.units(), 329_500);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * Self::UNITS_PER_MAJOR)
    }

    /// Creates a Money value from major and minor units (e.g. dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price = Money::from_major_minor(32, 95); // 32.95
    /// assert_eq!(price.units(), 329_500);
    ///
    /// let discount = Money::from_major_minor(-4, 95); // -4.95
    /// assert_eq!(discount.units(), -49_500);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-4, 95)` = -4.95, not -3.05
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * Self::UNITS_PER_MAJOR - minor * 100)
        } else {
            Money(major * Self::UNITS_PER_MAJOR + minor * 100)
        }
    }

    /// Returns the raw value in units (ten-thousandths).
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns the whole-currency-unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / Self::UNITS_PER_MAJOR
    }

    /// Returns the fractional portion in units (always 0-9999).
    #[inline]
    pub const fn frac_units(&self) -> i64 {
        (self.0 % Self::UNITS_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity. Always exact.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let unit_price: Money = "32.95".parse().unwrap();
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.to_string(), "98.85");
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Multiplies two Money values exactly where the result fits in scale 4.
    ///
    /// ## Precision
    /// The product of two scale-4 values has up to eight fractional digits.
    /// An `i128` intermediate carries the full product; digits beyond scale 4
    /// are rounded half-away-from-zero. For ordinary 2-digit currency values
    /// the product never exceeds four fractional digits, so the result is
    /// exact.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price: Money = "32.95".parse().unwrap();
    /// let two: Money = "2".parse().unwrap();
    /// assert_eq!(price.multiply(two).to_string(), "65.90");
    /// ```
    pub fn multiply(&self, other: Money) -> Money {
        let product = self.0 as i128 * other.0 as i128;
        let scale = Self::UNITS_PER_MAJOR as i128;
        let quotient = product / scale;
        let remainder = product % scale;
        let rounded = if remainder.abs() * 2 >= scale {
            quotient + product.signum()
        } else {
            quotient
        };
        Money(rounded as i64)
    }

    /// Rounds to display scale (2 decimal places), half-away-from-zero.
    ///
    /// ## Rounding Rule
    /// The grand total is always computed and returned at full scale-4
    /// precision. Receipts and price displays use 2 decimal places; this is
    /// the single documented place where sub-cent digits are rounded:
    /// 54.375 → 54.38, 98.275 → 98.28, -16.475 → -16.48.
    pub const fn rounded_to_cents(&self) -> Money {
        let per_cent = Self::UNITS_PER_MAJOR / 100;
        let remainder = self.0 % per_cent;
        let base = self.0 - remainder;
        if remainder.abs() * 2 >= per_cent {
            Money(base + per_cent * self.0.signum())
        } else {
            Money(base)
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

impl FromStr for Money {
    type Err = ParseMoneyError;

    /// Parses a decimal literal such as `"32.95"`, `"-16.475"` or `"0"`.
    ///
    /// Input precision is preserved exactly. Literals with more than
    /// [`Money::SCALE`] fractional digits are rejected rather than silently
    /// truncated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, digits) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (digits, ""),
        };

        // ".5" is a valid literal; "." and "" are not
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseMoneyError::invalid(s));
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ParseMoneyError::invalid(s));
        }
        if frac_part.len() > Money::SCALE as usize {
            return Err(ParseMoneyError::TooManyDecimals {
                literal: s.trim().to_string(),
                max: Money::SCALE,
            });
        }

        let major: i64 = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse()
                .map_err(|_| ParseMoneyError::out_of_range(s))?
        };

        // Scale the fraction up to exactly SCALE digits: "95" → 9500 units
        let mut frac_units: i64 = 0;
        if !frac_part.is_empty() {
            // Fits in i64: at most SCALE digits
            frac_units = frac_part
                .parse::<i64>()
                .map_err(|_| ParseMoneyError::invalid(s))?;
            for _ in 0..(Money::SCALE as usize - frac_part.len()) {
                frac_units *= 10;
            }
        }

        let magnitude = major
            .checked_mul(Money::UNITS_PER_MAJOR)
            .and_then(|units| units.checked_add(frac_units))
            .ok_or_else(|| ParseMoneyError::out_of_range(s))?;

        Ok(Money(if negative { -magnitude } else { magnitude }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display prints the exact decimal value with trailing zeros trimmed,
/// keeping at least two fractional digits: `98.275`, `37.85`, `0.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let mut frac = format!("{:04}", self.frac_units());
        while frac.len() > 2 && frac.ends_with('0') {
            frac.pop();
        }
        write!(f, "{}{}.{}", sign, self.major().abs(), frac)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Negation (discount ↔ surcharge).
impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by integer quantity (for line totals).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Multiplication by i32.
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

// =============================================================================
// Serde: exact decimal strings, never binary floats
// =============================================================================

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
