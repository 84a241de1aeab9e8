//! File-size value type with unit conversion across decimal (bit-based)
//! and binary (byte-based) magnitude scales.
//!
//! A [`FileSize`] holds a decimal magnitude counted in bytes (binary base,
//! powers of 1024) or bits (decimal base, powers of 1000). Conversions
//! rescale across the bit/byte boundary exactly once and then divide by the
//! target unit's scale factor; they never mutate the stored value.

mod unit;

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::parse::NumberFormat;

pub use unit::{Unit, YOTTA_BIT, YOTTA_BYTE, ZETTA_BIT, ZETTA_BYTE};

const BITS_PER_BYTE: Decimal = dec!(8);

/// The magnitude scale a [`FileSize`] is measured in, fixed at construction.
///
/// `Binary` means the stored magnitude counts bytes and scales by powers of
/// 2; `Decimal` means it counts bits and scales by powers of 10. The
/// `Display` suffix rendering (`Binary` -> `"b"`, `Decimal` -> `"B"`) is
/// the reverse mapping; it is preserved as-is from the original behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseSystem {
    /// Byte-oriented, 1024-based scaling.
    #[default]
    Binary,
    /// Bit-oriented, 1000-based scaling.
    Decimal,
}

/// A file size: a decimal magnitude tagged with its base system.
///
/// The magnitude is public and freely mutable; the base system never
/// changes after construction. All conversions are pure reads.
///
/// # Examples
///
/// ```
/// use kitbag::filesize::{BaseSystem, FileSize, Unit};
/// use rust_decimal_macros::dec;
///
/// let size = FileSize::new(BaseSystem::Binary, dec!(1024));
/// assert_eq!(size.to_unit(Unit::KB), dec!(1));
/// assert_eq!(size.to_unit_string(Unit::KB), "1KB");
/// ```
///
/// Equality compares both magnitude and base; ordering compares the raw
/// magnitude only, without normalizing across bases:
///
/// ```
/// use kitbag::filesize::{BaseSystem, FileSize};
/// use rust_decimal_macros::dec;
///
/// let a = FileSize::new(BaseSystem::Binary, dec!(1));
/// let b = FileSize::new(BaseSystem::Decimal, dec!(0));
/// assert!(a > b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FileSize {
    /// The stored quantity: bytes under [`BaseSystem::Binary`], bits under
    /// [`BaseSystem::Decimal`].
    pub magnitude: Decimal,
    base: BaseSystem,
}

impl FileSize {
    /// Create a file size with the given base and magnitude.
    ///
    /// No validation is performed; negative magnitudes flow through the
    /// conversion arithmetic unchanged.
    pub fn new(base: BaseSystem, magnitude: Decimal) -> Self {
        Self { magnitude, base }
    }

    /// A byte count under the binary base.
    pub fn from_bytes(bytes: u64) -> Self {
        Self::new(BaseSystem::Binary, Decimal::from(bytes))
    }

    /// A bit count under the decimal base.
    pub fn from_bits(bits: u64) -> Self {
        Self::new(BaseSystem::Decimal, Decimal::from(bits))
    }

    /// The base system fixed at construction.
    pub fn base_system(&self) -> BaseSystem {
        self.base
    }

    /// Convert the stored magnitude to the given unit.
    ///
    /// Crossing the bit/byte boundary applies exactly one factor of 8:
    /// a binary (byte) magnitude is multiplied by 8 for bit units, and a
    /// decimal (bit) magnitude is divided by 8 for byte units. Same-domain
    /// conversions divide by the unit scalar directly.
    pub fn to_unit(&self, unit: Unit) -> Decimal {
        self.rescaled_for(unit.is_byte_unit()) / unit.scalar()
    }

    /// [`FileSize::to_unit`] with the result round-tripped through the
    /// given number format.
    ///
    /// If the reparse fails, the rescaled-but-undivided intermediate is
    /// returned instead. That lenient fallback is inherited behavior; it is
    /// unreachable for finite decimal magnitudes.
    pub fn to_unit_localized(&self, unit: Unit, format: &NumberFormat) -> Decimal {
        let rescaled = self.rescaled_for(unit.is_byte_unit());
        let converted = rescaled / unit.scalar();
        format
            .parse(&format.format_decimal(converted))
            .unwrap_or(rescaled)
    }

    /// The converted value followed by the unit's symbol, e.g. `"1KB"`.
    pub fn to_unit_string(&self, unit: Unit) -> String {
        format!("{}{}", self.to_unit(unit), unit.symbol())
    }

    /// [`FileSize::to_unit_string`] rendered with the given number format's
    /// decimal separator.
    pub fn to_unit_string_localized(&self, unit: Unit, format: &NumberFormat) -> String {
        format!(
            "{}{}",
            format.format_decimal(self.to_unit_localized(unit, format)),
            unit.symbol()
        )
    }

    /// Convert to zettabits (10^21), beyond the [`Unit`] range.
    pub fn to_zetta_bit(&self) -> Decimal {
        self.rescaled_for(false) / ZETTA_BIT
    }

    /// Convert to zettabytes (2^70), beyond the [`Unit`] range.
    pub fn to_zetta_byte(&self) -> Decimal {
        self.rescaled_for(true) / ZETTA_BYTE
    }

    /// Convert to yottabits (10^24), beyond the [`Unit`] range.
    pub fn to_yotta_bit(&self) -> Decimal {
        self.rescaled_for(false) / YOTTA_BIT
    }

    /// Convert to yottabytes (2^80), beyond the [`Unit`] range.
    pub fn to_yotta_byte(&self) -> Decimal {
        self.rescaled_for(true) / YOTTA_BYTE
    }

    /// [`FileSize::to_zetta_bit`] followed by `"Zb"`.
    pub fn to_zetta_bit_string(&self) -> String {
        format!("{}Zb", self.to_zetta_bit())
    }

    /// [`FileSize::to_zetta_byte`] followed by `"ZB"`.
    pub fn to_zetta_byte_string(&self) -> String {
        format!("{}ZB", self.to_zetta_byte())
    }

    /// [`FileSize::to_yotta_bit`] followed by `"Yb"`.
    pub fn to_yotta_bit_string(&self) -> String {
        format!("{}Yb", self.to_yotta_bit())
    }

    /// [`FileSize::to_yotta_byte`] followed by `"YB"`.
    pub fn to_yotta_byte_string(&self) -> String {
        format!("{}YB", self.to_yotta_byte())
    }

    // Rescale into the target domain: byte units want bytes, bit units want
    // bits. At most one x8 or /8 ever applies.
    fn rescaled_for(&self, byte_unit: bool) -> Decimal {
        match self.base {
            BaseSystem::Binary if !byte_unit => self.magnitude * BITS_PER_BYTE,
            BaseSystem::Decimal if byte_unit => self.magnitude / BITS_PER_BYTE,
            _ => self.magnitude,
        }
    }
}

impl Default for FileSize {
    fn default() -> Self {
        Self::new(BaseSystem::Binary, Decimal::ZERO)
    }
}

// Ordering deliberately ignores the base system and compares the raw
// magnitudes, so a 1-bit size compares greater than a 0-byte size. This is
// inherited, tested behavior; equality still requires matching bases.
impl PartialOrd for FileSize {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.magnitude.partial_cmp(&other.magnitude)
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.base {
            BaseSystem::Binary => "b",
            BaseSystem::Decimal => "B",
        };
        write!(f, "{}{}", self.magnitude, suffix)
    }
}
