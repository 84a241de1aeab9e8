//! Conversion target units and their scale factors.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// ZettaBit, Zb, 10^21. Outside the [`Unit`] set; see the `to_zetta_*`
/// methods on [`FileSize`](crate::filesize::FileSize).
pub const ZETTA_BIT: Decimal = dec!(1000000000000000000000);

/// YottaBit, Yb, 10^24.
pub const YOTTA_BIT: Decimal = dec!(1000000000000000000000000);

/// ZettaByte, ZB, 2^70.
pub const ZETTA_BYTE: Decimal = dec!(1180591620717411303424);

/// YottaByte, YB, 2^80.
pub const YOTTA_BYTE: Decimal = dec!(1208925819614629174706176);

/// A named scale factor used as a conversion target.
///
/// Bit units (`Kb` through `Eb`) follow the decimal progression of powers
/// of 1000; byte units (`KB` through `EB`) follow the binary progression of
/// powers of 1024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// KiloBit, Kb, 10^3
    Kb,
    /// MegaBit, Mb, 10^6
    Mb,
    /// GigaBit, Gb, 10^9
    Gb,
    /// TeraBit, Tb, 10^12
    Tb,
    /// PetaBit, Pb, 10^15
    Pb,
    /// ExaBit, Eb, 10^18
    Eb,
    /// KiloByte, KB, 2^10
    KB,
    /// MegaByte, MB, 2^20
    MB,
    /// GigaByte, GB, 2^30
    GB,
    /// TeraByte, TB, 2^40
    TB,
    /// PetaByte, PB, 2^50
    PB,
    /// ExaByte, EB, 2^60
    EB,
}

impl Unit {
    /// Every unit, bit progression first.
    pub const ALL: [Unit; 12] = [
        Unit::Kb,
        Unit::Mb,
        Unit::Gb,
        Unit::Tb,
        Unit::Pb,
        Unit::Eb,
        Unit::KB,
        Unit::MB,
        Unit::GB,
        Unit::TB,
        Unit::PB,
        Unit::EB,
    ];

    /// The divisor this unit applies to a bit or byte count.
    pub fn scalar(self) -> Decimal {
        match self {
            Unit::Kb => dec!(1000),
            Unit::Mb => dec!(1000000),
            Unit::Gb => dec!(1000000000),
            Unit::Tb => dec!(1000000000000),
            Unit::Pb => dec!(1000000000000000),
            Unit::Eb => dec!(1000000000000000000),
            Unit::KB => dec!(1024),
            Unit::MB => dec!(1048576),
            Unit::GB => dec!(1073741824),
            Unit::TB => dec!(1099511627776),
            Unit::PB => dec!(1125899906842624),
            Unit::EB => dec!(1152921504606846976),
        }
    }

    /// The unit's conventional symbol, e.g. `"Kb"` or `"KB"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Kb => "Kb",
            Unit::Mb => "Mb",
            Unit::Gb => "Gb",
            Unit::Tb => "Tb",
            Unit::Pb => "Pb",
            Unit::Eb => "Eb",
            Unit::KB => "KB",
            Unit::MB => "MB",
            Unit::GB => "GB",
            Unit::TB => "TB",
            Unit::PB => "PB",
            Unit::EB => "EB",
        }
    }

    /// Whether this is a byte unit (symbol ends in `'B'`) rather than a bit
    /// unit.
    pub fn is_byte_unit(self) -> bool {
        self.symbol().ends_with('B')
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
