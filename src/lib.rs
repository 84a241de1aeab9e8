//! # kitbag
//!
//! Grab-bag utility library: lenient numeric parsing, contains predicates,
//! system information, and file-size unit conversion.
//!
//! ## Quick Start
//!
//! ```
//! use kitbag::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! // File-size conversion across bit and byte scales.
//! let size = FileSize::new(BaseSystem::Binary, dec!(1024));
//! assert_eq!(size.to_unit(Unit::KB), dec!(1));
//!
//! // Lenient parsing with a fallback default.
//! assert_eq!("not a number".parse_num_or(0_i32), 0);
//!
//! // Multi-needle containment checks.
//! assert!("kitbag".contains_any(&["kit", "caboodle"]));
//! ```
//!
//! ## Modules
//!
//! - [`filesize`]: the [`FileSize`](filesize::FileSize) value type and its
//!   [`Unit`](filesize::Unit) conversion targets
//! - [`parse`]: locale-aware numeric parsing with try-parse-or-default
//!   semantics
//! - [`contents`]: contains-any / contains-all predicates for strings and
//!   slices
//! - [`system`]: operating-system and hardware property bag
//! - [`error`]: hierarchical error system
//!
//! The file-size and parsing layers share one locale capability,
//! [`parse::NumberFormat`], so localized conversion output and input round
//! trip through the same separator rules.

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// Re-exports the most commonly used types:
///
/// ```
/// use kitbag::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::Result;
    pub use crate::error::AppError;

    // File sizes
    pub use crate::filesize::{BaseSystem, FileSize, Unit};

    // Parsing
    pub use crate::parse::{LenientParse, NumberFormat};

    // Contains predicates
    pub use crate::contents::{SliceContents, StrContents};

    // System information
    pub use crate::system::SystemInfo;
}

/// File-size value type and unit conversion.
pub mod filesize;

/// Locale-aware lenient numeric parsing.
pub mod parse;

/// Contains-any / contains-all predicates.
pub mod contents;

/// Operating-system and hardware information.
pub mod system;

/// Error handling - hierarchical error system.
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
