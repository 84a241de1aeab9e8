//! Operating-system and hardware information.
//!
//! A property-bag accessor over platform queries, with display-oriented
//! label mapping. Detection never fails: every probe has a fallback value
//! and degradations are logged rather than surfaced.

mod info;

pub use info::{OsFamily, SystemInfo, detect_cpu_cores, detect_total_memory};
