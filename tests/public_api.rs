//! End-to-end checks through the public API only.

use kitbag::prelude::*;
use rust_decimal_macros::dec;

#[test]
fn filesize_conversion_matrix() {
    let byte_sized = FileSize::new(BaseSystem::Binary, dec!(1073741824));
    assert_eq!(byte_sized.to_unit(Unit::GB), dec!(1));
    assert_eq!(byte_sized.to_unit(Unit::MB), dec!(1024));
    // Crossing into bit units multiplies by 8 before dividing.
    assert_eq!(byte_sized.to_unit(Unit::Gb), dec!(8.589934592));

    let bit_sized = FileSize::new(BaseSystem::Decimal, dec!(8000));
    assert_eq!(bit_sized.to_unit(Unit::Kb), dec!(8));
    assert_eq!(bit_sized.to_unit(Unit::KB), dec!(1000) / dec!(1024));
}

#[test]
fn localized_output_parses_back() {
    let format = NumberFormat::european();
    let size = FileSize::new(BaseSystem::Binary, dec!(8));
    let rendered = size.to_unit_string_localized(Unit::Kb, &format);
    assert_eq!(rendered, "0,064Kb");

    let numeric = rendered.trim_end_matches("Kb");
    let parsed: rust_decimal::Decimal = format.parse(numeric).unwrap();
    assert_eq!(parsed, size.to_unit(Unit::Kb));
}

#[test]
fn lenient_parsing_defaults() {
    assert_eq!("1,234".parse_num::<i64>().unwrap(), 1234);
    assert_eq!("bogus".parse_num_or(42_u32), 42);
}

#[test]
fn contains_predicates() {
    let units = ["Kb", "MB", "GB"];
    assert!(units.contains_any(&["MB", "TB"]));
    assert!(!units.contains_all(&["MB", "TB"]));
    assert!("1024KB".contains_any_chars(&['K', 'q']));
}

#[test]
fn system_info_reports_memory_as_filesize() {
    let info = SystemInfo::detect();
    assert!(info.cpu_cores > 0);
    assert!(info.total_memory > 0);
    assert_eq!(info.memory_filesize().base_system(), BaseSystem::Binary);
    assert!(info.memory_display().ends_with("GB"));
}
