use super::*;

#[test]
fn format_amount_groups_thousands() {
    assert_eq!(format_amount(2_100_000), "$2,100,000");
    assert_eq!(format_amount(375_000), "$375,000");
    assert_eq!(format_amount(35_000), "$35,000");
}

#[test]
fn format_amount_small_values_have_no_separator() {
    assert_eq!(format_amount(0), "$0");
    assert_eq!(format_amount(999), "$999");
    assert_eq!(format_amount(1000), "$1,000");
}
