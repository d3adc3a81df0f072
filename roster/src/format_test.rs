use super::*;

#[test]
fn group_thousands_inserts_separators() {
    assert_eq!(group_thousands(0.0), "0");
    assert_eq!(group_thousands(999.0), "999");
    assert_eq!(group_thousands(1000.0), "1,000");
    assert_eq!(group_thousands(171_000.0), "171,000");
    assert_eq!(group_thousands(1_234_567.0), "1,234,567");
}

#[test]
fn group_thousands_keeps_up_to_three_fraction_digits() {
    assert_eq!(group_thousands(25_000.0 * 1.1), "27,500");
    assert_eq!(group_thousands(1234.5), "1,234.5");
    assert_eq!(group_thousands(0.123_456), "0.123");
    assert_eq!(group_thousands(-1500.25), "-1,500.25");
}

#[test]
fn currency_prefixes_code() {
    assert_eq!(currency(3750.0), "QAR 3,750");
}

#[test]
fn initials_take_first_letter_of_each_part() {
    assert_eq!(initials("Sarah Al-Thani"), "SA");
    assert_eq!(initials("  fatima   hassan "), "FH");
    assert_eq!(initials(""), "");
}

#[test]
fn today_is_iso_formatted() {
    let today = today_iso();
    assert_eq!(today.len(), 10);
    assert!(chrono::NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
}
