use super::*;

#[test]
fn letters_compare_case_insensitively() {
    assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
    assert_eq!(locale_compare("Zeta", "alpha"), Ordering::Greater);
}

#[test]
fn lowercase_wins_ties() {
    assert_eq!(locale_compare("annual", "Annual"), Ordering::Less);
    assert_eq!(locale_compare("Annual", "annual"), Ordering::Greater);
    assert_eq!(locale_compare("same", "same"), Ordering::Equal);
}

#[test]
fn digits_sort_before_letters_and_after_symbols() {
    assert_eq!(locale_compare("9", "a"), Ordering::Less);
    assert_eq!(locale_compare("-", "0"), Ordering::Less);
    assert_eq!(locale_compare(":", "0"), Ordering::Less);
    assert_eq!(locale_compare(" x", "-x"), Ordering::Less);
}

#[test]
fn numbers_compare_lexicographically() {
    assert_eq!(locale_compare("10", "9"), Ordering::Less);
    assert_eq!(locale_compare("15000", "25000"), Ordering::Less);
}

#[test]
fn shorter_prefix_sorts_first() {
    assert_eq!(locale_compare("Eng", "Engineering"), Ordering::Less);
    assert_eq!(locale_compare("", "a"), Ordering::Less);
}

#[test]
fn iso_dates_order_chronologically() {
    let mut dates = vec!["2025-02-01", "2025-01-22", "2025-01-25", "2025-01-19"];
    dates.sort_by(|a, b| locale_compare(a, b));
    assert_eq!(dates, ["2025-01-19", "2025-01-22", "2025-01-25", "2025-02-01"]);
}
