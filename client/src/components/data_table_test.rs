use super::*;

#[test]
fn sort_indicator_tracks_direction() {
    assert_eq!(sort_indicator(Some(SortDirection::Ascending)), "↑");
    assert_eq!(sort_indicator(Some(SortDirection::Descending)), "↓");
    assert_eq!(sort_indicator(None), "");
}

#[test]
fn aria_sort_uses_aria_tokens() {
    assert_eq!(aria_sort(Some(SortDirection::Ascending)), "ascending");
    assert_eq!(aria_sort(Some(SortDirection::Descending)), "descending");
    assert_eq!(aria_sort(None), "none");
}
