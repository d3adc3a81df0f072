use super::*;
use crate::value::Value;

#[derive(Debug, PartialEq)]
struct Leave {
    id: &'static str,
    department: &'static str,
    start_date: Option<&'static str>,
    days: u32,
}

impl Record for Leave {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", self.id.into()),
            ("department", self.department.into()),
            ("start_date", self.start_date.into()),
            ("days", self.days.into()),
        ]
    }
}

fn leaves() -> Vec<Leave> {
    vec![
        Leave { id: "1", department: "Engineering", start_date: Some("2025-02-01"), days: 5 },
        Leave { id: "2", department: "Engineering", start_date: Some("2025-01-22"), days: 2 },
        Leave { id: "3", department: "Engineering", start_date: Some("2025-01-19"), days: 1 },
        Leave { id: "4", department: "Marketing", start_date: Some("2025-01-25"), days: 12 },
    ]
}

fn ids(rows: RowSet<'_, Leave>) -> Vec<&'static str> {
    rows.into_vec().into_iter().map(|leave| leave.id).collect()
}

fn sorted(key: &str, direction: SortDirection) -> Query {
    let mut query = Query::default();
    query.set_sort(Some(SortState {
        key: key.to_owned(),
        direction,
    }));
    query
}

// =============================================================================
// next_sort
// =============================================================================

#[test]
fn next_sort_cycles_ascending_descending_off() {
    let first = next_sort(None, "days");
    assert_eq!(first.as_ref().map(|s| s.direction), Some(SortDirection::Ascending));
    let second = next_sort(first.as_ref(), "days");
    assert_eq!(second.as_ref().map(|s| s.direction), Some(SortDirection::Descending));
    let third = next_sort(second.as_ref(), "days");
    assert_eq!(third, None);
    let fourth = next_sort(third.as_ref(), "days");
    assert_eq!(fourth.as_ref().map(|s| s.direction), Some(SortDirection::Ascending));
}

#[test]
fn next_sort_on_other_key_restarts_ascending() {
    let current = SortState {
        key: "days".to_owned(),
        direction: SortDirection::Ascending,
    };
    let next = next_sort(Some(&current), "department");
    assert_eq!(
        next,
        Some(SortState {
            key: "department".to_owned(),
            direction: SortDirection::Ascending,
        })
    );
}

// =============================================================================
// search
// =============================================================================

#[test]
fn empty_term_keeps_every_record_in_order() {
    let records = leaves();
    let mut query = Query::default();
    query.set_search_term("");
    assert_eq!(ids(query.apply(&records)), ["1", "2", "3", "4"]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let records = leaves();
    let mut query = Query::default();
    query.set_search_term("engineering");
    assert_eq!(ids(query.apply(&records)), ["1", "2", "3"]);
    query.set_search_term("KETI");
    assert_eq!(ids(query.apply(&records)), ["4"]);
}

#[test]
fn search_covers_fields_that_are_not_columns() {
    let records = leaves();
    let mut query = Query::default();
    query.set_search_term("12");
    assert_eq!(ids(query.apply(&records)), ["4"]);
}

#[test]
fn search_treats_metacharacters_literally() {
    let records = leaves();
    let mut query = Query::default();
    query.set_search_term("2025-01-.*");
    assert_eq!(query.apply(&records), RowSet::NoMatches);
    query.set_search_term("-01-");
    assert_eq!(ids(query.apply(&records)), ["2", "3", "4"]);
}

#[test]
fn no_match_yields_no_matches_signal() {
    let records = leaves();
    let mut query = Query::default();
    query.set_search_term("finance");
    let rows = query.apply(&records);
    assert!(rows.is_empty());
    assert_eq!(rows.len(), 0);
}

#[test]
fn null_fields_never_match_a_term() {
    let records = vec![Leave { id: "9", department: "Ops", start_date: None, days: 3 }];
    let mut query = Query::default();
    query.set_search_term("-");
    assert!(query.apply(&records).is_empty());
}

// =============================================================================
// sort
// =============================================================================

#[test]
fn ascending_start_date_is_string_order() {
    let records = leaves();
    let query = sorted("start_date", SortDirection::Ascending);
    assert_eq!(ids(query.apply(&records)), ["3", "2", "4", "1"]);
}

#[test]
fn numeric_fields_sort_lexicographically() {
    let records = leaves();
    let query = sorted("days", SortDirection::Ascending);
    // "1" < "12" < "2" < "5"
    assert_eq!(ids(query.apply(&records)), ["3", "4", "2", "1"]);
}

#[test]
fn nulls_sort_last_in_both_directions() {
    let mut records = leaves();
    records.insert(0, Leave { id: "n1", department: "Ops", start_date: None, days: 1 });
    records.push(Leave { id: "n2", department: "Ops", start_date: None, days: 1 });

    let ascending = sorted("start_date", SortDirection::Ascending);
    assert_eq!(ids(ascending.apply(&records)), ["3", "2", "4", "1", "n1", "n2"]);

    let descending = sorted("start_date", SortDirection::Descending);
    assert_eq!(ids(descending.apply(&records)), ["1", "4", "2", "3", "n1", "n2"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let records = leaves();
    let query = sorted("department", SortDirection::Descending);
    assert_eq!(ids(query.apply(&records)), ["4", "1", "2", "3"]);
}

#[test]
fn sort_by_missing_field_keeps_input_order() {
    let records = leaves();
    let query = sorted("no_such_field", SortDirection::Ascending);
    assert_eq!(ids(query.apply(&records)), ["1", "2", "3", "4"]);
}

#[test]
fn filter_applies_before_sort() {
    let records = leaves();
    let mut query = sorted("start_date", SortDirection::Descending);
    query.set_search_term("engineering");
    assert_eq!(ids(query.apply(&records)), ["1", "2", "3"]);
}
