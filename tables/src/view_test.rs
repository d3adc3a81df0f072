use super::*;
use crate::value::Value;

#[derive(Debug, PartialEq)]
struct Employee {
    name: &'static str,
    department: &'static str,
    manager: Option<&'static str>,
    salary: u32,
}

impl Record for Employee {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", self.name.into()),
            ("department", self.department.into()),
            ("manager", self.manager.into()),
            ("salary", self.salary.into()),
        ]
    }
}

fn staff() -> Vec<Employee> {
    vec![
        Employee { name: "Sarah", department: "Human Resources", manager: Some("CEO"), salary: 25000 },
        Employee { name: "Ahmed", department: "Engineering", manager: None, salary: 15000 },
        Employee { name: "layla", department: "Marketing", manager: Some("Marketing Director"), salary: 18000 },
    ]
}

fn columns() -> Vec<Column<Employee>> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("department", "Department").sortable(),
        Column::new("manager", "Manager"),
        Column::new("salary", "Salary")
            .sortable()
            .render(|employee: &Employee| format!("QAR {}", employee.salary)),
    ]
}

fn names(rows: RowSet<'_, Employee>) -> Vec<&'static str> {
    rows.into_vec().into_iter().map(|employee| employee.name).collect()
}

// =============================================================================
// construction
// =============================================================================

#[test]
fn duplicate_column_keys_are_rejected() {
    let result = TableView::<Employee, String>::new(vec![
        Column::new("name", "Name"),
        Column::new("name", "Full name"),
    ]);
    assert_eq!(result.err(), Some(TableError::DuplicateColumn("name".to_owned())));
}

#[test]
fn new_view_has_no_search_and_no_sort() {
    let view = TableView::new(columns()).expect("valid columns");
    assert_eq!(view.search_term(), "");
    assert_eq!(view.query().sort(), None);
    assert_eq!(view.columns().len(), 4);
}

// =============================================================================
// toggle_sort
// =============================================================================

#[test]
fn toggle_sort_cycles_through_three_states() {
    let mut view = TableView::new(columns()).expect("valid columns");
    view.toggle_sort("name").expect("known column");
    assert_eq!(view.sort_direction("name"), Some(SortDirection::Ascending));
    view.toggle_sort("name").expect("known column");
    assert_eq!(view.sort_direction("name"), Some(SortDirection::Descending));
    let state = view.toggle_sort("name").expect("known column");
    assert_eq!(state, None);
    assert_eq!(view.sort_direction("name"), None);
}

#[test]
fn toggle_sort_on_non_sortable_column_is_a_no_op() {
    let mut view = TableView::new(columns()).expect("valid columns");
    view.toggle_sort("department").expect("known column");
    view.toggle_sort("manager").expect("known column");
    assert_eq!(view.sort_direction("department"), Some(SortDirection::Ascending));
    assert_eq!(view.sort_direction("manager"), None);
}

#[test]
fn toggle_sort_on_unknown_key_is_an_error() {
    let mut view = TableView::new(columns()).expect("valid columns");
    assert_eq!(
        view.toggle_sort("email"),
        Err(TableError::UnknownColumn("email".to_owned()))
    );
}

#[test]
fn switching_columns_restarts_at_ascending() {
    let mut view = TableView::new(columns()).expect("valid columns");
    view.toggle_sort("name").expect("known column");
    view.toggle_sort("name").expect("known column");
    view.toggle_sort("salary").expect("known column");
    assert_eq!(view.sort_direction("name"), None);
    assert_eq!(view.sort_direction("salary"), Some(SortDirection::Ascending));
}

// =============================================================================
// rows
// =============================================================================

#[test]
fn rows_follow_search_then_sort() {
    let records = staff();
    let mut view = TableView::new(columns()).expect("valid columns");
    assert_eq!(names(view.rows(&records)), ["Sarah", "Ahmed", "layla"]);

    view.toggle_sort("name").expect("known column");
    assert_eq!(names(view.rows(&records)), ["Ahmed", "layla", "Sarah"]);

    view.set_search_term("A");
    assert_eq!(names(view.rows(&records)), ["Ahmed", "layla", "Sarah"]);

    view.set_search_term("director");
    assert_eq!(names(view.rows(&records)), ["layla"]);

    view.set_search_term("nobody");
    assert_eq!(view.rows(&records), RowSet::NoMatches);
}

#[test]
fn empty_input_reports_no_matches() {
    let view = TableView::new(columns()).expect("valid columns");
    let records: Vec<Employee> = Vec::new();
    assert!(view.rows(&records).is_empty());
}

// =============================================================================
// cell
// =============================================================================

#[test]
fn cell_uses_renderer_when_present() {
    let records = staff();
    let view = TableView::new(columns()).expect("valid columns");
    let salary = &view.columns()[3];
    assert_eq!(view.cell(&records[0], salary), Cell::Rendered("QAR 25000".to_owned()));
}

#[test]
fn cell_falls_back_to_field_text_and_placeholder() {
    let records = staff();
    let view = TableView::new(columns()).expect("valid columns");
    let manager = &view.columns()[2];
    assert_eq!(view.cell(&records[0], manager), Cell::Text("CEO".to_owned()));
    assert_eq!(view.cell(&records[1], manager), Cell::Text("-".to_owned()));
}

#[test]
#[should_panic(expected = "render failed")]
fn render_panics_reach_the_caller() {
    let records = staff();
    let view = TableView::new(vec![
        Column::new("name", "Name").render(|_: &Employee| -> String { panic!("render failed") }),
    ])
    .expect("valid columns");
    let column = &view.columns()[0];
    let _ = view.cell(&records[0], column);
}
