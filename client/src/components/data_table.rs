//! Searchable, sortable table over any record collection.
//!
//! DESIGN
//! ======
//! All search and sort state lives in a `tables::TableView` held in a signal;
//! this component only forwards input events to it and renders what it
//! returns. The table recomputes its rows from scratch whenever the records,
//! the search term, or the sort changes.

use leptos::prelude::*;
use tables::{Cell, Column, Record, RowSet, SortDirection, TableView};

/// Arrow shown next to a header for its sort direction.
pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "↑",
        Some(SortDirection::Descending) => "↓",
        None => "",
    }
}

/// `aria-sort` value for a header.
pub fn aria_sort(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    }
}

/// Generic data table with a search box and clickable sortable headers.
#[component]
pub fn DataTable<R>(
    columns: Vec<Column<R, AnyView>>,
    #[prop(into)] records: Signal<Vec<R>>,
    #[prop(into, default = "Search...".to_owned())] search_placeholder: String,
) -> impl IntoView
where
    R: Record + Clone + Send + Sync + 'static,
{
    let headers: Vec<(String, String, bool)> = columns
        .iter()
        .map(|column| {
            (
                column.key().to_owned(),
                column.header().to_owned(),
                column.is_sortable(),
            )
        })
        .collect();
    let column_count = headers.len().to_string();

    let table = match TableView::new(columns) {
        Ok(table) => RwSignal::new(table),
        Err(e) => {
            leptos::logging::error!("data table misconfigured: {e}");
            return view! { <p class="data-table__error">{format!("Table error: {e}")}</p> }
                .into_any();
        }
    };

    let header_cells = headers
        .into_iter()
        .map(|(key, header, sortable)| {
            let direction = {
                let key = key.clone();
                move || table.with(|t| t.sort_direction(&key))
            };
            let on_click = move |_| {
                if !sortable {
                    return;
                }
                table.update(|t| {
                    if let Err(e) = t.toggle_sort(&key) {
                        leptos::logging::error!("sort failed: {e}");
                    }
                });
            };
            let indicator_direction = direction.clone();
            view! {
                <th
                    class="data-table__header"
                    class:data-table__header--sortable=sortable
                    aria-sort=move || aria_sort(direction())
                    on:click=on_click
                >
                    <span>{header}</span>
                    <span class="data-table__sort">
                        {move || sort_indicator(indicator_direction())}
                    </span>
                </th>
            }
        })
        .collect_view();

    let body = move || {
        let records = records.get();
        table.with(|t| match t.rows(&records) {
            RowSet::NoMatches => view! {
                <tr>
                    <td class="data-table__empty" colspan=column_count.clone()>
                        "No data found"
                    </td>
                </tr>
            }
            .into_any(),
            RowSet::Rows(rows) => rows
                .into_iter()
                .map(|record| {
                    let cells = t
                        .columns()
                        .iter()
                        .map(|column| match t.cell(record, column) {
                            Cell::Rendered(content) => view! { <td>{content}</td> }.into_any(),
                            Cell::Text(text) => view! { <td>{text}</td> }.into_any(),
                        })
                        .collect_view();
                    view! { <tr class="data-table__row">{cells}</tr> }
                })
                .collect_view()
                .into_any(),
        })
    };

    view! {
        <div class="data-table">
            <input
                class="data-table__search"
                type="search"
                placeholder=search_placeholder
                prop:value=move || table.with(|t| t.search_term().to_owned())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    table.update(|t| t.set_search_term(term));
                }
            />
            <table class="data-table__table">
                <thead>
                    <tr>{header_cells}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
    .into_any()
}

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;
