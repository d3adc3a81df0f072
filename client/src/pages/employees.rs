//! Employee directory with the HR-only add-employee form.

use leptos::prelude::*;
use roster::access::{Action, is_action_allowed};
use roster::format::{currency, today_iso};
use roster::records::{Employee, EmployeeStatus};
use roster::requests::{DEPARTMENTS, EmployeeDraft};
use roster::session::Session;
use tables::Column;

use crate::components::data_table::DataTable;
use crate::components::page_header::PageHeader;
use crate::components::status_badge::StatusBadge;
use crate::state::data::DataProvider;

fn employee_columns() -> Vec<Column<Employee, AnyView>> {
    vec![
        Column::new("employee_number", "ID").sortable(),
        Column::new("name", "Name").sortable().render(|employee: &Employee| {
            view! {
                <div class="cell-stack">
                    <span class="cell-stack__primary">{employee.name.clone()}</span>
                    <span class="cell-stack__secondary">{employee.email.clone()}</span>
                </div>
            }
            .into_any()
        }),
        Column::new("department", "Department").sortable(),
        Column::new("position", "Position").sortable(),
        Column::new("status", "Status")
            .sortable()
            .render(|employee: &Employee| view! { <StatusBadge status=employee.status/> }.into_any()),
        Column::new("join_date", "Join Date").sortable(),
        Column::new("salary", "Salary")
            .sortable()
            .render(|employee: &Employee| currency(f64::from(employee.salary)).into_any()),
    ]
}

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let data = expect_context::<DataProvider>();
    let employees = RwSignal::new(data.dataset().employees.clone());
    let can_manage = is_action_allowed(session.user().role, Action::ManageEmployees);
    let show_form = RwSignal::new(false);

    view! {
        <PageHeader title="Employees" subtitle="Manage employee records"/>
        <Show when=move || can_manage>
            <div class="page-actions">
                <button class="button button--primary" on:click=move |_| show_form.update(|open| *open = !*open)>
                    {move || if show_form.get() { "Close" } else { "Add Employee" }}
                </button>
            </div>
        </Show>
        <Show when=move || can_manage && show_form.get()>
            <AddEmployeeForm employees=employees on_done=Callback::new(move |()| show_form.set(false))/>
        </Show>
        <DataTable
            columns=employee_columns()
            records=employees
            search_placeholder="Search employees..."
        />
    }
}

#[component]
fn AddEmployeeForm(employees: RwSignal<Vec<Employee>>, on_done: Callback<()>) -> impl IntoView {
    let draft = RwSignal::new(EmployeeDraft::default());
    let message = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let existing = employees.get_untracked();
        match draft.get_untracked().submit(&existing, &today_iso()) {
            Ok(employee) => {
                leptos::logging::log!("added employee {}", employee.employee_number);
                employees.update(|list| list.push(employee));
                draft.set(EmployeeDraft::default());
                message.set(None);
                on_done.run(());
            }
            Err(e) => message.set(Some(e.to_string())),
        }
    };

    let department_options = DEPARTMENTS
        .into_iter()
        .map(|name| view! { <option value=name>{name}</option> })
        .collect_view();
    let status_options = EmployeeStatus::ALL
        .into_iter()
        .map(|status| {
            view! { <option value=status.as_str()>{roster::status::Status::from(status).label()}</option> }
        })
        .collect_view();

    view! {
        <form class="form-card" on:submit=on_submit>
            <h2 class="form-card__title">"Add New Employee"</h2>
            <div class="form-grid">
                <label class="form-field">
                    <span>"Full Name"</span>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Department"</span>
                    <select
                        prop:value=move || draft.with(|d| d.department.clone())
                        on:change=move |ev| draft.update(|d| d.department = event_target_value(&ev))
                    >
                        {department_options}
                    </select>
                </label>
                <label class="form-field">
                    <span>"Position"</span>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.position.clone())
                        on:input=move |ev| draft.update(|d| d.position = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Status"</span>
                    <select
                        prop:value=move || draft.with(|d| d.status.as_str().to_owned())
                        on:change=move |ev| {
                            if let Some(status) = EmployeeStatus::parse(&event_target_value(&ev)) {
                                draft.update(|d| d.status = status);
                            }
                        }
                    >
                        {status_options}
                    </select>
                </label>
                <label class="form-field">
                    <span>"Monthly Salary (QAR)"</span>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || draft.with(|d| d.salary.clone())
                        on:input=move |ev| draft.update(|d| d.salary = event_target_value(&ev))
                    />
                </label>
            </div>
            <Show when=move || message.get().is_some()>
                <p class="form-card__error">{move || message.get().unwrap_or_default()}</p>
            </Show>
            <div class="form-card__actions">
                <button class="button" type="button" on:click=move |_| on_done.run(())>"Cancel"</button>
                <button class="button button--primary" type="submit">"Add Employee"</button>
            </div>
        </form>
    }
}
