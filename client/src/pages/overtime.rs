//! Overtime: scoped overtime requests with manager decisions.

use leptos::prelude::*;
use roster::access::{Action, is_action_allowed};
use roster::format::group_thousands;
use roster::records::{OvertimeRequest, RequestStatus};
use roster::requests::{Decision, decide};
use roster::role::Role;
use roster::session::Session;
use roster::stats::{approved_overtime_hours, request_summary};
use tables::Column;

use crate::components::data_table::DataTable;
use crate::components::decision_buttons::{DecisionButtons, decision_notice};
use crate::components::kpi_card::KpiCard;
use crate::components::page_header::PageHeader;
use crate::components::status_badge::StatusBadge;
use crate::state::data::DataProvider;

fn overtime_columns(
    records: RwSignal<Vec<OvertimeRequest>>,
    notice: RwSignal<Option<String>>,
    role: Role,
) -> Vec<Column<OvertimeRequest, AnyView>> {
    let can_decide = is_action_allowed(role, Action::DecideRequest);
    let mut columns = vec![
        Column::new("employee_name", "Employee").sortable(),
        Column::new("department", "Department").sortable(),
        Column::new("date", "Date").sortable(),
        Column::new("hours", "Hours")
            .sortable()
            .render(|request: &OvertimeRequest| format!("{}h", group_thousands(request.hours)).into_any()),
        Column::new("reason", "Reason"),
        Column::new("status", "Status")
            .sortable()
            .render(|request: &OvertimeRequest| view! { <StatusBadge status=request.status/> }.into_any()),
    ];
    if can_decide {
        columns.push(Column::new("actions", "Actions").render(move |request: &OvertimeRequest| {
            if request.status != RequestStatus::Pending {
                return "-".into_any();
            }
            let id = request.id.clone();
            let on_decide = Callback::new(move |decision: Decision| {
                records.update(|list| match decide(list, &id, decision, role) {
                    Ok(_) => notice.set(Some(decision_notice("Overtime request", decision))),
                    Err(e) => notice.set(Some(e.to_string())),
                });
            });
            view! { <DecisionButtons on_decide=on_decide/> }.into_any()
        }));
    }
    columns
}

#[component]
pub fn OvertimePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let data = expect_context::<DataProvider>();
    let user = session.user().clone();
    let records = RwSignal::new(data.scoped(&data.dataset().overtime_requests, &user));
    let notice = RwSignal::new(None::<String>);
    let summary = Memo::new(move |_| records.with(|list| request_summary(list)));
    let approved_hours = Signal::derive(move || {
        records.with(|list| format!("{}h", group_thousands(approved_overtime_hours(list))))
    });

    view! {
        <PageHeader title="Overtime Requests" subtitle="Review and track overtime claims"/>
        <section class="kpi-grid">
            <KpiCard title="Total Requests" value=Signal::derive(move || summary.get().total.to_string())/>
            <KpiCard title="Pending" value=Signal::derive(move || summary.get().pending.to_string()) accent="warning"/>
            <KpiCard title="Approved" value=Signal::derive(move || summary.get().approved.to_string()) accent="success"/>
            <KpiCard title="Rejected" value=Signal::derive(move || summary.get().rejected.to_string()) accent="danger"/>
            <KpiCard title="Approved Hours" value=approved_hours/>
        </section>
        <Show when=move || notice.get().is_some()>
            <p class="toast" on:click=move |_| notice.set(None)>{move || notice.get().unwrap_or_default()}</p>
        </Show>
        <DataTable
            columns=overtime_columns(records, notice, user.role)
            records=records
            search_placeholder="Search overtime requests..."
        />
    }
}
