//! Leave management: scoped leave requests with manager decisions.

use leptos::prelude::*;
use roster::access::{Action, is_action_allowed};
use roster::records::{LeaveRequest, RequestStatus};
use roster::requests::{Decision, decide};
use roster::role::Role;
use roster::session::Session;
use roster::stats::request_summary;
use tables::Column;

use crate::components::data_table::DataTable;
use crate::components::decision_buttons::{DecisionButtons, decision_notice};
use crate::components::kpi_card::KpiCard;
use crate::components::page_header::PageHeader;
use crate::components::status_badge::StatusBadge;
use crate::state::data::DataProvider;

fn leave_columns(
    records: RwSignal<Vec<LeaveRequest>>,
    notice: RwSignal<Option<String>>,
    role: Role,
) -> Vec<Column<LeaveRequest, AnyView>> {
    let can_decide = is_action_allowed(role, Action::DecideRequest);
    let mut columns = vec![
        Column::new("employee_name", "Employee").sortable(),
        Column::new("type", "Type")
            .sortable()
            .render(|leave: &LeaveRequest| leave.leave_type.label().into_any()),
        Column::new("start_date", "Start").sortable(),
        Column::new("end_date", "End").sortable(),
        Column::new("days", "Days").sortable(),
        Column::new("reason", "Reason"),
        Column::new("status", "Status")
            .sortable()
            .render(|leave: &LeaveRequest| view! { <StatusBadge status=leave.status/> }.into_any()),
    ];
    if can_decide {
        columns.push(Column::new("actions", "Actions").render(move |leave: &LeaveRequest| {
            if leave.status != RequestStatus::Pending {
                return "-".into_any();
            }
            let id = leave.id.clone();
            let on_decide = Callback::new(move |decision: Decision| {
                records.update(|list| match decide(list, &id, decision, role) {
                    Ok(_) => notice.set(Some(decision_notice("Leave request", decision))),
                    Err(e) => notice.set(Some(e.to_string())),
                });
            });
            view! { <DecisionButtons on_decide=on_decide/> }.into_any()
        }));
    }
    columns
}

#[component]
pub fn LeavesPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let data = expect_context::<DataProvider>();
    let user = session.user().clone();
    let records = RwSignal::new(data.scoped(&data.dataset().leave_requests, &user));
    let notice = RwSignal::new(None::<String>);
    let summary = Memo::new(move |_| records.with(|list| request_summary(list)));

    view! {
        <PageHeader title="Leave Management" subtitle="Review and track leave requests"/>
        <section class="kpi-grid">
            <KpiCard title="Total Requests" value=Signal::derive(move || summary.get().total.to_string())/>
            <KpiCard title="Pending" value=Signal::derive(move || summary.get().pending.to_string()) accent="warning"/>
            <KpiCard title="Approved" value=Signal::derive(move || summary.get().approved.to_string()) accent="success"/>
            <KpiCard title="Rejected" value=Signal::derive(move || summary.get().rejected.to_string()) accent="danger"/>
        </section>
        <Show when=move || notice.get().is_some()>
            <p class="toast" on:click=move |_| notice.set(None)>{move || notice.get().unwrap_or_default()}</p>
        </Show>
        <DataTable
            columns=leave_columns(records, notice, user.role)
            records=records
            search_placeholder="Search leave requests..."
        />
    }
}
