//! Employee self-service: submit and track leave and overtime requests.

use leptos::prelude::*;
use roster::format::{group_thousands, today_iso};
use roster::records::{LeaveRequest, LeaveType, OvertimeRequest};
use roster::requests::{DraftError, LeaveDraft, OvertimeDraft};
use roster::session::Session;
use roster::stats::{approved_overtime_hours, request_summary};
use tables::Column;

use crate::components::data_table::DataTable;
use crate::components::kpi_card::KpiCard;
use crate::components::page_header::PageHeader;
use crate::components::status_badge::StatusBadge;
use crate::state::data::DataProvider;

/// Which request form is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestForm {
    Leave,
    Overtime,
}

/// Toast text after a submission.
pub fn submission_notice(form: RequestForm, result: &Result<(), DraftError>) -> String {
    let kind = match form {
        RequestForm::Leave => "Leave request",
        RequestForm::Overtime => "Overtime request",
    };
    match result {
        Ok(()) => format!("{kind} submitted successfully"),
        Err(e) => e.to_string(),
    }
}

fn leave_columns() -> Vec<Column<LeaveRequest, AnyView>> {
    vec![
        Column::new("type", "Type")
            .sortable()
            .render(|leave: &LeaveRequest| leave.leave_type.label().into_any()),
        Column::new("start_date", "Start").sortable(),
        Column::new("end_date", "End").sortable(),
        Column::new("days", "Days"),
        Column::new("reason", "Reason"),
        Column::new("status", "Status")
            .sortable()
            .render(|leave: &LeaveRequest| view! { <StatusBadge status=leave.status/> }.into_any()),
        Column::new("applied_date", "Applied").sortable(),
    ]
}

fn overtime_columns() -> Vec<Column<OvertimeRequest, AnyView>> {
    vec![
        Column::new("date", "Date").sortable(),
        Column::new("hours", "Hours").sortable(),
        Column::new("reason", "Reason"),
        Column::new("status", "Status")
            .sortable()
            .render(|request: &OvertimeRequest| view! { <StatusBadge status=request.status/> }.into_any()),
        Column::new("applied_date", "Applied").sortable(),
    ]
}

#[component]
pub fn MyRequestsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let data = expect_context::<DataProvider>();
    let user = session.user().clone();
    let leaves = RwSignal::new(data.scoped(&data.dataset().leave_requests, &user));
    let overtime = RwSignal::new(data.scoped(&data.dataset().overtime_requests, &user));
    let open_form = RwSignal::new(None::<RequestForm>);
    let notice = RwSignal::new(None::<String>);

    let pending_leaves = Signal::derive(move || leaves.with(|l| request_summary(l).pending.to_string()));
    let pending_overtime =
        Signal::derive(move || overtime.with(|o| request_summary(o).pending.to_string()));
    let approved_hours = Signal::derive(move || {
        overtime.with(|o| format!("{}h", group_thousands(approved_overtime_hours(o))))
    });

    let toggle = move |form: RequestForm| {
        open_form.update(|open| {
            *open = if *open == Some(form) { None } else { Some(form) };
        });
    };

    let leave_user = user.clone();
    let on_leave = Callback::new(move |draft: LeaveDraft| {
        let existing = leaves.get_untracked();
        let result = draft
            .submit(&leave_user, &existing, &today_iso())
            .map(|request| leaves.update(|list| list.insert(0, request)));
        if result.is_ok() {
            open_form.set(None);
        }
        notice.set(Some(submission_notice(RequestForm::Leave, &result)));
    });

    let overtime_user = user;
    let on_overtime = Callback::new(move |draft: OvertimeDraft| {
        let existing = overtime.get_untracked();
        let result = draft
            .submit(&overtime_user, &existing, &today_iso())
            .map(|request| overtime.update(|list| list.insert(0, request)));
        if result.is_ok() {
            open_form.set(None);
        }
        notice.set(Some(submission_notice(RequestForm::Overtime, &result)));
    });

    view! {
        <PageHeader title="My Requests" subtitle="Submit and track your leave and overtime requests"/>
        <section class="kpi-grid">
            <KpiCard title="Pending Leave" value=pending_leaves accent="warning"/>
            <KpiCard title="Pending Overtime" value=pending_overtime accent="warning"/>
            <KpiCard title="Approved OT Hours" value=approved_hours accent="success"/>
        </section>
        <div class="page-actions">
            <button class="button button--primary" on:click=move |_| toggle(RequestForm::Leave)>
                "Request Leave"
            </button>
            <button class="button" on:click=move |_| toggle(RequestForm::Overtime)>
                "Request Overtime"
            </button>
        </div>
        <Show when=move || notice.get().is_some()>
            <p class="toast" on:click=move |_| notice.set(None)>{move || notice.get().unwrap_or_default()}</p>
        </Show>
        <Show when=move || open_form.get() == Some(RequestForm::Leave)>
            <LeaveForm on_submit=on_leave/>
        </Show>
        <Show when=move || open_form.get() == Some(RequestForm::Overtime)>
            <OvertimeForm on_submit=on_overtime/>
        </Show>
        <h2 class="section-title">"Leave Requests"</h2>
        <DataTable columns=leave_columns() records=leaves search_placeholder="Search leave..."/>
        <h2 class="section-title">"Overtime Requests"</h2>
        <DataTable columns=overtime_columns() records=overtime search_placeholder="Search overtime..."/>
    }
}

#[component]
fn LeaveForm(on_submit: Callback<LeaveDraft>) -> impl IntoView {
    let leave_type = RwSignal::new(LeaveType::Annual);
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(LeaveDraft {
            leave_type: leave_type.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
            reason: reason.get_untracked(),
        });
    };

    let type_options = LeaveType::ALL
        .into_iter()
        .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
        .collect_view();

    view! {
        <form class="form-card" on:submit=submit>
            <h2 class="form-card__title">"Leave Request"</h2>
            <div class="form-grid">
                <label class="form-field">
                    <span>"Leave Type"</span>
                    <select
                        prop:value=move || leave_type.get().as_str()
                        on:change=move |ev| {
                            if let Some(kind) = LeaveType::parse(&event_target_value(&ev)) {
                                leave_type.set(kind);
                            }
                        }
                    >
                        {type_options}
                    </select>
                </label>
                <label class="form-field">
                    <span>"Start Date"</span>
                    <input
                        type="date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"End Date"</span>
                    <input
                        type="date"
                        prop:value=move || end_date.get()
                        on:input=move |ev| end_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field form-field--wide">
                    <span>"Reason"</span>
                    <textarea
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>
                </label>
            </div>
            <div class="form-card__actions">
                <button class="button button--primary" type="submit">"Submit Request"</button>
            </div>
        </form>
    }
}

#[component]
fn OvertimeForm(on_submit: Callback<OvertimeDraft>) -> impl IntoView {
    let date = RwSignal::new(String::new());
    let hours = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(OvertimeDraft {
            date: date.get_untracked(),
            hours: hours.get_untracked(),
            reason: reason.get_untracked(),
        });
    };

    view! {
        <form class="form-card" on:submit=submit>
            <h2 class="form-card__title">"Overtime Request"</h2>
            <div class="form-grid">
                <label class="form-field">
                    <span>"Date"</span>
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Hours"</span>
                    <input
                        type="number"
                        min="0.5"
                        max="24"
                        step="0.5"
                        prop:value=move || hours.get()
                        on:input=move |ev| hours.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field form-field--wide">
                    <span>"Reason"</span>
                    <textarea
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>
                </label>
            </div>
            <div class="form-card__actions">
                <button class="button button--primary" type="submit">"Submit Request"</button>
            </div>
        </form>
    }
}

#[cfg(test)]
#[path = "my_requests_test.rs"]
mod my_requests_test;
