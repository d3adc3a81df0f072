//! Attendance log, scoped to what the signed-in role may see.

use leptos::prelude::*;
use roster::records::AttendanceRecord;
use roster::role::Role;
use roster::session::Session;
use roster::stats::attendance_summary;
use roster::status::Status;
use tables::Column;

use crate::components::data_table::DataTable;
use crate::components::kpi_card::KpiCard;
use crate::components::page_header::PageHeader;
use crate::components::status_badge::StatusBadge;
use crate::state::data::DataProvider;

fn attendance_columns(role: Role) -> Vec<Column<AttendanceRecord, AnyView>> {
    let mut columns = Vec::new();
    if role != Role::Employee {
        columns.push(Column::new("employee_name", "Employee").sortable());
    }
    columns.extend([
        Column::new("date", "Date").sortable(),
        Column::new("day", "Day"),
        Column::new("time_in", "Time In").sortable(),
        Column::new("time_out", "Time Out").sortable(),
        Column::new("status", "Status").sortable().render(|record: &AttendanceRecord| {
            view! { <StatusBadge status=Status::from(record.status)/> }.into_any()
        }),
    ]);
    columns
}

#[component]
pub fn AttendancePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let data = expect_context::<DataProvider>();
    let user = session.user();
    let records = data.scoped(&data.dataset().attendance, user);
    let summary = attendance_summary(&records);
    let subtitle = match user.role {
        Role::Employee => "Your attendance history",
        Role::Manager => "Your department's attendance",
        Role::Hr => "Company-wide attendance",
    };

    view! {
        <PageHeader title="Attendance" subtitle=subtitle/>
        <section class="kpi-grid">
            <KpiCard title="Present" value=summary.present.to_string() accent="success"/>
            <KpiCard title="Late" value=summary.late.to_string() accent="warning"/>
            <KpiCard title="Absent" value=summary.absent.to_string() accent="danger"/>
        </section>
        <DataTable
            columns=attendance_columns(user.role)
            records=records
            search_placeholder="Search attendance..."
        />
    }
}
