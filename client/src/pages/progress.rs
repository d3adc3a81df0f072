//! Daily progress reports from the manager's team.

use leptos::prelude::*;
use roster::format::group_thousands;
use roster::records::ProgressReport;
use roster::session::Session;
use roster::stats::progress_summary;
use tables::Column;

use crate::components::data_table::DataTable;
use crate::components::kpi_card::KpiCard;
use crate::components::page_header::PageHeader;
use crate::state::data::DataProvider;

fn task_list(tasks: &[String]) -> AnyView {
    if tasks.is_empty() {
        return "-".into_any();
    }
    let items = tasks
        .iter()
        .map(|task| view! { <li>{task.clone()}</li> })
        .collect_view();
    view! { <ul class="task-list">{items}</ul> }.into_any()
}

fn progress_columns() -> Vec<Column<ProgressReport, AnyView>> {
    vec![
        Column::new("employee_name", "Employee").sortable(),
        Column::new("date", "Date").sortable(),
        Column::new("tasks_completed", "Completed")
            .render(|report: &ProgressReport| task_list(&report.tasks_completed)),
        Column::new("tasks_in_progress", "In Progress")
            .render(|report: &ProgressReport| task_list(&report.tasks_in_progress)),
        Column::new("blockers", "Blockers")
            .render(|report: &ProgressReport| task_list(&report.blockers)),
        Column::new("hours_worked", "Hours").sortable(),
    ]
}

#[component]
pub fn ProgressPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let data = expect_context::<DataProvider>();
    let reports = data.scoped(&data.dataset().progress_reports, session.user());
    let summary = progress_summary(&reports);

    view! {
        <PageHeader title="Progress Reports" subtitle="Daily updates from your team"/>
        <section class="kpi-grid">
            <KpiCard title="Reports" value=summary.reports.to_string()/>
            <KpiCard title="Tasks Completed" value=summary.tasks_completed.to_string() accent="success"/>
            <KpiCard title="Hours Logged" value=group_thousands(summary.hours_logged)/>
        </section>
        <DataTable columns=progress_columns() records=reports search_placeholder="Search reports..."/>
    }
}
