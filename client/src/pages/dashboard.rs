//! Dashboard page with one variant per session role.
//!
//! DESIGN
//! ======
//! The variant is chosen once from `Session::view`, a closed enum fixed at
//! login, instead of branching on the role at every render site.

use leptos::prelude::*;
use roster::dataset::Dataset;
use roster::format::{currency, group_thousands};
use roster::records::{EmployeeStatus, RequestStatus};
use roster::session::{DashboardView, Session};
use roster::stats::{
    approved_overtime_hours, attendance_summary, department_headcount, request_summary,
    workforce_summary,
};
use roster::status::Status;
use roster::user::User;

use crate::components::kpi_card::KpiCard;
use crate::components::page_header::PageHeader;
use crate::components::status_badge::StatusBadge;
use crate::state::data::DataProvider;

/// Whole-number percentage of `count` in `total`; zero when `total` is zero.
pub fn share_percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = (count.min(total) * 100 + total / 2) / total;
    u32::try_from(percent).unwrap_or(100)
}

/// Number of pending items listed on a dashboard card.
const RECENT_LIMIT: usize = 3;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let data = expect_context::<DataProvider>();
    let user = session.user().clone();

    view! {
        <PageHeader
            title=format!("Welcome back, {}", user.first_name())
            subtitle=user.role.label()
        />
        {match session.view() {
            DashboardView::Hr => view! { <HrDashboard data=data/> }.into_any(),
            DashboardView::Manager => view! { <ManagerDashboard data=data user=user/> }.into_any(),
            DashboardView::Employee => view! { <EmployeeDashboard data=data user=user/> }.into_any(),
        }}
    }
}

#[component]
fn HrDashboard(data: DataProvider) -> impl IntoView {
    let dataset: &Dataset = data.dataset();
    let summary = workforce_summary(dataset);
    let departments = department_headcount(&dataset.employees);
    let total = summary.total_employees;

    let department_rows = departments
        .into_iter()
        .map(|(name, count)| {
            let width = format!("width: {}%", share_percent(count, total));
            view! {
                <li class="breakdown__row">
                    <span class="breakdown__label">{name}</span>
                    <span class="breakdown__bar"><span class="breakdown__fill" style=width></span></span>
                    <span class="breakdown__value">{count}</span>
                </li>
            }
        })
        .collect_view();

    let busiest = dataset
        .monthly_leaves
        .iter()
        .map(|month| month.leaves)
        .max()
        .unwrap_or(0);
    let monthly_rows = dataset
        .monthly_leaves
        .iter()
        .map(|month| {
            let width = format!(
                "width: {}%",
                share_percent(month.leaves as usize, busiest as usize)
            );
            view! {
                <li class="breakdown__row">
                    <span class="breakdown__label">{month.month.clone()}</span>
                    <span class="breakdown__bar"><span class="breakdown__fill" style=width></span></span>
                    <span class="breakdown__value">{month.leaves}</span>
                </li>
            }
        })
        .collect_view();

    let pending_leaves = dataset
        .leave_requests
        .iter()
        .filter(|leave| leave.status == RequestStatus::Pending)
        .take(RECENT_LIMIT)
        .map(|leave| {
            view! {
                <li class="recent__row">
                    <span class="recent__name">{leave.employee_name.clone()}</span>
                    <span class="recent__detail">
                        {format!("{} · {} day(s)", leave.leave_type.label(), leave.days)}
                    </span>
                    <StatusBadge status=leave.status/>
                </li>
            }
        })
        .collect_view();

    let probation = dataset
        .employees
        .iter()
        .filter(|employee| employee.status == EmployeeStatus::Probationary)
        .map(|employee| {
            view! {
                <li class="recent__row">
                    <span class="recent__name">{employee.name.clone()}</span>
                    <span class="recent__detail">{employee.position.clone()}</span>
                    <StatusBadge status=employee.status/>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="kpi-grid">
            <KpiCard title="Total Employees" value=summary.total_employees.to_string()/>
            <KpiCard title="Regular" value=summary.regular.to_string() accent="success"/>
            <KpiCard title="Probationary" value=summary.probationary.to_string() accent="warning"/>
            <KpiCard title="Resigned" value=summary.resigned.to_string() accent="danger"/>
            <KpiCard title="Pending Leaves" value=summary.pending_leaves.to_string()/>
            <KpiCard title="Pending Overtime" value=summary.pending_overtime.to_string()/>
            <KpiCard
                title="Monthly Payroll"
                value=currency(summary.total_payroll as f64)
                hint="Basic salary, active staff"
            />
        </section>
        <section class="panel-grid">
            <div class="panel">
                <h2 class="panel__title">"Employees by Department"</h2>
                <ul class="breakdown">{department_rows}</ul>
            </div>
            <div class="panel">
                <h2 class="panel__title">"Leaves per Month"</h2>
                <ul class="breakdown">{monthly_rows}</ul>
            </div>
            <div class="panel">
                <h2 class="panel__title">"Pending Leave Requests"</h2>
                <ul class="recent">{pending_leaves}</ul>
            </div>
            <div class="panel">
                <h2 class="panel__title">"On Probation"</h2>
                <ul class="recent">{probation}</ul>
            </div>
        </section>
    }
}

#[component]
fn ManagerDashboard(data: DataProvider, user: User) -> impl IntoView {
    let dataset = data.dataset();
    let team: Vec<_> = data
        .scoped(&dataset.employees, &user)
        .into_iter()
        .filter(|employee| employee.status != EmployeeStatus::Resigned)
        .collect();
    let leaves = data.scoped(&dataset.leave_requests, &user);
    let overtime = data.scoped(&dataset.overtime_requests, &user);
    let attendance = attendance_summary(&data.scoped(&dataset.attendance, &user));
    let leave_summary = request_summary(&leaves);
    let overtime_summary = request_summary(&overtime);

    let pending = leaves
        .iter()
        .filter(|leave| leave.status == RequestStatus::Pending)
        .map(|leave| (leave.employee_name.clone(), leave.leave_type.label().to_owned(), leave.status))
        .chain(
            overtime
                .iter()
                .filter(|request| request.status == RequestStatus::Pending)
                .map(|request| {
                    (
                        request.employee_name.clone(),
                        format!("Overtime · {}h", group_thousands(request.hours)),
                        request.status,
                    )
                }),
        )
        .take(RECENT_LIMIT * 2)
        .map(|(name, detail, status)| {
            view! {
                <li class="recent__row">
                    <span class="recent__name">{name}</span>
                    <span class="recent__detail">{detail}</span>
                    <StatusBadge status=status/>
                </li>
            }
        })
        .collect_view();

    let members = team
        .iter()
        .map(|employee| {
            view! {
                <li class="recent__row">
                    <span class="recent__name">{employee.name.clone()}</span>
                    <span class="recent__detail">{employee.position.clone()}</span>
                    <StatusBadge status=employee.status/>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="kpi-grid">
            <KpiCard title="Team Members" value=team.len().to_string() hint=user.department.clone()/>
            <KpiCard title="Pending Leaves" value=leave_summary.pending.to_string() accent="warning"/>
            <KpiCard title="Pending Overtime" value=overtime_summary.pending.to_string() accent="warning"/>
            <KpiCard title="Present" value=attendance.present.to_string() accent="success"/>
            <KpiCard title="Late" value=attendance.late.to_string() accent="danger"/>
        </section>
        <section class="panel-grid">
            <div class="panel">
                <h2 class="panel__title">"Awaiting Your Approval"</h2>
                <ul class="recent">{pending}</ul>
            </div>
            <div class="panel">
                <h2 class="panel__title">"Your Team"</h2>
                <ul class="recent">{members}</ul>
            </div>
        </section>
    }
}

#[component]
fn EmployeeDashboard(data: DataProvider, user: User) -> impl IntoView {
    let dataset = data.dataset();
    let attendance = data.scoped(&dataset.attendance, &user);
    let summary = attendance_summary(&attendance);
    let leaves = data.scoped(&dataset.leave_requests, &user);
    let overtime = data.scoped(&dataset.overtime_requests, &user);
    let pending = request_summary(&leaves).pending + request_summary(&overtime).pending;
    let approved_hours = approved_overtime_hours(&overtime);

    let recent = attendance
        .iter()
        .take(RECENT_LIMIT + 2)
        .map(|record| {
            let times = format!(
                "{} – {}",
                record.time_in.as_deref().unwrap_or("-"),
                record.time_out.as_deref().unwrap_or("-")
            );
            view! {
                <li class="recent__row">
                    <span class="recent__name">{format!("{} {}", record.day, record.date)}</span>
                    <span class="recent__detail">{times}</span>
                    <StatusBadge status=Status::from(record.status)/>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="kpi-grid">
            <KpiCard title="Days Present" value=summary.present.to_string() accent="success"/>
            <KpiCard title="Days Late" value=summary.late.to_string() accent="warning"/>
            <KpiCard title="Days Absent" value=summary.absent.to_string() accent="danger"/>
            <KpiCard title="Pending Requests" value=pending.to_string()/>
            <KpiCard title="Approved OT Hours" value=group_thousands(approved_hours)/>
        </section>
        <section class="panel-grid">
            <div class="panel">
                <h2 class="panel__title">"Recent Attendance"</h2>
                <ul class="recent">{recent}</ul>
            </div>
            <div class="panel">
                <h2 class="panel__title">"Your Details"</h2>
                <dl class="details">
                    <dt>"Employee No."</dt>
                    <dd>{user.employee_number.clone()}</dd>
                    <dt>"Department"</dt>
                    <dd>{user.department.clone()}</dd>
                    <dt>"Email"</dt>
                    <dd>{user.email.clone()}</dd>
                </dl>
            </div>
        </section>
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;
