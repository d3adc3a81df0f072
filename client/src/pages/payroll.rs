//! Monthly payroll for active employees.

use leptos::prelude::*;
use roster::format::currency;
use roster::payroll::{active_employees, payroll_line, payroll_totals};
use roster::records::Employee;
use tables::Column;

use crate::components::data_table::DataTable;
use crate::components::kpi_card::KpiCard;
use crate::components::page_header::PageHeader;
use crate::state::data::DataProvider;

fn payroll_columns() -> Vec<Column<Employee, AnyView>> {
    vec![
        Column::new("employee_number", "ID").sortable(),
        Column::new("name", "Employee").sortable(),
        Column::new("department", "Department").sortable(),
        Column::new("salary", "Basic Salary")
            .sortable()
            .render(|employee: &Employee| currency(payroll_line(employee).basic).into_any()),
        Column::new("allowances", "Allowances")
            .render(|employee: &Employee| currency(payroll_line(employee).allowances).into_any()),
        Column::new("deductions", "Deductions")
            .render(|employee: &Employee| currency(payroll_line(employee).deductions).into_any()),
        Column::new("net", "Net Salary").render(|employee: &Employee| {
            view! { <strong>{currency(payroll_line(employee).net)}</strong> }.into_any()
        }),
    ]
}

#[component]
pub fn PayrollPage() -> impl IntoView {
    let data = expect_context::<DataProvider>();
    let employees = &data.dataset().employees;
    let active = active_employees(employees);
    let totals = payroll_totals(employees);

    view! {
        <PageHeader title="Payroll" subtitle="Monthly salary breakdown for active employees"/>
        <section class="kpi-grid">
            <KpiCard title="Employees on Payroll" value=totals.headcount.to_string()/>
            <KpiCard title="Total Basic" value=currency(totals.basic)/>
            <KpiCard title="Total Allowances" value=currency(totals.allowances) accent="success"/>
            <KpiCard title="Total Deductions" value=currency(totals.deductions) accent="danger"/>
            <KpiCard title="Total Net Pay" value=currency(totals.net)/>
        </section>
        <DataTable columns=payroll_columns() records=active search_placeholder="Search payroll..."/>
    }
}
