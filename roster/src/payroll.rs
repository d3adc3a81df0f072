//! Monthly payroll figures.
//!
//! Allowances and deductions are flat percentages of basic salary, rounded to
//! whole riyals. Net pay is basic plus allowances minus deductions, computed
//! from the unrounded rates.

use crate::records::{Employee, EmployeeStatus};

pub const ALLOWANCE_RATE: f64 = 0.15;
pub const DEDUCTION_RATE: f64 = 0.05;

/// One employee's pay breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct PayrollLine {
    pub employee_id: String,
    pub basic: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub net: f64,
}

#[must_use]
pub fn payroll_line(employee: &Employee) -> PayrollLine {
    let basic = f64::from(employee.salary);
    PayrollLine {
        employee_id: employee.id.clone(),
        basic,
        allowances: (basic * ALLOWANCE_RATE).round(),
        deductions: (basic * DEDUCTION_RATE).round(),
        net: basic * (1.0 + ALLOWANCE_RATE - DEDUCTION_RATE),
    }
}

/// Employees on payroll: everyone not resigned, in input order.
#[must_use]
pub fn active_employees(employees: &[Employee]) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| employee.status != EmployeeStatus::Resigned)
        .cloned()
        .collect()
}

/// Sums over every active employee.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PayrollTotals {
    pub headcount: usize,
    pub basic: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub net: f64,
}

#[must_use]
pub fn payroll_totals(employees: &[Employee]) -> PayrollTotals {
    employees
        .iter()
        .filter(|employee| employee.status != EmployeeStatus::Resigned)
        .map(payroll_line)
        .fold(PayrollTotals::default(), |totals, line| PayrollTotals {
            headcount: totals.headcount + 1,
            basic: totals.basic + line.basic,
            allowances: totals.allowances + line.allowances,
            deductions: totals.deductions + line.deductions,
            net: totals.net + line.net,
        })
}

#[cfg(test)]
#[path = "payroll_test.rs"]
mod payroll_test;
