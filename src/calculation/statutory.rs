//! Statutory deduction calculation.
//!
//! This module combines unpaid-leave proration, the EPF percentage rule, the
//! SOCSO and EIS bracket tables and the caller-supplied PCB into a single
//! [`StatutoryBreakdown`] for one pay period.
//!
//! # Rounding
//!
//! Gross salary, the unpaid-leave deduction and net salary are rounded to
//! two decimal places. EPF contributions are rounded *up* to the whole
//! ringgit as the EPF Third Schedule requires; they are not rounded to sen
//! like everything else, and must stay that way.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::StatutoryRates;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, StatutoryBreakdown, StatutoryCalculation,
    StatutoryInput,
};

use super::insurance::insurance_contribution_with;
use super::rounding::round_money;
use super::social_security::social_security_contribution_with;

/// Calculates the statutory breakdown using the built-in Malaysian rates.
///
/// # Examples
///
/// ```
/// use statutory_engine::calculation::calculate_statutory;
/// use statutory_engine::models::StatutoryInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = calculate_statutory(&StatutoryInput::new(Decimal::from(5000)));
///
/// assert_eq!(breakdown.gross_salary, Decimal::from(5000));
/// assert_eq!(breakdown.epf_employee, Decimal::from(550));
/// assert_eq!(breakdown.net_salary, Decimal::from_str("4417.35").unwrap());
/// ```
pub fn calculate_statutory(input: &StatutoryInput) -> StatutoryBreakdown {
    calculate_statutory_with(input, StatutoryRates::builtin())
}

/// Calculates the statutory breakdown using the given rate set.
pub fn calculate_statutory_with(
    input: &StatutoryInput,
    rates: &StatutoryRates,
) -> StatutoryBreakdown {
    calculate_statutory_with_audit(input, rates).breakdown
}

/// Calculates the statutory breakdown and records an audit step for every
/// stage of the calculation.
///
/// Steps are recorded in order: `unpaid_leave`, `gross_salary`, `epf`,
/// `socso`, `eis`, `pcb`, `net_salary`.
pub fn calculate_statutory_with_audit(
    input: &StatutoryInput,
    rates: &StatutoryRates,
) -> StatutoryCalculation {
    let mut steps: Vec<AuditStep> = Vec::with_capacity(7);
    let mut warnings: Vec<AuditWarning> = Vec::new();

    // Unpaid leave
    let days = Decimal::from(input.days_in_month);
    let unpaid_leave_deduction = if input.unpaid_leave_days > Decimal::ZERO {
        match input.basic.checked_div(days) {
            Some(daily_rate) => daily_rate.saturating_mul(input.unpaid_leave_days),
            None => {
                warn!(
                    unpaid_leave_days = %input.unpaid_leave_days,
                    "Cannot prorate unpaid leave over a zero-day month; no deduction applied"
                );
                warnings.push(AuditWarning {
                    code: "ZERO_DAYS_IN_MONTH".to_string(),
                    message: "Unpaid leave was not deducted because days_in_month is 0"
                        .to_string(),
                    severity: "medium".to_string(),
                });
                Decimal::ZERO
            }
        }
    } else {
        Decimal::ZERO
    };
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "unpaid_leave".to_string(),
        rule_name: "Unpaid Leave Deduction".to_string(),
        statutory_ref: "Employment Act 1955, s.60A".to_string(),
        input: serde_json::json!({
            "basic": input.basic.to_string(),
            "unpaid_leave_days": input.unpaid_leave_days.to_string(),
            "days_in_month": input.days_in_month
        }),
        output: serde_json::json!({
            "deduction": round_money(unpaid_leave_deduction).to_string()
        }),
        reasoning: if unpaid_leave_deduction.is_zero() {
            "No unpaid leave deduction".to_string()
        } else {
            format!(
                "${} / {} days x {} days = ${}",
                input.basic.normalize(),
                input.days_in_month,
                input.unpaid_leave_days.normalize(),
                round_money(unpaid_leave_deduction)
            )
        },
    });

    // Gross salary; kept unrounded for every rule below
    let gross = input
        .basic
        .saturating_add(input.allowance)
        .saturating_add(input.bonus)
        .saturating_add(input.overtime)
        .saturating_sub(unpaid_leave_deduction);
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "gross_salary".to_string(),
        rule_name: "Gross Salary".to_string(),
        statutory_ref: "Employment Act 1955, s.2".to_string(),
        input: serde_json::json!({
            "basic": input.basic.to_string(),
            "allowance": input.allowance.to_string(),
            "bonus": input.bonus.to_string(),
            "overtime": input.overtime.to_string(),
            "unpaid_leave_deduction": round_money(unpaid_leave_deduction).to_string()
        }),
        output: serde_json::json!({
            "gross_salary": round_money(gross).to_string()
        }),
        reasoning: format!(
            "${} + ${} + ${} + ${} - ${} = ${}",
            input.basic.normalize(),
            input.allowance.normalize(),
            input.bonus.normalize(),
            input.overtime.normalize(),
            round_money(unpaid_leave_deduction),
            round_money(gross)
        ),
    });

    // EPF: whole ringgit, rounded up
    let epf = rates.epf();
    let epf_employee = gross.saturating_mul(epf.employee_rate).ceil();
    let employer_rate = if gross <= epf.employer_threshold {
        epf.employer_rate
    } else {
        epf.employer_rate_above_threshold
    };
    let epf_employer = gross.saturating_mul(employer_rate).ceil();
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "epf".to_string(),
        rule_name: "EPF Contribution".to_string(),
        statutory_ref: epf.reference.clone(),
        input: serde_json::json!({
            "gross_salary": round_money(gross).to_string(),
            "employee_rate": epf.employee_rate.to_string(),
            "employer_rate": employer_rate.to_string(),
            "employer_threshold": epf.employer_threshold.to_string()
        }),
        output: serde_json::json!({
            "employee": epf_employee.to_string(),
            "employer": epf_employer.to_string()
        }),
        reasoning: format!(
            "Employee ceil(${} x {}) = ${}; employer ceil(${} x {}) = ${}",
            round_money(gross),
            epf.employee_rate.normalize(),
            epf_employee,
            round_money(gross),
            employer_rate.normalize(),
            epf_employer
        ),
    });

    // SOCSO
    let socso = social_security_contribution_with(gross, rates.socso());
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "socso".to_string(),
        rule_name: "SOCSO Contribution".to_string(),
        statutory_ref: rates.socso().reference.clone(),
        input: serde_json::json!({
            "gross_salary": round_money(gross).to_string(),
            "ceiling": rates.socso().ceiling.to_string()
        }),
        output: serde_json::json!({
            "employee": socso.employee.to_string(),
            "employer": socso.employer.to_string(),
            "ceiling_applied": gross > rates.socso().ceiling
        }),
        reasoning: format!(
            "SOCSO table row for ${}: employer ${}, employee ${}",
            round_money(gross.min(rates.socso().ceiling)),
            socso.employer,
            socso.employee
        ),
    });

    // EIS
    let eis = insurance_contribution_with(gross, rates.eis());
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "eis".to_string(),
        rule_name: "EIS Contribution".to_string(),
        statutory_ref: rates.eis().reference.clone(),
        input: serde_json::json!({
            "gross_salary": round_money(gross).to_string(),
            "ceiling": rates.eis().ceiling.to_string()
        }),
        output: serde_json::json!({
            "employee": eis.to_string(),
            "employer": eis.to_string(),
            "ceiling_applied": gross > rates.eis().ceiling
        }),
        reasoning: format!(
            "EIS table row for ${}: ${} each for employer and employee",
            round_money(gross.min(rates.eis().ceiling)),
            eis
        ),
    });

    // PCB is supplied by the caller
    let pcb = input.manual_tax;
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "pcb".to_string(),
        rule_name: "Monthly Tax Deduction".to_string(),
        statutory_ref: "Income Tax (Deduction from Remuneration) Rules 1994".to_string(),
        input: serde_json::json!({
            "manual_tax": pcb.to_string()
        }),
        output: serde_json::json!({
            "pcb": pcb.to_string()
        }),
        reasoning: format!("Using supplied PCB amount ${}", pcb.normalize()),
    });

    let net_salary = round_money(
        gross
            .saturating_sub(epf_employee)
            .saturating_sub(socso.employee)
            .saturating_sub(eis)
            .saturating_sub(input.other_deductions)
            .saturating_sub(pcb),
    );
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        statutory_ref: "Employment Act 1955, s.24".to_string(),
        input: serde_json::json!({
            "gross_salary": round_money(gross).to_string(),
            "epf_employee": epf_employee.to_string(),
            "socso_employee": socso.employee.to_string(),
            "eis_employee": eis.to_string(),
            "other_deductions": input.other_deductions.to_string(),
            "pcb": pcb.to_string()
        }),
        output: serde_json::json!({
            "net_salary": net_salary.to_string()
        }),
        reasoning: format!(
            "${} - ${} - ${} - ${} - ${} - ${} = ${}",
            round_money(gross),
            epf_employee,
            socso.employee,
            eis,
            input.other_deductions.normalize(),
            pcb.normalize(),
            net_salary
        ),
    });

    let breakdown = StatutoryBreakdown {
        gross_salary: round_money(gross),
        unpaid_leave_deduction: round_money(unpaid_leave_deduction),
        epf_employee,
        epf_employer,
        socso_employee: socso.employee,
        socso_employer: socso.employer,
        eis_employee: eis,
        eis_employer: eis,
        pcb,
        net_salary,
    };

    debug!(
        gross_salary = %breakdown.gross_salary,
        epf_employee = %breakdown.epf_employee,
        socso_employee = %breakdown.socso_employee,
        eis_employee = %breakdown.eis_employee,
        net_salary = %breakdown.net_salary,
        warnings = warnings.len(),
        "Calculated statutory breakdown"
    );

    StatutoryCalculation {
        breakdown,
        audit_trace: AuditTrace { steps, warnings },
    }
}

fn next_step(steps: &[AuditStep]) -> u32 {
    steps.len() as u32 + 1
}
