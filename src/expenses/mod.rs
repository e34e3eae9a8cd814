pub mod models;

pub use models::*;

use chrono::NaiveDate;

use crate::schema::ExpenseStatus;

/// Everything an expense needs beyond its id and dates.
#[derive(Debug, Clone)]
pub struct ExpenseContext {
    pub payee: String,
    pub purpose: String,
    pub where_: String,
    pub status: ExpenseStatus,
    pub business: bool,
    pub grants: Vec<String>,
    pub notes: Vec<String>,
}

/// Template expense with placeholder amounts, to be filled in once
/// receipts come in.
pub fn build_expense(
    key: &str,
    begin_date: NaiveDate,
    end_date: NaiveDate,
    ctx: &ExpenseContext,
) -> Expense {
    let expense_type = if ctx.business {
        ExpenseType::Business
    } else {
        ExpenseType::Travel
    };

    Expense {
        id: key.to_string(),
        begin_date,
        end_date,
        expense_type,
        grant_percentages: grant_percentages(ctx.grants.len()),
        grants: ctx.grants.clone(),
        itemized_expenses: vec![ItemizedExpense {
            date: begin_date,
            purpose: ctx.purpose.clone(),
            unsegregated_expense: 0.0,
            segregated_expense: 0.0,
            currency: String::from("USD"),
        }],
        notes: ctx.notes.clone(),
        overall_purpose: ctx.purpose.clone(),
        payee: ctx.payee.clone(),
        project: vec![String::from("all")],
        reimbursements: vec![Reimbursement {
            amount: 0.0,
            date: String::from("tbd"),
            where_: ctx.where_.clone(),
        }],
        status: ctx.status,
    }
}

/// Even split across grants, rounded to two decimals.
fn grant_percentages(count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![];
    }
    let share = (100.0 / count as f64 * 100.0).round() / 100.0;
    vec![share; count]
}
