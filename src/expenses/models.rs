use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schema::ExpenseStatus;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseType {
    Business,
    Travel,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItemizedExpense {
    pub date: NaiveDate,
    pub purpose: String,
    pub unsegregated_expense: f64,
    pub segregated_expense: f64,
    pub currency: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Reimbursement {
    pub amount: f64,
    // Date paid, "tbd" until then
    pub date: String,
    #[serde(rename = "where")]
    pub where_: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Expense {
    #[serde(rename = "_id")]
    pub id: String,
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
    pub expense_type: ExpenseType,
    pub grant_percentages: Vec<f64>,
    pub grants: Vec<String>,
    pub itemized_expenses: Vec<ItemizedExpense>,
    pub notes: Vec<String>,
    pub overall_purpose: String,
    pub payee: String,
    pub project: Vec<String>,
    pub reimbursements: Vec<Reimbursement>,
    pub status: ExpenseStatus,
}
