use serde::{Deserialize, Serialize};
use time::Date;

use crate::constants::{DEFAULT_ACCOUNT_COLOR, DEFAULT_CATEGORY_COLOR};
use crate::error::ApiError;
use crate::month::parse_month_token;
use crate::validate::{validate_name, validate_non_negative, validate_positive};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Cash,
    Bank,
    Ewallet,
}

/// Direction of money flow, shared by categories and transactions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Income,
    Expense,
}

fn default_account_color() -> String {
    DEFAULT_ACCOUNT_COLOR.to_string()
}

fn default_category_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Account {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    #[serde(default)]
    pub initial_balance: f64,
    #[serde(default = "default_account_color")]
    pub color: String,
}

impl Account {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_name(&self.name, "Account name")?;
        validate_non_negative(self.initial_balance, "Initial balance")?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Category {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FlowKind,
    #[serde(default = "default_category_color")]
    pub color: String,
}

impl Category {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_name(&self.name, "Category name")
    }
}

/// An append-only fact: affects exactly one account's balance and is
/// attributable to exactly one category.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Transaction {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: FlowKind,
    pub category_id: String,
    pub account_id: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl Transaction {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_positive(self.amount, "Transaction amount")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Budget {
    pub category_id: String,
    pub month: String,
    pub amount: f64,
}

impl Budget {
    pub fn validate(&self) -> Result<(), ApiError> {
        parse_month_token(&self.month)?;
        validate_non_negative(self.amount, "Budget amount")
    }
}

/// Write handlers return only the assigned identifier.
#[derive(Serialize, Deserialize, Debug)]
pub struct Created {
    pub id: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct MonthQuery {
    pub month: Option<String>,
}
