use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::constants::{
    COLLECTION_ACCOUNT, COLLECTION_BUDGET, COLLECTION_CATEGORY, COLLECTION_TRANSACTION,
    SUMMARY_TRANSACTION_LIMIT,
};
use crate::error::ApiError;
use crate::models::{Account, Budget, Category, FlowKind, MonthQuery, Transaction};
use crate::month::{in_month, month_range};
use crate::serialize::{Public, to_public_all};
use crate::store::{Store, Stored, get_documents};
use crate::transactions::sort_recent_first;

#[derive(Serialize, Debug, Clone)]
pub struct AccountBalance {
    pub name: String,
    pub color: String,
    pub balance: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct BudgetStatus {
    pub budget_id: String,
    pub category_id: String,
    pub month: String,
    pub amount: f64,
    pub spent: f64,
    pub remaining: f64,
}

#[derive(Serialize, Debug)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub overall_balance: f64,
    pub accounts: BTreeMap<String, AccountBalance>,
    pub categories: Vec<Public<Category>>,
    pub transactions: Vec<Public<Transaction>>,
    pub budgets: Vec<BudgetStatus>,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Aggregate the dashboard report.
///
/// `transactions` is the month-scoped set when a month was requested;
/// `all_transactions` is always the full history. Account balances are
/// lifetime figures and must not reset with the month filter.
pub fn compute_summary(
    accounts: Vec<Stored<Account>>,
    categories: Vec<Stored<Category>>,
    mut transactions: Vec<Stored<Transaction>>,
    all_transactions: Vec<Stored<Transaction>>,
    budgets: Vec<Stored<Budget>>,
    month: Option<&str>,
) -> Result<Summary, ApiError> {
    let total_income: f64 = transactions
        .iter()
        .filter(|t| t.data.kind == FlowKind::Income)
        .map(|t| t.data.amount)
        .sum();
    let total_expense: f64 = transactions
        .iter()
        .filter(|t| t.data.kind == FlowKind::Expense)
        .map(|t| t.data.amount)
        .sum();

    let mut account_balances = BTreeMap::new();
    for account in &accounts {
        let mut balance = account.data.initial_balance;
        for t in &all_transactions {
            if t.data.account_id == account.id {
                match t.data.kind {
                    FlowKind::Income => balance += t.data.amount,
                    FlowKind::Expense => balance -= t.data.amount,
                }
            }
        }
        account_balances.insert(
            account.id.clone(),
            AccountBalance {
                name: account.data.name.clone(),
                color: account.data.color.clone(),
                balance: round2(balance),
            },
        );
    }

    // Summed after per-account rounding, then rounded once more.
    let overall_balance = round2(account_balances.values().map(|a| a.balance).sum());

    // One status entry per budget record; duplicate budgets for the same
    // category/month each report the same spent figure.
    let mut budget_status = Vec::new();
    if let Some(month) = month {
        for budget in &budgets {
            if budget.data.month != month {
                continue;
            }
            let spent: f64 = transactions
                .iter()
                .filter(|t| {
                    t.data.category_id == budget.data.category_id
                        && t.data.kind == FlowKind::Expense
                })
                .map(|t| t.data.amount)
                .sum();
            budget_status.push(BudgetStatus {
                budget_id: budget.id.clone(),
                category_id: budget.data.category_id.clone(),
                month: month.to_string(),
                amount: budget.data.amount,
                spent: round2(spent),
                remaining: round2(budget.data.amount - spent),
            });
        }
    }

    sort_recent_first(&mut transactions);
    transactions.truncate(SUMMARY_TRANSACTION_LIMIT);

    Ok(Summary {
        total_income: round2(total_income),
        total_expense: round2(total_expense),
        overall_balance,
        accounts: account_balances,
        categories: to_public_all(categories)?,
        transactions: to_public_all(transactions)?,
        budgets: budget_status,
    })
}

pub async fn get_summary(
    State(store): State<Store>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Summary>, ApiError> {
    let accounts = get_documents::<Account>(&store, COLLECTION_ACCOUNT).await?;
    let categories = get_documents::<Category>(&store, COLLECTION_CATEGORY).await?;
    let mut transactions = get_documents::<Transaction>(&store, COLLECTION_TRANSACTION).await?;

    if let Some(token) = query.month.as_deref() {
        let (start, next_month) = month_range(token)?;
        transactions.retain(|t| in_month(t.data.date, start, next_month));
    }

    // Second, independent load: balances run over the full history even when
    // the totals above are month-scoped.
    let all_transactions = get_documents::<Transaction>(&store, COLLECTION_TRANSACTION).await?;
    let budgets = get_documents::<Budget>(&store, COLLECTION_BUDGET).await?;

    let summary = compute_summary(
        accounts,
        categories,
        transactions,
        all_transactions,
        budgets,
        query.month.as_deref(),
    )?;

    Ok(Json(summary))
}
