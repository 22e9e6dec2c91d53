/*!
 * Summary Engine Integration Tests
 *
 * Exercises the summary endpoint against an isolated store: month-scoped
 * totals, lifetime account balances, rounding order, budget status, and the
 * recent-transaction cap.
 *
 * Test Categories:
 * - End-to-end dashboard scenarios (totals, balances, budget status)
 * - Lifetime balances independent of the month filter
 * - Rounding (per-account rounding before the overall sum)
 * - Budget overspend (negative remaining, not clamped)
 * - Recent transaction cap and ordering
 */

mod common;

use axum::Json;
use axum::extract::{Query, State};
use common::*;
use finance_server::models::{FlowKind, MonthQuery};
use finance_server::store::Store;
use finance_server::summary::{Summary, get_summary, round2};

async fn summary(store: &Store, month: Option<&str>) -> Summary {
    let Json(summary) = get_summary(
        State(store.clone()),
        Query(MonthQuery {
            month: month.map(String::from),
        }),
    )
    .await
    .expect("get_summary should succeed");
    summary
}

#[tokio::test]
async fn month_scoped_totals_and_balances() {
    let store = setup_test_store().await;
    let account_id = create_test_account(&store, "Checking", 100.0).await;
    let category_id = create_test_category(&store, "Groceries", FlowKind::Expense).await;

    create_test_transaction(&store, date(2024, 3, 15), 30.0, FlowKind::Expense, &category_id, &account_id).await;

    let report = summary(&store, Some("2024-03")).await;

    assert_eq!(report.total_income, 0.0);
    assert_eq!(report.total_expense, 30.0);
    assert_eq!(report.accounts[&account_id].balance, 70.0);
    assert_eq!(report.accounts[&account_id].name, "Checking");
    assert_eq!(report.overall_balance, 70.0);
    assert_eq!(report.categories.len(), 1);
    assert_eq!(report.transactions.len(), 1);
    assert!(report.budgets.is_empty());
}

#[tokio::test]
async fn budget_status_spent_and_remaining() {
    let store = setup_test_store().await;
    let account_id = create_test_account(&store, "Checking", 100.0).await;
    let category_id = create_test_category(&store, "Groceries", FlowKind::Expense).await;

    create_test_transaction(&store, date(2024, 3, 15), 30.0, FlowKind::Expense, &category_id, &account_id).await;
    let budget_id = create_test_budget(&store, &category_id, "2024-03", 50.0).await;
    create_test_budget(&store, &category_id, "2024-04", 50.0).await;

    let report = summary(&store, Some("2024-03")).await;

    assert_eq!(report.budgets.len(), 1);
    let status = &report.budgets[0];
    assert_eq!(status.budget_id, budget_id);
    assert_eq!(status.category_id, category_id);
    assert_eq!(status.month, "2024-03");
    assert_eq!(status.amount, 50.0);
    assert_eq!(status.spent, 30.0);
    assert_eq!(status.remaining, 20.0);
}

#[tokio::test]
async fn budget_overspend_goes_negative() {
    let store = setup_test_store().await;
    let account_id = create_test_account(&store, "Checking", 100.0).await;
    let category_id = create_test_category(&store, "Groceries", FlowKind::Expense).await;

    create_test_transaction(&store, date(2024, 3, 15), 30.0, FlowKind::Expense, &category_id, &account_id).await;
    create_test_budget(&store, &category_id, "2024-03", 20.0).await;

    let report = summary(&store, Some("2024-03")).await;

    // Overspend stays representable, never clamped to zero.
    assert_eq!(report.budgets[0].remaining, -10.0);
}

#[tokio::test]
async fn duplicate_budgets_each_report_full_spend() {
    let store = setup_test_store().await;
    let account_id = create_test_account(&store, "Checking", 100.0).await;
    let category_id = create_test_category(&store, "Groceries", FlowKind::Expense).await;

    create_test_transaction(&store, date(2024, 3, 15), 30.0, FlowKind::Expense, &category_id, &account_id).await;
    create_test_budget(&store, &category_id, "2024-03", 50.0).await;
    create_test_budget(&store, &category_id, "2024-03", 80.0).await;

    let report = summary(&store, Some("2024-03")).await;

    assert_eq!(report.budgets.len(), 2);
    assert_eq!(report.budgets[0].spent, 30.0);
    assert_eq!(report.budgets[1].spent, 30.0);
}

#[tokio::test]
async fn balances_are_lifetime_even_with_month_filter() {
    let store = setup_test_store().await;
    let account_id = create_test_account(&store, "Checking", 100.0).await;
    let category_id = create_test_category(&store, "Groceries", FlowKind::Expense).await;

    create_test_transaction(&store, date(2024, 2, 10), 40.0, FlowKind::Expense, &category_id, &account_id).await;
    create_test_transaction(&store, date(2024, 3, 15), 30.0, FlowKind::Expense, &category_id, &account_id).await;

    let report = summary(&store, Some("2024-03")).await;

    // Totals see only March, the balance sees the whole history.
    assert_eq!(report.total_expense, 30.0);
    assert_eq!(report.accounts[&account_id].balance, 30.0);
    assert_eq!(report.overall_balance, 30.0);
    assert_eq!(report.transactions.len(), 1);
}

#[tokio::test]
async fn no_month_means_unfiltered_totals_and_no_budget_status() {
    let store = setup_test_store().await;
    let account_id = create_test_account(&store, "Checking", 0.0).await;
    let income_id = create_test_category(&store, "Salary", FlowKind::Income).await;
    let expense_id = create_test_category(&store, "Groceries", FlowKind::Expense).await;

    create_test_transaction(&store, date(2024, 2, 1), 500.0, FlowKind::Income, &income_id, &account_id).await;
    create_test_transaction(&store, date(2024, 3, 1), 120.0, FlowKind::Expense, &expense_id, &account_id).await;
    create_test_budget(&store, &expense_id, "2024-03", 200.0).await;

    let report = summary(&store, None).await;

    assert_eq!(report.total_income, 500.0);
    assert_eq!(report.total_expense, 120.0);
    assert_eq!(report.overall_balance, 380.0);
    // Budget status is only computed when a month is requested.
    assert!(report.budgets.is_empty());
}

#[tokio::test]
async fn overall_balance_sums_rounded_account_balances() {
    let store = setup_test_store().await;

    // 10.004 rounds to 10.0 per account; summing before rounding would give
    // round2(20.008) = 20.01 instead.
    create_test_account(&store, "First", 10.004).await;
    create_test_account(&store, "Second", 10.004).await;

    let report = summary(&store, None).await;

    for balance in report.accounts.values() {
        assert_eq!(balance.balance, 10.0);
    }
    assert_eq!(report.overall_balance, 20.0);
}

#[tokio::test]
async fn totals_are_rounded_to_two_decimals() {
    let store = setup_test_store().await;
    let account_id = create_test_account(&store, "Checking", 0.0).await;
    let income_id = create_test_category(&store, "Salary", FlowKind::Income).await;

    create_test_transaction(&store, date(2024, 3, 1), 0.1, FlowKind::Income, &income_id, &account_id).await;
    create_test_transaction(&store, date(2024, 3, 2), 0.2, FlowKind::Income, &income_id, &account_id).await;

    let report = summary(&store, Some("2024-03")).await;

    // 0.1 + 0.2 accumulates binary noise before rounding
    assert_eq!(report.total_income, 0.3);
    assert_eq!(report.total_income, round2(0.1 + 0.2));
}

#[tokio::test]
async fn recent_transactions_capped_at_fifty() {
    let store = setup_test_store().await;
    let account_id = create_test_account(&store, "Checking", 0.0).await;
    let category_id = create_test_category(&store, "Groceries", FlowKind::Expense).await;

    for i in 0..55 {
        create_test_transaction(
            &store,
            date(2024, 3, 15),
            (i + 1) as f64,
            FlowKind::Expense,
            &category_id,
            &account_id,
        )
        .await;
    }

    let report = summary(&store, Some("2024-03")).await;

    assert_eq!(report.transactions.len(), 50);
    // Same-day entries order by creation stamp, most recent first.
    assert_eq!(report.transactions[0].data.amount, 55.0);
    assert_eq!(report.transactions[49].data.amount, 6.0);
}
