use finance_server::constants::{
    COLLECTION_ACCOUNT, COLLECTION_BUDGET, COLLECTION_CATEGORY, COLLECTION_TRANSACTION,
};
use finance_server::models::{Account, AccountKind, Budget, Category, FlowKind, Transaction};
use finance_server::store::{Store, create_document, init_store};
use tempfile::tempdir;
use time::{Date, Month};

pub async fn setup_test_store() -> Store {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let data_path = temp_dir
        .path()
        .to_str()
        .expect("Failed to convert path to string")
        .to_string();

    let store = init_store(&data_path, "finance-test.db")
        .await
        .unwrap_or_else(|e| panic!("Failed to initialize store at {}: {}", data_path, e));

    // Keep the temp_dir alive by leaking it (for test duration)
    std::mem::forget(temp_dir);

    store
}

pub fn date(year: i32, month: u8, day: u8) -> Date {
    Date::from_calendar_date(year, Month::try_from(month).expect("invalid month"), day)
        .expect("invalid date")
}

pub async fn create_test_account(store: &Store, name: &str, initial_balance: f64) -> String {
    let account = Account {
        name: name.to_string(),
        kind: AccountKind::Bank,
        initial_balance,
        color: "#6366F1".to_string(),
    };
    create_document(store, COLLECTION_ACCOUNT, &account)
        .await
        .unwrap_or_else(|e| panic!("Failed to insert test account '{}': {}", name, e))
}

pub async fn create_test_category(store: &Store, name: &str, kind: FlowKind) -> String {
    let category = Category {
        name: name.to_string(),
        kind,
        color: "#22C55E".to_string(),
    };
    create_document(store, COLLECTION_CATEGORY, &category)
        .await
        .unwrap_or_else(|e| panic!("Failed to insert test category '{}': {}", name, e))
}

pub async fn create_test_transaction(
    store: &Store,
    tx_date: Date,
    amount: f64,
    kind: FlowKind,
    category_id: &str,
    account_id: &str,
) -> String {
    let transaction = Transaction {
        date: tx_date,
        amount,
        kind,
        category_id: category_id.to_string(),
        account_id: account_id.to_string(),
        note: None,
    };
    create_document(store, COLLECTION_TRANSACTION, &transaction)
        .await
        .unwrap_or_else(|e| panic!("Failed to insert test transaction: {}", e))
}

pub async fn create_test_budget(
    store: &Store,
    category_id: &str,
    month: &str,
    amount: f64,
) -> String {
    let budget = Budget {
        category_id: category_id.to_string(),
        month: month.to_string(),
        amount,
    };
    create_document(store, COLLECTION_BUDGET, &budget)
        .await
        .unwrap_or_else(|e| panic!("Failed to insert test budget for {}: {}", month, e))
}
