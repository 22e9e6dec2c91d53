use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use finance_server::config::Config;
use finance_server::{accounts, budgets, categories, status, store, summary, transactions};

#[tokio::main]
async fn main() {
    // load environment variables
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().expect("Invalid server configuration");

    let store = store::init_store(&config.data_path, &config.database_name)
        .await
        .expect("Failed to initialize document store");

    let app = Router::new()
        .route("/", get(status::root))
        .route("/test", get(status::store_status))
        .route(
            "/api/accounts",
            get(accounts::list_accounts).post(accounts::create_account),
        )
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/transactions",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route(
            "/api/budgets",
            get(budgets::list_budgets).post(budgets::create_budget),
        )
        .route("/api/summary", get(summary::get_summary))
        .layer(CorsLayer::permissive())
        .with_state(store);

    let listener = tokio::net::TcpListener::bind(&config.bind_address())
        .await
        .unwrap();
    log::info!("Server running on http://{}", config.bind_address());

    axum::serve(listener, app).await.unwrap();
}
