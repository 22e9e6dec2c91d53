use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::{Value, json};

use crate::constants::STATUS_ERROR_TEXT_LIMIT;
use crate::store::{Store, list_collections};

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Finance tracker API is running" }))
}

#[derive(Serialize, Debug)]
pub struct StoreStatus {
    pub backend: String,
    pub database: String,
    pub database_path: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn env_presence(key: &str) -> String {
    let state = if std::env::var(key).is_ok() {
        "set"
    } else {
        "not set"
    };
    state.to_string()
}

/// Diagnostic endpoint. Store failures are reported as status text; the
/// request itself always succeeds.
pub async fn store_status(State(store): State<Store>) -> Json<StoreStatus> {
    let mut status = StoreStatus {
        backend: "running".to_string(),
        database: "available".to_string(),
        database_path: env_presence("DATABASE_PATH"),
        database_name: env_presence("DATABASE_NAME"),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    match list_collections(&store).await {
        Ok(names) => {
            status.collections = names;
            status.connection_status = "connected".to_string();
            status.database = "connected and working".to_string();
        }
        Err(err) => {
            let text: String = err.to_string().chars().take(STATUS_ERROR_TEXT_LIMIT).collect();
            status.database = format!("connected but error: {}", text);
        }
    }

    Json(status)
}
