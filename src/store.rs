use anyhow::Result;
use libsql::{Builder, Connection};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::{path::Path, sync::Arc};
use tokio::sync::RwLock;
use uuid::Uuid;

const CREATE_DOCUMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    id          TEXT    NOT NULL,
    collection  TEXT    NOT NULL,
    payload     TEXT    NOT NULL,
    created_at  INTEGER NOT NULL,
    PRIMARY KEY (collection, id)
);
"#;

const CREATE_COLLECTION_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents (collection)";

pub type Store = Arc<RwLock<Connection>>;

/// A record as it sits in the store: typed payload plus the metadata the
/// gateway stamped on insert. `created_at` is unix nanoseconds and is the
/// tie-break for same-day ordering downstream.
#[derive(Debug, Clone)]
pub struct Stored<T> {
    pub id: String,
    pub created_at: i64,
    pub data: T,
}

/// Single-file document store (documents.db layout, one row per record)
pub async fn init_store(data_dir: &str, db_name: &str) -> Result<Store> {
    tokio::fs::create_dir_all(data_dir).await?;
    let path = Path::new(data_dir).join(db_name);
    let db = Builder::new_local(path).build().await?;
    let conn = db.connect()?;

    conn.execute(CREATE_DOCUMENTS_TABLE, ()).await?;
    conn.execute(CREATE_COLLECTION_INDEX, ()).await?;
    Ok(Arc::new(RwLock::new(conn)))
}

/// Insert one record into the named collection and return the assigned id.
pub async fn create_document<T: Serialize>(
    store: &Store,
    collection: &str,
    payload: &T,
) -> Result<String> {
    let id = Uuid::new_v4().to_string();
    let created_at = time::OffsetDateTime::now_utc().unix_timestamp_nanos() as i64;
    let body = serde_json::to_string(payload)?;

    let conn = store.write().await;
    conn.execute(
        "INSERT INTO documents (id, collection, payload, created_at) VALUES (?, ?, ?, ?)",
        (id.as_str(), collection, body.as_str(), created_at),
    )
    .await?;

    Ok(id)
}

fn extract_document<T: DeserializeOwned>(row: libsql::Row) -> Result<Stored<T>> {
    let id: String = row.get(0)?;
    let payload: String = row.get(1)?;
    let created_at: i64 = row.get(2)?;
    let data = serde_json::from_str(&payload)?;

    Ok(Stored {
        id,
        created_at,
        data,
    })
}

/// All records of a collection in insertion order. Filtering, sorting, and
/// pagination are the caller's concern, not the gateway's.
pub async fn get_documents<T: DeserializeOwned>(
    store: &Store,
    collection: &str,
) -> Result<Vec<Stored<T>>> {
    let conn = store.read().await;
    let mut rows = conn
        .query(
            "SELECT id, payload, created_at FROM documents WHERE collection = ? ORDER BY created_at, rowid",
            [collection],
        )
        .await?;

    let mut documents = Vec::new();
    while let Some(row) = rows.next().await? {
        documents.push(extract_document(row)?);
    }
    Ok(documents)
}

pub async fn find_document<T: DeserializeOwned>(
    store: &Store,
    collection: &str,
    id: &str,
) -> Result<Option<Stored<T>>> {
    let conn = store.read().await;
    let mut rows = conn
        .query(
            "SELECT id, payload, created_at FROM documents WHERE collection = ? AND id = ?",
            (collection, id),
        )
        .await?;

    match rows.next().await? {
        Some(row) => Ok(Some(extract_document(row)?)),
        None => Ok(None),
    }
}

/// Names of collections that currently hold at least one record.
pub async fn list_collections(store: &Store) -> Result<Vec<String>> {
    let conn = store.read().await;
    let mut rows = conn
        .query(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
            (),
        )
        .await?;

    let mut names = Vec::new();
    while let Some(row) = rows.next().await? {
        let name: String = row.get(0)?;
        names.push(name);
    }
    Ok(names)
}
