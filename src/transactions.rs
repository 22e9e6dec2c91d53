use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::constants::COLLECTION_TRANSACTION;
use crate::error::ApiError;
use crate::models::{Created, MonthQuery, Transaction};
use crate::month::{in_month, month_range};
use crate::serialize::{Public, to_public_all};
use crate::store::{Store, Stored, create_document, get_documents};
use crate::validate::{require_category, validate_account_exists};

/// Descending by date, creation stamp breaking ties within the same day.
/// Date alone would reorder same-day entries observably.
pub fn sort_recent_first(transactions: &mut [Stored<Transaction>]) {
    transactions.sort_by(|a, b| (b.data.date, b.created_at).cmp(&(a.data.date, a.created_at)));
}

pub async fn list_transactions(
    State(store): State<Store>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<Public<Transaction>>>, ApiError> {
    let mut transactions = get_documents::<Transaction>(&store, COLLECTION_TRANSACTION).await?;

    if let Some(token) = query.month.as_deref() {
        let (start, next_month) = month_range(token)?;
        transactions.retain(|t| in_month(t.data.date, start, next_month));
    }

    sort_recent_first(&mut transactions);
    Ok(Json(to_public_all(transactions)?))
}

pub async fn create_transaction(
    State(store): State<Store>,
    Json(payload): Json<Transaction>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    payload.validate()?;

    // Both references must resolve before anything is written.
    validate_account_exists(&store, &payload.account_id).await?;
    require_category(&store, &payload.category_id).await?;

    let id = create_document(&store, COLLECTION_TRANSACTION, &payload).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}
