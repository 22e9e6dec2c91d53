use axum::{Json, extract::State, http::StatusCode};

use crate::constants::COLLECTION_ACCOUNT;
use crate::error::ApiError;
use crate::models::{Account, Created};
use crate::serialize::{Public, to_public_all};
use crate::store::{Store, create_document, get_documents};

pub async fn list_accounts(
    State(store): State<Store>,
) -> Result<Json<Vec<Public<Account>>>, ApiError> {
    let accounts = get_documents::<Account>(&store, COLLECTION_ACCOUNT).await?;
    Ok(Json(to_public_all(accounts)?))
}

pub async fn create_account(
    State(store): State<Store>,
    Json(payload): Json<Account>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    payload.validate()?;

    let id = create_document(&store, COLLECTION_ACCOUNT, &payload).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}
