use axum::{Json, extract::State, http::StatusCode};

use crate::constants::COLLECTION_CATEGORY;
use crate::error::ApiError;
use crate::models::{Category, Created};
use crate::serialize::{Public, to_public_all};
use crate::store::{Store, create_document, get_documents};

pub async fn list_categories(
    State(store): State<Store>,
) -> Result<Json<Vec<Public<Category>>>, ApiError> {
    let categories = get_documents::<Category>(&store, COLLECTION_CATEGORY).await?;
    Ok(Json(to_public_all(categories)?))
}

pub async fn create_category(
    State(store): State<Store>,
    Json(payload): Json<Category>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    payload.validate()?;

    let id = create_document(&store, COLLECTION_CATEGORY, &payload).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}
