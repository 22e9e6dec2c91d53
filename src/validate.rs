use crate::constants::*;
use crate::error::ApiError;
use crate::models::{Account, Category};
use crate::store::{Store, Stored, find_document};

pub fn validate_name(value: &str, field_name: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!(
            "{} cannot be empty",
            field_name
        )));
    }
    if value.len() > MAX_NAME_LENGTH {
        return Err(ApiError::Validation(format!(
            "{} must be less than {} characters",
            field_name, MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_positive(value: f64, field_name: &str) -> Result<(), ApiError> {
    if value <= 0.0 {
        return Err(ApiError::Validation(format!(
            "{} must be greater than zero",
            field_name
        )));
    }
    Ok(())
}

pub fn validate_non_negative(value: f64, field_name: &str) -> Result<(), ApiError> {
    if value < 0.0 {
        return Err(ApiError::Validation(format!(
            "{} cannot be negative",
            field_name
        )));
    }
    Ok(())
}

/// Confirms the referenced account exists at creation time. The check and
/// the subsequent insert are separate operations, not one transaction.
pub async fn validate_account_exists(store: &Store, account_id: &str) -> Result<(), ApiError> {
    let found = find_document::<Account>(store, COLLECTION_ACCOUNT, account_id).await?;
    if found.is_none() {
        return Err(ApiError::ReferenceNotFound(
            ERR_ACCOUNT_NOT_FOUND.to_string(),
        ));
    }
    Ok(())
}

/// Resolve a referenced category, failing with the reference error when the
/// id is dangling.
pub async fn require_category(
    store: &Store,
    category_id: &str,
) -> Result<Stored<Category>, ApiError> {
    find_document::<Category>(store, COLLECTION_CATEGORY, category_id)
        .await?
        .ok_or_else(|| ApiError::ReferenceNotFound(ERR_CATEGORY_NOT_FOUND.to_string()))
}
