use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::constants::{COLLECTION_BUDGET, ERR_BUDGET_CATEGORY_TYPE};
use crate::error::ApiError;
use crate::models::{Budget, Created, FlowKind, MonthQuery};
use crate::month::parse_month_token;
use crate::serialize::{Public, to_public_all};
use crate::store::{Store, create_document, get_documents};
use crate::validate::require_category;

pub async fn list_budgets(
    State(store): State<Store>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<Public<Budget>>>, ApiError> {
    let mut budgets = get_documents::<Budget>(&store, COLLECTION_BUDGET).await?;

    if let Some(token) = query.month.as_deref() {
        parse_month_token(token)?;
        budgets.retain(|b| b.data.month == token);
    }

    Ok(Json(to_public_all(budgets)?))
}

pub async fn create_budget(
    State(store): State<Store>,
    Json(payload): Json<Budget>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    payload.validate()?;

    // Budgets only make sense against spending, so the referenced category
    // must exist and be expense-typed.
    let category = require_category(&store, &payload.category_id).await?;
    if category.data.kind != FlowKind::Expense {
        return Err(ApiError::InvalidCategoryType(
            ERR_BUDGET_CATEGORY_TYPE.to_string(),
        ));
    }

    let id = create_document(&store, COLLECTION_BUDGET, &payload).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}
