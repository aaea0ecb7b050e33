use axum::{
    extract::{Query, State},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{Map, Value};
use tracing::{error, info, instrument, warn};

use crate::{
    error::{ApiError, ApiResult},
    extract::{IdPath, JsonBody},
    offers::{
        dto::{CreateOfferRequest, CreatedResponse, DeletedResponse, OfferQuery, UpdatedResponse},
        repo_types::{Offer, OfferChanges, OfferFilter},
    },
    state::AppState,
};

const RETRIEVAL_ERROR: &str = "Offer retrieval error";
const NOT_FOUND: &str = "Offer not found";

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/offers", get(list_offers))
        .route("/offers/:id", get(get_offer))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/offers", post(create_offer))
        .route("/offers/:id", put(update_offer).delete(delete_offer))
}

// --- handlers ---

#[instrument(skip(state, payload))]
pub async fn create_offer(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateOfferRequest>,
) -> ApiResult<Json<CreatedResponse>> {
    let new_offer = payload.into_new_offer().map_err(|e| {
        warn!(error = %e, "rejected offer creation");
        ApiError::bad_request(e.to_string())
    })?;

    match Offer::create(&state.db, &new_offer).await {
        Ok(id) => {
            info!(offer_id = id, employer = %new_offer.employer, "offer created");
            Ok(Json(CreatedResponse { id }))
        }
        Err(e) => {
            error!(error = %e, "create offer failed");
            Err(ApiError::internal("Offer creation error"))
        }
    }
}

#[instrument(skip(state))]
pub async fn get_offer(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<Offer>> {
    match Offer::find_by_id(&state.db, id).await {
        Ok(Some(offer)) => Ok(Json(offer)),
        Ok(None) => Err(ApiError::not_found(NOT_FOUND)),
        Err(e) => {
            error!(error = %e, offer_id = id, "get offer failed");
            Err(ApiError::internal(RETRIEVAL_ERROR))
        }
    }
}

/// PUT /offers/:id with a JSON object of column -> value.
#[instrument(skip(state, fields))]
pub async fn update_offer(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(fields): JsonBody<Map<String, Value>>,
) -> ApiResult<Json<UpdatedResponse>> {
    match Offer::exists(&state.db, id).await {
        Ok(true) => {}
        Ok(false) => return Err(ApiError::not_found(NOT_FOUND)),
        Err(e) => {
            error!(error = %e, offer_id = id, "update offer lookup failed");
            return Err(ApiError::internal("Offer update error"));
        }
    }

    let changes = OfferChanges::try_from(fields).map_err(|e| {
        warn!(error = %e, offer_id = id, "rejected offer update");
        ApiError::bad_request(e.to_string())
    })?;

    if let Err(e) = Offer::update(&state.db, id, &changes).await {
        error!(error = %e, offer_id = id, "update offer failed");
        return Err(ApiError::internal("Offer update error"));
    }

    info!(offer_id = id, fields = changes.assignments().len(), "offer updated");
    Ok(Json(UpdatedResponse { success: true }))
}

/// Succeeds whether or not the row existed.
#[instrument(skip(state))]
pub async fn delete_offer(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<DeletedResponse>> {
    match Offer::delete(&state.db, id).await {
        Ok(removed) => {
            info!(offer_id = id, removed, "offer delete");
            Ok(Json(DeletedResponse {
                message: "Offer deleted successfully",
            }))
        }
        Err(e) => {
            error!(error = %e, offer_id = id, "delete offer failed");
            Err(ApiError::internal("Offer deletion error"))
        }
    }
}

#[instrument(skip(state))]
pub async fn list_offers(
    State(state): State<AppState>,
    Query(query): Query<OfferQuery>,
) -> ApiResult<Json<Vec<Offer>>> {
    let filter = OfferFilter::try_from(query).map_err(|e| {
        warn!(error = %e, "rejected offer listing query");
        ApiError::bad_request(e.to_string())
    })?;

    match Offer::list(&state.db, &filter).await {
        Ok(offers) => Ok(Json(offers)),
        Err(e) => {
            error!(error = %e, ?filter, "list offers failed");
            Err(ApiError::internal(RETRIEVAL_ERROR))
        }
    }
}
