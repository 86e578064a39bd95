//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRequest, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use shop_types::{
    AddCartItemRequest, AddReviewRequest, AddUserRequest, AppError, AssignCartUserRequest,
    CheckoutRequest, CheckoutResponse, DiscountCodeRequest, GetUserRequest, IdRequest,
    PaymentGateway, StoreRepository, UpdateCartAmountRequest, UpdateCartVariantRequest,
};

use crate::ShopService;

/// Application state shared across handlers.
pub struct AppState<R: StoreRepository, P: PaymentGateway> {
    pub service: ShopService<R, P>,
}

type SharedState<R, P> = State<Arc<AppState<R, P>>>;

// ─────────────────────────────────────────────────────────────────────────────
// Errors & extractors
// ─────────────────────────────────────────────────────────────────────────────

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::BadRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.message().to_string();

        match &self.0 {
            AppError::BadRequest(_) => {
                let body = serde_json::json!({ "status": 0, "message": message });
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            AppError::NotFound(_) | AppError::Conflict(_) => {}
            AppError::Database(_) => tracing::error!(error = %message, "Database query failed"),
            AppError::Payment(_) => tracing::error!(error = %message, "Checkout session failed"),
        }

        let status = match self.0 {
            AppError::Payment(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::NOT_FOUND,
        };
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

/// JSON body extractor whose rejections use the API error shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

// ─────────────────────────────────────────────────────────────────────────────
// Health & checkout
// ─────────────────────────────────────────────────────────────────────────────

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Browser checkout: redirects to the hosted payment page.
///
/// Errors are answered as plain text since the caller is a browser navigation.
#[tracing::instrument(skip(state), fields(order_id = ?req.order_id))]
pub async fn buy<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    Query(req): Query<CheckoutRequest>,
) -> Response {
    match state.service.create_checkout_session(req).await {
        Ok(session) => (StatusCode::FOUND, [(header::LOCATION, session.url)]).into_response(),
        Err(AppError::BadRequest(msg)) => (StatusCode::BAD_REQUEST, msg).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Checkout redirect failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.message().to_string()).into_response()
        }
    }
}

#[tracing::instrument(skip(state), fields(order_id = ?req.order_id))]
pub async fn create_checkout_session<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<CheckoutRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.service.create_checkout_session(req).await?;
    Ok(Json(CheckoutResponse {
        url: session.url,
        session_id: session.id,
    }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Users, discounts & reviews
// ─────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip(state, req))]
pub async fn add_user<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<AddUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.add_user(req).await?))
}

#[tracing::instrument(skip(state), fields(user_id = ?req.user_id))]
pub async fn get_user<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<GetUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.get_user(req).await?))
}

#[tracing::instrument(skip(state), fields(code = ?req.code))]
pub async fn check_discount<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<DiscountCodeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.check_discount(req).await?))
}

#[tracing::instrument(skip(state), fields(item_id = ?req.id))]
pub async fn get_ratings<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.list_reviews(req).await?))
}

/// Submit a review. Also mounted under the historical `add_rewiew` path.
#[tracing::instrument(skip(state, req), fields(item_fk = ?req.item_fk))]
pub async fn add_review<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<AddReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.add_review(req).await?))
}

// ─────────────────────────────────────────────────────────────────────────────
// Content
// ─────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip(state), fields(article_id = ?req.id))]
pub async fn get_article<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.get_article(req).await?))
}

#[tracing::instrument(skip(state), fields(topic_id = ?req.id))]
pub async fn get_article_topic<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.list_articles_for_topic(req).await?))
}

#[tracing::instrument(skip(state))]
pub async fn get_topics<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.list_topics().await?))
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip(state), fields(collection_id = ?req.id))]
pub async fn get_collection<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.get_collection(req).await?))
}

#[tracing::instrument(skip(state))]
pub async fn get_collections<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.list_collections().await?))
}

#[tracing::instrument(skip(state), fields(item_id = ?req.id))]
pub async fn get_item<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.get_item(req).await?))
}

#[tracing::instrument(skip(state))]
pub async fn get_items<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.list_items().await?))
}

#[tracing::instrument(skip(state), fields(collection_id = ?req.id))]
pub async fn get_items_collection<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.list_items_in_collection(req).await?))
}

#[tracing::instrument(skip(state), fields(variant_id = ?req.id))]
pub async fn get_variant<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.get_variant(req).await?))
}

#[tracing::instrument(skip(state), fields(item_id = ?req.id))]
pub async fn get_variants<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.list_variants(req).await?))
}

#[tracing::instrument(skip(state), fields(variant_id = ?req.id))]
pub async fn get_variant_image<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.list_variant_images(req).await?))
}

// ─────────────────────────────────────────────────────────────────────────────
// Carts
// ─────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip(state), fields(user_id = ?req.id))]
pub async fn get_cart_user<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.get_cart_for_user(req).await?))
}

#[tracing::instrument(skip(state), fields(cart_id = ?req.id))]
pub async fn get_cart<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.get_cart(req).await?))
}

#[tracing::instrument(skip(state))]
pub async fn add_cart<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.create_cart().await?))
}

#[tracing::instrument(skip(state), fields(cart_id = ?req.id, user_fk = ?req.user_fk))]
pub async fn add_cart_user<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<AssignCartUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.assign_cart_user(req).await?))
}

#[tracing::instrument(skip(state), fields(cart_id = ?req.id, item_fk = ?req.item_fk))]
pub async fn add_cart_item<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<AddCartItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.add_cart_item(req).await?))
}

#[tracing::instrument(skip(state), fields(line_id = ?req.id))]
pub async fn rm_cart_item<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.remove_cart_item(req).await?))
}

#[tracing::instrument(skip(state), fields(cart_id = ?req.id))]
pub async fn get_cart_items<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.list_cart_items(req).await?))
}

#[tracing::instrument(skip(state), fields(line_id = ?req.id))]
pub async fn update_cart_variant<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<UpdateCartVariantRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.update_cart_variant(req).await?))
}

#[tracing::instrument(skip(state), fields(line_id = ?req.id))]
pub async fn update_cart_amount<R: StoreRepository, P: PaymentGateway>(
    State(state): SharedState<R, P>,
    ApiJson(req): ApiJson<UpdateCartAmountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.update_cart_amount(req).await?))
}
