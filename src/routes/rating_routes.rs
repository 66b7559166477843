use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::controllers::RatingController;
use crate::dto::rating_dto::{CreateRatingRequest, RatingResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{IntegerInput, ValidatedBody};

pub fn create_rating_router() -> Router<AppState> {
    Router::new()
        .route("/rate", post(create_rating))
        .route("/rate/", post(create_rating))
}

async fn create_rating(
    State(state): State<AppState>,
    ValidatedBody(request): ValidatedBody<CreateRatingRequest>,
) -> Result<(StatusCode, Json<RatingResponse>), AppError> {
    let car_id = request.car_id.and_then(IntegerInput::value).unwrap_or_default();
    let rate = request
        .rate
        .and_then(IntegerInput::value)
        .and_then(|rate| i32::try_from(rate).ok())
        .unwrap_or_default();

    let controller = RatingController::new(state.ratings.clone());
    let rating = controller.rate(car_id, rate).await?;
    Ok((StatusCode::CREATED, Json(rating.into())))
}
