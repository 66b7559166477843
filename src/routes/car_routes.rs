use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::CarController;
use crate::dto::car_dto::{CarCreatedResponse, CarResponse, CreateCarRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{TextInput, ValidatedBody};

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/", get(list_cars).post(create_car))
}

async fn create_car(
    State(state): State<AppState>,
    ValidatedBody(request): ValidatedBody<CreateCarRequest>,
) -> Result<(StatusCode, Json<CarCreatedResponse>), AppError> {
    let make = request.make.as_ref().and_then(TextInput::as_str).unwrap_or_default();
    let model = request.model.as_ref().and_then(TextInput::as_str).unwrap_or_default();

    let controller = CarController::new(state.cars.clone(), state.catalog.clone());
    let car = controller.register(make, model).await?;
    Ok((StatusCode::CREATED, Json(car.into())))
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<CarResponse>>, AppError> {
    let controller = CarController::new(state.cars.clone(), state.catalog.clone());
    let cars = controller.list_cars().await?;
    Ok(Json(cars.into_iter().map(CarResponse::from).collect()))
}
