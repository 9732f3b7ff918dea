mod cors;
mod from_request;

use definitions::{ErrorResponse, SensorReading, SimulateResponse};
use rocket::{
    figment::Figment,
    http::Status,
    response::content::RawHtml,
    serde::json::Json,
    Build, Request, Rocket,
};

use crate::state::StateHandler;

pub use cors::Cors;
pub use from_request::CurrentReading;

/// The dashboard, which polls `/api/data` and can trigger `/api/simulate`.
#[get("/")]
pub fn index() -> RawHtml<&'static str> {
    RawHtml(include_str!("../../static/index.html"))
}

#[get("/api/data")]
pub fn get_sensor_data(reading: CurrentReading) -> Json<SensorReading> {
    Json(reading.0)
}

/// Simulates new sensor data, as if it was received from the gateway.
#[post("/api/simulate")]
pub fn simulate_sensor_data(state_handler: &StateHandler) -> Json<SimulateResponse> {
    Json(SimulateResponse::success(state_handler.generate_new_reading()))
}

// CORS preflight, the headers themselves are added by the Cors fairing
#[options("/api/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}

#[catch(default)]
pub fn default_catcher(status: Status, _request: &Request) -> (Status, Json<ErrorResponse>) {
    (status, Json(ErrorResponse::new(status.reason_lossy())))
}

pub fn build(figment: Figment, state_handler: StateHandler, cors: Cors) -> Rocket<Build> {
    rocket::custom(figment)
        .manage(state_handler)
        .attach(cors)
        .mount("/", routes![index, get_sensor_data, simulate_sensor_data, preflight])
        .register("/", catchers![default_catcher])
}
