//! Implementations in this file are useful to allow accessing the
//! current reading and the state handler directly from Rocket routes:
//! ```rust,no_run
//! #[get("/hello")]
//! fn hello(reading: CurrentReading, state_handler: &StateHandler) -> String {
//!     format!("Hello, reading={:?} state={:?}", reading.0, state_handler)
//! }
//! ```

use definitions::SensorReading;
use rocket::{request::{self, FromRequest}, Request};

use crate::state::StateHandler;

/// A snapshot of the reading that was current when the request arrived.
#[derive(Debug, Clone)]
pub struct CurrentReading(pub SensorReading);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for CurrentReading {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        request.guard::<&rocket::State<StateHandler>>().await
            .map(|state_handler| CurrentReading(state_handler.get_current_reading()))
    }
}

// Rocket only provides &State<StateHandler>, not &StateHandler directly
#[rocket::async_trait]
impl<'r> FromRequest<'r> for &'r StateHandler {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        request.guard::<&rocket::State<StateHandler>>().await
            .map(|state_handler| state_handler.inner())
    }
}
