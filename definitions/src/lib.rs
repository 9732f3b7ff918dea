mod api;
mod reading;

pub use api::*;
pub use reading::*;
