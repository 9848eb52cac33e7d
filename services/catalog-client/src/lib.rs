//! Client for the game catalog API: HTTP gateway plus view controllers.

pub mod api;
pub mod banner;
pub mod error;
pub mod form;
pub mod render;
pub mod routes;
pub mod views;

pub use api::ApiService;
pub use error::{ApiError, ErrorBody, ErrorKind};
pub use form::{DateInput, GameForm};
pub use routes::Route;
