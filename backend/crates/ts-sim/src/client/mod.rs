pub(crate) mod api;
pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod payloads;

pub use api::TouristApi;
pub use client::ApiClient;
pub use error::{ClientError, Result as ClientResult};
pub use payloads::{AuthResponse, LocationUpdate, PathResponse, PredictRequest, Registration};
