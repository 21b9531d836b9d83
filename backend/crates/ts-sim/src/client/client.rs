use crate::client::payloads::{LoginPayload, PathRequest, SosRequest, TouristRef};
use crate::{
    AuthResponse, ClientError, ClientResult, LocationUpdate, PathResponse, PredictRequest,
    Registration, TouristApi,
};

use ts_core::{LiveStatuses, PathPoint, PathSelection, SafetyAlert, TouristIds, TouristLogEntry};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the prediction service
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "https://sih-repo.onrender.com")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and handle errors
    ///
    /// Empty bodies read as `null`, non-JSON bodies as a JSON string.
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        if !status.is_success() {
            let message = body
                .get("error")
                .or_else(|| body.get("message"))
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(body)
    }

    async fn execute_as<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Log in against the auth service.
    ///
    /// A `success: false` answer comes back as `Ok`; callers inspect it.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<AuthResponse> {
        let body = LoginPayload { username, password };
        let req = self.request(Method::POST, "/auth/login").json(&body);
        self.execute_auth(req).await
    }

    pub async fn register(&self, registration: &Registration) -> ClientResult<AuthResponse> {
        let req = self
            .request(Method::POST, "/auth/register")
            .json(registration);
        self.execute_auth(req).await
    }

    /// The auth service answers failures with a JSON body and a 4xx status.
    async fn execute_auth(&self, req: reqwest::RequestBuilder) -> ClientResult<AuthResponse> {
        match self.execute_as::<AuthResponse>(req).await {
            Err(ClientError::Api {
                status, message, ..
            }) if status < 500 => Ok(AuthResponse {
                success: false,
                user: None,
                message: None,
                error: Some(message),
            }),
            other => other,
        }
    }
}

#[async_trait]
impl TouristApi for ApiClient {
    async fn tourist_ids(&self) -> ClientResult<TouristIds> {
        let req = self.request(Method::GET, "/get_tourist_ids");
        self.execute_as(req).await
    }

    async fn safety_alerts(&self) -> ClientResult<Vec<SafetyAlert>> {
        let req = self.request(Method::GET, "/get_safety_alerts");
        self.execute_as(req).await
    }

    async fn clear_safety_alerts(&self) -> ClientResult<()> {
        let req = self.request(Method::POST, "/clear_safety_alerts");
        self.execute(req).await.map(drop)
    }

    async fn live_statuses(&self) -> ClientResult<LiveStatuses> {
        let req = self.request(Method::GET, "/get_live_statuses");
        self.execute_as(req).await
    }

    async fn reset_simulation(&self) -> ClientResult<()> {
        let req = self.request(Method::GET, "/reset_simulation");
        self.execute(req).await.map(drop)
    }

    async fn get_path(
        &self,
        selection: &PathSelection,
        username: &str,
    ) -> ClientResult<PathResponse> {
        let body = PathRequest {
            tourist_id: &selection.tourist_id,
            path_type: selection.path_type,
            username,
        };
        let req = self.request(Method::POST, "/get_path").json(&body);
        self.execute_as(req).await
    }

    async fn update_location(&self, update: &LocationUpdate) -> ClientResult<()> {
        let req = self.request(Method::POST, "/update_location").json(update);
        self.execute(req).await.map(drop)
    }

    async fn predict(&self, request: &PredictRequest) -> ClientResult<Value> {
        debug!(
            "Predict for {} over {} points",
            request.tourist_id,
            request.path.len()
        );
        let req = self.request(Method::POST, "/predict").json(request);
        self.execute(req).await
    }

    async fn send_sos(&self, tourist_id: &str, position: PathPoint) -> ClientResult<()> {
        let body = SosRequest {
            tourist_id,
            lat: position.lat,
            lon: position.lon,
        };
        let req = self.request(Method::POST, "/sos").json(&body);
        self.execute(req).await.map(drop)
    }

    async fn resolve_sos(&self, tourist_id: &str) -> ClientResult<()> {
        let req = self
            .request(Method::POST, "/resolve_sos")
            .json(&TouristRef { tourist_id });
        self.execute(req).await.map(drop)
    }

    async fn tourist_logs(&self, tourist_id: &str) -> ClientResult<Vec<TouristLogEntry>> {
        let req = self.request(Method::GET, &format!("/get_logs/{}", tourist_id));
        self.execute_as(req).await
    }
}
