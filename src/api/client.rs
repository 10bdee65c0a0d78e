use crate::api::models::{
    ApiErrorBody, AuthResponse, HealthResponse, LoginRequest, RegisterRequest, SubmitRequest,
    SubmitResponse,
};
use crate::config::resolver::Endpoint;
use crate::errors::{AppError, AppResult};
use crate::models::report::ReportRecord;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ReportClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl ReportClient {
    pub fn new(endpoint: Endpoint) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(REQUEST_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// `POST {base_url}`: submit a new report.
    pub async fn submit(&self, request: &SubmitRequest) -> AppResult<SubmitResponse> {
        let response = self
            .http
            .post(self.endpoint.base_url())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Api(status.as_u16(), error_detail(response).await));
        }

        Ok(response.json().await?)
    }

    /// `GET {base_url}/{device_id}`: records submitted by this device,
    /// newest first (server-side ordering).
    pub async fn records(&self, device_id: &str) -> AppResult<Vec<ReportRecord>> {
        let url = format!("{}/{}", self.endpoint.base_url(), device_id);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Api(status.as_u16(), error_detail(response).await));
        }

        Ok(response.json().await?)
    }

    /// `POST {root}/auth/login`. Any non-success status is reported as
    /// invalid credentials, which is all the server discloses.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthResponse> {
        let url = format!("{}/auth/login", self.endpoint.root_url());
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.http.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(AppError::InvalidCredentials);
        }

        Ok(response.json().await?)
    }

    /// `POST {root}/auth/register`.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AppResult<AuthResponse> {
        let url = format!("{}/auth/register", self.endpoint.root_url());
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Api(status.as_u16(), error_detail(response).await));
        }

        Ok(response.json().await?)
    }

    /// `GET {root}/health`.
    pub async fn health(&self) -> AppResult<HealthResponse> {
        let url = format!("{}/health", self.endpoint.root_url());
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Api(status.as_u16(), error_detail(response).await));
        }

        Ok(response.json().await?)
    }
}

/// Pull the `detail` field out of an error body, if there is one.
async fn error_detail(response: reqwest::Response) -> String {
    match response.json::<ApiErrorBody>().await {
        Ok(body) if !body.detail.is_empty() => body.detail,
        _ => "request rejected".to_string(),
    }
}
