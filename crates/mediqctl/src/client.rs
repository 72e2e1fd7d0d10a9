//! HTTP client for mediqd

use mediq_common::{
    ApiError, ChatReply, ChatRequest, DepartmentsResponse, HealthResponse, MediqError,
};

/// Default daemon address, matching mediqd's default bind
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7810";

/// Client for the mediqd HTTP API
pub struct DaemonClient {
    client: reqwest::Client,
    base_url: String,
}

impl DaemonClient {
    /// Base URL from MEDIQD_URL, or the default local bind
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MEDIQD_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the daemon answers at all
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/v1/health", self.base_url);
        self.client.get(&url).send().await.is_ok()
    }

    pub async fn health(&self) -> Result<HealthResponse, MediqError> {
        let url = format!("{}/v1/health", self.base_url);
        let resp = self.client.get(&url).send().await.map_err(|e| self.send_error(e))?;
        self.parse(resp).await
    }

    pub async fn chat(&self, message: &str, session_id: &str) -> Result<ChatReply, MediqError> {
        let url = format!("{}/v1/chat", self.base_url);
        let request = ChatRequest {
            message: message.to_string(),
            session_id: Some(session_id.to_string()),
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.send_error(e))?;
        self.parse(resp).await
    }

    pub async fn departments(&self) -> Result<DepartmentsResponse, MediqError> {
        let url = format!("{}/v1/departments", self.base_url);
        let resp = self.client.get(&url).send().await.map_err(|e| self.send_error(e))?;
        self.parse(resp).await
    }

    fn send_error(&self, e: reqwest::Error) -> MediqError {
        if e.is_connect() {
            MediqError::DaemonUnavailable(self.base_url.clone())
        } else {
            MediqError::Transport(e.to_string())
        }
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, MediqError> {
        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ApiError>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(MediqError::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| MediqError::Transport(e.to_string()))
    }
}
