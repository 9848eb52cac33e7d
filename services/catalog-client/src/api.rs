//! HTTP gateway to the catalog API. All backend communication goes through here.

use common::{GameDetails, GamePayload, GameSummary, Genre};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub const DEFAULT_API_URL: &str = "http://localhost:5055";

#[derive(Debug, Clone)]
pub struct ApiService {
    client: Client,
    base_url: String,
}

impl ApiService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_games(&self) -> Result<Vec<GameSummary>, ApiError> {
        let response = self.send(Method::GET, "/games", None).await?;
        decode(response).await
    }

    pub async fn get_game(&self, id: i64) -> Result<GameDetails, ApiError> {
        let response = self.send(Method::GET, &format!("/games/{}", id), None).await?;
        decode(response).await
    }

    pub async fn create_game(&self, game: &GamePayload) -> Result<GameDetails, ApiError> {
        let response = self.send(Method::POST, "/games", Some(game)).await?;
        decode(response).await
    }

    pub async fn update_game(&self, id: i64, game: &GamePayload) -> Result<(), ApiError> {
        self.send(Method::PUT, &format!("/games/{}", id), Some(game))
            .await?;
        Ok(())
    }

    pub async fn delete_game(&self, id: i64) -> Result<(), ApiError> {
        self.send(Method::DELETE, &format!("/games/{}", id), None)
            .await?;
        Ok(())
    }

    pub async fn get_genres(&self) -> Result<Vec<Genre>, ApiError> {
        let response = self.send(Method::GET, "/genres", None).await?;
        decode(response).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&GamePayload>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "api request");

        let mut request = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let bytes = response.bytes().await.map_err(ApiError::from_transport)?;
        let err = ApiError::from_response(status.as_u16(), &bytes);
        tracing::debug!(status = status.as_u16(), kind = ?err.kind, "api error");
        Err(err)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    response.json::<T>().await.map_err(|e| {
        tracing::warn!(error = %e, "unreadable response body");
        ApiError::unexpected(Some(status))
    })
}
