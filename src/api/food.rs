//! reqwest-backed `FoodApi`. On wasm32 reqwest goes through the browser's `fetch`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, FoodApi};
use crate::models::{FoodDraft, FoodId, FoodItem};

/// HTTP client for the food service
#[derive(Clone, Debug)]
pub struct HttpFoodApi {
    client: Client,
    base_url: String,
}

impl HttpFoodApi {
    /// Create a client rooted at `base_url` (e.g. `http://localhost:8080`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/comidas", self.base_url)
    }

    fn item_url(&self, id: FoodId) -> String {
        format!("{}/comidas/{}", self.base_url, id)
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("[api] service returned {}", status);
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl FoodApi for HttpFoodApi {
    async fn list(&self) -> ApiResult<Vec<FoodItem>> {
        let url = self.collection_url();
        log::debug!("[api] GET {}", url);
        self.send_json(self.client.get(&url)).await
    }

    async fn create(&self, draft: &FoodDraft) -> ApiResult<FoodItem> {
        let url = self.collection_url();
        log::debug!("[api] POST {}", url);
        self.send_json(self.client.post(&url).json(draft)).await
    }

    async fn update(&self, id: FoodId, draft: &FoodDraft) -> ApiResult<FoodItem> {
        let url = self.item_url(id);
        log::debug!("[api] PUT {}", url);
        self.send_json(self.client.put(&url).json(&draft.with_id(id))).await
    }

    async fn delete(&self, id: FoodId) -> ApiResult<()> {
        let url = self.item_url(id);
        log::debug!("[api] DELETE {}", url);
        // Any response body is ignored
        self.send(self.client.delete(&url)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let api = HttpFoodApi::new("http://localhost:8080/");
        assert_eq!(api.collection_url(), "http://localhost:8080/comidas");
        assert_eq!(api.item_url(42), "http://localhost:8080/comidas/42");
    }
}
