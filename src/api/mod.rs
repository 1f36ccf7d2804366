//! REST Service Bindings
//!
//! Frontend bindings to the food service, behind a trait so orchestration
//! can run against an in-memory fake.

mod error;
mod food;

use async_trait::async_trait;

use crate::models::{FoodDraft, FoodId, FoodItem};

pub use error::{ApiError, ApiResult};
pub use food::HttpFoodApi;

/// CRUD operations of the `/comidas` resource
#[async_trait(?Send)]
pub trait FoodApi {
    /// `GET /comidas`
    async fn list(&self) -> ApiResult<Vec<FoodItem>>;

    /// `POST /comidas`; the server assigns the id
    async fn create(&self, draft: &FoodDraft) -> ApiResult<FoodItem>;

    /// `PUT /comidas/{id}`; full replace of the editable fields
    async fn update(&self, id: FoodId, draft: &FoodDraft) -> ApiResult<FoodItem>;

    /// `DELETE /comidas/{id}`
    async fn delete(&self, id: FoodId) -> ApiResult<()>;
}
