//! Frontend Models
//!
//! Data structures matching the REST service's JSON.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned food identifier
pub type FoodId = u64;

/// Food item as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Price as text, e.g. "10.50"
    #[serde(rename = "precio", deserialize_with = "text_or_number")]
    pub price: String,
    /// Calorie count as text, e.g. "500"
    #[serde(rename = "calorias", deserialize_with = "text_or_number")]
    pub calories: String,
}

impl FoodItem {
    /// The editable fields of this item
    pub fn draft(&self) -> FoodDraft {
        FoodDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            calories: self.calories.clone(),
        }
    }
}

/// The four editable fields, without an id (POST body)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: String,
    #[serde(rename = "calorias")]
    pub calories: String,
}

impl FoodDraft {
    /// Full record for a PUT body
    pub fn with_id(&self, id: FoodId) -> FoodItem {
        FoodItem {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            calories: self.calories.clone(),
        }
    }
}

/// Servers may send `precio`/`calorias` either as strings or as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    })
}
