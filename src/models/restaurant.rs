//! Restaurant model as served by the upstream directory API.

use serde::{Deserialize, Serialize};

/// A restaurant listed in the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Restaurant {
    /// Unique identifier for the restaurant
    pub id: String,

    /// Display name
    pub name: String,

    /// Aggregate customer rating
    pub rating: f64,

    /// IDs of the category filters this restaurant belongs to
    pub filter_ids: Vec<String>,

    /// Path to the restaurant image on the upstream host
    pub image_url: String,

    /// Estimated delivery time in minutes
    pub delivery_time_minutes: u32,

    /// ID of the restaurant's price range bracket
    pub price_range_id: String,
}

/// Response wrapper for the upstream `GET /restaurants` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RestaurantsResponse {
    /// The list of restaurants
    pub restaurants: Vec<Restaurant>,
}
