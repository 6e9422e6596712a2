//! Category filter model as served by the upstream directory API.

use serde::{Deserialize, Serialize};

/// A category filter (e.g. "Hamburgers", "Pizza") restaurants belong to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Filter {
    /// Unique identifier for the filter
    pub id: String,

    /// Display name
    pub name: String,

    /// Path to the filter icon on the upstream host
    pub image_url: String,
}

/// Response wrapper for the upstream `GET /filter` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FiltersResponse {
    /// The list of filters
    pub filters: Vec<Filter>,
}
