//! Data models for the Munchies restaurant directory.
//!
//! This module contains the data structures for restaurants and category
//! filters as returned by the upstream API, plus the payload type stored
//! in the shared cache.

pub mod filter;
pub mod restaurant;

pub use filter::{Filter, FiltersResponse};
pub use restaurant::{Restaurant, RestaurantsResponse};

use serde::Serialize;

/// Payload stored in the shared cache.
///
/// The caller set is closed (two endpoints, two keys), so the cache holds
/// a tagged union of the known payload shapes rather than raw JSON.
/// Untagged serialization keeps the wire format identical to the upstream
/// response bodies.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CachedPayload {
    /// Body of the upstream `GET /restaurants` response
    Restaurants(RestaurantsResponse),

    /// Body of the upstream `GET /filter` response
    Filters(FiltersResponse),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_payload_serializes_untagged() {
        let payload = CachedPayload::Filters(FiltersResponse {
            filters: vec![Filter {
                id: "filter-1".to_string(),
                name: "Pizza".to_string(),
                image_url: "/images/pizza.png".to_string(),
            }],
        });

        let value = serde_json::to_value(&payload).unwrap();
        // No enum tag leaks into the JSON body
        assert!(value.get("filters").is_some());
        assert_eq!(value["filters"][0]["name"], "Pizza");
    }
}
