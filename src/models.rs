//! Frontend Models
//!
//! Data structures matching the backend `beer` resource.

use serde::{Deserialize, Serialize};

/// Beer data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Beer {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    pub description: String,
    #[serde(default)]
    pub reviews: Vec<String>,
}

/// PATCH body for `/beers/{id}`; absent fields are left untouched by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BeerPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<&'a [String]>,
}

impl<'a> BeerPatch<'a> {
    pub fn description(text: &'a str) -> Self {
        Self { description: Some(text), ..Default::default() }
    }

    pub fn reviews(reviews: &'a [String]) -> Self {
        Self { reviews: Some(reviews), ..Default::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_beer_from_backend_json() {
        let beer: Beer = serde_json::from_value(json!({
            "id": 1,
            "name": "IPA",
            "image_url": "u1",
            "description": "hoppy",
            "reviews": ["great"]
        }))
        .unwrap();

        assert_eq!(beer.id, 1);
        assert_eq!(beer.reviews, vec!["great".to_string()]);
    }

    #[test]
    fn test_missing_reviews_default_to_empty() {
        let beer: Beer = serde_json::from_value(json!({
            "id": 2, "name": "Stout", "image_url": "u2", "description": "dark"
        }))
        .unwrap();
        assert!(beer.reviews.is_empty());
    }

    #[test]
    fn test_patch_carries_only_one_field() {
        let reviews = vec!["c".to_string(), "a".to_string()];

        let body = serde_json::to_value(BeerPatch::reviews(&reviews)).unwrap();
        assert_eq!(body, json!({ "reviews": ["c", "a"] }));

        let body = serde_json::to_value(BeerPatch::description("X")).unwrap();
        assert_eq!(body, json!({ "description": "X" }));
    }
}
