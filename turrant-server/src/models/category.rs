//! Blog category row from `blog_categories`

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields::opaque_id;

/// Read-only category; listed alphabetically by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn passes_through_extra_columns() {
        let cat: Category = serde_json::from_value(json!({
            "id": 3,
            "name": "Compliance",
            "slug": "compliance"
        }))
        .unwrap();
        assert_eq!(cat.id, "3");
        assert_eq!(cat.extra.get("slug"), Some(&json!("compliance")));
    }
}
