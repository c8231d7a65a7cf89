//! Serde helpers for columns whose wire shape depends on the table definition

use serde::{Deserialize, Deserializer};

/// Store-assigned identifiers arrive as uuid strings or serial integers.
/// Both are kept as opaque text.
pub fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Text(s) => Ok(s),
        RawId::Number(n) => Ok(n.to_string()),
    }
}

/// Nullable column read into a non-optional field: `null` becomes the
/// type's default (`false`, `""`).
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "opaque_id")]
        id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        live: bool,
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
    }

    #[test]
    fn ids_accept_text_and_numbers() {
        let row: Row = serde_json::from_value(json!({"id": "9f1c"})).unwrap();
        assert_eq!(row.id, "9f1c");
        let row: Row = serde_json::from_value(json!({"id": 42})).unwrap();
        assert_eq!(row.id, "42");
    }

    #[test]
    fn null_columns_fall_back_to_default() {
        let row: Row =
            serde_json::from_value(json!({"id": "x", "live": null, "name": null})).unwrap();
        assert!(!row.live);
        assert_eq!(row.name, "");

        let row: Row = serde_json::from_value(json!({"id": "x"})).unwrap();
        assert!(!row.live);

        let row: Row =
            serde_json::from_value(json!({"id": "x", "live": true, "name": "a"})).unwrap();
        assert!(row.live);
        assert_eq!(row.name, "a");
    }

    #[test]
    fn wrong_type_is_still_rejected() {
        let res: Result<Row, _> = serde_json::from_value(json!({"id": "x", "live": "yes"}));
        assert!(res.is_err());
    }
}
