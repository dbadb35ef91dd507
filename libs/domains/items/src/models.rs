use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Message returned after a successful delete
pub const ITEM_DELETED: &str = "Item deleted";

/// Item - the document stored in MongoDB and the request/response body
///
/// The store's `_id` is never part of this type. Documents read back from
/// the collection carry it, and serde drops it as an unknown field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Item {
    /// Item name, used as the lookup key
    #[schema(example = "widget")]
    pub name: String,
    /// Item description
    #[schema(example = "a widget")]
    pub description: String,
    /// Price, strictly greater than zero
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    #[schema(example = 9.99, exclusive_minimum = 0.0)]
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

/// Acknowledgement body for deletes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemDeleted {
    #[schema(example = "Item deleted")]
    pub message: String,
}

impl Default for ItemDeleted {
    fn default() -> Self {
        Self {
            message: ITEM_DELETED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_item_passes_validation() {
        let item = Item::new("widget", "a widget", 9.99);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_zero_price_fails_validation() {
        let item = Item::new("widget", "a widget", 0.0);
        let err = item.validate().unwrap_err();
        assert!(err.field_errors().contains_key("price"));
    }

    #[test]
    fn test_negative_price_fails_validation() {
        let item = Item::new("widget", "a widget", -1.5);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_tiny_positive_price_is_valid() {
        let item = Item::new("widget", "a widget", f64::MIN_POSITIVE);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_stored_id_is_ignored_on_deserialize() {
        let json = serde_json::json!({
            "_id": { "$oid": "65a1f0c2e4b0a1b2c3d4e5f6" },
            "name": "widget",
            "description": "a widget",
            "price": 9.99
        });
        let item: Item = serde_json::from_value(json).unwrap();
        assert_eq!(item, Item::new("widget", "a widget", 9.99));

        let out = serde_json::to_value(&item).unwrap();
        assert!(out.get("_id").is_none());
        assert_eq!(out.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = serde_json::json!({ "name": "widget", "price": 1.0 });
        assert!(serde_json::from_value::<Item>(json).is_err());
    }

    #[test]
    fn test_item_deleted_default_message() {
        let body = serde_json::to_value(ItemDeleted::default()).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Item deleted" }));
    }
}
