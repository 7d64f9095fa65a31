use mongodb::bson::{Bson, DateTime, oid::ObjectId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Status marker of a successful search envelope
pub const SUCCESS_STATUS: &str = "success";

/// Inventory item as stored in the `items` collection.
///
/// Items are written by the catalog service; this crate only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owner identifier; scopes which searches may return the item
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl Item {
    /// New item with a fresh ObjectId and creation timestamps set to now.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        let now = DateTime::now();
        Self {
            id: ObjectId::new(),
            name: name.into(),
            location: location.into(),
            room: None,
            category: None,
            quantity: None,
            notes: None,
            status: None,
            value: None,
            description: None,
            user_id: user_id.into(),
            date_added: Some(now),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

}

/// Decodes a field that is present in the document, keeping a stored null.
///
/// Paired with `#[serde(default)]` so a missing key stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// The projected subset of an item document read by the search path.
///
/// Projected fields hold whatever the document stores: `None` when the key
/// is missing, `Some(Bson::Null)` for a stored null, otherwise the raw value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemSummary {
    #[serde(rename = "_id")]
    pub id: Bson,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Bson>,
    #[serde(default, deserialize_with = "present")]
    pub location: Option<Bson>,
    #[serde(default, deserialize_with = "present")]
    pub room: Option<Bson>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Bson>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Bson>,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        let text = |value: &Option<String>| value.clone().map(Bson::String);
        Self {
            id: Bson::ObjectId(item.id),
            name: Some(Bson::String(item.name.clone())),
            location: Some(Bson::String(item.location.clone())),
            room: text(&item.room),
            category: text(&item.category),
            description: text(&item.description),
        }
    }
}

/// String form of a document key.
///
/// ObjectIds render as 24 hex characters and strings pass through; any
/// other BSON value uses its display form.
pub fn document_key(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        Bson::Int32(n) => n.to_string(),
        Bson::Int64(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// One search result.
///
/// `id` and `_id` always carry the same string key. The projected fields
/// are passed through as stored: a missing key is omitted and a stored
/// null is written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchHit {
    #[schema(example = "665f1c2b9a1e4a0012ab34cd")]
    pub id: String,
    #[serde(rename = "_id")]
    #[schema(example = "665f1c2b9a1e4a0012ab34cd")]
    pub key: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "Kitchen Table")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "Kitchen")]
    pub location: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub room: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub category: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,
}

impl From<ItemSummary> for SearchHit {
    fn from(summary: ItemSummary) -> Self {
        let key = document_key(&summary.id);
        let json = |value: Option<Bson>| value.map(Bson::into_relaxed_extjson);
        Self {
            id: key.clone(),
            key,
            name: json(summary.name),
            location: json(summary.location),
            room: json(summary.room),
            category: json(summary.category),
            description: json(summary.description),
        }
    }
}

/// Success envelope of `GET /search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    #[schema(example = "success")]
    pub status: String,
    /// The normalized query that was executed
    #[schema(example = "kitchen")]
    pub query: String,
    pub count: usize,
    pub results: Vec<SearchHit>,
}

impl SearchResponse {
    pub fn new(query: impl Into<String>, results: Vec<SearchHit>) -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            query: query.into(),
            count: results.len(),
            results,
        }
    }

    /// Envelope for a blank query; no lookup is made.
    pub fn empty() -> Self {
        Self::new("", Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};
    use serde_json::json;

    #[test]
    fn test_item_document_uses_catalog_field_names() {
        let item = Item::new("Kitchen Table", "Kitchen", "u1").with_room("Ground floor");
        let document = bson::to_document(&item).unwrap();

        assert!(document.get_object_id("_id").is_ok());
        assert_eq!(document.get_str("userId").unwrap(), "u1");
        assert_eq!(document.get_str("room").unwrap(), "Ground floor");
        assert!(document.get_datetime("dateAdded").is_ok());
        assert!(!document.contains_key("category"));
    }

    #[test]
    fn test_summary_keeps_missing_null_and_non_text_fields_apart() {
        let oid = ObjectId::new();
        let document = doc! { "_id": oid, "name": "Lamp", "room": null, "category": 5 };

        let summary: ItemSummary = bson::from_document(document).unwrap();
        assert_eq!(summary.id, Bson::ObjectId(oid));
        assert_eq!(summary.name, Some(Bson::String("Lamp".into())));
        assert_eq!(summary.room, Some(Bson::Null));
        assert_eq!(summary.category, Some(Bson::Int32(5)));
        assert_eq!(summary.location, None);
    }

    #[test]
    fn test_document_key_forms() {
        let oid = ObjectId::parse_str("665f1c2b9a1e4a0012ab34cd").unwrap();
        assert_eq!(document_key(&Bson::ObjectId(oid)), "665f1c2b9a1e4a0012ab34cd");
        assert_eq!(document_key(&Bson::String("sku-42".into())), "sku-42");
        assert_eq!(document_key(&Bson::Int32(7)), "7");
        assert_eq!(document_key(&Bson::Int64(9_000_000_000)), "9000000000");
    }

    #[test]
    fn test_search_hit_serializes_both_keys() {
        let oid = ObjectId::parse_str("665f1c2b9a1e4a0012ab34cd").unwrap();
        let item = Item {
            id: oid,
            ..Item::new("Kitchen Table", "Kitchen", "u1").with_category("Furniture")
        };
        let hit = SearchHit::from(ItemSummary::from(&item));

        assert_eq!(
            serde_json::to_value(&hit).unwrap(),
            json!({
                "id": "665f1c2b9a1e4a0012ab34cd",
                "_id": "665f1c2b9a1e4a0012ab34cd",
                "name": "Kitchen Table",
                "location": "Kitchen",
                "category": "Furniture"
            })
        );
    }

    #[test]
    fn test_search_hit_omits_missing_fields_and_keeps_nulls() {
        let document = doc! {
            "_id": "sku-42",
            "name": "Lamp",
            "location": null,
            "room": 5,
        };
        let summary: ItemSummary = bson::from_document(document).unwrap();
        let value = serde_json::to_value(SearchHit::from(summary)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "sku-42",
                "_id": "sku-42",
                "name": "Lamp",
                "location": null,
                "room": 5
            })
        );
        assert!(value.get("category").is_none());
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_search_hit_decodes_null_apart_from_missing() {
        let hit: SearchHit = serde_json::from_value(json!({
            "id": "a",
            "_id": "a",
            "name": "Lamp",
            "room": null
        }))
        .unwrap();

        assert_eq!(hit.name, Some(json!("Lamp")));
        assert_eq!(hit.room, Some(Value::Null));
        assert_eq!(hit.location, None);
    }

    #[test]
    fn test_empty_response_envelope() {
        assert_eq!(
            serde_json::to_value(SearchResponse::empty()).unwrap(),
            json!({ "status": "success", "query": "", "count": 0, "results": [] })
        );
    }
}
