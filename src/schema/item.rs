use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One dominant color of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub color: Vec<Number>,
    pub ratio: Number,
    #[serde(rename = "$$hashKey", skip_serializing_if = "Option::is_none")]
    pub hash_key: Option<String>,
}

/// A library item as returned by item info, item list and item update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub size: Number,
    pub ext: String,
    pub tags: Vec<String>,
    pub folders: Vec<String>,
    pub is_deleted: bool,
    pub url: String,
    pub annotation: String,
    pub modification_time: Number,
    pub width: Number,
    pub height: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_thumbnail: Option<bool>,
    pub last_modified: Number,
    pub palettes: Vec<Palette>,
}

impl Item {
    pub fn has_tags(&self, tags: &[String]) -> bool {
        tags.iter().all(|tag| self.tags.contains(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item_json() -> serde_json::Value {
        json!({
            "id": "LRK3AQGN7VCB1",
            "name": "hero-1",
            "size": 102400,
            "ext": "webp",
            "tags": ["hero", "website"],
            "folders": ["KBJ8Z60O88VMG"],
            "isDeleted": false,
            "url": "https://example.test/hero-1.webp",
            "annotation": "",
            "modificationTime": 1700000000000_i64,
            "width": 1920,
            "height": 1080,
            "lastModified": 1700000000500_i64,
            "palettes": [
                {"color": [255, 250, 240], "ratio": 61.5, "$$hashKey": "object:1"},
                {"color": [12, 34, 56], "ratio": 20.25}
            ]
        })
    }

    #[test]
    fn test_item_round_trip() {
        let value = item_json();
        let item: Item = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(item.palettes.len(), 2);
        assert_eq!(item.palettes[0].hash_key.as_deref(), Some("object:1"));
        assert_eq!(serde_json::to_value(&item).unwrap(), value);
    }

    #[test]
    fn test_item_missing_required_field() {
        let mut value = item_json();
        value.as_object_mut().unwrap().remove("lastModified");
        let err = serde_json::from_value::<Item>(value).unwrap_err();
        assert!(err.to_string().contains("lastModified"));
    }

    #[test]
    fn test_item_keeps_fractional_and_negative_numbers() {
        let mut value = item_json();
        value["ext"] = json!("svg");
        value["width"] = json!(512.5);
        value["height"] = json!(300);
        value["size"] = json!(-1);
        value["palettes"][1]["color"] = json!([12.5, 34, 56]);

        let item: Item = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(item.width.as_f64(), Some(512.5));
        assert_eq!(item.size.as_i64(), Some(-1));
        assert_eq!(serde_json::to_value(&item).unwrap(), value);
    }

    #[test]
    fn test_item_rejects_non_numeric_dimensions() {
        let mut value = item_json();
        value["width"] = json!("1920");
        assert!(serde_json::from_value::<Item>(value).is_err());
    }

    #[test]
    fn test_item_has_tags() {
        let item: Item = serde_json::from_value(item_json()).unwrap();
        assert!(item.has_tags(&["hero".to_string()]));
        assert!(item.has_tags(&[]));
        assert!(!item.has_tags(&["hero".to_string(), "missing".to_string()]));
    }
}
