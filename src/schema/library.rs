use super::enums::{Color, Order};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// `GET /api/library/info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryInfo {
    pub folders: Vec<LibraryFolder>,
    pub smart_folders: Vec<SmartFolder>,
    pub quick_access: Vec<QuickAccess>,
    pub tags_groups: Vec<TagsGroup>,
    pub modification_time: Number,
    pub application_version: String,
    pub library: LibraryLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryFolder {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub children: Vec<LibraryChildFolder>,
    pub modification_time: Number,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_tips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_increase: Option<bool>,
}

/// Second-level folder in the library metadata; its own children are opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryChildFolder {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub children: Vec<Value>,
    pub modification_time: Number,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_tips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_increase: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartFolder {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    // Smart folders report this as a string, unlike every other folder.
    pub modification_time: String,
    pub conditions: Vec<SmartFolderCondition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartFolderCondition {
    #[serde(rename = "match")]
    pub match_mode: String,
    pub rules: Vec<SmartFolderRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartFolderRule {
    pub method: String,
    pub property: String,
    pub value: Vec<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAccess {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagsGroup {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryLocation {
    pub path: String,
    pub name: String,
}
