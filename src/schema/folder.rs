//! Folder shapes. Each folder endpoint returns a slightly different view of
//! the same entity, so each gets its own type.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Tree layout hints Eagle attaches to folders it has rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderStyles {
    pub depth: Number,
    pub first: bool,
    pub last: bool,
}

/// A nested folder. Children are folders of the same shape, to any depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildFolder {
    pub id: String,
    pub name: String,
    pub images: Vec<Value>,
    pub folders: Vec<Value>,
    pub modification_time: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_mappings: Option<Value>,
    pub tags: Vec<String>,
    pub children: Vec<ChildFolder>,
    pub is_expand: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vstype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<FolderStyles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<Number>,
    #[serde(rename = "$$hashKey", skip_serializing_if = "Option::is_none")]
    pub hash_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_folder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_count: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descendant_image_count: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extend_tags: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub covers: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// `POST /api/folder/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedFolder {
    pub id: String,
    pub name: String,
    pub images: Vec<Value>,
    pub folders: Vec<Value>,
    pub modification_time: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_mappings: Option<Value>,
    pub tags: Vec<String>,
    pub children: Vec<Value>,
    pub is_expand: bool,
}

/// `POST /api/folder/rename`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamedFolder {
    pub id: String,
    pub name: String,
    pub images: Vec<Value>,
    pub folders: Vec<Value>,
    pub modification_time: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_mappings: Option<Value>,
    pub tags: Vec<String>,
    pub children: Vec<ChildFolder>,
    pub is_expand: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vstype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<FolderStyles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(rename = "$$hashKey", skip_serializing_if = "Option::is_none")]
    pub hash_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_folder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
}

/// `POST /api/folder/update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedFolder {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub images: Vec<Value>,
    pub folders: Vec<Value>,
    pub modification_time: Number,
    // Singular on this endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_mapping: Option<Value>,
    pub tags: Vec<String>,
    pub children: Vec<ChildFolder>,
    pub is_expand: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vstype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<FolderStyles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(rename = "$$hashKey", skip_serializing_if = "Option::is_none")]
    pub hash_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
}

/// Top-level entry of `GET /api/folder/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub children: Vec<ChildFolder>,
    pub modification_time: Number,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_count: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descendant_image_count: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extend_tags: Option<Vec<String>>,
}

/// Entry of `GET /api/folder/listRecent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFolder {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub children: Vec<ChildFolder>,
    pub modification_time: Number,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_tips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_expand: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_folder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_mappings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_count: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descendant_image_count: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extend_tags: Option<Vec<String>>,
}
