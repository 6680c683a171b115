//! Shapes shared by several resources.

use super::file::FileMetadataDto;
use super::folder::FolderMetadataDto;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user as referenced by `createdBy` / `updatedBy`, and as a filter value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserDto {
    /// Reference to a user by email, e.g. for `createdBy` filters.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }
}

/// One step of a file's or folder's `canonicalPath`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathElementDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Direct children of a project or folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerContentDto {
    #[serde(default)]
    pub files: Vec<FileMetadataDto>,
    #[serde(default)]
    pub folders: Vec<FolderMetadataDto>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
