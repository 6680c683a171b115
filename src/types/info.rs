use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `GET /info`: API version and what the current credentials may do.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_permission: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_permission: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_permission: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_permission: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
