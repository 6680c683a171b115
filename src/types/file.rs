//! File DTOs.
//!
//! File content is opaque to the client: BPMN/DMN diagrams travel as XML
//! strings, forms and connector templates as JSON. Connector templates get a
//! little help because the server rewrites some of their fields.

use super::common::{PathElementDto, UserDto};
use super::search::SearchRequest;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `$schema` the server enforces on connector template content.
pub const CONNECTOR_TEMPLATE_SCHEMA_URL: &str =
    "https://unpkg.com/@camunda/zeebe-element-templates-json-schema/resources/schema.json";

/// Content keys the server manages for connector templates.
const SERVER_MANAGED_TEMPLATE_KEYS: [&str; 3] = ["$schema", "id", "version"];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    Bpmn,
    Dmn,
    Form,
    ConnectorTemplate,
    /// A type this client does not know yet, kept verbatim.
    #[serde(untagged)]
    Other(String),
}

/// Body of `POST /files`.
///
/// Give `project_id`, `folder_id`, or both. With only a folder the file lands
/// in that folder; with only a project it lands in the project root; with both
/// the folder must belong to the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    pub content: Value,
    pub file_type: FileType,
}

impl CreateFileDto {
    pub fn new(name: impl Into<String>, file_type: FileType, content: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            project_id: None,
            folder_id: None,
            content: content.into(),
            file_type,
        }
    }

    /// A connector template, normalised the way the server will store it:
    /// `$schema` is forced, `content.name` follows `name`, and `id`/`version`
    /// are dropped because the server assigns them.
    pub fn connector_template(name: impl Into<String>, content: Value) -> Result<Self> {
        let name = name.into();
        let Value::Object(mut object) = content else {
            return Err(Error::validation_with_context(
                "Connector template content must be a JSON object",
                ErrorContext::new()
                    .with_field_path("content")
                    .with_source("create_file"),
            ));
        };

        strip_server_managed(&mut object);
        object.insert(
            "$schema".to_string(),
            Value::String(CONNECTOR_TEMPLATE_SCHEMA_URL.to_string()),
        );
        object.insert("name".to_string(), Value::String(name.clone()));

        Ok(Self::new(name, FileType::ConnectorTemplate, Value::Object(object)))
    }

    pub fn in_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn in_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }
}

/// Body of `PATCH /files/{id}`.
///
/// `revision` must be the revision the caller last saw; the server answers
/// 409 when the file has moved on since.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFileDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    pub revision: u64,
}

impl UpdateFileDto {
    pub fn new(revision: u64) -> Self {
        Self {
            name: None,
            project_id: None,
            folder_id: None,
            content: None,
            revision,
        }
    }

    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn move_to_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn move_to_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<Value>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Connector template content without the keys clients may not update.
    /// If [`rename`](Self::rename) was called first, `content.name` follows it.
    pub fn with_connector_template_content(mut self, content: Value) -> Self {
        let content = match content {
            Value::Object(mut object) => {
                strip_server_managed(&mut object);
                if let Some(name) = &self.name {
                    object.insert("name".to_string(), Value::String(name.clone()));
                }
                Value::Object(object)
            }
            other => other,
        };
        self.content = Some(content);
        self
    }
}

fn strip_server_managed(object: &mut Map<String, Value>) {
    for key in SERVER_MANAGED_TEMPLATE_KEYS {
        object.remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadataDto {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    /// Slash-separated location; see [`crate::path`] for the escaping rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_path: Option<Vec<PathElementDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<UserDto>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDto {
    pub metadata: FileMetadataDto,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub content: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields a file search can match on. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple_path: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
    /// Accepts relative suffixes, see [`super::search::date_within`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<UserDto>,
}

pub type FileSearch = SearchRequest<FileFilter>;
