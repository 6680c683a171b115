//! Collaborator DTOs.

use super::search::SearchRequest;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Permission level of a collaborator on a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaboratorRole {
    ProjectAdmin,
    Editor,
    Commenter,
    Viewer,
    #[serde(untagged)]
    Other(String),
}

/// Body of `PUT /collaborators`. Adding an existing collaborator updates
/// their role.
///
/// Only users of the authorized organization who have logged in to Web
/// Modeler at least once can be added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollaboratorDto {
    pub email: String,
    pub project_id: String,
    pub role: CollaboratorRole,
}

impl CreateCollaboratorDto {
    pub fn new(
        project_id: impl Into<String>,
        email: impl Into<String>,
        role: CollaboratorRole,
    ) -> Self {
        Self {
            email: email.into(),
            project_id: project_id.into(),
            role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCollaboratorDto {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<CollaboratorRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CollaboratorRole>,
}

pub type CollaboratorSearch = SearchRequest<CollaboratorFilter>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roles_use_snake_case_on_the_wire() {
        let dto = CreateCollaboratorDto::new("p-1", "ana@example.com", CollaboratorRole::ProjectAdmin);
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"email": "ana@example.com", "projectId": "p-1", "role": "project_admin"})
        );
    }
}
