use crate::client::core::ModelerClient;
use crate::transport::Method;
use crate::types::{ProjectDto, ProjectMetadataDto, ProjectSearch, SearchResult};
use crate::Result;
use serde::Serialize;

#[derive(Serialize)]
struct ProjectName<'a> {
    name: &'a str,
}

impl ModelerClient {
    /// Create a project.
    ///
    /// `POST /projects`. The project starts without collaborators and so is
    /// not visible in the Web Modeler UI until one is added with
    /// [`add_collaborator`](Self::add_collaborator).
    pub async fn create_project(&self, name: &str) -> Result<Option<ProjectMetadataDto>> {
        self.execute_json(Method::Post, "/projects", &ProjectName { name })
            .await
    }

    /// `GET /projects/{id}`
    pub async fn get_project(&self, project_id: &str) -> Result<Option<ProjectDto>> {
        self.execute(Method::Get, &format!("/projects/{}", project_id))
            .await
    }

    /// Delete an empty project (one without files).
    ///
    /// `DELETE /projects/{id}`. Cannot be undone.
    pub async fn delete_project(&self, project_id: &str) -> Result<()> {
        self.execute::<serde_json::Value>(Method::Delete, &format!("/projects/{}", project_id))
            .await
            .map(|_| ())
    }

    /// `PATCH /projects/{id}`
    pub async fn rename_project(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<Option<ProjectMetadataDto>> {
        self.execute_json(
            Method::Patch,
            &format!("/projects/{}", project_id),
            &ProjectName { name },
        )
        .await
    }

    /// `POST /projects/search`
    pub async fn search_projects(
        &self,
        req: &ProjectSearch,
    ) -> Result<Option<SearchResult<ProjectMetadataDto>>> {
        self.execute_json(Method::Post, "/projects/search", req).await
    }
}
