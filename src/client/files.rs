use crate::client::core::ModelerClient;
use crate::transport::Method;
use crate::types::{
    CreateFileDto, FileDto, FileMetadataDto, FileSearch, SearchResult, UpdateFileDto,
};
use crate::Result;

impl ModelerClient {
    /// Create a file.
    ///
    /// `POST /files`. For connector templates the server rewrites `$schema`,
    /// `content.name`, `id` and `version`; see [`CreateFileDto::connector_template`].
    pub async fn create_file(&self, req: &CreateFileDto) -> Result<Option<FileMetadataDto>> {
        self.execute_json(Method::Post, "/files", req).await
    }

    /// `GET /files/{id}`
    pub async fn get_file(&self, file_id: &str) -> Result<Option<FileDto>> {
        self.execute(Method::Get, &format!("/files/{}", file_id))
            .await
    }

    /// Delete a file.
    ///
    /// `DELETE /files/{id}`. Comments, call activity/business rule task links,
    /// milestones and shares attached to the file go with it. Cannot be undone.
    pub async fn delete_file(&self, file_id: &str) -> Result<()> {
        self.execute::<serde_json::Value>(Method::Delete, &format!("/files/{}", file_id))
            .await
            .map(|_| ())
    }

    /// Update content, name or location of a file.
    ///
    /// `PATCH /files/{id}`. A stale `revision` is rejected with 409.
    pub async fn update_file(
        &self,
        file_id: &str,
        update: &UpdateFileDto,
    ) -> Result<Option<FileMetadataDto>> {
        self.execute_json(Method::Patch, &format!("/files/{}", file_id), update)
            .await
    }

    /// `POST /files/search`
    pub async fn search_files(
        &self,
        req: &FileSearch,
    ) -> Result<Option<SearchResult<FileMetadataDto>>> {
        self.execute_json(Method::Post, "/files/search", req).await
    }
}
