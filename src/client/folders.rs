use crate::client::core::ModelerClient;
use crate::transport::Method;
use crate::types::{CreateFolderDto, FolderDto, FolderMetadataDto, UpdateFolderDto};
use crate::Result;

impl ModelerClient {
    /// `POST /folders`
    pub async fn create_folder(&self, req: &CreateFolderDto) -> Result<Option<FolderMetadataDto>> {
        self.execute_json(Method::Post, "/folders", req).await
    }

    /// `GET /folders/{id}`
    pub async fn get_folder(&self, folder_id: &str) -> Result<Option<FolderDto>> {
        self.execute(Method::Get, &format!("/folders/{}", folder_id))
            .await
    }

    /// Delete an empty folder.
    ///
    /// `DELETE /folders/{id}`. A folder that still holds files is refused by
    /// the server. Cannot be undone.
    pub async fn delete_folder(&self, folder_id: &str) -> Result<()> {
        self.execute::<serde_json::Value>(Method::Delete, &format!("/folders/{}", folder_id))
            .await
            .map(|_| ())
    }

    /// Rename and/or move a folder.
    ///
    /// `PATCH /folders/{id}`
    pub async fn update_folder(
        &self,
        folder_id: &str,
        update: &UpdateFolderDto,
    ) -> Result<Option<FolderMetadataDto>> {
        self.execute_json(Method::Patch, &format!("/folders/{}", folder_id), update)
            .await
    }
}
