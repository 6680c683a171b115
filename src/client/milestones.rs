use crate::client::core::ModelerClient;
use crate::transport::Method;
use crate::types::{
    CreateMilestoneDto, MilestoneDto, MilestoneMetadataDto, MilestoneSearch, SearchResult,
};
use crate::Result;

impl ModelerClient {
    /// `POST /milestones`
    pub async fn create_milestone(
        &self,
        req: &CreateMilestoneDto,
    ) -> Result<Option<MilestoneMetadataDto>> {
        self.execute_json(Method::Post, "/milestones", req).await
    }

    /// `GET /milestones/{id}`
    pub async fn get_milestone(&self, milestone_id: &str) -> Result<Option<MilestoneDto>> {
        self.execute(Method::Get, &format!("/milestones/{}", milestone_id))
            .await
    }

    /// `DELETE /milestones/{id}`. Cannot be undone.
    pub async fn delete_milestone(&self, milestone_id: &str) -> Result<()> {
        self.execute::<serde_json::Value>(
            Method::Delete,
            &format!("/milestones/{}", milestone_id),
        )
        .await
        .map(|_| ())
    }

    /// Link to a visual diff of `compare_id` against the `baseline_id` milestone.
    ///
    /// `GET /milestones/compare/{baseline}...{compare}`. The body is returned
    /// as text without looking at the status code.
    pub async fn get_milestone_comparison(
        &self,
        baseline_id: &str,
        compare_id: &str,
    ) -> Result<String> {
        self.execute_text(
            Method::Get,
            &format!("/milestones/compare/{}...{}", baseline_id, compare_id),
        )
        .await
    }

    /// `POST /milestones/search`
    pub async fn search_milestones(
        &self,
        req: &MilestoneSearch,
    ) -> Result<Option<SearchResult<MilestoneMetadataDto>>> {
        self.execute_json(Method::Post, "/milestones/search", req)
            .await
    }
}
