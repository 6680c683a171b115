use crate::client::core::ModelerClient;
use crate::transport::Method;
use crate::types::InfoDto;
use crate::Result;

impl ModelerClient {
    /// `GET /info`
    pub async fn get_info(&self) -> Result<Option<InfoDto>> {
        self.execute(Method::Get, "/info").await
    }
}
