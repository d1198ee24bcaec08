use crate::domain::model::Generated;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Which grounding tool the generation service should run with. The adapter
/// also keys its model choice off this, since the hosted API pairs grounded
/// search and maps lookups with different models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundingTool {
    WebSearch,
    Maps,
}

/// The generation service, treated as an opaque text-in/text-out black box.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, grounding: GroundingTool) -> Result<Generated>;
}

/// Where finished reports land. Reading is out of scope: nothing in the
/// planner consumes its own output.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn trip_model(&self) -> &str;
    fn place_model(&self) -> &str;
    fn output_path(&self) -> &str;
}
