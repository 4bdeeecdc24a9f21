use crate::listing::model::CampaignList;
use crate::network::error::FetchError;
use crate::network::request::CampaignListingRequest;
use async_trait::async_trait;

/// Source of campaign listings.
#[async_trait]
pub trait NetworkingService: Send + Sync {
    async fn list_campaigns(
        &self,
        request: CampaignListingRequest,
    ) -> Result<CampaignList, FetchError>;
}
