/// Request for the full campaign listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignListingRequest {
    /// Endpoint path, relative to the service's base URL.
    pub path: String,
}

impl CampaignListingRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
