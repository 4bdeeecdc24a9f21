/// A single campaign as shown in the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// Ordered campaigns, in the order the service returned them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignList(pub Vec<Campaign>);

impl CampaignList {
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        Self(campaigns)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Campaign> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Campaign> {
        self.0.iter()
    }
}

impl From<Vec<Campaign>> for CampaignList {
    fn from(campaigns: Vec<Campaign>) -> Self {
        Self(campaigns)
    }
}
