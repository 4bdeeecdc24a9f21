use crate::listing::model::{Campaign, CampaignList};

/// Render target for the campaign listing.
pub trait CampaignListingView {
    fn display(&mut self, campaigns: CampaignList);
}

/// Listing screen state read by the renderer.
#[derive(Debug, Default)]
pub struct ListingView {
    pub campaigns: CampaignList,
    pub selected: usize,
    /// Whether `display` has been called since startup.
    pub loaded: bool,
}

impl ListingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_campaign(&self) -> Option<&Campaign> {
        self.campaigns.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.campaigns.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// First row to draw so the selection stays inside `visible` rows.
    pub fn window_start(&self, visible: usize) -> usize {
        if visible == 0 || self.selected < visible {
            0
        } else {
            self.selected + 1 - visible
        }
    }
}

impl CampaignListingView for ListingView {
    fn display(&mut self, campaigns: CampaignList) {
        if self.selected >= campaigns.len() {
            self.selected = campaigns.len().saturating_sub(1);
        }
        self.campaigns = campaigns;
        self.loaded = true;
    }
}
