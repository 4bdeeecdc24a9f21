use crate::listing::model::CampaignList;
use crate::network::error::FetchError;
use crossterm::event::Event as CrosstermEvent;

/// Identifies one appearance of the listing screen.
pub type SessionId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A campaign fetch finished, successfully or not
    CampaignsFetched {
        session: SessionId,
        result: Result<CampaignList, FetchError>,
    },

    /// Tick for UI refresh
    Tick,
}
