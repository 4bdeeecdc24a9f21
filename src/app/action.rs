use crate::app::event::SessionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchCampaigns { session: SessionId },
    CancelFetch,
    Quit,
}
