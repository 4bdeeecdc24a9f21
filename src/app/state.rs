use crate::app::action::Action;
use crate::app::dialog::{Alert, DialogStack};
use crate::config::AppConfig;
use crate::listing::controller::{ListingController, ListingPhase};
use crate::listing::model::Campaign;
use crate::listing::view::ListingView;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Listing,
    Detail(Campaign),
}

pub struct AppState {
    pub screen: Screen,
    pub listing: ListingController,
    pub listing_view: ListingView,
    pub dialogs: DialogStack,
    pub dirty: bool,
    pub should_quit: bool,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let retry_alert = Alert {
            message: config.ui.retry_message.clone(),
            action_label: config.ui.retry_label.clone(),
        };
        Self {
            screen: Screen::Listing,
            listing: ListingController::new(retry_alert),
            listing_view: ListingView::new(),
            dialogs: DialogStack::new(),
            dirty: true,
            should_quit: false,
            tick_count: 0,
        }
    }

    /// Bring the listing to the front. Every call is a new appearance.
    pub fn show_listing(&mut self) -> Vec<Action> {
        self.screen = Screen::Listing;
        self.dirty = true;
        self.listing.appear(&mut self.dialogs)
    }

    pub fn show_detail(&mut self, campaign: Campaign) -> Vec<Action> {
        let actions = self.listing.teardown(&mut self.dialogs);
        self.screen = Screen::Detail(campaign);
        self.dirty = true;
        actions
    }

    pub fn status_line(&self) -> String {
        if self.screen != Screen::Listing {
            return String::new();
        }
        match self.listing.phase() {
            ListingPhase::Fetching { attempt, .. } => {
                let frame = SPINNER[(self.tick_count / 2) as usize % SPINNER.len()];
                if *attempt > 1 {
                    format!("{} Loading campaigns (attempt {})...", frame, attempt)
                } else {
                    format!("{} Loading campaigns...", frame)
                }
            }
            ListingPhase::PromptingRetry { .. } => "Offline".to_string(),
            // Failures stay silent; keep showing whatever was loaded before
            ListingPhase::Idle | ListingPhase::Displayed | ListingPhase::Failed => {
                if self.listing_view.loaded {
                    match self.listing_view.campaigns.len() {
                        1 => "1 campaign".to_string(),
                        n => format!("{} campaigns", n),
                    }
                } else {
                    String::new()
                }
            }
        }
    }
}
