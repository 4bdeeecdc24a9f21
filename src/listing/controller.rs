//! Fetch, display and retry cycle of the campaign listing screen.
//!
//! Each appearance of the screen opens a session. The controller asks for a
//! fetch, then reacts to the outcome: a list goes to the view, a connectivity
//! failure puts up a retry alert, anything else ends the session quietly.
//! Outcomes from sessions other than the current one are dropped, which keeps
//! a torn-down screen from being updated by a fetch that was already queued.

use crate::app::action::Action;
use crate::app::dialog::{Alert, DialogHost, DialogId};
use crate::app::event::SessionId;
use crate::listing::model::CampaignList;
use crate::listing::view::CampaignListingView;
use crate::network::error::FetchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingPhase {
    Idle,
    Fetching {
        session: SessionId,
        attempt: u32,
    },
    Displayed,
    PromptingRetry {
        session: SessionId,
        dialog: DialogId,
        attempt: u32,
    },
    Failed,
}

pub struct ListingController {
    retry_alert: Alert,
    next_session: SessionId,
    phase: ListingPhase,
}

impl ListingController {
    pub fn new(retry_alert: Alert) -> Self {
        Self {
            retry_alert,
            next_session: 0,
            phase: ListingPhase::Idle,
        }
    }

    pub fn phase(&self) -> &ListingPhase {
        &self.phase
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.phase, ListingPhase::Fetching { .. })
    }

    /// The alert currently owned by the retry prompt, if any.
    pub fn retry_dialog(&self) -> Option<DialogId> {
        match self.phase {
            ListingPhase::PromptingRetry { dialog, .. } => Some(dialog),
            _ => None,
        }
    }

    /// The screen became visible. Starts a fresh session.
    pub fn appear(&mut self, dialogs: &mut dyn DialogHost) -> Vec<Action> {
        let mut actions = self.teardown(dialogs);
        self.next_session += 1;
        let session = self.next_session;
        tracing::debug!(session, "listing appeared");
        self.phase = ListingPhase::Fetching {
            session,
            attempt: 1,
        };
        actions.push(Action::FetchCampaigns { session });
        actions
    }

    pub fn handle_response(
        &mut self,
        session: SessionId,
        result: Result<CampaignList, FetchError>,
        view: &mut dyn CampaignListingView,
        dialogs: &mut dyn DialogHost,
    ) {
        let attempt = match self.phase {
            ListingPhase::Fetching {
                session: current,
                attempt,
            } if current == session => attempt,
            _ => {
                tracing::debug!(session, phase = ?self.phase, "ignoring stale fetch outcome");
                return;
            }
        };

        match result {
            Ok(campaigns) => {
                tracing::info!(session, attempt, count = campaigns.len(), "campaigns loaded");
                view.display(campaigns);
                self.phase = ListingPhase::Displayed;
            }
            Err(e) if e.is_connectivity() => {
                tracing::info!(session, attempt, error = %e, "offline, prompting for retry");
                let dialog = dialogs.present(self.retry_alert.clone());
                self.phase = ListingPhase::PromptingRetry {
                    session,
                    dialog,
                    attempt,
                };
            }
            Err(e) => {
                // Not recoverable from this screen; the user sees nothing
                tracing::warn!(session, attempt, error = %e, "campaign fetch failed, giving up");
                self.phase = ListingPhase::Failed;
            }
        }
    }

    /// The retry alert's action was chosen.
    pub fn confirm_retry(&mut self, dialog: DialogId, dialogs: &mut dyn DialogHost) -> Vec<Action> {
        match self.phase {
            ListingPhase::PromptingRetry {
                session,
                dialog: open,
                attempt,
            } if open == dialog => {
                dialogs.dismiss(dialog);
                let attempt = attempt.saturating_add(1);
                tracing::debug!(session, attempt, "retrying campaign fetch");
                self.phase = ListingPhase::Fetching { session, attempt };
                vec![Action::FetchCampaigns { session }]
            }
            _ => vec![],
        }
    }

    /// The retry alert was closed without choosing its action.
    pub fn dismiss_retry(&mut self, dialog: DialogId, dialogs: &mut dyn DialogHost) {
        if let ListingPhase::PromptingRetry {
            session,
            dialog: open,
            ..
        } = self.phase
        {
            if open == dialog {
                dialogs.dismiss(dialog);
                tracing::debug!(session, "retry declined");
                self.phase = ListingPhase::Failed;
            }
        }
    }

    /// The screen is going away. Cancels the fetch and closes the alert.
    pub fn teardown(&mut self, dialogs: &mut dyn DialogHost) -> Vec<Action> {
        let actions = match self.phase {
            ListingPhase::Fetching { session, .. } => {
                tracing::debug!(session, "listing torn down mid-fetch");
                vec![Action::CancelFetch]
            }
            ListingPhase::PromptingRetry { session, dialog, .. } => {
                tracing::debug!(session, "listing torn down while prompting");
                dialogs.dismiss(dialog);
                vec![]
            }
            _ => vec![],
        };
        self.phase = ListingPhase::Idle;
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::model::Campaign;
    use std::collections::BTreeSet;

    #[derive(Default)]
    struct RecordingView {
        displayed: Vec<CampaignList>,
    }

    impl CampaignListingView for RecordingView {
        fn display(&mut self, campaigns: CampaignList) {
            self.displayed.push(campaigns);
        }
    }

    #[derive(Default)]
    struct RecordingDialogs {
        presented: Vec<Alert>,
        open: BTreeSet<DialogId>,
        next: DialogId,
    }

    impl DialogHost for RecordingDialogs {
        fn present(&mut self, alert: Alert) -> DialogId {
            self.next += 1;
            self.presented.push(alert);
            self.open.insert(self.next);
            self.next
        }

        fn dismiss(&mut self, id: DialogId) {
            self.open.remove(&id);
        }
    }

    fn controller() -> ListingController {
        ListingController::new(Alert {
            message: "Check your connection".into(),
            action_label: "retry".into(),
        })
    }

    fn campaigns() -> CampaignList {
        CampaignList::new(vec![Campaign {
            name: "Spring".into(),
            description: "Fresh".into(),
            image_url: None,
        }])
    }

    fn offline() -> FetchError {
        FetchError::NoInternetConnection("connection refused".into())
    }

    fn fetch_session(actions: &[Action]) -> SessionId {
        match actions.last() {
            Some(Action::FetchCampaigns { session }) => *session,
            other => panic!("expected a fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_appear_issues_one_fetch() {
        let mut ctl = controller();
        let mut dialogs = RecordingDialogs::default();
        let actions = ctl.appear(&mut dialogs);
        assert_eq!(actions.len(), 1);
        assert!(ctl.is_fetching());
    }

    #[test]
    fn test_success_displays_once() {
        let mut ctl = controller();
        let mut view = RecordingView::default();
        let mut dialogs = RecordingDialogs::default();

        let session = fetch_session(&ctl.appear(&mut dialogs));
        ctl.handle_response(session, Ok(campaigns()), &mut view, &mut dialogs);

        assert_eq!(view.displayed, vec![campaigns()]);
        assert_eq!(ctl.phase(), &ListingPhase::Displayed);
        assert!(dialogs.presented.is_empty());

        // A duplicate outcome is not displayed again
        ctl.handle_response(session, Ok(campaigns()), &mut view, &mut dialogs);
        assert_eq!(view.displayed.len(), 1);
    }

    #[test]
    fn test_offline_then_confirm_retries_once() {
        let mut ctl = controller();
        let mut view = RecordingView::default();
        let mut dialogs = RecordingDialogs::default();

        let session = fetch_session(&ctl.appear(&mut dialogs));
        ctl.handle_response(session, Err(offline()), &mut view, &mut dialogs);
        assert_eq!(dialogs.presented.len(), 1);
        assert_eq!(dialogs.presented[0].action_label, "retry");
        let dialog = ctl.retry_dialog().unwrap();

        let actions = ctl.confirm_retry(dialog, &mut dialogs);
        assert_eq!(actions, vec![Action::FetchCampaigns { session }]);
        assert!(dialogs.open.is_empty());
        assert_eq!(
            ctl.phase(),
            &ListingPhase::Fetching {
                session,
                attempt: 2
            }
        );

        // The same alert cannot fire twice
        assert!(ctl.confirm_retry(dialog, &mut dialogs).is_empty());

        ctl.handle_response(session, Ok(campaigns()), &mut view, &mut dialogs);
        assert_eq!(view.displayed.len(), 1);
        assert_eq!(dialogs.presented.len(), 1);
    }

    #[test]
    fn test_offline_then_dismiss_ends_cycle() {
        let mut ctl = controller();
        let mut view = RecordingView::default();
        let mut dialogs = RecordingDialogs::default();

        let session = fetch_session(&ctl.appear(&mut dialogs));
        ctl.handle_response(session, Err(offline()), &mut view, &mut dialogs);
        let dialog = ctl.retry_dialog().unwrap();

        ctl.dismiss_retry(dialog, &mut dialogs);
        assert_eq!(ctl.phase(), &ListingPhase::Failed);
        assert!(dialogs.open.is_empty());
        assert!(ctl.confirm_retry(dialog, &mut dialogs).is_empty());
        assert!(view.displayed.is_empty());
    }

    #[test]
    fn test_other_errors_fail_silently() {
        for error in [
            FetchError::Http { status: 500 },
            FetchError::Decode("eof".into()),
            FetchError::Transport("tls".into()),
        ] {
            let mut ctl = controller();
            let mut view = RecordingView::default();
            let mut dialogs = RecordingDialogs::default();

            let session = fetch_session(&ctl.appear(&mut dialogs));
            ctl.handle_response(session, Err(error), &mut view, &mut dialogs);

            assert_eq!(ctl.phase(), &ListingPhase::Failed);
            assert!(dialogs.presented.is_empty());
            assert!(view.displayed.is_empty());
            assert_eq!(ctl.retry_dialog(), None);
        }
    }

    #[test]
    fn test_teardown_mid_fetch_cancels_and_drops_late_outcome() {
        let mut ctl = controller();
        let mut view = RecordingView::default();
        let mut dialogs = RecordingDialogs::default();

        let session = fetch_session(&ctl.appear(&mut dialogs));
        assert_eq!(ctl.teardown(&mut dialogs), vec![Action::CancelFetch]);
        assert_eq!(ctl.phase(), &ListingPhase::Idle);

        ctl.handle_response(session, Ok(campaigns()), &mut view, &mut dialogs);
        ctl.handle_response(session, Err(offline()), &mut view, &mut dialogs);
        assert!(view.displayed.is_empty());
        assert!(dialogs.presented.is_empty());
    }

    #[test]
    fn test_teardown_dismisses_pending_prompt() {
        let mut ctl = controller();
        let mut view = RecordingView::default();
        let mut dialogs = RecordingDialogs::default();

        let session = fetch_session(&ctl.appear(&mut dialogs));
        ctl.handle_response(session, Err(offline()), &mut view, &mut dialogs);
        let dialog = ctl.retry_dialog().unwrap();

        assert!(ctl.teardown(&mut dialogs).is_empty());
        assert!(dialogs.open.is_empty());
        assert!(ctl.confirm_retry(dialog, &mut dialogs).is_empty());
    }

    #[test]
    fn test_reappear_ignores_previous_session() {
        let mut ctl = controller();
        let mut view = RecordingView::default();
        let mut dialogs = RecordingDialogs::default();

        let first = fetch_session(&ctl.appear(&mut dialogs));
        let actions = ctl.appear(&mut dialogs);
        assert_eq!(actions[0], Action::CancelFetch);
        let second = fetch_session(&actions);
        assert_ne!(first, second);

        ctl.handle_response(first, Ok(campaigns()), &mut view, &mut dialogs);
        assert!(view.displayed.is_empty());
        ctl.handle_response(second, Ok(campaigns()), &mut view, &mut dialogs);
        assert_eq!(view.displayed.len(), 1);
    }

    #[test]
    fn test_retries_without_limit() {
        let mut ctl = controller();
        let mut view = RecordingView::default();
        let mut dialogs = RecordingDialogs::default();

        let session = fetch_session(&ctl.appear(&mut dialogs));
        for round in 1..=50u32 {
            ctl.handle_response(session, Err(offline()), &mut view, &mut dialogs);
            let dialog = ctl.retry_dialog().unwrap();
            let actions = ctl.confirm_retry(dialog, &mut dialogs);
            assert_eq!(actions, vec![Action::FetchCampaigns { session }]);
            assert_eq!(
                ctl.phase(),
                &ListingPhase::Fetching {
                    session,
                    attempt: round + 1
                }
            );
        }
        assert_eq!(dialogs.presented.len(), 50);
        assert!(dialogs.open.is_empty());

        ctl.handle_response(session, Ok(campaigns()), &mut view, &mut dialogs);
        assert_eq!(view.displayed.len(), 1);
    }

    #[test]
    fn test_attempt_counter_saturates() {
        let mut ctl = controller();
        let mut dialogs = RecordingDialogs::default();

        let session = fetch_session(&ctl.appear(&mut dialogs));
        let dialog = dialogs.present(ctl.retry_alert.clone());
        ctl.phase = ListingPhase::PromptingRetry {
            session,
            dialog,
            attempt: u32::MAX,
        };

        let actions = ctl.confirm_retry(dialog, &mut dialogs);
        assert_eq!(actions, vec![Action::FetchCampaigns { session }]);
        assert_eq!(
            ctl.phase(),
            &ListingPhase::Fetching {
                session,
                attempt: u32::MAX
            }
        );
    }
}
