use crate::app::event::{AppEvent, SessionId};
use crate::network::request::CampaignListingRequest;
use crate::network::service::NetworkingService;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Handle to an in-flight fetch. Dropping it aborts the task.
struct Subscription {
    session: SessionId,
    handle: JoinHandle<()>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Runs campaign requests off the UI loop and posts their outcome back as
/// [`AppEvent::CampaignsFetched`]. At most one fetch is in flight.
pub struct CampaignFetcher {
    service: Arc<dyn NetworkingService>,
    request: CampaignListingRequest,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    in_flight: Option<Subscription>,
}

impl CampaignFetcher {
    pub fn new(
        service: Arc<dyn NetworkingService>,
        request: CampaignListingRequest,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            service,
            request,
            event_tx,
            in_flight: None,
        }
    }

    pub fn fetch(&mut self, session: SessionId) {
        if let Some(previous) = self.in_flight.take() {
            tracing::debug!(
                session = previous.session,
                "replacing in-flight campaign fetch"
            );
        }

        let service = self.service.clone();
        let request = self.request.clone();
        let event_tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            let result = service.list_campaigns(request).await;
            let _ = event_tx.send(AppEvent::CampaignsFetched { session, result });
        });
        tracing::debug!(session, "campaign fetch started");
        self.in_flight = Some(Subscription { session, handle });
    }

    pub fn cancel(&mut self) {
        if let Some(sub) = self.in_flight.take() {
            tracing::debug!(session = sub.session, "campaign fetch cancelled");
        }
    }

    pub fn in_flight(&self) -> Option<SessionId> {
        self.in_flight
            .as_ref()
            .filter(|sub| !sub.handle.is_finished())
            .map(|sub| sub.session)
    }
}
