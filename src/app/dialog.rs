//! Modal alerts.
//!
//! Screens present alerts through [`DialogHost`] and get back a [`DialogId`]
//! they must hold on to; only the holder of the id can dismiss it.

pub type DialogId = u64;

/// A modal message with a single confirm action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub action_label: String,
}

pub trait DialogHost {
    fn present(&mut self, alert: Alert) -> DialogId;
    fn dismiss(&mut self, id: DialogId);
}

/// Stack of open alerts; the last one is on top and receives input.
#[derive(Debug, Default)]
pub struct DialogStack {
    next_id: DialogId,
    open: Vec<(DialogId, Alert)>,
}

impl DialogStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(&self) -> Option<(DialogId, &Alert)> {
        self.open.last().map(|(id, alert)| (*id, alert))
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

impl DialogHost for DialogStack {
    fn present(&mut self, alert: Alert) -> DialogId {
        self.next_id += 1;
        let id = self.next_id;
        tracing::debug!(dialog = id, message = %alert.message, "presenting alert");
        self.open.push((id, alert));
        id
    }

    fn dismiss(&mut self, id: DialogId) {
        let before = self.open.len();
        self.open.retain(|(open_id, _)| *open_id != id);
        if self.open.len() != before {
            tracing::debug!(dialog = id, "alert dismissed");
        }
    }
}
