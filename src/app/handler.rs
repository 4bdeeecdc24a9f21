use crate::app::action::Action;
use crate::app::dialog::{DialogHost, DialogId};
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::CampaignsFetched { session, result } => {
            state.dirty = true;
            state.listing.handle_response(
                session,
                result,
                &mut state.listing_view,
                &mut state.dialogs,
            );
            vec![]
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    // Animate the loading spinner
    if state.screen == Screen::Listing && state.listing.is_fetching() {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // An open alert captures all input
    if let Some(id) = state.dialogs.top().map(|(id, _)| id) {
        return handle_dialog_key(state, id, key);
    }

    match state.screen {
        Screen::Listing => handle_listing_key(state, key),
        Screen::Detail(_) => handle_detail_key(state, key),
    }
}

fn handle_dialog_key(state: &mut AppState, id: DialogId, key: KeyEvent) -> Vec<Action> {
    let owned_by_listing = state.listing.retry_dialog() == Some(id);
    match key.code {
        KeyCode::Enter if owned_by_listing => state.listing.confirm_retry(id, &mut state.dialogs),
        KeyCode::Esc if owned_by_listing => {
            state.listing.dismiss_retry(id, &mut state.dialogs);
            vec![]
        }
        KeyCode::Enter | KeyCode::Esc => {
            state.dialogs.dismiss(id);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_listing_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.listing_view.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.listing_view.select_next();
            vec![]
        }
        KeyCode::Enter => match state.listing_view.selected_campaign().cloned() {
            Some(campaign) => state.show_detail(campaign),
            None => vec![],
        },
        KeyCode::Char('r') | KeyCode::F(5) => state.show_listing(),
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_detail_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            state.show_listing()
        }
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}
